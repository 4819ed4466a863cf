use sqlx::{PgPool, Pool, Postgres};

use ticklist_core::error::AppError;
use ticklist_core::models::TodoItem;

/// Repository for todo item persistence in PostgreSQL.
#[derive(Clone)]
pub struct TodoRepository {
    pool: Pool<Postgres>,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all items owned by the given user.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, description, completed
            FROM todos
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a new item with `completed = false`. Returns the generated id.
    pub async fn create(&self, description: &str) -> Result<i64, AppError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO todos (description, completed)
            VALUES ($1, FALSE)
            RETURNING id
            "#,
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.0)
    }

    /// Update an item's description and completed flag.
    ///
    /// Returns `id` whether or not a row matched; the affected-row count
    /// is deliberately not checked (always-succeed contract).
    pub async fn update(
        &self,
        id: i64,
        description: &str,
        completed: bool,
    ) -> Result<i64, AppError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET description = $1, completed = $2
            WHERE id = $3
            "#,
        )
        .bind(description)
        .bind(completed)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Delete an item. Same unconditional-return contract as [`update`](Self::update).
    pub async fn delete(&self, id: i64) -> Result<i64, AppError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Paginated scan over all items. No explicit ORDER BY — row order
    /// follows the store default and is not guaranteed.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, description, completed
            FROM todos
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    description: String,
    completed: bool,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        TodoItem {
            id: row.id,
            description: row.description,
            completed: row.completed,
        }
    }
}
