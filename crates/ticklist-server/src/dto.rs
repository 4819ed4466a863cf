use serde::{Deserialize, Serialize};

use ticklist_core::models::TodoItem;

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    pub description: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateItemRequest {
    pub description: String,
    pub completed: bool,
}

/// Response for all mutating item operations: just the target id.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ItemIdResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TodoItemResponse {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            completed: item.completed,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListItemsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TodoListResponse {
    pub todos: Vec<TodoItemResponse>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
