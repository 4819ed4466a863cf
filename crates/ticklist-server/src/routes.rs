use std::sync::Arc;

use axum::Extension;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{AuthedUser, require_auth};
use crate::dto::{
    CreateItemRequest, HealthResponse, ItemIdResponse, ListItemsQuery, TodoItemResponse,
    TodoListResponse, UpdateItemRequest,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/todos", get(list_todos))
        .route("/items/", post(create_item))
        .route("/items/", get(read_items))
        .route("/items/{id}", put(update_item))
        .route("/items/{id}", delete(delete_item))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "Todos owned by the caller", body = TodoListResponse),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.db.todo_repo().list_for_user(user.0).await?;

    let response = TodoListResponse {
        todos: todos.into_iter().map(TodoItemResponse::from).collect(),
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/items/",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemIdResponse),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.db.todo_repo().create(&body.description).await?;

    Ok(axum::Json(ItemIdResponse { id }))
}

#[utoipa::path(
    get,
    path = "/items/",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Page of items", body = [TodoItemResponse]),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub async fn read_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListItemsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(100).clamp(0, 100);

    let items = state.db.todo_repo().list(skip, limit).await?;

    let response: Vec<TodoItemResponse> = items.into_iter().map(TodoItemResponse::from).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemIdResponse),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // The id is echoed back whether or not a row matched.
    let id = state
        .db
        .todo_repo()
        .update(id, &body.description, body.completed)
        .await?;

    Ok(axum::Json(ItemIdResponse { id }))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = ItemIdResponse),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.db.todo_repo().delete(id).await?;

    Ok(axum::Json(ItemIdResponse { id }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.todo_repo().health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
