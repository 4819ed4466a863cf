use serde::{Deserialize, Serialize};

/// A single todo item as stored in the `todos` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

/// A registered user. Read-only from this service's perspective —
/// there is no signup or token issuance path here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub token: String,
}

/// Claims carried inside a bearer token. Decoded per request,
/// never persisted.
///
/// `exp` is optional: tokens without an expiry are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
