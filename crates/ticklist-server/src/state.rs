use ticklist_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Shared secret for verifying bearer token signatures.
    pub jwt_secret: String,
}
