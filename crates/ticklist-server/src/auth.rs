use std::sync::Arc;

use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use ticklist_core::Claims;

use crate::dto::ErrorResponse;
use crate::state::AppState;

/// Why a credential was rejected. Every variant surfaces as HTTP 401.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is missing")]
    Missing,

    #[error("Malformed authorization header. Expected: Bearer <token>")]
    Malformed,

    #[error("Invalid token")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,
}

/// Authenticated caller identity, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthedUser(pub i64);

/// Validate the raw value of an `Authorization` header and extract the
/// caller's user id.
///
/// The header must be `<scheme> <token>` with a case-insensitive `bearer`
/// scheme. The token is an HS256 JWT verified against the shared secret.
/// `exp` is optional; when present it must not be earlier than `now`.
pub fn validate_bearer(header: Option<&str>, secret: &str, now: i64) -> Result<i64, AuthError> {
    let header = header.ok_or(AuthError::Missing)?;

    let mut parts = header.split_whitespace();
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(AuthError::Malformed),
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Malformed);
    }

    // Expiry is checked by hand below so that tokens without an `exp`
    // claim remain valid.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let decoded = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidSignature)?;

    if let Some(exp) = decoded.claims.exp
        && exp < now
    {
        return Err(AuthError::Expired);
    }

    Ok(decoded.claims.user_id)
}

/// Middleware that validates `Authorization: Bearer <token>` before
/// the wrapped handler runs.
///
/// On success the caller's [`AuthedUser`] is available to handlers via
/// request extensions. On failure the request is answered with 401 and
/// never reaches a handler.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    match validate_bearer(auth_header, &state.jwt_secret, Utc::now().timestamp()) {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthedUser(user_id));
            next.run(request).await
        }
        Err(err) => {
            let body = ErrorResponse {
                error: err.to_string(),
            };
            (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
        }
    }
}
