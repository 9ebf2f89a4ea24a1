/// Bearer-token authentication middleware
///
/// Validates `Authorization: Bearer <jwt>` against the configured secret and
/// injects an [`AuthUser`] into the request extensions. Mounted on the
/// project and task routes only when `API_REQUIRE_AUTH` is enabled.
///
/// # Example
///
/// ```no_run
/// use axum::{Extension, Json};
/// use taskdesk_api::middleware::auth::AuthUser;
///
/// async fn whoami(Extension(user): Extension<AuthUser>) -> Json<String> {
///     Json(user.email)
/// }
/// ```

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use taskdesk_shared::auth::jwt::{self, Claims};

/// Authenticated caller, taken from the token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
            name: claims.name,
        }
    }
}

/// Extracts the token from an `Authorization` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Rejects requests without a valid bearer token
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    let token = bearer_token(header_value)
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    let claims = jwt::validate_token(token, state.jwt_secret())?;
    tracing::debug!(user_id = claims.id, "Authenticated request");

    req.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(req).await)
}
