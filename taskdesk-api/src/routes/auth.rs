/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/auth/signup` - Register a new user
/// - `POST /api/auth/login` - Exchange credentials for a token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
    routes::MessageResponse,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskdesk_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use tracing::{info, instrument};
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Signup request
///
/// Missing fields deserialize as empty and are rejected by validation, so a
/// partial body yields a field-level 400 rather than a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "email must be 1 to 255 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed JWT
    pub token: String,
    pub email: String,
    pub name: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/signup
/// Content-Type: application/json
///
/// {"name": "Ann", "email": "ann@example.com", "password": "pw"}
/// ```
///
/// # Response
///
/// `201 {"message": "User created"}`. No token is issued.
///
/// # Errors
///
/// - `400 Bad Request`: A field is missing or empty
/// - `409 Conflict`: Email already exists
/// - `500 Internal Server Error`: Server error
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    req.validate()?;

    if User::count_by_email(&state.db, &req.email).await? > 0 {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let password_hash = password::hash_password_blocking(req.password).await?;

    // The unique index still catches a concurrent signup for the same email
    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

/// Authenticate and issue a token
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/login
/// Content-Type: application/json
///
/// {"email": "ann@example.com", "password": "pw"}
/// ```
///
/// # Response
///
/// ```json
/// {"token": "eyJ...", "email": "ann@example.com", "name": "Ann"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `500 Internal Server Error`: Server error
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;

    let Some(user) = User::find_by_email(&state.db, &req.email).await? else {
        password::verify_password_blocking(req.password, password::DUMMY_HASH.to_string())
            .await?;
        info!("Login rejected for unknown email");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    let valid = password::verify_password_blocking(req.password, user.password_hash.clone()).await?;
    if !valid {
        info!(user_id = user.id, "Login rejected");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let claims = jwt::Claims::for_user(&user, state.token_lifetime());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        email: user.email,
        name: user.name,
    }))
}
