/// Request extractors with uniform error bodies
///
/// Thin wrappers over axum's `Json`, `Path` and `Query` whose rejections are
/// converted into [`ApiError::BadRequest`], so a malformed body, a
/// non-numeric id or a bad query string produce the same
/// `{"error", "message"}` shape and a 400 status as every other failure.
///
/// # Example
///
/// ```no_run
/// use taskdesk_api::extract::{ApiJson, ApiPath};
/// use taskdesk_api::error::ApiResult;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Rename {
///     name: String,
/// }
///
/// async fn rename(ApiPath(id): ApiPath<i64>, ApiJson(body): ApiJson<Rename>) -> ApiResult<String> {
///     Ok(format!("{} -> {}", id, body.name))
/// }
/// ```

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor rejecting with [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor rejecting with [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor rejecting with [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
