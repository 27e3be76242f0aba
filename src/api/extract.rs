//! Request extractors.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor whose rejections use the API error format.
///
/// Malformed bodies, wrong field types and unknown attendance statuses are
/// reported as `400 VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; an id that does not parse is a `400 VALIDATION_ERROR`.
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
