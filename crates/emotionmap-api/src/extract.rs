use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json<T>` whose rejections answer `400 {error}` like every other bad input.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
