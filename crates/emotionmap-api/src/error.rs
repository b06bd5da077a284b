use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use emotionmap_types::api::ErrorResponse;
use emotionmap_types::validation::ValidationError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request body must be a JSON object")]
    MalformedBody(#[from] JsonRejection),

    /// The store failed. `action` is what the client sees; `error` is only logged.
    #[error("{action}")]
    Storage {
        action: &'static str,
        error: anyhow::Error,
    },
}

impl ApiError {
    pub fn storage(action: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |error| Self::Storage { action, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Storage { action, error } => {
                error!("{}: {:?}", action, error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let response = ApiError::from(ValidationError::InvalidEmail).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid email format");
    }

    #[tokio::test]
    async fn storage_error_hides_details() {
        let err = ApiError::storage("failed to read markers")(anyhow::anyhow!(
            "no such table: markers"
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "failed to read markers");
        assert!(!body.to_string().contains("no such table"));
    }
}
