use axum::{Json, extract::State};
use tracing::info;

use emotionmap_types::api::{ContactRequest, ContactResponse};
use emotionmap_types::validation::validate_contact;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

const THANK_YOU: &str = "Thank you! Your message has been sent.";

pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let message = validate_contact(&req)?;

    state
        .with_store(move |store| store.insert_message(&message))
        .await
        .map_err(ApiError::storage("failed to send message"))?;

    info!("Contact message received");
    Ok(Json(ContactResponse {
        success: true,
        message: THANK_YOU.to_string(),
    }))
}
