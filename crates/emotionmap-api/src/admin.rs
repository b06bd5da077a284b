use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

use emotionmap_db::models::MessageRow;
use emotionmap_types::models::Message;

use crate::state::AppState;

/// Check the `Authorization: Bearer <token>` header against the configured
/// admin token. Without a configured token every request is refused.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.admin_token.as_deref() else {
        warn!("Admin request refused: no admin token configured");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if token != expected {
        warn!("Admin request refused: bad token");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}

/// GET /admin/messages. Failures are answered in plain text.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, (StatusCode, &'static str)> {
    let rows = state
        .with_store(|store| store.list_messages())
        .await
        .map_err(|e| {
            error!("Failed to read messages: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        })?;

    Ok(Json(rows.into_iter().map(message_from_row).collect()))
}

/// `created_at` is served exactly as the store wrote it.
fn message_from_row(row: MessageRow) -> Message {
    Message {
        id: row.id,
        name: row.name,
        email: row.email,
        message: row.message,
        created_at: row.created_at,
    }
}
