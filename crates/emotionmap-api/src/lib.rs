pub mod admin;
pub mod contact;
pub mod error;
pub mod extract;
pub mod markers;
pub mod state;

use axum::{
    Router, middleware,
    routing::{get, post},
};

pub use state::{AppState, AppStateInner};

/// JSON API routes plus the token-guarded admin listing.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/messages", get(admin::list_messages))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin,
        ));

    Router::new()
        .route("/api/markers", get(markers::list_markers).post(markers::create_marker))
        .route("/api/stats", get(markers::get_stats))
        .route("/api/contact", post(contact::submit_contact))
        .merge(admin_routes)
        .with_state(state)
}
