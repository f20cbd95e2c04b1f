use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::health::health_check;
use crate::handlers::meetings::{
    create_meeting, delete_meeting, index, show_meeting, show_meetings, update_meeting, AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(index))
        .route("/:backend", get(show_meetings))
        .route("/:backend/meetings", post(create_meeting))
        .route("/:backend/meetings/update", post(update_meeting))
        .route("/:backend/meetings/:id", get(show_meeting))
        .route("/:backend/meetings/:id/delete", post(delete_meeting))
        .with_state(app_state)
}
