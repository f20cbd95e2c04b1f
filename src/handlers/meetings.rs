use askama::Template;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::client::{ApiError, MeetingApi};
use crate::models::common::is_valid_backend_name;
use crate::models::form::{CreateMeetingForm, UpdateMeetingForm};
use crate::services::list_view::{MeetingListView, ViewOptions};
use crate::views::card::MeetingCard;
use crate::views::page::MeetingPage;

// AppState struct containing shared resources
pub struct AppState {
    pub api: Arc<dyn MeetingApi>,
    pub view: MeetingListView,
    pub default_backend: String,
}

impl AppState {
    pub fn new(api: Arc<dyn MeetingApi>, default_backend: &str, options: ViewOptions) -> Self {
        Self {
            view: MeetingListView::new(Arc::clone(&api), default_backend, options),
            api,
            default_backend: default_backend.to_string(),
        }
    }
}

fn check_backend(backend: &str) -> Result<(), StatusCode> {
    if is_valid_backend_name(backend) {
        Ok(())
    } else {
        warn!("Rejecting request for invalid backend name: {:?}", backend);
        Err(StatusCode::BAD_REQUEST)
    }
}

// Make sure the view talks to the backend named in the path before a form is applied
async fn ensure_backend(state: &AppState, backend: &str) -> Result<(), StatusCode> {
    check_backend(backend)?;
    state.view.select_backend(backend).await;
    Ok(())
}

fn render_page(view: &MeetingListView) -> Result<Html<String>, StatusCode> {
    MeetingPage::from(view.snapshot())
        .render()
        .map(Html)
        .map_err(|err| {
            error!("Failed to render meetings page: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

// Root redirects to the configured backend
pub async fn index(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&format!("/{}", state.default_backend))
}

// Meeting list page, every visit reloads the collection
pub async fn show_meetings(
    State(state): State<Arc<AppState>>,
    Path(backend): Path<String>,
) -> Result<Html<String>, StatusCode> {
    check_backend(&backend)?;
    info!("Rendering meetings page for backend {}", backend);

    if !state.view.select_backend(&backend).await {
        state.view.mount().await;
    }

    render_page(&state.view)
}

// Add meeting form
pub async fn create_meeting(
    State(state): State<Arc<AppState>>,
    Path(backend): Path<String>,
    Form(form): Form<CreateMeetingForm>,
) -> Result<Html<String>, StatusCode> {
    ensure_backend(&state, &backend).await?;
    info!("Received create form for backend {}: {}", backend, form.topic);

    state.view.submit_create_form(&form).await;

    render_page(&state.view)
}

// Update meeting form
pub async fn update_meeting(
    State(state): State<Arc<AppState>>,
    Path(backend): Path<String>,
    Form(form): Form<UpdateMeetingForm>,
) -> Result<Html<String>, StatusCode> {
    ensure_backend(&state, &backend).await?;
    info!("Received update form for backend {}, target id {:?}", backend, form.id);

    state.view.submit_update_form(&form).await;

    render_page(&state.view)
}

// Delete button of a card
pub async fn delete_meeting(
    State(state): State<Arc<AppState>>,
    Path((backend, id)): Path<(String, i64)>,
) -> Result<Html<String>, StatusCode> {
    ensure_backend(&state, &backend).await?;
    info!("Received delete request for meeting {} on backend {}", id, backend);

    state.view.delete(id).await;

    render_page(&state.view)
}

// Single meeting card, read straight from the backend
pub async fn show_meeting(
    State(state): State<Arc<AppState>>,
    Path((backend, id)): Path<(String, i64)>,
) -> Result<Html<String>, StatusCode> {
    check_backend(&backend)?;

    match state.api.get_meeting(&backend, id).await {
        Ok(meeting) => MeetingCard::new(&meeting)
            .render()
            .map(Html)
            .map_err(|err| {
                error!("Failed to render meeting card: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }),
        Err(ApiError::Status { status: 404, .. }) => {
            info!("Meeting {} not found on backend {}", id, backend);
            Err(StatusCode::NOT_FOUND)
        }
        Err(err) => {
            error!("Failed to fetch meeting {}: {}", id, err);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
