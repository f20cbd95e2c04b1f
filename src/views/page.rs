use askama::Template;

use crate::models::common::{backend_title, theme_for, BackendTheme};
use crate::models::meeting::MeetingRecord;
use crate::services::form_controller::{MeetingDraft, UpdateDraft};
use crate::services::list_view::ViewSnapshot;

/// The whole page of one backend: forms, error line and the list of cards.
#[derive(Template)]
#[template(path = "meetings.html")]
pub struct MeetingPage {
    pub title: String,
    pub backend: String,
    pub theme: BackendTheme,
    pub error: Option<String>,
    pub create: MeetingDraft,
    pub update: UpdateDraft,
    pub meetings: Vec<MeetingRecord>,
}

impl From<ViewSnapshot> for MeetingPage {
    fn from(snapshot: ViewSnapshot) -> Self {
        Self {
            title: backend_title(&snapshot.backend),
            theme: theme_for(&snapshot.backend),
            backend: snapshot.backend,
            error: snapshot.error,
            create: snapshot.create_draft,
            update: snapshot.update_draft,
            meetings: snapshot.meetings,
        }
    }
}
