use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::client::MeetingApi;
use crate::models::form::{CreateMeetingForm, UpdateMeetingForm};
use crate::models::meeting::MeetingRecord;
use crate::services::form_controller::{FormController, MeetingDraft, MeetingField, UpdateDraft};

pub const FETCH_ERROR: &str = "Failed to fetch meetings";
pub const CREATE_ERROR: &str = "Failed to create meeting";
pub const UPDATE_ERROR: &str = "Failed to update meeting";
pub const DELETE_ERROR: &str = "Failed to delete meeting";

/// How the collection is brought back in line with the backend after a
/// successful create, update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Patch the local collection with the known result
    #[default]
    Patch,
    /// Read the whole collection again
    Refetch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub sync_mode: SyncMode,
    /// Reverse the fetched collection so the most recent meeting comes first
    pub newest_first: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            sync_mode: SyncMode::Patch,
            newest_first: true,
        }
    }
}

// Everything the page renders, guarded by one mutex
#[derive(Debug, Default)]
struct ListState {
    backend: String,
    meetings: Vec<MeetingRecord>,
    error: Option<String>,
    forms: FormController,
}

/// Copy of the view state taken under the lock, used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub backend: String,
    pub meetings: Vec<MeetingRecord>,
    pub error: Option<String>,
    pub create_draft: MeetingDraft,
    pub update_draft: UpdateDraft,
}

/// The meeting list of one backend namespace together with its forms.
///
/// Backend calls are made without holding the state lock; their results are
/// applied when they complete, so of two overlapping requests the one that
/// finishes last wins.
pub struct MeetingListView {
    api: Arc<dyn MeetingApi>,
    options: ViewOptions,
    state: Mutex<ListState>,
}

impl MeetingListView {
    pub fn new(api: Arc<dyn MeetingApi>, backend: &str, options: ViewOptions) -> Self {
        Self {
            api,
            options,
            state: Mutex::new(ListState {
                backend: backend.to_string(),
                ..ListState::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        // The state is plain data, a panic elsewhere cannot leave it half-written
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn backend(&self) -> String {
        self.state().backend.clone()
    }

    pub fn meetings(&self) -> Vec<MeetingRecord> {
        self.state().meetings.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn create_draft(&self) -> MeetingDraft {
        self.state().forms.create_draft().clone()
    }

    pub fn update_draft(&self) -> UpdateDraft {
        self.state().forms.update_draft().clone()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let state = self.state();
        ViewSnapshot {
            backend: state.backend.clone(),
            meetings: state.meetings.clone(),
            error: state.error.clone(),
            create_draft: state.forms.create_draft().clone(),
            update_draft: state.forms.update_draft().clone(),
        }
    }

    /// Run `f` against the form controller, e.g. to apply field edits.
    pub fn with_forms<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> R {
        f(&mut self.state().forms)
    }

    pub fn edit_create(&self, field: MeetingField, value: &str) {
        self.with_forms(|forms| forms.edit_create(field, value));
    }

    pub fn edit_update(&self, field: MeetingField, value: &str) {
        self.with_forms(|forms| forms.edit_update(field, value));
    }

    pub fn set_update_target(&self, id: &str) {
        self.with_forms(|forms| forms.set_update_target(id));
    }

    // Lock the state only if it still belongs to `backend`
    fn state_for(&self, backend: &str) -> Option<MutexGuard<'_, ListState>> {
        let state = self.state();
        if state.backend == backend {
            Some(state)
        } else {
            debug!("Discarding result for backend {}, view switched to {}", backend, state.backend);
            None
        }
    }

    fn set_error_for(&self, backend: &str, message: &str) {
        if let Some(mut state) = self.state_for(backend) {
            state.error = Some(message.to_string());
        }
    }

    /// Load the collection for the current backend.
    pub async fn mount(&self) {
        self.fetch().await;
    }

    /// Switch to another backend namespace.
    ///
    /// Returns `false` when `backend` is already selected. Otherwise all
    /// local state is dropped and the new collection is fetched.
    pub async fn select_backend(&self, backend: &str) -> bool {
        {
            let mut state = self.state();
            if state.backend == backend {
                return false;
            }
            info!("Switching meeting view from backend {} to {}", state.backend, backend);
            *state = ListState {
                backend: backend.to_string(),
                ..ListState::default()
            };
        }

        self.fetch().await;
        true
    }

    async fn fetch(&self) {
        let backend = self.backend();

        match self.api.list_meetings(&backend).await {
            Ok(mut meetings) => {
                info!("Fetched {} meetings from backend {}", meetings.len(), backend);
                if self.options.newest_first {
                    meetings.reverse();
                }

                if let Some(mut state) = self.state_for(&backend) {
                    state.meetings = meetings;
                    state.error = None;
                }
            }
            Err(err) => {
                error!("Error fetching meetings from backend {}: {}", backend, err);
                self.set_error_for(&backend, FETCH_ERROR);
            }
        }
    }

    /// Send the create draft to the backend.
    pub async fn submit_create(&self) {
        self.submit_create_with(|_| ()).await;
    }

    /// Load a posted create form and send it, without another request
    /// touching the draft in between.
    pub async fn submit_create_form(&self, form: &CreateMeetingForm) {
        self.submit_create_with(|forms| forms.load_create_form(form)).await;
    }

    async fn submit_create_with(&self, load: impl FnOnce(&mut FormController)) {
        let (backend, payload) = {
            let mut state = self.state();
            load(&mut state.forms);
            (state.backend.clone(), state.forms.create_payload())
        };

        match self.api.create_meeting(&backend, &payload).await {
            Ok(created) => {
                info!("Created meeting {} on backend {}", created.id, backend);
                if self.options.sync_mode == SyncMode::Refetch {
                    self.fetch().await;
                }

                let Some(mut state) = self.state_for(&backend) else {
                    return;
                };
                if self.options.sync_mode == SyncMode::Patch {
                    state.meetings.retain(|meeting| meeting.id != created.id);
                    state.meetings.insert(0, created);
                    state.error = None;
                }
                state.forms.reset_create();
            }
            Err(err) => {
                error!("Error creating meeting on backend {}: {}", backend, err);
                self.set_error_for(&backend, CREATE_ERROR);
            }
        }
    }

    /// Send the update draft to the backend.
    ///
    /// A target id that is not an integer matches nothing, so no request is
    /// made and the draft stays as typed.
    pub async fn submit_update(&self) {
        self.submit_update_with(|_| ()).await;
    }

    /// Load a posted update form and send it in one step.
    pub async fn submit_update_form(&self, form: &UpdateMeetingForm) {
        self.submit_update_with(|forms| forms.load_update_form(form)).await;
    }

    async fn submit_update_with(&self, load: impl FnOnce(&mut FormController)) {
        let (backend, request) = {
            let mut state = self.state();
            load(&mut state.forms);
            (state.backend.clone(), state.forms.update_request())
        };

        let Some((id, payload)) = request else {
            warn!("Ignoring meeting update, target id is not a number");
            return;
        };

        match self.api.update_meeting(&backend, id, &payload).await {
            Ok(response) => {
                info!("Updated meeting {} on backend {}", id, backend);
                if let Some(record) = response {
                    debug!("Backend returned updated record: {:?}", record);
                }
                if self.options.sync_mode == SyncMode::Refetch {
                    self.fetch().await;
                }

                let Some(mut state) = self.state_for(&backend) else {
                    return;
                };
                if self.options.sync_mode == SyncMode::Patch {
                    match state.meetings.iter_mut().find(|meeting| meeting.id == id) {
                        Some(meeting) => meeting.apply(&payload),
                        None => debug!("Meeting {} is not in the local list, nothing to patch", id),
                    }
                    state.error = None;
                }
                state.forms.reset_update();
            }
            Err(err) => {
                error!("Error updating meeting {} on backend {}: {}", id, backend, err);
                self.set_error_for(&backend, UPDATE_ERROR);
            }
        }
    }

    /// Delete one meeting by id.
    pub async fn delete(&self, id: i64) {
        let backend = self.backend();

        match self.api.delete_meeting(&backend, id).await {
            Ok(()) => {
                info!("Deleted meeting {} on backend {}", id, backend);
                match self.options.sync_mode {
                    SyncMode::Patch => {
                        if let Some(mut state) = self.state_for(&backend) {
                            state.meetings.retain(|meeting| meeting.id != id);
                            state.error = None;
                        }
                    }
                    SyncMode::Refetch => self.fetch().await,
                }
            }
            Err(err) => {
                error!("Error deleting meeting {} on backend {}: {}", id, backend, err);
                self.set_error_for(&backend, DELETE_ERROR);
            }
        }
    }
}

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;
