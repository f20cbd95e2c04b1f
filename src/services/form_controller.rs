use crate::models::form::{CreateMeetingForm, UpdateMeetingForm};
use crate::models::meeting::MeetingPayload;

/// Editable fields shared by both forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingField {
    ExternalMeetingId,
    Topic,
    StartTime,
    Duration,
}

// Number inputs submit text; anything that is not an integer counts as 0
fn parse_duration(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Input state of one meeting form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub external_meeting_id: String,
    pub topic: String,
    pub start_time: String,
    pub duration: i32,
}

impl MeetingDraft {
    /// Returns a copy of the draft with only `field` replaced.
    pub fn with_field(&self, field: MeetingField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            MeetingField::ExternalMeetingId => next.external_meeting_id = value.to_string(),
            MeetingField::Topic => next.topic = value.to_string(),
            MeetingField::StartTime => next.start_time = value.to_string(),
            MeetingField::Duration => next.duration = parse_duration(value),
        }
        next
    }

    pub fn to_payload(&self) -> MeetingPayload {
        MeetingPayload {
            external_meeting_id: self.external_meeting_id.clone(),
            topic: self.topic.clone(),
            start_time: self.start_time.clone(),
            duration: self.duration,
        }
    }
}

/// Update form input: the target id as typed plus the new field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub id: String,
    pub fields: MeetingDraft,
}

impl UpdateDraft {
    pub fn with_id(&self, id: &str) -> Self {
        Self {
            id: id.to_string(),
            fields: self.fields.clone(),
        }
    }

    pub fn with_field(&self, field: MeetingField, value: &str) -> Self {
        Self {
            id: self.id.clone(),
            fields: self.fields.with_field(field, value),
        }
    }

    /// The typed id as an integer, `None` when it does not parse.
    pub fn target_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

/// Holds the create and update drafts of one list view.
///
/// The two drafts are independent: editing or resetting one never touches
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    create: MeetingDraft,
    update: UpdateDraft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_draft(&self) -> &MeetingDraft {
        &self.create
    }

    pub fn update_draft(&self) -> &UpdateDraft {
        &self.update
    }

    pub fn edit_create(&mut self, field: MeetingField, value: &str) {
        self.create = self.create.with_field(field, value);
    }

    pub fn edit_update(&mut self, field: MeetingField, value: &str) {
        self.update = self.update.with_field(field, value);
    }

    pub fn set_update_target(&mut self, id: &str) {
        self.update = self.update.with_id(id);
    }

    /// Feed every field of a posted create form through the draft.
    pub fn load_create_form(&mut self, form: &CreateMeetingForm) {
        self.edit_create(MeetingField::ExternalMeetingId, &form.external_meeting_id);
        self.edit_create(MeetingField::Topic, &form.topic);
        self.edit_create(MeetingField::StartTime, &form.start_time);
        self.edit_create(MeetingField::Duration, &form.duration);
    }

    pub fn load_update_form(&mut self, form: &UpdateMeetingForm) {
        self.set_update_target(&form.id);
        self.edit_update(MeetingField::ExternalMeetingId, &form.external_meeting_id);
        self.edit_update(MeetingField::Topic, &form.topic);
        self.edit_update(MeetingField::StartTime, &form.start_time);
        self.edit_update(MeetingField::Duration, &form.duration);
    }

    pub fn create_payload(&self) -> MeetingPayload {
        self.create.to_payload()
    }

    /// Target id and body for an update request, `None` for a malformed id.
    pub fn update_request(&self) -> Option<(i64, MeetingPayload)> {
        self.update
            .target_id()
            .map(|id| (id, self.update.fields.to_payload()))
    }

    pub fn reset_create(&mut self) {
        self.create = MeetingDraft::default();
    }

    pub fn reset_update(&mut self) {
        self.update = UpdateDraft::default();
    }
}
