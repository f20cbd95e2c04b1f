use serde::{Deserialize, Serialize};

/// A meeting as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: i64,
    // Correlation key into the external conferencing system, not unique
    #[serde(rename = "zoomMeetingId", default)]
    pub external_meeting_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(rename = "startTime", default)]
    pub start_time: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl MeetingRecord {
    /// Overwrite the editable fields with the values of a payload.
    pub fn apply(&mut self, payload: &MeetingPayload) {
        self.external_meeting_id = payload.external_meeting_id.clone();
        self.topic = payload.topic.clone();
        self.start_time = payload.start_time.clone();
        self.duration = payload.duration;
    }
}

// Request body for create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPayload {
    #[serde(rename = "zoomMeetingId")]
    pub external_meeting_id: String,
    pub topic: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    pub duration: i32,
}
