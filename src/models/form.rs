use serde::Deserialize;

// Fields posted by the "add meeting" form
#[derive(Debug, Default, Deserialize)]
pub struct CreateMeetingForm {
    #[serde(default)]
    pub external_meeting_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub duration: String,
}

// Fields posted by the "update meeting" form, the target id is free text
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMeetingForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub external_meeting_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub duration: String,
}
