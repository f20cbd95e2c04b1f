use askama::Template;

use crate::models::meeting::MeetingRecord;

/// Display block for a single meeting.
#[derive(Template)]
#[template(path = "meeting_card.html")]
pub struct MeetingCard<'a> {
    pub meeting: &'a MeetingRecord,
}

impl<'a> MeetingCard<'a> {
    pub fn new(meeting: &'a MeetingRecord) -> Self {
        Self { meeting }
    }
}
