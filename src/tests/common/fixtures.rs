use crate::models::meeting::MeetingRecord;

/// Generate a sample meeting record for testing purposes
pub fn meeting(id: i64, topic: &str, start_time: &str) -> MeetingRecord {
    MeetingRecord {
        id,
        external_meeting_id: format!("{} {} {}", 800 + id, 100 + id, 900 + id),
        topic: topic.to_string(),
        start_time: start_time.to_string(),
        duration: 30,
        created_at: Some("2024-04-30 08:00:00".to_string()),
    }
}

/// Three meetings in the order the backend stores them (oldest first)
pub fn go_meetings() -> Vec<MeetingRecord> {
    vec![
        meeting(1, "Sprint planning", "2024-05-06"),
        meeting(2, "Design review", "2024-05-08"),
        meeting(3, "Retrospective", "2024-05-17"),
    ]
}
