use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use std::sync::Arc;

use crate::client::MeetingApiClient;
use crate::handlers::meetings::AppState;
use crate::routes::create_router;
use crate::services::list_view::{MeetingListView, SyncMode, ViewOptions, FETCH_ERROR};
use crate::tests::common::fake_backend::{spawn_fake_backend, FakeBackend};
use crate::tests::common::fixtures::go_meetings;

// Helper function to wire the real client to a fake backend
async fn setup_test_environment(options: ViewOptions) -> (TestServer, Arc<FakeBackend>) {
    let (base_url, fake) = spawn_fake_backend().await;
    fake.seed("go", go_meetings());

    let api = Arc::new(MeetingApiClient::new(&base_url));
    let app_state = Arc::new(AppState::new(api, "go", options));
    let app = create_router(app_state);

    let config = TestServerConfig::builder().mock_transport().build();
    let server = TestServer::new_with_config(app, config).unwrap();

    (server, fake)
}

#[tokio::test]
async fn test_full_meeting_lifecycle() {
    let (server, fake) = setup_test_environment(ViewOptions::default()).await;

    // Mount
    let html = server.get("/go").await.text();
    assert!(html.contains("Topic: Retrospective"));

    // Create
    let html = server
        .post("/go/meetings")
        .form(&[
            ("external_meeting_id", "700 800 900"),
            ("topic", "Release party"),
            ("start_time", "2024-05-31"),
            ("duration", "120"),
        ])
        .await
        .text();
    assert!(html.contains("Id : 4"));
    assert!(html.find("Topic: Release party").unwrap() < html.find("Topic: Retrospective").unwrap());

    // Update the meeting just created
    let html = server
        .post("/go/meetings/update")
        .form(&[
            ("id", "4"),
            ("external_meeting_id", "700 800 900"),
            ("topic", "Release party (postponed)"),
            ("start_time", "2024-06-07"),
            ("duration", "120"),
        ])
        .await
        .text();
    assert!(html.contains("Topic: Release party (postponed)"));
    assert!(html.contains("Start Time: 2024-06-07"));

    // Delete it again
    let response = server.post("/go/meetings/4/delete").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.text().contains("Release party"));

    let ids: Vec<i64> = fake.meetings("go").iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_refetch_mode_picks_up_foreign_changes() {
    let options = ViewOptions {
        sync_mode: SyncMode::Refetch,
        newest_first: false,
    };
    let (server, fake) = setup_test_environment(options).await;
    server.get("/go").await;

    // Someone else removes a meeting behind the view's back
    let mut remaining = go_meetings();
    remaining.retain(|m| m.id != 2);
    fake.seed("go", remaining);

    let html = server
        .post("/go/meetings")
        .form(&[("topic", "Hallway sync"), ("duration", "10")])
        .await
        .text();

    assert!(html.contains("Topic: Hallway sync"));
    assert!(!html.contains("Topic: Design review"));
    assert!(html.find("Topic: Sprint planning").unwrap() < html.find("Topic: Hallway sync").unwrap());
}

#[tokio::test]
async fn test_backend_outage_keeps_last_good_list() {
    let (base_url, fake) = spawn_fake_backend().await;
    fake.seed("go", go_meetings());

    let view = MeetingListView::new(
        Arc::new(MeetingApiClient::new(&base_url)),
        "go",
        ViewOptions::default(),
    );
    view.mount().await;
    assert_eq!(view.meetings().len(), 3);

    fake.set_failing(true);
    view.mount().await;

    assert_eq!(view.meetings().len(), 3);
    assert_eq!(view.error().as_deref(), Some(FETCH_ERROR));

    fake.set_failing(false);
    view.mount().await;
    assert!(view.error().is_none());
}

#[tokio::test]
async fn test_single_meeting_from_backend() {
    let (server, _) = setup_test_environment(ViewOptions::default()).await;

    let response = server.get("/go/meetings/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Topic: Sprint planning"));

    let response = server.get("/go/meetings/404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
