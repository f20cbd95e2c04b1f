use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use std::sync::Arc;

use crate::client::MockMeetingApi;
use crate::client_mock::{server_error, setup_mock_api, MockDataStore};
use crate::handlers::meetings::AppState;
use crate::models::meeting::MeetingRecord;
use crate::routes::create_router;
use crate::services::list_view::ViewOptions;
use crate::tests::common::fixtures::go_meetings;

fn server_for(api: MockMeetingApi) -> TestServer {
    let app_state = Arc::new(AppState::new(Arc::new(api), "go", ViewOptions::default()));
    let app = create_router(app_state);

    let config = TestServerConfig::builder().mock_transport().build();
    TestServer::new_with_config(app, config).unwrap()
}

// Helper function to set up a test server backed by the in-memory store
fn setup_test_server(meetings: Vec<MeetingRecord>) -> (TestServer, Arc<MockDataStore>) {
    let (mock_api, store) = setup_mock_api(meetings);
    (server_for(mock_api), store)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _) = setup_test_server(Vec::new());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_root_redirects_to_default_backend() {
    let (server, _) = setup_test_server(Vec::new());

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/go");
}

#[tokio::test]
async fn test_page_lists_newest_first() {
    let (server, _) = setup_test_server(go_meetings());

    let response = server.get("/go").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    let newest = html.find("Topic: Retrospective").unwrap();
    let oldest = html.find("Topic: Sprint planning").unwrap();
    assert!(newest < oldest);
    assert!(html.contains("Go Backend"));
}

#[tokio::test]
async fn test_invalid_backend_name_is_rejected() {
    let (server, _) = setup_test_server(Vec::new());

    let response = server.get("/go%20meetings").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_form_adds_meeting() {
    let (server, store) = setup_test_server(go_meetings());
    server.get("/go").await;

    let response = server
        .post("/go/meetings")
        .form(&[
            ("external_meeting_id", "321 654 987"),
            ("topic", "Customer demo"),
            ("start_time", "2024-05-20"),
            ("duration", "40"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Topic: Customer demo"));
    assert!(html.contains("Duration: 40 minutes"));
    assert_eq!(store.list().len(), 4);
}

#[tokio::test]
async fn test_update_form_patches_meeting() {
    let (server, store) = setup_test_server(go_meetings());
    server.get("/go").await;

    let response = server
        .post("/go/meetings/update")
        .form(&[
            ("id", "2"),
            ("external_meeting_id", "111 222 333"),
            ("topic", "Design review (moved)"),
            ("start_time", "2024-05-09"),
            ("duration", "60"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Topic: Design review (moved)"));
    assert!(!html.contains("Topic: Design review<"));
    assert_eq!(store.get(2).unwrap().duration, 60);
}

#[tokio::test]
async fn test_delete_button_removes_meeting() {
    let (server, store) = setup_test_server(go_meetings());
    server.get("/go").await;

    let response = server.post("/go/meetings/1/delete").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.text().contains("Topic: Sprint planning"));
    assert!(store.get(1).is_none());
}

#[tokio::test]
async fn test_failed_create_shows_error_and_keeps_input() {
    let mut mock_api = MockMeetingApi::new();
    mock_api
        .expect_list_meetings()
        .returning(|_backend| Ok(go_meetings()));
    mock_api
        .expect_create_meeting()
        .returning(|_backend, _payload| Err(server_error()));
    let server = server_for(mock_api);
    server.get("/go").await;

    let response = server
        .post("/go/meetings")
        .form(&[("topic", "Lost lunch"), ("duration", "15")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Failed to create meeting"));
    assert!(html.contains("value=\"Lost lunch\""));
    assert!(!html.contains("Topic: Lost lunch"));
}

#[tokio::test]
async fn test_failed_fetch_renders_error() {
    let mut mock_api = MockMeetingApi::new();
    mock_api
        .expect_list_meetings()
        .returning(|_backend| Err(server_error()));
    let server = server_for(mock_api);

    let response = server.get("/go").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Failed to fetch meetings"));
}

#[tokio::test]
async fn test_single_meeting_card() {
    let (server, _) = setup_test_server(go_meetings());

    let response = server.get("/go/meetings/3").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Topic: Retrospective"));

    let response = server.get("/go/meetings/42").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_switching_backend_reloads_list() {
    let mut mock_api = MockMeetingApi::new();
    mock_api.expect_list_meetings().returning(|backend| {
        if backend == "go" {
            Ok(go_meetings())
        } else {
            Ok(Vec::new())
        }
    });
    let server = server_for(mock_api);

    assert!(server.get("/go").await.text().contains("Topic: Retrospective"));

    let html = server.get("/node").await.text();
    assert!(html.contains("Node Backend"));
    assert!(html.contains("bg-gray-200"));
    assert!(!html.contains("Topic: Retrospective"));
}
