//! Meeting Console
//!
//! A small browser form application for managing meeting records stored by
//! a REST backend. The server renders one page per backend namespace with an
//! "add" form, an "update" form and the list of meetings; every form post is
//! turned into a backend request and the local list is brought back in line.
//!
//! # Modules
//!
//! - `client`: `MeetingApi` trait and its reqwest implementation
//! - `services::list_view`: the meeting list state and its operations
//! - `services::form_controller`: create and update drafts
//! - `views`: askama templates for the page and the meeting card
//! - `routes` / `handlers`: the axum HTTP surface
//! - `config`: environment configuration

pub mod client;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;


// Re-export the main types for ease of use
pub use client::{ApiError, MeetingApi, MeetingApiClient};
pub use config::AppConfig;
pub use handlers::meetings::AppState;
pub use models::meeting::{MeetingPayload, MeetingRecord};
pub use routes::create_router;
pub use services::list_view::{MeetingListView, SyncMode, ViewOptions};
