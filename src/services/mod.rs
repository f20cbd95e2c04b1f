pub mod form_controller;
pub mod list_view;
