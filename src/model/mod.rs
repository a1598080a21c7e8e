//! Request and response types shared by the HTTP handlers and the service layer.

pub mod api;
pub mod calculation;
pub mod habit;
pub mod report;
pub mod student;
