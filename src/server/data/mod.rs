//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for the three persisted tables. They return
//! [`sea_orm::DbErr`] and `Option` for missing rows; turning those into domain errors
//! is left to the service layer.

pub mod calculation;
pub mod email_report;
pub mod student;
