//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main ecocalc crate.

pub type StudentModel = entity::student::Model;

pub type CalculationModel = entity::calculation::Model;

pub type EmailReportModel = entity::email_report::Model;
