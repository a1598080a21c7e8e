//! Test fixture modules for database and HTTP mock creation.
//!
//! - `student` - Student records
//! - `calculation` - Calculation records, optionally linked to a student
//! - `email` - Mock email provider endpoints
//! - `factory` - In-memory model instances that don't touch the database

pub mod calculation;
pub mod email;
pub mod factory;
pub mod student;
