//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories, the pure emissions functions and the email client.
//! Each service borrows the connection it is given, so handlers construct them per request.

pub mod calculation;
pub mod emissions;
pub mod report;
pub mod student;
