//! HTTP controller endpoints for the calculator API.
//!
//! Axum handlers that extract and validate request bodies, call into the service layer and
//! serialize the result. Every handler is annotated for utoipa so it appears in the OpenAPI
//! document served by the router.

pub mod calculation;
pub mod student;
