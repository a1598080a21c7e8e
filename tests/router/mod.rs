//! Tests for the assembled router.
//!
//! Requests go through `startup::build_app` with `tower::ServiceExt::oneshot`, covering JSON
//! extraction, error mapping and route registration.

mod calculate;
mod docs;
mod register_student;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use ecocalc::server::startup::build_app;
use ecocalc_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{read_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    build_app(test.into_app_state())
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
