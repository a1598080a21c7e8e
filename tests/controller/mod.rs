//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, response
//! bodies and the records left behind in the database.

mod calculation;
mod student;

use ecocalc_test_utils::prelude::*;

use crate::util::{read_json, TestContextExt};
