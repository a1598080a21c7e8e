//! Tests for student controller endpoints.

mod register_student;

use super::*;
