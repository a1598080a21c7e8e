//! Tests for calculation controller endpoints.

mod calculate;
mod get_average_emissions;
mod get_calculations;

use super::*;
