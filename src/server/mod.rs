//! Server application core modules.
//!
//! HTTP routing, configuration, persistence, the emissions pipeline and report delivery for
//! the school commute CO₂e calculator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod email;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
