//! Backend for a school commute carbon footprint calculator.
//!
//! Students submit how they get to school and a couple of daily consumption habits; the
//! server computes their CO₂e emissions, stores the calculation, compares it with everyone
//! else's and can email a personalised report.

pub mod model;
pub mod server;
