//! Emissions computation and comparison pipeline.
//!
//! Everything in this module is pure and synchronous: the factor table maps habits to
//! coefficients, the calculator turns a form submission into daily/weekly/yearly totals, the
//! comparison positions a daily total against the population mean, and the recommendation
//! selector picks advisory text from the habits. Persistence lives in
//! [`CalculationService`](crate::server::service::calculation::CalculationService).

pub mod calculator;
pub mod comparison;
pub mod factor;
pub mod recommendation;
