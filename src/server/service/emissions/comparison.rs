//! Position of a daily total relative to the population mean.
//!
//! A single sign convention is used everywhere a comparison is shown: positive values mean the
//! student emits *less* than average.

use crate::server::error::emissions::EmissionsError;

/// Percentage by which `daily_emissions` is below `population_mean`.
///
/// Computed as `(mean - value) / mean * 100`. A value equal to the mean yields exactly `0.0`;
/// a value above the mean yields a negative percentage.
///
/// # Returns
/// - `Ok(f64)` - Percentage below the mean
/// - `Err(EmissionsError::InvalidPopulationMean)` - Mean is zero, negative or not finite
pub fn percent_below_average(
    daily_emissions: f64,
    population_mean: f64,
) -> Result<f64, EmissionsError> {
    if !population_mean.is_finite() || population_mean <= 0.0 {
        return Err(EmissionsError::InvalidPopulationMean(population_mean));
    }

    Ok((population_mean - daily_emissions) / population_mean * 100.0)
}
