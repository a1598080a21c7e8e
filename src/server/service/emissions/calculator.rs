//! Daily, weekly and yearly emission totals for a form submission.
//!
//! The distance entered on the form is **one way**. Every school day is assumed to involve
//! [`COMMUTE_TRIPS_PER_DAY`] trips (there and back), so the transport term doubles the
//! distance before applying the per-kilometre factor:
//!
//! ```text
//! daily  = factor(transport) * distance * 2 + factor(hydration) + factor(packaging)
//! weekly = daily * 5
//! yearly = weekly * 36
//! ```

use crate::{
    model::habit::{HydrationHabit, PackagingHabit, TransportMethod},
    server::error::validation::ValidationError,
};

/// Home to school and back.
pub const COMMUTE_TRIPS_PER_DAY: f64 = 2.0;
/// School days in a week.
pub const SCHOOL_DAYS_PER_WEEK: f64 = 5.0;
/// School weeks in an academic year.
pub const SCHOOL_WEEKS_PER_YEAR: f64 = 36.0;

/// Emission totals in kg CO₂e.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emissions {
    /// Per school day
    pub daily: f64,
    /// Per school week
    pub weekly: f64,
    /// Per academic year
    pub yearly: f64,
}

/// Computes emission totals for one student.
///
/// # Arguments
/// - `distance` - One-way distance from home to school in kilometres
/// - `transport` - How the student commutes
/// - `hydration` - What the student drinks from
/// - `packaging` - How the student wraps their lunch
///
/// # Returns
/// - `Ok(Emissions)` - Totals per school day, week and year
/// - `Err(ValidationError::NegativeDistance)` - Distance below zero
/// - `Err(ValidationError::NonFiniteDistance)` - Distance is NaN or infinite
/// - `Err(ValidationError::DistanceTooLarge)` - Distance so large a total overflows
pub fn compute(
    distance: f64,
    transport: TransportMethod,
    hydration: HydrationHabit,
    packaging: PackagingHabit,
) -> Result<Emissions, ValidationError> {
    if !distance.is_finite() {
        return Err(ValidationError::NonFiniteDistance);
    }
    if distance < 0.0 {
        return Err(ValidationError::NegativeDistance(distance));
    }

    let transport_emissions = transport.emission_factor() * distance * COMMUTE_TRIPS_PER_DAY;
    let daily = transport_emissions + hydration.emission_factor() + packaging.emission_factor();
    let weekly = daily * SCHOOL_DAYS_PER_WEEK;
    let yearly = weekly * SCHOOL_WEEKS_PER_YEAR;

    // Stored totals must be finite
    if !(daily.is_finite() && weekly.is_finite() && yearly.is_finite()) {
        return Err(ValidationError::DistanceTooLarge(distance));
    }

    Ok(Emissions {
        daily,
        weekly,
        yearly,
    })
}
