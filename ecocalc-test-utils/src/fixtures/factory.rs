//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests of pure functions.

use chrono::Utc;

use crate::{
    fixtures::calculation::{
        MOCK_DISTANCE, MOCK_HYDRATION_HABIT, MOCK_PACKAGING_HABIT, MOCK_TRANSPORT_METHOD,
    },
    model::{CalculationModel, StudentModel},
};

/// Create a mock student database model.
pub fn mock_student_model(student_id: i32, name: &str, email: &str) -> StudentModel {
    StudentModel {
        id: student_id,
        name: name.to_string(),
        email: email.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock calculation database model with the mock habits.
///
/// Weekly and yearly totals are derived from `daily_emissions`.
pub fn mock_calculation_model(
    calculation_id: i32,
    student_id: Option<i32>,
    daily_emissions: f64,
) -> CalculationModel {
    CalculationModel {
        id: calculation_id,
        student_id,
        distance: MOCK_DISTANCE,
        transport_method: MOCK_TRANSPORT_METHOD.to_string(),
        hydration_habit: MOCK_HYDRATION_HABIT.to_string(),
        packaging_habit: MOCK_PACKAGING_HABIT.to_string(),
        daily_emissions,
        weekly_emissions: daily_emissions * 5.0,
        yearly_emissions: daily_emissions * 5.0 * 36.0,
        created_at: Utc::now().naive_utc(),
    }
}
