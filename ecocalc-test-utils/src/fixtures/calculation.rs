use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::CalculationModel, TestContext};

/// Habits stored on mock calculations
pub static MOCK_TRANSPORT_METHOD: &str = "car-solo";
pub static MOCK_HYDRATION_HABIT: &str = "plastic-bottle";
pub static MOCK_PACKAGING_HABIT: &str = "aluminum-foil";

/// Distance stored on mock calculations, in kilometres
pub const MOCK_DISTANCE: f64 = 5.0;

impl TestContext {
    pub fn calculation<'a>(&'a self) -> CalculationFixtures<'a> {
        CalculationFixtures { setup: self }
    }
}

pub struct CalculationFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CalculationFixtures<'a> {
    /// Insert an unlinked calculation with the mock habits.
    ///
    /// Weekly and yearly totals are derived from `daily_emissions` (5 school days, 36 weeks)
    /// but the daily value itself is taken as given, so averages can be controlled directly.
    pub async fn insert_mock_calculation(
        &self,
        daily_emissions: f64,
    ) -> Result<CalculationModel, TestError> {
        self.insert(
            None,
            MOCK_TRANSPORT_METHOD,
            MOCK_HYDRATION_HABIT,
            MOCK_PACKAGING_HABIT,
            daily_emissions,
        )
        .await
    }

    /// Insert a calculation already linked to a student
    pub async fn insert_mock_calculation_for_student(
        &self,
        student_id: i32,
        daily_emissions: f64,
    ) -> Result<CalculationModel, TestError> {
        self.insert(
            Some(student_id),
            MOCK_TRANSPORT_METHOD,
            MOCK_HYDRATION_HABIT,
            MOCK_PACKAGING_HABIT,
            daily_emissions,
        )
        .await
    }

    /// Insert an unlinked calculation with arbitrary habit identifiers.
    ///
    /// Identifiers are stored verbatim, which allows inserting values the application would
    /// reject.
    pub async fn insert_calculation(
        &self,
        transport_method: &str,
        hydration_habit: &str,
        packaging_habit: &str,
        daily_emissions: f64,
    ) -> Result<CalculationModel, TestError> {
        self.insert(
            None,
            transport_method,
            hydration_habit,
            packaging_habit,
            daily_emissions,
        )
        .await
    }

    async fn insert(
        &self,
        student_id: Option<i32>,
        transport_method: &str,
        hydration_habit: &str,
        packaging_habit: &str,
        daily_emissions: f64,
    ) -> Result<CalculationModel, TestError> {
        Ok(
            entity::prelude::Calculation::insert(entity::calculation::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                distance: ActiveValue::Set(MOCK_DISTANCE),
                transport_method: ActiveValue::Set(transport_method.to_string()),
                hydration_habit: ActiveValue::Set(hydration_habit.to_string()),
                packaging_habit: ActiveValue::Set(packaging_habit.to_string()),
                daily_emissions: ActiveValue::Set(daily_emissions),
                weekly_emissions: ActiveValue::Set(daily_emissions * 5.0),
                yearly_emissions: ActiveValue::Set(daily_emissions * 5.0 * 36.0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
