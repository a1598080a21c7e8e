//! Calculation record store.
//!
//! Persists calculations, links them to students after registration, and computes the mean of
//! daily emissions across all stored records. The mean is always aggregated from the table at
//! query time, so concurrent creates never need coordination here.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::calculation::{CalculateDto, CalculationDto, CalculationResultDto},
    server::{
        data::calculation::{CalculationRepository, NewCalculation},
        error::{calculation::CalculationError, validation::ValidationError, Error},
        model::db::CalculationModel,
        service::emissions::{calculator, comparison, recommendation},
    },
};

/// Mean daily emissions (kg CO₂e) reported before any calculation has been stored.
///
/// Gives the results page a comparison bar from the first submission and guarantees the
/// comparison never divides by zero.
pub const FALLBACK_MEAN_DAILY_EMISSIONS: f64 = 3.2;

/// Service for storing and querying calculations.
pub struct CalculationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalculationService<'a> {
    /// Creates a new instance of [`CalculationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the full pipeline for a form submission.
    ///
    /// Computes the emission totals, stores the calculation, then compares it against the
    /// updated population mean and selects recommendations for the submitted habits.
    ///
    /// # Returns
    /// - `Ok(CalculationResultDto)` - Stored calculation with comparison and recommendations
    /// - `Err(Error::ValidationError)` - Distance is negative or not finite
    /// - `Err(Error::DbErr)` - Storage failed
    pub async fn calculate(&self, input: CalculateDto) -> Result<CalculationResultDto, Error> {
        let calculation = self.create(&input).await?;
        let average_daily = self.mean_daily_emissions().await?;
        let percent_below_average =
            comparison::percent_below_average(calculation.daily_emissions, average_daily)?;
        let recommendations = recommendation::recommend(
            input.transport_method,
            input.hydration_habit,
            input.packaging_habit,
        );

        tracing::debug!(
            calculation_id = %calculation.id,
            daily_emissions = %calculation.daily_emissions,
            average_daily = %average_daily,
            "Stored calculation"
        );

        Ok(CalculationResultDto {
            calculation_id: calculation.id,
            daily_emissions: calculation.daily_emissions,
            weekly_emissions: calculation.weekly_emissions,
            yearly_emissions: calculation.yearly_emissions,
            average_daily,
            percent_below_average,
            recommendations,
        })
    }

    /// Computes and stores a calculation. The stored record never has a student attached.
    pub async fn create(&self, input: &CalculateDto) -> Result<CalculationModel, Error> {
        let emissions = calculator::compute(
            input.distance,
            input.transport_method,
            input.hydration_habit,
            input.packaging_habit,
        )?;

        let calculation_repo = CalculationRepository::new(self.db);
        let calculation = calculation_repo
            .create(NewCalculation {
                distance: input.distance,
                transport_method: input.transport_method,
                hydration_habit: input.hydration_habit,
                packaging_habit: input.packaging_habit,
                emissions,
            })
            .await?;

        Ok(calculation)
    }

    /// Gets a calculation by ID
    ///
    /// # Returns
    /// - `Ok(CalculationModel)` - The stored calculation
    /// - `Err(Error::CalculationError(NotFound))` - No calculation with that ID
    pub async fn get_by_id(&self, calculation_id: i32) -> Result<CalculationModel, Error> {
        let calculation_repo = CalculationRepository::new(self.db);

        calculation_repo
            .get_by_id(calculation_id)
            .await?
            .ok_or_else(|| CalculationError::NotFound(calculation_id).into())
    }

    /// Attaches a student to a calculation.
    ///
    /// The student ID can only be set once. Linking the same student again is a no-op that
    /// returns the stored calculation unchanged. When two registrations race for the same
    /// calculation, only the first write lands and the other is rejected.
    ///
    /// # Returns
    /// - `Ok(CalculationModel)` - Calculation linked to the student
    /// - `Err(Error::CalculationError(NotFound))` - No calculation with that ID
    /// - `Err(Error::ValidationError(CalculationAlreadyRegistered))` - Linked to another student
    /// - `Err(Error::DbErr)` - Storage failed, including unknown student IDs
    pub async fn link_student(
        &self,
        calculation_id: i32,
        student_id: i32,
    ) -> Result<CalculationModel, Error> {
        let calculation_repo = CalculationRepository::new(self.db);

        let linked = calculation_repo
            .set_student_if_unlinked(calculation_id, student_id)
            .await?;
        let calculation = self.get_by_id(calculation_id).await?;

        if calculation.student_id != Some(student_id) {
            return Err(ValidationError::CalculationAlreadyRegistered(calculation_id).into());
        }

        if linked {
            tracing::debug!(
                calculation_id = %calculation_id,
                student_id = %student_id,
                "Linked student to calculation"
            );
        }

        Ok(calculation)
    }

    /// Mean daily emissions across every stored calculation.
    ///
    /// Returns [`FALLBACK_MEAN_DAILY_EMISSIONS`] when nothing has been stored yet.
    pub async fn mean_daily_emissions(&self) -> Result<f64, Error> {
        let calculation_repo = CalculationRepository::new(self.db);

        let mean = calculation_repo
            .average_daily_emissions()
            .await?
            .filter(|mean| mean.is_finite() && *mean > 0.0)
            .unwrap_or(FALLBACK_MEAN_DAILY_EMISSIONS);

        Ok(mean)
    }

    /// Lists every stored calculation ordered by ID
    pub async fn list_all(&self) -> Result<Vec<CalculationDto>, Error> {
        let calculation_repo = CalculationRepository::new(self.db);

        calculation_repo
            .get_all()
            .await?
            .into_iter()
            .map(to_calculation_dto)
            .collect()
    }
}

/// Converts a stored calculation into its API representation.
///
/// Fails with [`Error::InternalError`] if a habit column holds an identifier that is no longer
/// a known variant.
pub fn to_calculation_dto(model: CalculationModel) -> Result<CalculationDto, Error> {
    let invalid = |e: crate::model::habit::UnknownHabitError| {
        Error::InternalError(format!("Calculation ID {} has {}", model.id, e))
    };

    Ok(CalculationDto {
        id: model.id,
        student_id: model.student_id,
        distance: model.distance,
        transport_method: model.transport_method.parse().map_err(invalid)?,
        hydration_habit: model.hydration_habit.parse().map_err(invalid)?,
        packaging_habit: model.packaging_habit.parse().map_err(invalid)?,
        daily_emissions: model.daily_emissions,
        weekly_emissions: model.weekly_emissions,
        yearly_emissions: model.yearly_emissions,
        created_at: model.created_at,
    })
}
