//! Calculation persistence.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    model::habit::{HydrationHabit, PackagingHabit, TransportMethod},
    server::service::emissions::calculator::Emissions,
};

/// Inputs and derived totals for a calculation that has not been stored yet.
pub struct NewCalculation {
    /// One-way distance in kilometres
    pub distance: f64,
    /// How the student commutes
    pub transport_method: TransportMethod,
    /// What the student drinks from
    pub hydration_habit: HydrationHabit,
    /// How the student wraps their lunch
    pub packaging_habit: PackagingHabit,
    /// Totals computed from the fields above
    pub emissions: Emissions,
}

/// Queries on the `calculation` table
pub struct CalculationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CalculationRepository<'a, C> {
    /// Creates a new instance of [`CalculationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a calculation with no student attached
    pub async fn create(
        &self,
        calculation: NewCalculation,
    ) -> Result<entity::calculation::Model, DbErr> {
        let calculation = entity::calculation::ActiveModel {
            student_id: ActiveValue::Set(None),
            distance: ActiveValue::Set(calculation.distance),
            transport_method: ActiveValue::Set(calculation.transport_method.as_str().to_string()),
            hydration_habit: ActiveValue::Set(calculation.hydration_habit.as_str().to_string()),
            packaging_habit: ActiveValue::Set(calculation.packaging_habit.as_str().to_string()),
            daily_emissions: ActiveValue::Set(calculation.emissions.daily),
            weekly_emissions: ActiveValue::Set(calculation.emissions.weekly),
            yearly_emissions: ActiveValue::Set(calculation.emissions.yearly),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        calculation.insert(self.db).await
    }

    /// Gets a calculation by ID
    pub async fn get_by_id(
        &self,
        calculation_id: i32,
    ) -> Result<Option<entity::calculation::Model>, DbErr> {
        entity::prelude::Calculation::find_by_id(calculation_id)
            .one(self.db)
            .await
    }

    /// Gets every calculation ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::calculation::Model>, DbErr> {
        entity::prelude::Calculation::find()
            .order_by_asc(entity::calculation::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the student the calculation belongs to, only if it has none yet
    ///
    /// The null check and the write are a single `UPDATE`, so concurrent links cannot
    /// overwrite each other.
    ///
    /// # Returns
    /// - `Ok(true)` - The student was attached
    /// - `Ok(false)` - No unlinked calculation exists with the provided ID
    /// - `Err(DbErr)` - Query failed, including foreign key violations for unknown students
    pub async fn set_student_if_unlinked(
        &self,
        calculation_id: i32,
        student_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Calculation::update_many()
            .col_expr(
                entity::calculation::Column::StudentId,
                Expr::value(student_id),
            )
            .filter(entity::calculation::Column::Id.eq(calculation_id))
            .filter(entity::calculation::Column::StudentId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Averages `daily_emissions` over every stored calculation
    ///
    /// Returns `Ok(None)` when the table is empty.
    pub async fn average_daily_emissions(&self) -> Result<Option<f64>, DbErr> {
        let average = entity::prelude::Calculation::find()
            .select_only()
            .expr_as(
                Func::avg(Expr::col(entity::calculation::Column::DailyEmissions)),
                "average",
            )
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?;

        Ok(average.flatten())
    }
}
