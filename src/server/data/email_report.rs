//! Email report audit log persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Queries on the `email_report` audit table
pub struct EmailReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmailReportRepository<'a, C> {
    /// Creates a new instance of [`EmailReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an audit entry for a delivered report
    ///
    /// # Arguments
    /// - `student_id` - ID of the student the report was sent to
    /// - `calculation_id` - ID of the calculation the report describes
    /// - `report_data` - JSON snapshot of the report payload at send time
    pub async fn create(
        &self,
        student_id: i32,
        calculation_id: i32,
        report_data: serde_json::Value,
    ) -> Result<entity::email_report::Model, DbErr> {
        let email_report = entity::email_report::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            calculation_id: ActiveValue::Set(calculation_id),
            sent_at: ActiveValue::Set(Utc::now().naive_utc()),
            report_data: ActiveValue::Set(report_data),
            ..Default::default()
        };

        email_report.insert(self.db).await
    }

    /// Gets every report sent for a calculation, oldest first
    pub async fn get_many_by_calculation_id(
        &self,
        calculation_id: i32,
    ) -> Result<Vec<entity::email_report::Model>, DbErr> {
        entity::prelude::EmailReport::find()
            .filter(entity::email_report::Column::CalculationId.eq(calculation_id))
            .order_by_asc(entity::email_report::Column::Id)
            .all(self.db)
            .await
    }
}
