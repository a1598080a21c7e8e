use serde::{Deserialize, Serialize};

use crate::model::{
    calculation::RecommendationsDto,
    habit::{HydrationHabit, PackagingHabit, TransportMethod},
};

/// Snapshot of everything that goes into an emailed report.
///
/// Rendered into the email body and stored as-is in `email_report.report_data`, so the audit
/// log keeps what the student actually received even if averages change later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub student: ReportStudentDto,
    pub calculation: ReportCalculationDto,
    pub average_daily: f64,
    pub percent_below_average: f64,
    pub recommendations: RecommendationsDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStudentDto {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCalculationDto {
    pub id: i32,
    pub distance: f64,
    pub transport_method: TransportMethod,
    pub hydration_habit: HydrationHabit,
    pub packaging_habit: PackagingHabit,
    pub daily_emissions: f64,
    pub weekly_emissions: f64,
    pub yearly_emissions: f64,
}
