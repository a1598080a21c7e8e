use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::habit::{HydrationHabit, PackagingHabit, TransportMethod};

/// Form submission for `POST /api/calculate`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateDto {
    /// One-way distance from home to school in kilometres
    pub distance: f64,
    pub transport_method: TransportMethod,
    pub hydration_habit: HydrationHabit,
    pub packaging_habit: PackagingHabit,
}

/// Advice shown on the results page and included in the emailed report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecommendationsDto {
    pub home: Vec<String>,
    pub school: Vec<String>,
}

/// Response of `POST /api/calculate`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResultDto {
    /// Identifier to pass to `POST /api/register-student`
    pub calculation_id: i32,
    /// kg CO₂e per school day
    pub daily_emissions: f64,
    /// kg CO₂e per school week
    pub weekly_emissions: f64,
    /// kg CO₂e per school year
    pub yearly_emissions: f64,
    /// Mean daily emissions across all stored calculations, this one included
    pub average_daily: f64,
    /// How far below the average this calculation is, in percent; negative when above
    pub percent_below_average: f64,
    pub recommendations: RecommendationsDto,
}

/// Response of `GET /api/average-emissions`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageEmissionsDto {
    pub average_daily: f64,
}

/// A stored calculation as listed by `GET /api/calculations`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationDto {
    pub id: i32,
    pub student_id: Option<i32>,
    pub distance: f64,
    pub transport_method: TransportMethod,
    pub hydration_habit: HydrationHabit,
    pub packaging_habit: PackagingHabit,
    pub daily_emissions: f64,
    pub weekly_emissions: f64,
    pub yearly_emissions: f64,
    pub created_at: NaiveDateTime,
}
