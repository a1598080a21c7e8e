use serde::{Deserialize, Serialize};

/// Request body for `POST /api/register-student`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDto {
    pub name: String,
    pub email: String,
    /// Calculation returned by `POST /api/calculate`
    pub calculation_id: i32,
}

/// Response of `POST /api/register-student`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentResponseDto {
    pub message: String,
    /// Whether the email provider accepted the report
    pub email_sent: bool,
}
