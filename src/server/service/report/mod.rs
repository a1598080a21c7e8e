//! Student registration and emailed reports.
//!
//! Registration links a stored calculation to a student and emails them a report comparing
//! their emissions with everyone else's. Delivery is best effort: once the student and link
//! are stored, a failed send is logged and reported through `emailSent` instead of failing
//! the request, and the `email_report` audit row is only written for delivered reports.

pub mod render;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        calculation::{CalculationDto, RecommendationsDto},
        report::{ReportCalculationDto, ReportDto, ReportStudentDto},
        student::{RegisterStudentDto, RegisterStudentResponseDto},
    },
    server::{
        data::email_report::EmailReportRepository,
        email::{EmailClient, EmailMessage},
        error::{validation::ValidationError, Error},
        model::db::StudentModel,
        service::{
            calculation::{to_calculation_dto, CalculationService},
            emissions::{comparison, recommendation},
            student::StudentService,
        },
        util::validation::{normalize_email, normalize_name},
    },
};

/// Response message when the report was delivered
pub static REPORT_SENT_MESSAGE: &str = "Student registered and email sent successfully";
/// Response message when delivery failed
pub static REPORT_NOT_SENT_MESSAGE: &str =
    "Student registered, but the report email could not be sent";

/// Service for registering students and sending their reports.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    email_client: &'a EmailClient,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection, email_client: &'a EmailClient) -> Self {
        Self { db, email_client }
    }

    /// Registers a student against a calculation and emails them their report.
    ///
    /// Input is validated before anything is read or written, and an unknown calculation ID is
    /// rejected before the student is looked up, so failed registrations leave no records
    /// behind. The student is looked up by normalized email and created if new.
    ///
    /// # Returns
    /// - `Ok(RegisterStudentResponseDto)` - Student stored and linked; `email_sent` tells
    ///   whether the provider accepted the report
    /// - `Err(Error::ValidationError)` - Invalid name or email, or the calculation belongs to
    ///   another student
    /// - `Err(Error::CalculationError(NotFound))` - Unknown calculation ID
    /// - `Err(Error::DbErr)` - Storage failed
    pub async fn register_student(
        &self,
        input: RegisterStudentDto,
    ) -> Result<RegisterStudentResponseDto, Error> {
        let name = normalize_name(&input.name)?;
        let email = normalize_email(&input.email)?;

        let calculation_service = CalculationService::new(self.db);
        let student_service = StudentService::new(self.db);

        let calculation = calculation_service
            .get_by_id(input.calculation_id)
            .await?;

        // Reject before creating a student that could never own this calculation
        if let Some(owner_id) = calculation.student_id {
            let owner = student_service.get_student(owner_id).await?;

            if owner.map(|owner| owner.email).as_deref() != Some(email.as_str()) {
                return Err(ValidationError::CalculationAlreadyRegistered(calculation.id).into());
            }
        }

        let student = student_service.get_or_create_student(&name, &email).await?;
        let calculation = calculation_service
            .link_student(calculation.id, student.id)
            .await?;

        let average_daily = calculation_service.mean_daily_emissions().await?;
        let percent_below_average =
            comparison::percent_below_average(calculation.daily_emissions, average_daily)?;
        let calculation = to_calculation_dto(calculation)?;
        let recommendations = recommendation::recommend(
            calculation.transport_method,
            calculation.hydration_habit,
            calculation.packaging_habit,
        );

        let report = build_report(
            &student,
            calculation,
            average_daily,
            percent_below_average,
            recommendations,
        );

        let email_sent = self.send_report(student.id, &report).await?;

        let message = if email_sent {
            REPORT_SENT_MESSAGE
        } else {
            REPORT_NOT_SENT_MESSAGE
        };

        Ok(RegisterStudentResponseDto {
            message: message.to_string(),
            email_sent,
        })
    }

    /// Sends the report and records it in the audit log on delivery.
    ///
    /// # Returns
    /// - `Ok(true)` - Provider accepted the message and the audit row was written
    /// - `Ok(false)` - Delivery failed; nothing was written
    /// - `Err(Error)` - Report could not be rendered, or delivered but the audit row could not
    ///   be written
    async fn send_report(&self, student_id: i32, report: &ReportDto) -> Result<bool, Error> {
        let html = render::render_html(report)
            .map_err(|e| Error::InternalError(format!("Failed to render report: {}", e)))?;
        let message = EmailMessage {
            from: self.email_client.from_address().to_string(),
            to: vec![report.student.email.clone()],
            subject: render::render_subject(report),
            html,
        };

        let email_id = match self.email_client.send(&message).await {
            Ok(email_id) => email_id,
            Err(e) => {
                tracing::warn!(
                    student_id = %student_id,
                    calculation_id = %report.calculation.id,
                    "Failed to send report email: {}",
                    e
                );

                return Ok(false);
            }
        };

        let report_data = serde_json::to_value(report)
            .map_err(|e| Error::InternalError(format!("Failed to serialize report: {}", e)))?;

        let email_report_repo = EmailReportRepository::new(self.db);
        email_report_repo
            .create(student_id, report.calculation.id, report_data)
            .await?;

        tracing::info!(
            student_id = %student_id,
            calculation_id = %report.calculation.id,
            email_id = %email_id,
            "Sent report email"
        );

        Ok(true)
    }
}

/// Assembles the report snapshot that is emailed and stored in the audit log
pub fn build_report(
    student: &StudentModel,
    calculation: CalculationDto,
    average_daily: f64,
    percent_below_average: f64,
    recommendations: RecommendationsDto,
) -> ReportDto {
    ReportDto {
        student: ReportStudentDto {
            name: student.name.clone(),
            email: student.email.clone(),
        },
        calculation: ReportCalculationDto {
            id: calculation.id,
            distance: calculation.distance,
            transport_method: calculation.transport_method,
            hydration_habit: calculation.hydration_habit,
            packaging_habit: calculation.packaging_habit,
            daily_emissions: calculation.daily_emissions,
            weekly_emissions: calculation.weekly_emissions,
            yearly_emissions: calculation.yearly_emissions,
        },
        average_daily,
        percent_below_average,
        recommendations,
    }
}
