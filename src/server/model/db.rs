//! Database model type aliases.
//!
//! Short names for the SeaORM models in the `entity` crate so services and handlers don't
//! import from it directly.

/// Type alias for the student database model.
///
/// # Fields (from `entity::student::Model`)
/// - `id` - Primary key
/// - `name` - Name given at first registration
/// - `email` - Normalized (trimmed, lower-cased) email, unique
/// - `created_at` - Timestamp of first registration
pub type StudentModel = entity::student::Model;

/// Type alias for the calculation database model.
///
/// Habit columns hold the kebab-case identifiers of
/// [`TransportMethod`](crate::model::habit::TransportMethod),
/// [`HydrationHabit`](crate::model::habit::HydrationHabit) and
/// [`PackagingHabit`](crate::model::habit::PackagingHabit).
///
/// # Fields (from `entity::calculation::Model`)
/// - `id` - Primary key
/// - `student_id` - Owning student, set once on registration (nullable)
/// - `distance` - One-way distance in kilometres
/// - `transport_method` - Transport method identifier
/// - `hydration_habit` - Hydration habit identifier
/// - `packaging_habit` - Packaging habit identifier
/// - `daily_emissions` - kg CO₂e per school day
/// - `weekly_emissions` - kg CO₂e per school week
/// - `yearly_emissions` - kg CO₂e per school year
/// - `created_at` - Timestamp the calculation was stored
pub type CalculationModel = entity::calculation::Model;

/// Type alias for the sent-report audit database model.
///
/// # Fields (from `entity::email_report::Model`)
/// - `id` - Primary key
/// - `student_id` - Recipient student
/// - `calculation_id` - Calculation the report describes
/// - `sent_at` - Timestamp the provider accepted the email
/// - `report_data` - JSON snapshot of the report that was sent
pub type EmailReportModel = entity::email_report::Model;
