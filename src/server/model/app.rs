//! Application state shared across handlers.

use sea_orm::DatabaseConnection;

use crate::server::email::EmailClient;

#[derive(Clone)]
/// Shared state handed to every handler
pub struct AppState {
    /// Connection pool for the calculation, student and email report tables
    pub db: DatabaseConnection,
    /// Client for the transactional email provider
    pub email_client: EmailClient,
}
