//! Server initialization helpers used by `main`.

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, email::EmailClient, error::Error, model::app::AppState};

/// Filter used when `RUST_LOG` is not set
pub static DEFAULT_LOG_FILTER: &str = "ecocalc=info,tower_http=info,warn";

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the email client with the provided provider settings
pub fn build_email_client(config: &Config) -> Result<EmailClient, Error> {
    let email_client = EmailClient::builder()
        .api_url(&config.email_api_url)
        .api_key(&config.email_api_key)
        .from_address(&config.email_from)
        .build()?;

    Ok(email_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the application router with state and HTTP layers applied
///
/// CORS is permissive since the calculator form is served from a different origin.
pub fn build_app(state: AppState) -> Router {
    crate::server::router::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
