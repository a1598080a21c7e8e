use ecocalc::server::{config::Config, error::Error, model::app::AppState, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    let email_client = startup::build_email_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let app = startup::build_app(AppState { db, email_client });

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
