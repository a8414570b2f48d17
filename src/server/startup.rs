use mongodb::{bson::doc, Client};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, data::student::StudentRepository, error::AppError};

/// Database used when neither `MONGODB_DATABASE` nor the connection string names one.
const DEFAULT_DATABASE: &str = "school";

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs the service and HTTP layer at info level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("student_records=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Connects to MongoDB and returns the student repository.
///
/// Creates the client from the configured connection string, selects the database and
/// collection, then pings the server so an unreachable database fails startup instead of
/// the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the connection string
///
/// # Returns
/// - `Ok(StudentRepository)` - Repository bound to the student collection
/// - `Err(AppError::StoreErr)` - Invalid connection string or unreachable server
pub async fn connect_to_database(config: &Config) -> Result<StudentRepository, AppError> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;

    let database = match &config.database_name {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        database = database.name(),
        collection = %config.collection_name,
        "Connected to MongoDB"
    );

    Ok(StudentRepository::new(
        database.collection(&config.collection_name),
    ))
}

/// Resolves when the process receives Ctrl-C, triggering graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
