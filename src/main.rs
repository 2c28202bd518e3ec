use blogreach::configuration::{Context, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use blogreach::core::{HttpService, ServiceManager};
use blogreach::AppError;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    let config_file = env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let context = Context::new(&config_file).map_err(|e| AppError::ConfigError(e.to_string()))?;

    let log_level = Level::from_str(&context.config.log_level).unwrap_or(Level::INFO);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
    tracing::info!("Starting blogreach backend");

    let mut service_manager = ServiceManager::new(context);
    service_manager.spawn::<HttpService>();

    service_manager
        .wait()
        .await
        .map_err(|_| AppError::ServiceError)
}
