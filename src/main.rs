use greeter_service::config::ServiceConfig;
use greeter_service::observability::init_tracing;
use greeter_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    init_tracing("info");

    let config = ServiceConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(&config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped()
        .await
        .map_err(|e| std::io::Error::other(format!("Server error: {}", e)))
}
