use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vanity_imports::{App, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config_path =
        std::env::var("VANITY_CONFIG").unwrap_or_else(|_| "vanity.toml".to_string());
    tracing::info!(config_path = %config_path, "Starting vanity import server");

    let raw = std::fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {config_path}: {e}"));
    let config: Config =
        toml::from_str(&raw).unwrap_or_else(|e| panic!("Failed to parse {config_path}: {e}"));

    let addr = std::env::var("VANITY_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let app = App::new(config);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!(addr = %addr, "Listening");
    axum::serve(listener, app.create_router()).await.unwrap();
}
