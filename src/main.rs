use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::config::ConfigLoader;
use shift_pay_engine::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(
        fmt::layer()
            .with_ansi(true)
            .with_line_number(true)
            .with_filter(filter),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ConfigLoader::from_env()?;
    let bind_address = config.bind_address().to_string();
    let week_start = config.week_starts_on();

    let state = AppState::new(config, MemoryStore::new());
    let router = create_router(state);

    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, week_starts_on = %week_start, "Shift pay service listening");

    axum::serve(listener, router).await?;
    Ok(())
}
