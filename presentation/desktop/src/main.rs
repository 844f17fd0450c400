use dotenvy::dotenv;
use tokio::io::{BufReader, stdin, stdout};

mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;
use ui::app::App;

/// Catalog Desktop Entry Point
///
/// Loads configuration, wires dependencies and runs the terminal front-end.
///
/// - config/: Supabase connection settings
/// - setup/: Dependency injection
/// - ui/: Routes, views, forms and user-facing messages
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.supabase);

    // 5. Run the front-end until the user quits or input ends
    let mut app = App::new(container);
    app.run(BufReader::new(stdin()), stdout()).await?;
    tracing::info!("Front-end closed on {}", app.route());

    Ok(())
}
