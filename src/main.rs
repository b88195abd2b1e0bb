mod app;
mod booking;
mod calendar;
mod config;
mod picker;
mod rooms;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use theme::ThemeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("wanderrest");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "wanderrest.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    tracing::info!("Starting WanderRest");

    let cfg          = AppConfig::load().unwrap_or_default();
    let theme        = ThemeConfig::load()?;
    let rooms        = rooms::load_rooms()?;
    let testimonials = rooms::load_testimonials()?;

    let mut app = App::new(&cfg, theme, rooms, testimonials);
    app.run()?;
    Ok(())
}
