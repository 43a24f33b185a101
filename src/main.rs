// src/main.rs

use std::io;

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dirbrowse::{app::App, config::Settings, ui::Console};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DIRBROWSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring settings file");
        Settings::default()
    });

    let stdout = io::stdout();
    let color = settings.color && stdout.is_tty();

    let mut app = App::new(settings)?;
    info!(dir = %app.current_dir().display(), "starting");

    let mut console = Console::new(io::stdin().lock(), stdout, color);
    app.run(&mut console).context("console I/O failed")
}
