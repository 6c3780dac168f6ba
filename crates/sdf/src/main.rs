use std::io::stdout;

use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use sdf_config::{Config, default_config_path, default_log_path};
use tracing::info;

mod app;
mod cli;
mod content;
mod logging;
mod page;
mod render;
mod scroll;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        config.save(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let log_path = match &config.log.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    let _guard = logging::init(&log_path, &config.log.level)?;
    info!(version = env!("CARGO_PKG_VERSION"), accent = %config.accent, "starting sdf");

    let terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableMouseCapture, EnableFocusChange) {
        ratatui::restore();
        return Err(err.into());
    }

    let result = App::new(config).run(terminal);

    let cleanup = execute!(stdout(), DisableFocusChange, DisableMouseCapture);
    ratatui::restore();
    result?;
    cleanup?;
    info!("exiting");
    Ok(())
}
