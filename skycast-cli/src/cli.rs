use std::io;

use clap::{Parser, Subcommand};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use skycast_core::{Config, IpApiLocator, OpenWeatherProvider, SessionState, run_session};

use crate::view;

/// Rows reserved below the prompt for the dashboard.
const DASHBOARD_HEIGHT: u16 = 24;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save the OpenWeather API key used by the dashboard.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => show_dashboard().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.api_key = Some(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// One dashboard session: draw the loading screen, run the acquisition
/// pipeline, then redraw with whatever terminal state it produced. There is
/// no input loop and no re-trigger; a fresh invocation is the only way to
/// refresh.
async fn show_dashboard() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = OpenWeatherProvider::new(config.resolve_api_key());
    let locator = IpApiLocator::new();

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(DASHBOARD_HEIGHT),
        },
    )?;

    terminal.draw(|frame| view::render_dashboard(frame, &SessionState::Loading))?;

    let state = run_session(&locator, &provider).await;

    terminal.draw(|frame| view::render_dashboard(frame, &state))?;
    println!();

    Ok(())
}
