use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{self, Event as CEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use dermview::config::Config;
use dermview::services::{HttpFetcher, S3Signer};
use dermview::tui::{App, KeyBindings};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Terminal viewer for dermatology cases stored in S3
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable file logging at the given level (overrides RUST_LOG)
    #[arg(long = "logging", value_enum)]
    logging: Option<LogLevel>,
    /// Path to a config file (overrides default config discovery)
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    dermview::logging::init_with(None, args.logging.map(Into::into))?;

    let config = match Config::from_path(args.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config not loaded, using defaults: {e}");
            Config::fallback()
        }
    };
    info!(bucket = %config.storage.bucket, key = %config.storage.dataset_key, "Starting");

    let signer = S3Signer::new(&config.secrets)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(config.storage.fetch_timeout_secs))?;
    let mut app = App::new(&config, Box::new(signer), Box::new(fetcher));
    if let Some(path) = &config.ui.keybindings_file {
        match KeyBindings::load_from_file(path) {
            Ok(kb) => app = app.with_keybindings(kb),
            Err(e) => error!("Keybindings not loaded from {}: {e}", path.display()),
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(e) = &res {
        error!("Error: {e}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // First frame before the blocking load so the screen is not blank meanwhile
    terminal.draw(|f| app.render(f))?;
    app.load();

    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))?
            && let CEvent::Key(key_event) = event::read()?
        {
            app.handle_key_event(key_event)?;
        }

        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }
    }
}
