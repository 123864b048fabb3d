//! Team Colors - terminal browser for school color palettes
//!
//! Without a subcommand this launches the TUI; subcommands give headless
//! access to the same data for scripts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use teamcolors::cli::{CliError, ConferencesArgs, ConfigArgs, ExportArgs, ShowArgs};
use teamcolors::config::Config;
use teamcolors::constants::{APP_BINARY_NAME, APP_NAME};
use teamcolors::logging;
use teamcolors::services::clipboard::SystemClipboard;
use teamcolors::tui::{self, AppState};

/// Team Colors - browse and copy school colors by conference
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// School data source: file path, http(s) URL, or "embedded"
    #[arg(short, long, global = true, value_name = "SOURCE")]
    data: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List conferences
    Conferences(ConferencesArgs),
    /// Show the school cards of a conference
    Show(ShowArgs),
    /// Export colors of a conference as text
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run_command(command: &Command, data: Option<&str>) -> Result<(), CliError> {
    match command {
        Command::Conferences(args) => args.execute(data),
        Command::Show(args) => args.execute(data),
        Command::Export(args) => args.execute(data),
        Command::Config(args) => args.execute(),
    }
}

fn run_tui(data: Option<&str>, verbose: bool) -> Result<()> {
    let log_path = logging::default_log_path()?;
    logging::init_file_logging(&log_path, verbose)?;
    info!("Starting {APP_NAME} v{}", env!("CARGO_PKG_VERSION"));

    let config_path = Config::config_file_path()?;
    let (config, config_path) = Config::load_session(&config_path);
    let source = config.data_source(data)?;

    let mut state = AppState::new(config, config_path, Box::new(SystemClipboard::new()));
    state.start_loading(source);
    tui::run(&mut state)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        return run_tui(cli.data.as_deref(), cli.verbose);
    };

    logging::init_stderr_logging(cli.verbose);
    if let Err(e) = run_command(command, cli.data.as_deref()) {
        eprintln!("{APP_BINARY_NAME}: {e}");
        std::process::exit(e.exit_code.code());
    }
    Ok(())
}
