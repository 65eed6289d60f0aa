use std::path::PathBuf;

use clap::Parser;
use networth::{App, AppConfig, AppState, init_logging, try_load_problem};
use networth_core::{FinancialProblem, Horizon};

#[derive(Parser, Debug)]
#[command(name = "networth")]
#[command(about = "Plot and edit a net-worth projection in the terminal")]
struct Args {
    /// Financial problem document (JSON); starts empty when omitted
    document: Option<PathBuf>,

    /// Path to the data directory (default: ~/.networth/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Months to simulate, overriding config.yaml
    #[arg(long, value_parser = parse_horizon)]
    horizon: Option<Horizon>,
}

fn parse_horizon(value: &str) -> Result<Horizon, String> {
    let steps: u32 = value.parse().map_err(|e| format!("{e}"))?;
    Horizon::new(steps).map_err(|e| e.to_string())
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".networth")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load_or_default(&data_dir);
    if let Some(horizon) = args.horizon {
        config.horizon = horizon;
    }

    // A broken document still opens, empty, with the reason on the status bar
    let (problem, load_error) = match &args.document {
        Some(path) => match try_load_problem(path) {
            Ok(problem) => (problem, None),
            Err(e) => (FinancialProblem::empty(), Some(format!("{}: {e}", path.display()))),
        },
        None => (FinancialProblem::empty(), None),
    };

    let mut state = AppState::new(problem, config, args.document);
    if let Some(message) = load_error {
        state.set_error(message);
    }
    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");
    Ok(())
}
