//! Reserve Dashboard - terminal overview of one lending-market reserve
//!
//! Usage:
//!   reserve-dash --reserves <FILE> [OPTIONS]
//!
//! Examples:
//!   reserve-dash --reserves reserves.json
//!   reserve-dash --reserves reserves.json --asset 0x6b175474e89094c44da98b954eedeac495271d0f
//!   reserve-dash --config market.toml --print-config

mod app;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use reserve_overview::bridge::{Osc52Clipboard, SessionWallet};
use ratatui::backend::CrosstermBackend;
use reserve_overview::tui::{Action, EventLoop, TerminalManager, TuiEvent};
use reserve_overview::{OverviewConfig, ReserveSnapshot};
use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

/// Dashboard CLI arguments
#[derive(Parser)]
#[command(name = "reserve-dash")]
#[command(about = "Terminal overview of a lending-market reserve")]
#[command(version)]
struct Args {
    /// Reserves snapshot (JSON array of reserves or {"reserves": [...]})
    #[arg(long, required_unless_present = "print_config")]
    reserves: Option<PathBuf>,

    /// Underlying asset address to open; omitted opens the markets route
    #[arg(long)]
    asset: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file (the terminal is busy drawing)
    #[arg(long, default_value = "/tmp/reserve-dash.log")]
    log_file: PathBuf,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let level = level.as_str().to_lowercase();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("reserve_dash={level},reserve_overview={level}"))
    });

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .with_context(|| format!("opening log file {}", args.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = OverviewConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logging(&args)?;
    debug!("Dashboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let path = args
        .reserves
        .as_ref()
        .context("--reserves is required")?;
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading reserves from {}", path.display()))?;
    let snapshot = ReserveSnapshot::from_json(&source)?;
    debug!("Loaded {} reserves", snapshot.reserves.len());

    let mut app = App::new(
        config.clone(),
        snapshot,
        args.asset.as_deref(),
        Box::new(Osc52Clipboard),
        Box::new(SessionWallet::new(None)),
    );
    let events = EventLoop::new(config.refresh_interval());

    let mut terminal = TerminalManager::enter()?;
    let result = run_app(&mut terminal, &mut app, &events);
    drop(terminal);

    if let Err(err) = result {
        error!("Error: {:?}", err);
        return Err(err);
    }

    debug!("Dashboard exiting cleanly");
    Ok(())
}

fn run_app(
    terminal: &mut TerminalManager<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventLoop,
) -> Result<()> {
    app.refresh(Instant::now());

    loop {
        terminal.draw(|f| app.draw(f))?;

        match events.poll_event()? {
            TuiEvent::Key(key) => {
                if let Some(action) = Action::from_key(&key) {
                    if app.handle(action, Instant::now()) {
                        return Ok(());
                    }
                }
            }
            TuiEvent::Resize(width, height) => terminal.resized(width, height),
            TuiEvent::Tick => app.refresh(Instant::now()),
        }
    }
}
