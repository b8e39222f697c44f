use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wan_manager_view::{
    config::Config,
    loader,
    report::{self, ReportSettings},
    terminal,
};

#[derive(Parser)]
#[command(name = "show-wan-manager")]
#[command(about = "Show TR-181 WANManager WAN modes and their interfaces as a text diagram")]
#[command(version)]
struct Cli {
    /// Data model dump to read (defaults to DM.txt)
    input: Option<PathBuf>,

    /// Report width in columns (defaults to the terminal width)
    #[arg(short, long)]
    width: Option<usize>,

    /// Configuration file (defaults to the per-user config file if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let input = cfg.input_path(cli.input.as_deref());

    let model = loader::load(&input)?;

    let width = cli
        .width
        .filter(|&w| w > 0)
        .unwrap_or_else(|| terminal::detect_width(cfg.fallback_width));
    let settings = ReportSettings::from_config(&cfg, width);

    println!("Parsing: {}", input.display());
    println!();
    print!("{}", report::render_report(&model, &settings));

    Ok(())
}
