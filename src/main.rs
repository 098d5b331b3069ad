use anyhow::{bail, Context, Result};
use backup_edit::models::config::{setup_config, Config};
use backup_edit::service::inspect::{collect_sources, inspect_sources};
use backup_edit::WireNaming;
use clap::Parser;
use log::{debug, info};
use std::io::{self, Write};

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.quiet {
        log::LevelFilter::Warn
    } else {
        log_level_filter(&args.log_level)
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .init();

    info!("backup-edit starting...");
    let config = load_config(&args)?;
    debug!("Effective config: {:?}", &config);

    let sources = collect_sources(&args.inputs, &config).context("Failed to collect payloads")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = inspect_sources(&sources, &config, args.validate_only, &mut out)
        .context("Failed to write edit backup requests")?;
    out.flush().context("Failed to flush stdout")?;

    if summary.has_failures() {
        bail!(
            "{} of {} payloads could not be decoded",
            summary.failed,
            summary.total()
        );
    }

    if args.validate_only {
        info!("All payloads are valid edit backup requests (--validate-only mode).");
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "backup-edit")]
#[command(about = "Decode, validate and re-encode edit backup request payloads", long_about = None)]
struct Cli {
    /// Payload files or directories, `-` for stdin
    #[arg(default_value = "-")]
    inputs: Vec<String>,

    #[arg(short = 'c', long = "config", env = "BACKUP_EDIT_CONFIG")]
    config_file: Option<String>,

    #[arg(
        short = 'l',
        long = "log-level",
        default_value = "info",
        env = "LOG_LEVEL"
    )]
    log_level: String,

    #[arg(short = 'n', long = "naming", value_enum)]
    naming: Option<WireNaming>,

    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    #[arg(short = 'v', long = "validate-only")]
    validate_only: bool,

    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Loads the config file if one was given, then applies CLI overrides
fn load_config(args: &Cli) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(config_file) => {
            // Strip any surrounding quotes from config file path
            let config_file_path = config_file
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string();
            setup_config(config_file_path).context("Failed to load configuration")?
        }
        None => Config::default(),
    };

    if let Some(naming) = args.naming {
        config.wire_naming = naming;
    }
    if args.pretty {
        config.pretty = true;
    }
    Ok(config)
}

fn log_level_filter(log_level: &str) -> log::LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}
