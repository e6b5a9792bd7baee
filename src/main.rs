use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::debug;
use std::io;
use std::path::PathBuf;

use bundlescope::config::Config;
use bundlescope::core::{BundleDumper, BundleInspector, BundleScanner};
use bundlescope::formatters::{JsonCompactFormatter, TextFormatter};
use bundlescope::parsers::BundleParser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "bundlescope",
    version,
    author = "bundlescope developers",
    about = "Report imports, exports and sizes of built vendor bundles"
)]
struct Cli {
    /// Configuration file (defaults to ./bundlescope.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Summarise imports, exports and size of every matching bundle
    Inspect {
        /// Build output directory
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// File name prefix of bundles to inspect
        #[arg(short, long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Leading characters searched for imports
        #[arg(long, value_name = "CHARS")]
        window: Option<usize>,

        /// Characters of each imported names list to show
        #[arg(long, value_name = "CHARS")]
        names_limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Sort bundles by file name instead of directory listing order
        #[arg(long)]
        sorted: bool,
    },
    /// Print the first matching bundle verbatim
    Dump {
        /// Build output directory
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// File name prefix of the bundle to dump
        #[arg(short, long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Take the first match by file name instead of directory listing order
        #[arg(long)]
        sorted: bool,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = Config::load(cli.config.as_deref())?;
    run(cli.command, config)
}

fn run(command: Command, mut config: Config) -> Result<()> {
    match command {
        Command::Inspect {
            dir,
            prefix,
            window,
            names_limit,
            format,
            sorted,
        } => {
            config.dir = dir.unwrap_or(config.dir);
            config.prefix = prefix.unwrap_or(config.prefix);
            config.window = window.unwrap_or(config.window);
            config.names_limit = names_limit.unwrap_or(config.names_limit);
            config.sorted |= sorted;
            config.validate()?;
            debug!("Configuration: {:?}", config);

            let inspector = BundleInspector::with_parts(
                BundleScanner::new().with_sorted(config.sorted),
                BundleParser::with_window(config.window)?,
            );
            let reports = inspector.inspect(&config.dir, &config.prefix)?;

            let mut stdout = io::stdout().lock();
            match format {
                OutputFormat::Text => TextFormatter::new()
                    .with_names_limit(config.names_limit)
                    .write_reports(&reports, &mut stdout)?,
                OutputFormat::Json => JsonCompactFormatter::new()
                    .with_names_limit(config.names_limit)
                    .write_reports(&reports, &mut stdout)?,
            }
        }
        Command::Dump {
            dir,
            prefix,
            sorted,
        } => {
            let dir = dir.unwrap_or(config.dir);
            let prefix = prefix.unwrap_or(config.dump_prefix);
            debug!("Dumping first '{}' bundle from {}", prefix, dir.display());

            let mut stdout = io::stdout().lock();
            BundleDumper::new()
                .with_sorted(config.sorted || sorted)
                .dump(&dir, &prefix, &mut stdout)?;
        }
    }

    Ok(())
}
