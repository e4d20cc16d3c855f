use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use lectern_config::Config;
use lectern_finder::Finder;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lectern", version, about = "Resolve scripture references into verse text")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "LECTERN_CONFIG")]
    config: Option<PathBuf>,
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the text of one or more references, e.g. "John 3:16-17 NKJV"
    Fetch {
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Show how references are understood, without fetching anything
    Parse {
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Check provider connectivity by fetching a sample verse
    Test(TestArgs),
    /// Download complete versions as JSON for offline use
    Download {
        /// Versions to download, e.g. kjv web
        versions: Vec<String>,
        /// Download every version with a configured source
        #[arg(long, conflicts_with = "versions")]
        all: bool,
    },
    /// List offered versions, their offline status and the cache size
    List,
    /// Remove cached passages
    ClearCache {
        /// Only remove passages whose TTL has run out
        #[arg(long)]
        expired: bool,
    },
    /// List the books of the canon
    Books,
    /// List offered versions
    Versions,
}

#[derive(Args)]
struct TestArgs {
    #[arg(long, default_value = "John")]
    book: String,
    #[arg(long, default_value_t = 3)]
    chapter: u16,
    #[arg(long, default_value_t = 16)]
    verse: u16,
    /// Defaults to the configured default version
    #[arg(long)]
    translation: Option<String>,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var("LECTERN_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(error = ?err, "configuration failed to load");
            eprintln!("error: {}", *err);
            return ExitCode::FAILURE;
        },
    };
    let finder = match Finder::from_config(&config).await {
        Ok(finder) => finder,
        Err(err) => {
            tracing::debug!(error = ?err, "finder failed to start");
            eprintln!("error: {}", *err);
            return ExitCode::FAILURE;
        },
    };

    let succeeded = match cli.command {
        Command::Fetch { references } => commands::fetch(&finder, &references).await,
        Command::Parse { references } => commands::parse(&finder, &references),
        Command::Test(args) => {
            let version = args.translation.unwrap_or_else(|| finder.default_version().to_string());
            commands::test(&finder, &args.book, args.chapter, args.verse, &version).await
        },
        Command::Download { versions, all } => {
            let versions = match all {
                true => config.download_sources.keys().cloned().collect(),
                false => versions,
            };
            commands::download(&finder, &versions).await
        },
        Command::List => commands::list(&finder).await,
        Command::ClearCache { expired } => commands::clear_cache(&finder, expired).await,
        Command::Books => commands::books(&finder),
        Command::Versions => commands::versions(&finder),
    };
    match succeeded {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    }
}
