//! pathhint - read a line with inline directory hints
//!
//! Without a subcommand, one line is read interactively and printed to
//! stdout once Enter is pressed.
//!
//! # Usage
//!
//! ```bash
//! # Interactive read with a prompt
//! pathhint -p "cd> "
//!
//! # Convert a path between styles
//! pathhint convert 'C:\Users\me'
//! ```

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use pathhint::cli::CliInterface;
use pathhint::completion::{CompletionEngine, FsLister, HostPlatform};
use pathhint::config::LoggingConfig;
use pathhint::error::Result;
use pathhint::terminal::CrosstermTerminal;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "PATHHINT_LOG";

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or read one line interactively
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli.config().logging)?;

    if cli.handle_subcommand()? {
        return Ok(());
    }

    let line = run_interactive(&cli)?;
    println!("{}", line);
    Ok(())
}

/// Read one line with the effective options
fn run_interactive(cli: &CliInterface) -> Result<String> {
    let options = cli.read_line_options()?;
    let platform = HostPlatform::current();
    debug!("reading line on {:?} host, {} style", platform, options.style);

    // raw mode is released when the engine and its terminal drop
    let terminal = CrosstermTerminal::new()?;
    let mut engine = CompletionEngine::new(terminal, FsLister, platform)
        .with_listing_config(&cli.config().listing);
    engine.read_line(&options)
}

/// Initialize logging from the effective configuration
///
/// `PATHHINT_LOG` overrides the configured level. Logs go to stderr unless
/// a log file is configured.
///
/// # Arguments
/// * `config` - Logging configuration
fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::default()
            .add_directive(LevelFilter::from_level(config.level.to_tracing_level()).into())
    });

    let (writer, ansi) = match &config.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    if config.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }

    Ok(())
}
