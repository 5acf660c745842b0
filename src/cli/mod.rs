//! Command-line interface for pathhint
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Merging CLI overrides into the effective configuration
//! - The `convert`, `completion` and `config` subcommands

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::completion::ReadLineOptions;
use crate::config::{Config, HintColor, LogLevel};
use crate::error::Result;
use crate::path_style::{PathStyle, classify_style, to_unix_style, to_windows_style};

/// Path-hinting line editor
#[derive(Parser, Debug)]
#[command(
    name = "pathhint",
    version,
    about = "Read a line with inline directory path hints",
    long_about = "An interactive line editor that suggests directory paths as ghost text.
Tab lists candidates, Up/Down browses them, Right accepts one character."
)]
pub struct CliArgs {
    /// Prompt written before the input
    #[arg(short = 'p', long, value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Style listed roots are shown in (windows, linux)
    #[arg(short = 's', long, value_name = "STYLE")]
    pub style: Option<PathStyle>,

    /// Regular expression a typed character must match
    #[arg(short = 'a', long = "accept", value_name = "REGEX")]
    pub accept: Option<String>,

    /// Color of the ghost suggestion (e.g. dark_gray, cyan)
    #[arg(long, value_name = "COLOR")]
    pub hint_color: Option<HintColor>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for pathhint
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a path between Windows and POSIX style
    Convert {
        /// Path to convert
        #[arg(value_name = "PATH")]
        path: String,

        /// Target style; defaults to the opposite of the path's style
        #[arg(long, value_name = "STYLE")]
        to: Option<PathStyle>,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// Convert a path to the requested style
///
/// # Arguments
/// * `path` - Path to convert
/// * `to` - Target style, or `None` for the opposite of the path's own style
///
/// # Returns
/// * `Result<String>` - Converted path
pub fn convert_path(path: &str, to: Option<PathStyle>) -> Result<String> {
    let target = to.unwrap_or_else(|| classify_style(path).opposite());
    match target {
        PathStyle::Windows => Ok(to_windows_style(path)),
        PathStyle::Linux => Ok(to_unix_style(path)?),
    }
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Options for the interactive read, built from the effective config
    ///
    /// # Returns
    /// * `Result<ReadLineOptions>` - Options, or a pattern error if the
    ///   accept pattern does not compile
    pub fn read_line_options(&self) -> Result<ReadLineOptions> {
        ReadLineOptions::from_config(&self.config.hint)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    /// * `args` - Parsed arguments
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_hint_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply hint-related CLI arguments to configuration
    fn apply_hint_args(config: &mut Config, args: &CliArgs) {
        if let Some(prompt) = &args.prompt {
            config.hint.prompt = prompt.clone();
        }

        if let Some(style) = args.style {
            config.hint.style = style;
        }

        if let Some(pattern) = &args.accept {
            config.hint.accept_pattern = pattern.clone();
        }

        if let Some(color) = args.hint_color {
            config.hint.color = color;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Convert { path, to }) => {
                println!("{}", convert_path(path, *to)?);
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle config subcommand
    ///
    /// Without flags the effective configuration is shown.
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::load_from_file(Some(path.as_path())) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("Configuration file: {}", self.config_path().display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Configuration file path (from args or default)
    fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["pathhint"]).unwrap();
        assert!(args.prompt.is_none());
        assert!(args.style.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args = CliArgs::try_parse_from([
            "pathhint",
            "-p",
            "dir> ",
            "-s",
            "windows",
            "--hint-color",
            "cyan",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.prompt.as_deref(), Some("dir> "));
        assert_eq!(args.style, Some(PathStyle::Windows));
        assert_eq!(args.hint_color, Some(HintColor::Cyan));
        assert!(args.quiet);
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        assert!(CliArgs::try_parse_from(["pathhint", "--style", "mac"]).is_err());
    }

    #[test]
    fn test_args_override_config() {
        let cli = interface(&["pathhint", "-p", "> ", "-s", "posix", "-a", "[a-z]", "-v"]);
        let config = cli.config();
        assert_eq!(config.hint.prompt, "> ");
        assert_eq!(config.hint.style, PathStyle::Linux);
        assert_eq!(config.hint.accept_pattern, "[a-z]");
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_logging_flag_precedence() {
        let cli = interface(&["pathhint", "--vv", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Trace);

        let cli = interface(&["pathhint", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);

        let cli = interface(&["pathhint"]);
        assert_eq!(cli.config().logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_read_line_options_from_args() {
        let cli = interface(&["pathhint", "-p", "$ ", "-a", "[0-9/]"]);
        let options = cli.read_line_options().unwrap();
        assert_eq!(options.prompt, "$ ");
        assert!(options.accepts('4'));
        assert!(!options.accepts('x'));
    }

    #[test]
    fn test_bad_accept_pattern_fails_options() {
        let cli = interface(&["pathhint", "-a", "("]);
        assert!(cli.read_line_options().is_err());
    }

    #[test]
    fn test_convert_subcommand_parsing() {
        let args = CliArgs::try_parse_from(["pathhint", "convert", "/c/tmp", "--to", "windows"])
            .unwrap();
        match args.command {
            Some(Commands::Convert { path, to }) => {
                assert_eq!(path, "/c/tmp");
                assert_eq!(to, Some(PathStyle::Windows));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_convert_path_defaults_to_opposite_style() {
        assert_eq!(convert_path("/c/tmp", None).unwrap(), "C:\\tmp");
        assert_eq!(convert_path("C:\\tmp", None).unwrap(), "/c/tmp");
    }

    #[test]
    fn test_convert_path_explicit_target() {
        assert_eq!(
            convert_path("D:\\Users\\me", Some(PathStyle::Linux)).unwrap(),
            "/d/Users/me"
        );
        assert!(convert_path("A:\\", Some(PathStyle::Linux)).is_err());
    }

    #[test]
    fn test_config_subcommand_parsing() {
        let args = CliArgs::try_parse_from(["pathhint", "config", "--validate"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Config {
                show: false,
                validate: true
            })
        ));
    }
}
