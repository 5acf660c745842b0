//! Shell completion generation for pathhint
//!
//! Completion scripts come straight from the clap command definition, so
//! every flag and subcommand is covered without hand-written additions.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

use crate::cli::CliArgs;
use crate::error::{PathHintError, Result};

/// Print a shell completion script to stdout
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish, powershell, elvish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let script = completion_script(parse_shell(shell_name)?);
    let mut out = io::stdout();
    out.write_all(script.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the completion script for a shell
fn completion_script(shell: Shell) -> String {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, "pathhint", &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        _ => Err(PathHintError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish, powershell, elvish",
            shell_name
        ))),
    }
}
