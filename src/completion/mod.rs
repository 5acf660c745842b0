//! Path completion for the interactive line editor
//!
//! This module contains the key loop and everything it needs to produce
//! candidates:
//! - `engine`: key handling, rendering and the public `read_line`
//! - `state`: the per-call buffer, candidates and suggestion
//! - `navigation`: cyclic up/down browsing
//! - `listing`: turning a typed path into candidate directories
//! - `lister`: the directory collaborator and its filesystem implementation
//!
//! # Example
//!
//! ```no_run
//! use pathhint::completion::{CompletionEngine, FsLister, HostPlatform, ReadLineOptions};
//! use pathhint::terminal::CrosstermTerminal;
//!
//! # fn main() -> pathhint::error::Result<()> {
//! let terminal = CrosstermTerminal::new()?;
//! let mut engine = CompletionEngine::new(terminal, FsLister, HostPlatform::current());
//! let line = engine.read_line(&ReadLineOptions::new().with_prompt("path> "))?;
//! # let _ = line;
//! # Ok(())
//! # }
//! ```

mod engine;
mod lister;
mod listing;
mod navigation;
mod state;

#[cfg(test)]
mod test_support;

pub use engine::{CompletionEngine, DEFAULT_CONFIRM_THRESHOLD, ReadLineOptions};
pub use lister::{DirectoryLister, FsLister, HostPlatform};
pub use listing::PathLister;
pub use navigation::{Direction, cycle_index};
pub use state::HintState;
