//! Completion engine - the interactive key loop
//!
//! Reads keys from a [`Terminal`], threads a [`HintState`] through every key
//! transition and renders the typed buffer followed by the ghost suggestion.
//! Candidates come from a [`DirectoryLister`] through [`PathLister`].

use regex::Regex;
use tracing::trace;

use super::lister::{DirectoryLister, HostPlatform};
use super::listing::PathLister;
use super::navigation::Direction;
use super::state::HintState;
use crate::config::{HintColor, HintConfig, ListingConfig};
use crate::error::Result;
use crate::formatter::TableFormatter;
use crate::path_style::{PathStyle, classify_style, to_windows_style};
use crate::terminal::{Key, Terminal};

/// Default candidate count that triggers the confirmation prompt
pub const DEFAULT_CONFIRM_THRESHOLD: usize = 50;

/// Options for a single `read_line` call
#[derive(Debug, Clone, Default)]
pub struct ReadLineOptions {
    /// Text written before the input
    pub prompt: String,

    /// Style listed roots are shown in
    pub style: PathStyle,

    /// Pattern a typed character must match; `None` accepts everything
    pub accept_pattern: Option<Regex>,

    /// Color of the ghost suggestion
    pub hint_color: HintColor,
}

impl ReadLineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Restrict typed characters to those matching `pattern`
    ///
    /// # Errors
    /// Returns [`crate::error::PathHintError::Pattern`] if the pattern does not compile
    pub fn with_accept_pattern(mut self, pattern: &str) -> Result<Self> {
        self.accept_pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn with_hint_color(mut self, color: HintColor) -> Self {
        self.hint_color = color;
        self
    }

    /// Build options from the `[hint]` config section
    ///
    /// # Arguments
    /// * `config` - Hint configuration
    ///
    /// # Returns
    /// * `Result<Self>` - Options, or a pattern error
    pub fn from_config(config: &HintConfig) -> Result<Self> {
        Self::new()
            .with_prompt(config.prompt.clone())
            .with_style(config.style)
            .with_hint_color(config.color)
            .with_accept_pattern(&config.accept_pattern)
    }

    /// Whether a typed character goes into the buffer
    pub fn accepts(&self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match &self.accept_pattern {
            Some(pattern) => pattern.is_match(c.encode_utf8(&mut [0; 4])),
            None => true,
        }
    }
}

/// Interactive path-hint line editor
pub struct CompletionEngine<T: Terminal, L: DirectoryLister> {
    /// Key source and output sink
    terminal: T,

    /// Directory source for candidates
    lister: L,

    /// Platform paths are resolved on
    platform: HostPlatform,

    /// Candidate count that triggers the confirmation prompt
    confirm_threshold: usize,

    /// Grid used when candidates are printed
    table: TableFormatter,
}

impl<T: Terminal, L: DirectoryLister> CompletionEngine<T, L> {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `terminal` - Terminal collaborator
    /// * `lister` - Directory collaborator
    /// * `platform` - Host platform
    pub fn new(terminal: T, lister: L, platform: HostPlatform) -> Self {
        Self {
            terminal,
            lister,
            platform,
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            table: TableFormatter::new(),
        }
    }

    /// Apply the `[listing]` config section
    pub fn with_listing_config(mut self, config: &ListingConfig) -> Self {
        self.confirm_threshold = config.confirm_threshold;
        self.table = TableFormatter::new().with_padding(config.table_padding);
        self
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Read one line of input with path hints
    ///
    /// Blocks until Enter is pressed.
    ///
    /// # Arguments
    /// * `options` - Prompt, style, accept pattern and hint color
    ///
    /// # Returns
    /// * `Result<String>` - Typed line with any visible suggestion, or an
    ///   empty string when nothing was typed
    pub fn read_line(&mut self, options: &ReadLineOptions) -> Result<String> {
        if !options.prompt.is_empty() {
            self.terminal.write(&options.prompt)?;
        }

        let mut state = HintState::new();
        loop {
            let key = self.terminal.read_key()?;
            if key == Key::Enter {
                break;
            }
            state = self.step(state, key, options)?;
            self.render(&state, options)?;
        }

        self.terminal.clear_current_line()?;
        self.terminal
            .write_line(&format!("{}{}", options.prompt, state.display_line()))?;

        Ok(state.final_line())
    }

    /// Apply one key to the state
    ///
    /// Enter is handled by [`read_line`](Self::read_line) and leaves the state unchanged here.
    ///
    /// # Arguments
    /// * `state` - State before the key
    /// * `key` - Key pressed
    /// * `options` - Read options
    ///
    /// # Returns
    /// * `Result<HintState>` - State after the key
    pub fn step(
        &mut self,
        mut state: HintState,
        key: Key,
        options: &ReadLineOptions,
    ) -> Result<HintState> {
        match key {
            Key::Backspace | Key::Left => {
                state.pop_char();
                self.regenerate(&mut state, options)?;
            }
            Key::Right => {
                if let Some(c) = state.next_suggested_char() {
                    state.push_char(c);
                    self.regenerate(&mut state, options)?;
                }
            }
            Key::Tab => self.tab(&mut state, options)?,
            Key::Up => state.cycle(Direction::Up),
            Key::Down => state.cycle(Direction::Down),
            Key::Char(c) if options.accepts(c) => {
                state.push_char(c);
                if !state.suggestion.is_empty() && !state.suggestion.starts_with(&state.buffer) {
                    state.clear_suggestion();
                }
            }
            Key::Char(_) | Key::Enter | Key::Other => {}
        }

        state.refresh_suggestion();
        trace!(
            "{:?} -> buffer '{}', suggestion '{}', {} candidates",
            key,
            state.buffer,
            state.suggestion,
            state.candidate_count()
        );
        Ok(state)
    }

    /// Replace the candidates for the edited buffer
    ///
    /// No grid is printed here; only Tab shows the candidates.
    fn regenerate(&mut self, state: &mut HintState, options: &ReadLineOptions) -> Result<()> {
        let candidates = self.list(&state.buffer, options.style, false)?;
        state.set_candidates(candidates);
        if !state.suggestion_extends_buffer() {
            state.clear_suggestion();
        }
        Ok(())
    }

    fn tab(&mut self, state: &mut HintState, options: &ReadLineOptions) -> Result<()> {
        if !state.buffer.starts_with('/') {
            return Ok(());
        }

        let pending = !state.suggestion.is_empty();
        if !pending {
            let candidates = self.list(&state.buffer, options.style, true)?;
            state.set_candidates(candidates);
        }

        if let Some(only) = state.single_candidate().map(str::to_string) {
            state.buffer = only;
        } else if pending && state.candidate_count() > 1 {
            state.buffer = state.suggestion.clone();
        }

        if pending && self.suggestion_resolves(&state.suggestion) {
            state.clear_suggestion();
        }
        Ok(())
    }

    fn list(
        &mut self,
        input: &str,
        style: PathStyle,
        show_table: bool,
    ) -> Result<Option<Vec<String>>> {
        PathLister::new(
            &self.lister,
            self.platform,
            self.confirm_threshold,
            &self.table,
        )
        .list(input, style, &mut self.terminal, show_table)
    }

    /// Whether the suggestion names an existing directory on this host
    fn suggestion_resolves(&self, suggestion: &str) -> bool {
        let path = match (self.platform.native_style(), classify_style(suggestion)) {
            (PathStyle::Windows, PathStyle::Linux) => to_windows_style(suggestion),
            _ => suggestion.to_string(),
        };
        self.lister.directory_exists(&path)
    }

    /// Redraw the current line
    ///
    /// A suggestion extending the buffer is shown as a ghost tail after it.
    /// A browsed selection that does not extend it is painted in place of
    /// the buffer, since that is the line Enter returns.
    fn render(&mut self, state: &HintState, options: &ReadLineOptions) -> Result<()> {
        let style = options.hint_color.to_style();
        self.terminal.clear_current_line()?;

        if let Some(selection) = state.browsed_selection().filter(|_| !state.buffer.is_empty()) {
            if !options.prompt.is_empty() {
                self.terminal.write(&options.prompt)?;
            }
            return self.terminal.write_styled(selection, style);
        }

        self.terminal
            .write(&format!("{}{}", options.prompt, state.buffer))?;

        let tail = state.ghost_tail();
        if !state.buffer.is_empty() && !tail.is_empty() {
            self.terminal.write_styled(tail, style)?;
        }
        Ok(())
    }
}
