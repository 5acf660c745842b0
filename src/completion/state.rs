//! Per-call line editing state
//!
//! One [`HintState`] lives for the duration of a single `read_line` call. The
//! engine takes it by value for every key and hands back the updated state,
//! so there is exactly one owner of the buffer, candidates and suggestion.

use super::navigation::{Direction, cycle_index};

/// Typed input, candidates and the active suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintState {
    /// Characters the user typed or explicitly accepted
    pub buffer: String,

    /// Candidates for the current buffer; `None` until a listing ran
    pub candidates: Option<Vec<String>>,

    /// Position used by up/down browsing
    pub cycle_index: usize,

    /// Currently suggested candidate; empty when there is none
    pub suggestion: String,
}

impl HintState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with a typed buffer and a candidate list
    ///
    /// # Arguments
    /// * `buffer` - Typed text
    /// * `candidates` - Candidate paths
    ///
    /// # Returns
    /// * `Self` - State without an active suggestion
    pub fn with_candidates(buffer: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            buffer: buffer.into(),
            candidates: Some(candidates),
            ..Self::default()
        }
    }

    /// Remove the last typed character; no-op on an empty buffer
    ///
    /// # Returns
    /// * `bool` - True if a character was removed
    pub fn pop_char(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Append a character to the buffer
    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Replace the candidate list and restart browsing from the top
    pub fn set_candidates(&mut self, candidates: Option<Vec<String>>) {
        self.candidates = candidates;
        self.cycle_index = 0;
    }

    /// Number of known candidates
    pub fn candidate_count(&self) -> usize {
        self.candidates.as_ref().map_or(0, Vec::len)
    }

    /// Only candidate, if the list has exactly one entry
    pub fn single_candidate(&self) -> Option<&str> {
        match self.candidates.as_deref() {
            Some([only]) => Some(only.as_str()),
            _ => None,
        }
    }

    /// Drop the active suggestion and reset browsing
    pub fn clear_suggestion(&mut self) {
        self.suggestion.clear();
        self.cycle_index = 0;
    }

    /// Whether the suggestion is longer than the buffer and starts with it
    pub fn suggestion_extends_buffer(&self) -> bool {
        self.suggestion.len() > self.buffer.len() && self.suggestion.starts_with(&self.buffer)
    }

    /// Character of the suggestion at the buffer's length
    ///
    /// `None` when the suggestion is not longer than the buffer. A browsed
    /// suggestion need not start with the buffer.
    pub fn next_suggested_char(&self) -> Option<char> {
        self.suggestion.chars().nth(self.buffer.chars().count())
    }

    /// Pick the first candidate extending the buffer, if no suggestion is active
    pub fn refresh_suggestion(&mut self) {
        if !self.suggestion.is_empty() {
            return;
        }

        let buffer = &self.buffer;
        self.suggestion = self
            .candidates
            .iter()
            .flatten()
            .find(|candidate| candidate.len() > buffer.len() && candidate.starts_with(buffer))
            .cloned()
            .unwrap_or_default();
    }

    /// Step through the candidates and make the selected one the suggestion
    ///
    /// Nothing happens when there are no candidates.
    pub fn cycle(&mut self, direction: Direction) {
        let Some(candidates) = self.candidates.as_ref() else {
            return;
        };

        let next = cycle_index(candidates.len(), self.cycle_index, direction);
        if let Some(candidate) = candidates.get(next) {
            self.cycle_index = next;
            self.suggestion = candidate.clone();
        }
    }

    /// Part of the suggestion shown after the buffer as ghost text
    pub fn ghost_tail(&self) -> &str {
        if self.suggestion_extends_buffer() {
            &self.suggestion[self.buffer.len()..]
        } else {
            ""
        }
    }

    /// Suggestion picked by browsing that does not extend the buffer
    ///
    /// Only returned while the buffer is not longer than the suggestion; it
    /// then replaces the buffer as the line that would be returned.
    pub fn browsed_selection(&self) -> Option<&str> {
        if self.suggestion.is_empty()
            || self.suggestion_extends_buffer()
            || self.buffer.chars().count() > self.suggestion.chars().count()
        {
            return None;
        }
        Some(&self.suggestion)
    }

    /// Line that Enter would return for a non-empty buffer
    ///
    /// The suggestion wins unless the buffer is longer than it.
    pub fn display_line(&self) -> String {
        match self.browsed_selection() {
            Some(selection) => selection.to_string(),
            None => format!("{}{}", self.buffer, self.ghost_tail()),
        }
    }

    /// Line handed back when input finishes
    ///
    /// An empty buffer never returns a leftover suggestion.
    pub fn final_line(&self) -> String {
        if self.buffer.is_empty() {
            String::new()
        } else {
            self.display_line()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_prefix_match_becomes_suggestion() {
        let mut state = HintState::with_candidates("/us", candidates(&["/usr", "/user"]));
        state.refresh_suggestion();

        assert_eq!(state.suggestion, "/usr");
        assert_eq!(state.ghost_tail(), "r");
        assert_eq!(state.display_line(), "/usr");
    }

    #[test]
    fn test_exact_match_is_not_suggested() {
        let mut state = HintState::with_candidates("/usr", candidates(&["/usr", "/var"]));
        state.refresh_suggestion();
        assert_eq!(state.suggestion, "");
        assert_eq!(state.display_line(), "/usr");
    }

    #[test]
    fn test_existing_suggestion_is_kept() {
        let mut state = HintState::with_candidates("/us", candidates(&["/usr", "/user"]));
        state.suggestion = "/user".to_string();
        state.refresh_suggestion();
        assert_eq!(state.suggestion, "/user");
    }

    #[test]
    fn test_no_candidates_no_suggestion() {
        let mut state = HintState::new();
        state.buffer = "/x".to_string();
        state.refresh_suggestion();
        assert_eq!(state.suggestion, "");
        assert_eq!(state.ghost_tail(), "");
    }

    #[test]
    fn test_pop_on_empty_buffer() {
        let mut state = HintState::new();
        assert!(!state.pop_char());
        assert_eq!(state.buffer, "");
    }

    #[test]
    fn test_next_suggested_char() {
        let mut state = HintState::with_candidates("/us", candidates(&["/usr"]));
        state.refresh_suggestion();
        assert_eq!(state.next_suggested_char(), Some('r'));

        state.push_char('r');
        assert_eq!(state.next_suggested_char(), None);
    }

    #[test]
    fn test_next_suggested_char_handles_multibyte() {
        let mut state = HintState::with_candidates("/caf", candidates(&["/café"]));
        state.refresh_suggestion();
        assert_eq!(state.next_suggested_char(), Some('é'));
    }

    #[test]
    fn test_cycle_sets_suggestion() {
        let mut state = HintState::with_candidates("/", candidates(&["/a", "/b", "/c"]));
        state.cycle(Direction::Up);
        assert_eq!(state.cycle_index, 2);
        assert_eq!(state.suggestion, "/c");

        state.cycle(Direction::Down);
        assert_eq!(state.cycle_index, 0);
        assert_eq!(state.suggestion, "/a");
    }

    #[test]
    fn test_cycle_without_candidates() {
        let mut state = HintState::new();
        state.cycle(Direction::Down);
        assert_eq!(state.cycle_index, 0);
        assert_eq!(state.suggestion, "");

        state.set_candidates(Some(Vec::new()));
        state.cycle(Direction::Up);
        assert_eq!(state.suggestion, "");
    }

    #[test]
    fn test_set_candidates_resets_index() {
        let mut state = HintState::with_candidates("/", candidates(&["/a", "/b"]));
        state.cycle(Direction::Down);
        assert_eq!(state.cycle_index, 1);

        state.set_candidates(None);
        assert_eq!(state.cycle_index, 0);
        assert_eq!(state.candidate_count(), 0);
    }

    #[test]
    fn test_browsed_suggestion_outside_prefix_is_selected() {
        let mut state = HintState::with_candidates("/us", candidates(&["/usr", "/var"]));
        state.cycle(Direction::Down);
        assert_eq!(state.suggestion, "/var");
        assert_eq!(state.ghost_tail(), "");
        assert_eq!(state.browsed_selection(), Some("/var"));
        assert_eq!(state.display_line(), "/var");
        assert_eq!(state.final_line(), "/var");
    }

    #[test]
    fn test_equal_length_selection_wins_over_buffer() {
        let mut state = HintState::with_candidates("/usx", candidates(&["/usr"]));
        state.suggestion = "/usr".to_string();
        assert_eq!(state.final_line(), "/usr");
        assert_eq!(state.next_suggested_char(), None);
    }

    #[test]
    fn test_longer_buffer_wins_over_selection() {
        let mut state = HintState::with_candidates("/usr/local", candidates(&["/var"]));
        state.suggestion = "/var".to_string();
        assert_eq!(state.browsed_selection(), None);
        assert_eq!(state.final_line(), "/usr/local");
    }

    #[test]
    fn test_next_char_of_browsed_selection() {
        let mut state = HintState::with_candidates("/ux", candidates(&["/user", "/usr"]));
        state.suggestion = "/usr".to_string();
        assert_eq!(state.next_suggested_char(), Some('r'));
    }

    #[test]
    fn test_final_line_on_empty_buffer() {
        let mut state = HintState::with_candidates("", candidates(&["/"]));
        state.refresh_suggestion();
        assert_eq!(state.suggestion, "/");
        assert_eq!(state.final_line(), "");
    }

    #[test]
    fn test_display_line_is_stable() {
        let mut state = HintState::with_candidates("/us", candidates(&["/usr"]));
        state.refresh_suggestion();
        assert_eq!(state.display_line(), state.display_line());
    }
}
