//! Search suggestion state with latest-wins ordering.
//!
//! # Design
//! - Every issued query takes a fresh sequence number; results are applied
//!   only when they carry the newest number, so a slow earlier request can
//!   never overwrite a faster later one.
//! - Blank input clears suggestions and invalidates anything in flight.

use marquee_api_models::MovieSummary;

/// Delay between the last keystroke and the suggestion request.
pub const SUGGESTION_DEBOUNCE_MS: u32 = 300;
/// Maximum number of suggestions shown.
pub const MAX_SUGGESTIONS: usize = 8;

/// Handle for one issued suggestion query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    /// Trimmed query text to send upstream.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Suggestion dropdown state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuggestionState {
    latest: u64,
    query: String,
    suggestions: Vec<MovieSummary>,
    pending: bool,
}

impl SuggestionState {
    /// Register a new query. Returns `None` for blank input after clearing.
    pub fn issue(&mut self, raw: &str) -> Option<SearchTicket> {
        let query = raw.trim();
        if query.is_empty() {
            self.clear();
            return None;
        }
        self.latest += 1;
        self.query = query.to_string();
        self.pending = true;
        Some(SearchTicket {
            seq: self.latest,
            query: self.query.clone(),
        })
    }

    /// Apply results for `ticket`. Stale results are dropped and `false` returned.
    pub fn resolve(&mut self, ticket: &SearchTicket, mut results: Vec<MovieSummary>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(query = ticket.query(), "dropping stale suggestions");
            return false;
        }
        results.truncate(MAX_SUGGESTIONS);
        self.suggestions = results;
        self.pending = false;
        true
    }

    /// Empty the dropdown and invalidate in-flight queries.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.query.clear();
        self.suggestions.clear();
        self.pending = false;
    }

    /// Whether `ticket` is the most recently issued query.
    #[must_use]
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Query the current suggestions belong to.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Suggestions to display.
    #[must_use]
    pub fn suggestions(&self) -> &[MovieSummary] {
        &self.suggestions
    }

    /// Whether a request for the current query is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Close the dropdown after a pick: drop the pending debounce timer so it
/// cannot re-issue the query, then clear the suggestions.
pub fn dismiss<T>(pending: &mut Option<T>, state: &mut SuggestionState) {
    pending.take();
    state.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(prefix: &str, count: u64) -> Vec<MovieSummary> {
        (1..=count)
            .map(|id| MovieSummary {
                id,
                title: format!("{prefix} {id}"),
                ..MovieSummary::default()
            })
            .collect()
    }

    #[test]
    fn later_query_wins_when_earlier_arrives_last() {
        let mut state = SuggestionState::default();
        let first = state.issue("al").expect("ticket");
        let second = state.issue("alien").expect("ticket");

        assert!(state.resolve(&second, results("alien", 2)));
        assert!(!state.resolve(&first, results("al", 3)));

        assert_eq!(state.suggestions()[0].title, "alien 1");
        assert_eq!(state.query(), "alien");
        assert!(!state.is_pending());
    }

    #[test]
    fn blank_input_clears_and_invalidates() {
        let mut state = SuggestionState::default();
        let ticket = state.issue("heat").expect("ticket");
        assert!(state.issue("   ").is_none());
        assert!(!state.resolve(&ticket, results("heat", 1)));
        assert!(state.suggestions().is_empty());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn suggestions_are_capped() {
        let mut state = SuggestionState::default();
        let ticket = state.issue(" matrix ").expect("ticket");
        assert_eq!(ticket.query(), "matrix");
        state.resolve(&ticket, results("matrix", 20));
        assert_eq!(state.suggestions().len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn dismiss_drops_pending_debounce() {
        use std::rc::Rc;

        let handle = Rc::new(());
        let mut pending = Some(Rc::clone(&handle));
        let mut state = SuggestionState::default();
        let ticket = state.issue("alien").expect("ticket");

        dismiss(&mut pending, &mut state);

        assert!(pending.is_none());
        assert_eq!(Rc::strong_count(&handle), 1);
        assert!(!state.resolve(&ticket, results("alien", 1)));
        assert_eq!(state.query(), "");
    }
}
