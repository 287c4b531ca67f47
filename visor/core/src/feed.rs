//! Feed Mode Selection
//!
//! Decides what the shared feed region shows. The feed is a single region
//! that carries either the startup headlines or the current search session,
//! and exactly one of its three modes is active at any moment.
//!
//! Selection is a pure function of the search session, so a surface and the
//! core can never disagree about what the feed shows.

use crate::state::SearchSession;

/// What the feed region is currently showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedMode {
    /// A query is in flight
    Querying,
    /// A settled search result, success or failure text
    SearchResult,
    /// No search activity, show the startup headlines
    Headlines,
}

impl FeedMode {
    /// Select the mode for a search session
    ///
    /// Priority order: an in-flight query always wins, then a settled
    /// result, then headlines. Headlines are never shown alongside search
    /// output.
    #[must_use]
    pub fn select(session: &SearchSession) -> Self {
        if session.is_pending() {
            Self::Querying
        } else if session.result_text.is_some() {
            Self::SearchResult
        } else {
            Self::Headlines
        }
    }

    /// Short label for the feed header
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Querying => "QUERYING",
            Self::SearchResult => "SEARCH RESULT",
            Self::Headlines => "DATA FEED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_idle_session_selects_headlines() {
        assert_eq!(FeedMode::select(&SearchSession::idle()), FeedMode::Headlines);
    }

    #[test]
    fn test_pending_session_selects_querying() {
        let session = SearchSession::begin("net status");
        assert_eq!(FeedMode::select(&session), FeedMode::Querying);
    }

    #[test]
    fn test_resolved_session_selects_search_result() {
        let mut session = SearchSession::begin("net status");
        session.resolve("All systems nominal.".to_string(), Vec::new());
        assert_eq!(FeedMode::select(&session), FeedMode::SearchResult);
    }

    #[test]
    fn test_failed_session_still_selects_search_result() {
        let mut session = SearchSession::begin("net status");
        session.fail();
        assert_eq!(FeedMode::select(&session), FeedMode::SearchResult);
    }

    #[test]
    fn test_cleared_session_returns_to_headlines() {
        // Clearing resets the session even though headlines stayed populated
        // the whole time.
        let session = SearchSession::idle();
        assert_eq!(FeedMode::select(&session), FeedMode::Headlines);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FeedMode::Headlines.label(), "DATA FEED");
        assert_eq!(FeedMode::Querying.label(), "QUERYING");
    }
}
