//! Local state - persist the tour flag and recent searches to .workpulse-state.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const STATE_FILENAME: &str = ".workpulse-state.json";
const MAX_RECENT_SEARCHES: usize = 5;

/// Small per-user state that survives between runs. Everything else is
/// rebuilt from scratch each session.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateFile {
    pub tour_completed: bool,
    pub recent_searches: Vec<String>,
}

/// Load state from the given directory (or create empty)
pub fn load_state(dir: &Path) -> StateFile {
    let path = dir.join(STATE_FILENAME);
    if let Ok(content) = fs::read_to_string(&path) {
        if let Ok(state) = serde_json::from_str::<StateFile>(&content) {
            return state;
        }
    }
    StateFile::default()
}

/// Save state to the given directory
pub fn save_state(dir: &Path, state: &StateFile) -> std::io::Result<()> {
    let path = dir.join(STATE_FILENAME);
    let content = serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string());
    fs::write(path, content)
}

impl StateFile {
    /// Record a search term as most recent. Repeated terms move to the
    /// front; the list never exceeds five entries, oldest evicted.
    pub fn record_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.recent_searches.retain(|t| t != term);
        self.recent_searches.insert(0, term.to_string());
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn complete_tour(&mut self) {
        self.tour_completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- record_search ---

    #[test]
    fn record_search_puts_newest_first() {
        let mut state = StateFile::default();
        state.record_search("overtime");
        state.record_search("vacancy");
        assert_eq!(state.recent_searches, vec!["vacancy", "overtime"]);
    }

    #[test]
    fn record_search_caps_at_five_and_evicts_oldest() {
        let mut state = StateFile::default();
        for term in ["a", "b", "c", "d", "e", "f"] {
            state.record_search(term);
        }
        assert_eq!(state.recent_searches, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn record_search_moves_repeat_to_front_without_duplicating() {
        let mut state = StateFile::default();
        state.record_search("overtime");
        state.record_search("vacancy");
        state.record_search("overtime");
        assert_eq!(state.recent_searches, vec!["overtime", "vacancy"]);
    }

    #[test]
    fn record_search_ignores_blank_terms() {
        let mut state = StateFile::default();
        state.record_search("   ");
        state.record_search("");
        assert!(state.recent_searches.is_empty());
    }

    // --- load_state / save_state roundtrip ---

    #[test]
    fn save_and_load_state_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = StateFile::default();
        state.complete_tour();
        state.record_search("sick hours");

        save_state(dir.path(), &state).unwrap();
        let loaded = load_state(dir.path());

        assert!(loaded.tour_completed);
        assert_eq!(loaded.recent_searches, vec!["sick hours"]);
    }

    #[test]
    fn load_state_returns_default_for_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_state(dir.path()), StateFile::default());
    }

    #[test]
    fn load_state_returns_default_for_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STATE_FILENAME), "not valid json {{{").unwrap();
        assert_eq!(load_state(dir.path()), StateFile::default());
    }

    #[test]
    fn state_serializes_camel_case_keys() {
        let mut state = StateFile::default();
        state.complete_tour();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"tourCompleted\":true"));
        assert!(json.contains("\"recentSearches\""));
    }
}
