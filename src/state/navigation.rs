// Session history - browser-style back/forward state keyed by view id

/// One history entry: the recorded state payload plus the visible location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// View id recorded when the entry was pushed. The launch entry carries
    /// no payload; consumers fall back to the location's `view` parameter.
    pub state: Option<String>,
    pub location: String,
}

pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl SessionHistory {
    /// History as it exists at launch: a single entry for the launch
    /// location, predating any recorded payload.
    pub fn new(launch_location: String) -> Self {
        Self {
            entries: vec![HistoryEntry {
                state: None,
                location: launch_location,
            }],
            index: 0,
        }
    }

    /// Push a new entry for a completed navigation.
    /// Removes any forward history, as the browser does.
    pub fn record(&mut self, view_id: &str, location: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            state: Some(view_id.to_string()),
            location,
        });
        self.index += 1;
    }

    /// Move back one entry and surface it, the popstate payload included.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if self.index > 0 {
            self.index -= 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    /// Move forward one entry and surface it.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_entry_has_no_payload() {
        let history = SessionHistory::new("?view=blog".to_string());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().state, None);
        assert_eq!(history.current().location, "?view=blog");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_record_appends_and_moves() {
        let mut history = SessionHistory::new(String::new());
        history.record("blog", "?view=blog".to_string());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().state.as_deref(), Some("blog"));
        assert!(history.can_go_back());
    }

    #[test]
    fn test_back_surfaces_previous_payload() {
        let mut history = SessionHistory::new(String::new());
        history.record("blog", "?view=blog".to_string());
        history.record("post-rag", "?view=post-rag".to_string());

        let entry = history.back().unwrap();
        assert_eq!(entry.state.as_deref(), Some("blog"));

        // Back to the launch entry: no payload, location speaks for it
        let entry = history.back().unwrap();
        assert_eq!(entry.state, None);
        assert!(history.back().is_none());
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = SessionHistory::new(String::new());
        history.record("blog", "?view=blog".to_string());
        history.back();
        let entry = history.forward().unwrap();
        assert_eq!(entry.state.as_deref(), Some("blog"));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_record_clears_forward_history() {
        let mut history = SessionHistory::new(String::new());
        history.record("blog", "?view=blog".to_string());
        history.record("sobremi", "?view=sobremi".to_string());
        history.back();
        history.record("contacto", "?view=contacto".to_string());

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().state.as_deref(), Some("contacto"));
        assert!(history.forward().is_none());
    }
}
