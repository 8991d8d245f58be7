// Content region state - what the central panel currently shows

use chrono::{DateTime, Local};

/// Per-navigation state machine: Idle -> Loading -> { Displayed, Failed }.
/// Both terminal phases yield to the next navigation request.
#[derive(Clone, Debug)]
pub enum RegionPhase {
    /// Rest state before anything has been requested.
    Idle,
    /// Fetch in flight, placeholder shown.
    Loading { view_id: String },
    /// Fragment markup held verbatim, exactly as fetched.
    Displayed {
        view_id: String,
        resource: String,
        markup: String,
        bytes: u64,
        loaded_at: DateTime<Local>,
    },
    /// Error placeholder shown. No partial-injection state exists;
    /// replacement is all-or-nothing.
    Failed { message: String },
}

pub struct ContentRegion {
    pub phase: RegionPhase,
    reset_scroll: bool,
}

impl ContentRegion {
    pub fn new() -> Self {
        Self {
            phase: RegionPhase::Idle,
            reset_scroll: false,
        }
    }

    pub fn show_loading(&mut self, view_id: &str) {
        self.phase = RegionPhase::Loading {
            view_id: view_id.to_string(),
        };
    }

    /// Full replace of the region content with fetched markup.
    pub fn inject(&mut self, view_id: &str, resource: &str, markup: String) {
        let bytes = markup.len() as u64;
        self.phase = RegionPhase::Displayed {
            view_id: view_id.to_string(),
            resource: resource.to_string(),
            markup,
            bytes,
            loaded_at: Local::now(),
        };
        self.reset_scroll = true;
    }

    pub fn show_error(&mut self, message: String) {
        self.phase = RegionPhase::Failed { message };
    }

    /// View id currently displayed, if any.
    pub fn displayed_view(&self) -> Option<&str> {
        match &self.phase {
            RegionPhase::Displayed { view_id, .. } => Some(view_id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RegionPhase::Loading { .. })
    }

    /// One-shot flag: true exactly once after fresh content is injected.
    pub fn take_scroll_reset(&mut self) -> bool {
        let reset = self.reset_scroll;
        self.reset_scroll = false;
        reset
    }
}
