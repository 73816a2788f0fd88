use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Interested,
    Attended,
}

/// Per-event interest of the viewer. Events without an entry have no status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestState {
    statuses: HashMap<i64, InterestStatus>,
}

impl InterestState {
    pub fn status(&self, event_id: i64) -> Option<InterestStatus> {
        self.statuses.get(&event_id).copied()
    }

    pub fn is(&self, event_id: i64, status: InterestStatus) -> bool {
        self.status(event_id) == Some(status)
    }

    pub fn toggle_interested(&mut self, event_id: i64) {
        self.toggle(event_id, InterestStatus::Interested);
    }

    pub fn toggle_attended(&mut self, event_id: i64) {
        self.toggle(event_id, InterestStatus::Attended);
    }

    // Selecting a status replaces the other one, selecting it again clears it.
    fn toggle(&mut self, event_id: i64, status: InterestStatus) {
        if self.is(event_id, status) {
            self.statuses.remove(&event_id);
        } else {
            self.statuses.insert(event_id, status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling() {
        let mut state = InterestState::default();
        assert_eq!(state.status(7), None);

        state.toggle_interested(7);
        assert!(state.is(7, InterestStatus::Interested));

        state.toggle_attended(7);
        assert_eq!(state.status(7), Some(InterestStatus::Attended));

        state.toggle_attended(7);
        assert_eq!(state.status(7), None);
        assert_eq!(state.status(8), None);
    }
}
