//! Input side of the location search: tracks the typed text and decides which
//! debounce timers may still dispatch and which responses may still be shown.

/// Handle of a scheduled search. Only the most recently issued one fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Text too short: drop candidates, no request.
    Clear,
    /// (Re)start the debounce timer for this handle.
    Schedule(Pending),
}

#[derive(Debug, Clone)]
pub struct SearchInput {
    text: String,
    generation: u64,
    min_chars: usize,
}

impl SearchInput {
    pub fn new(min_chars: usize) -> Self {
        Self {
            text: String::new(),
            generation: 0,
            min_chars,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn edit(&mut self, text: impl Into<String>) -> SearchEdit {
        self.text = text.into();
        self.generation += 1;

        if self.text.chars().count() < self.min_chars {
            SearchEdit::Clear
        } else {
            SearchEdit::Schedule(Pending {
                generation: self.generation,
            })
        }
    }

    /// Sets the text without scheduling anything, voiding pending timers.
    pub fn settle(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.generation += 1;
    }

    /// The query to send when a timer fires, if the timer is still current.
    pub fn fire(&self, pending: Pending) -> Option<String> {
        (pending.generation == self.generation && self.text.chars().count() >= self.min_chars)
            .then(|| self.text.clone())
    }

    /// Whether a response for `query` still matches what is typed.
    pub fn accepts(&self, query: &str) -> bool {
        self.text == query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_never_schedules() {
        let mut input = SearchInput::new(3);
        assert_eq!(input.edit("c"), SearchEdit::Clear);
        assert_eq!(input.edit("ca"), SearchEdit::Clear);
        // three code points, five bytes
        assert!(matches!(input.edit("çaé"), SearchEdit::Schedule(_)));
        assert_eq!(input.edit("çé"), SearchEdit::Clear);
    }

    #[test]
    fn only_last_keystroke_dispatches() {
        let mut input = SearchInput::new(3);
        let mut timers = Vec::new();
        for text in ["c", "ca", "caf", "cafe"] {
            if let SearchEdit::Schedule(pending) = input.edit(text) {
                timers.push(pending);
            }
        }

        let fired: Vec<String> = timers.into_iter().filter_map(|p| input.fire(p)).collect();
        assert_eq!(fired, vec!["cafe".to_owned()]);
    }

    #[test]
    fn stale_responses_are_rejected() {
        let mut input = SearchInput::new(3);
        input.edit("cafe");
        assert!(input.accepts("cafe"));

        input.edit("cafes");
        assert!(!input.accepts("cafe"));
    }

    #[test]
    fn settle_voids_pending_timer() {
        let mut input = SearchInput::new(3);
        let SearchEdit::Schedule(pending) = input.edit("central") else {
            panic!("expected a scheduled search");
        };
        input.settle("Central Park, New York");

        assert_eq!(input.fire(pending), None);
        assert_eq!(input.text(), "Central Park, New York");
        assert!(!input.accepts("central"));
    }
}
