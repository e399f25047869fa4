//! Draft state for the "add speed" input

use shutter_core::{validate, SpeedEntry};

/// Controlled text field holding the uncommitted draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeedInputState {
    draft: String,
}

impl SpeedInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        validate(&self.draft)
    }

    /// Take the draft as an entry and reset the field.
    ///
    /// An invalid draft is left untouched and `None` is returned.
    pub fn submit(&mut self) -> Option<SpeedEntry> {
        let entry = SpeedEntry::parse(&self.draft)?;
        self.draft.clear();
        Some(entry)
    }
}
