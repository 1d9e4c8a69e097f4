/// Most recent prompts kept for recall, newest first.
pub const HISTORY_CAP: usize = 20;

#[derive(Debug, Default, Clone)]
pub struct PromptHistory {
    entries: Vec<String>,
}

impl PromptHistory {
    pub fn new() -> Self {
        PromptHistory::default()
    }

    /// Prepends a generated prompt, evicting the oldest past the cap.
    pub fn record(&mut self, prompt: impl Into<String>) {
        self.entries.insert(0, prompt.into());
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn recall(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
