//! Input state management for message composition, history, and name completion.
//!
//! This module separates input handling concerns from the main application
//! state so the input panel can work against a small, testable surface.

use crate::buffer::RoomBuffer;

/// Cap on remembered sent messages.
const MAX_HISTORY: usize = 100;

/// Manages all input-related state for the chat client.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent-message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,

    /// Name completion candidates
    pub completions: Vec<String>,

    /// Current completion index (for cycling through candidates)
    pub completion_index: Option<usize>,
}

impl InputState {
    /// Create a new InputState with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a sent message and reset navigation state.
    pub fn push_history(&mut self, text: &str) {
        if self.history.last().map(String::as_str) != Some(text) {
            self.history.push(text.to_string());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        self.history_pos = None;
        self.history_saved_input = None;
    }

    /// Step backwards through history (ArrowUp). Returns the text to show.
    pub fn history_back(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        match self.history_pos {
            None => {
                // Store current text to restore if the user navigates forward again
                self.history_saved_input = Some(self.message_input.clone());
                self.history_pos = Some(self.history.len() - 1);
            }
            Some(pos) if pos > 0 => {
                self.history_pos = Some(pos - 1);
            }
            Some(_) => {}
        }
        self.history_pos.and_then(|pos| self.history.get(pos).cloned())
    }

    /// Step forwards through history (ArrowDown). Returns the text to show,
    /// restoring the saved draft when walking off the end.
    pub fn history_forward(&mut self) -> Option<String> {
        let pos = self.history_pos?;
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.history.get(pos + 1).cloned()
        } else {
            // Exit history navigation
            self.history_pos = None;
            Some(self.history_saved_input.take().unwrap_or_default())
        }
    }

    /// Collect name-completion candidates: distinct senders in the active
    /// room whose name starts with `prefix` (case-insensitive). An `@` lead
    /// is kept on the completed text.
    pub fn collect_completions(&self, prefix: &str, buffer: &RoomBuffer) -> Vec<String> {
        let (lead, want) = match prefix.strip_prefix('@') {
            Some(rest) => ("@", rest),
            None => ("", prefix),
        };
        if want.is_empty() {
            return Vec::new();
        }
        let want_lower = want.to_lowercase();

        let mut matches: Vec<String> = Vec::new();
        for msg in &buffer.messages {
            if msg.user.to_lowercase().starts_with(&want_lower) {
                let candidate = format!("{}{}", lead, msg.user);
                if !matches.contains(&candidate) {
                    matches.push(candidate);
                }
            }
        }
        matches
    }

    /// Cycle through completion candidates; `dir` is +1 (Tab) or -1
    /// (Shift+Tab). Returns the candidate to splice in.
    pub fn cycle_completion(&mut self, dir: isize) -> Option<String> {
        if self.completions.is_empty() {
            return None;
        }
        let len = self.completions.len() as isize;
        let next = match self.completion_index {
            None => {
                if dir > 0 {
                    0
                } else {
                    len - 1
                }
            }
            Some(idx) => (idx as isize + dir).rem_euclid(len),
        };
        self.completion_index = Some(next as usize);
        self.completions.get(next as usize).cloned()
    }

    /// Reset completion cycling (called when the input text changes).
    pub fn reset_completion(&mut self) {
        self.completions.clear();
        self.completion_index = None;
    }

    /// Byte bounds of the last whitespace-separated word in the input.
    pub fn current_last_word_bounds(&self) -> (usize, usize) {
        let text = &self.message_input;
        let start = text
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        (start, text.len())
    }
}
