//! Core application state, separated from UI logic.
//!
//! `ClientState` holds all data that represents the chat session: room
//! buffers, the display name, connection status, etc. This separation allows
//! UI components to receive state as a parameter rather than owning it.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Local;

use crate::buffer::RoomBuffer;
use crate::logging::Logger;

/// Name of the pseudo-room that shows the system log.
pub const SYSTEM_ROOM: &str = "system";

/// Cap on retained system log lines.
const MAX_SYSTEM_LOG_LINES: usize = 500;

/// Core application state for the chat client.
///
/// This struct contains all session data, separated from UI concerns.
/// It is owned by `ParleyApp` and passed to UI components as needed.
#[derive(Default)]
pub struct ClientState {
    /// Whether a room channel is currently open.
    pub connected: bool,

    /// Message buffers keyed by room id.
    pub rooms: HashMap<String, RoomBuffer>,

    /// Ordered list of room ids (for sidebar display).
    pub rooms_order: Vec<String>,

    /// Currently active/visible room.
    pub active_room: String,

    /// Display name chosen on the name-entry screen. Empty until set; the
    /// chat screen is gated on this.
    pub display_name: String,

    /// System log messages (shown in the system pseudo-room).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,

    /// Transcript logger for persisting messages to disk.
    pub logger: Option<Logger>,
}

impl ClientState {
    /// Create a new ClientState with default values.
    pub fn new() -> Self {
        let mut state = Self {
            connected: false,
            rooms: HashMap::new(),
            rooms_order: vec![SYSTEM_ROOM.into()],
            active_room: SYSTEM_ROOM.into(),
            display_name: String::new(),
            system_log: vec!["Welcome to Parley!".into()],
            status_messages: Vec::new(),
            logger: Logger::new().ok(),
        };

        // Create the system pseudo-room
        state.rooms.insert(SYSTEM_ROOM.into(), RoomBuffer::new());

        state
    }

    /// Get a mutable reference to a room buffer, creating it if needed.
    pub fn ensure_room(&mut self, room: &str) -> &mut RoomBuffer {
        if !self.rooms.contains_key(room) {
            self.rooms.insert(room.to_string(), RoomBuffer::new());
            self.rooms_order.push(room.to_string());
        }
        // Safe expect: we just ensured the key exists above
        self.rooms.get_mut(room).expect("room exists after insertion")
    }

    /// Append a timestamped line to the system log, keeping it bounded.
    pub fn log_line(&mut self, line: impl Into<String>) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line.into()));
        if self.system_log.len() > MAX_SYSTEM_LOG_LINES {
            self.system_log.remove(0);
        }
    }

    /// Show a status toast (auto-expires via `purge_old_status_messages`).
    pub fn toast(&mut self, text: impl Into<String>) {
        self.status_messages.push((text.into(), Instant::now()));
    }

    /// Switch to the next room in order.
    pub fn next_room(&mut self) {
        if let Some(current_idx) = self.rooms_order.iter().position(|r| r == &self.active_room) {
            let next_idx = (current_idx + 1) % self.rooms_order.len();
            if let Some(next_room) = self.rooms_order.get(next_idx) {
                self.active_room = next_room.clone();
                if let Some(buffer) = self.rooms.get_mut(next_room) {
                    buffer.clear_unread();
                }
            }
        }
    }

    /// Switch to the previous room in order.
    pub fn prev_room(&mut self) {
        if let Some(current_idx) = self.rooms_order.iter().position(|r| r == &self.active_room) {
            let prev_idx = if current_idx == 0 {
                self.rooms_order.len() - 1
            } else {
                current_idx - 1
            };
            if let Some(prev_room) = self.rooms_order.get(prev_idx) {
                self.active_room = prev_room.clone();
                if let Some(buffer) = self.rooms.get_mut(prev_room) {
                    buffer.clear_unread();
                }
            }
        }
    }

    /// Switch to a specific room by id.
    pub fn switch_to_room(&mut self, room: &str) {
        if self.rooms.contains_key(room) {
            self.active_room = room.to_string();
            if let Some(buffer) = self.rooms.get_mut(room) {
                buffer.clear_unread();
            }
        }
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_state_new() {
        let state = ClientState::new();
        assert!(!state.connected);
        assert!(state.rooms.contains_key(SYSTEM_ROOM));
        assert_eq!(state.active_room, SYSTEM_ROOM);
        assert_eq!(state.rooms_order, vec![SYSTEM_ROOM.to_string()]);
        assert!(state.display_name.is_empty());
    }

    #[test]
    fn test_ensure_room() {
        let mut state = ClientState::new();
        state.ensure_room("lobby");
        assert!(state.rooms.contains_key("lobby"));
        assert!(state.rooms_order.contains(&"lobby".to_string()));

        // Idempotent: no duplicate order entry
        state.ensure_room("lobby");
        assert_eq!(
            state.rooms_order.iter().filter(|r| *r == "lobby").count(),
            1
        );
    }

    #[test]
    fn test_next_prev_room() {
        let mut state = ClientState::new();
        state.ensure_room("alpha");
        state.ensure_room("beta");

        assert_eq!(state.active_room, SYSTEM_ROOM);
        state.next_room();
        assert_eq!(state.active_room, "alpha");
        state.next_room();
        assert_eq!(state.active_room, "beta");
        state.next_room();
        assert_eq!(state.active_room, SYSTEM_ROOM); // wrap around

        state.prev_room();
        assert_eq!(state.active_room, "beta");
    }

    #[test]
    fn test_switch_to_room() {
        let mut state = ClientState::new();
        state.ensure_room("lobby");
        state.ensure_room("dev");
        if let Some(buf) = state.rooms.get_mut("dev") {
            buf.unread_count = 2;
        }

        state.switch_to_room("dev");
        assert_eq!(state.active_room, "dev");
        assert_eq!(state.rooms.get("dev").unwrap().unread_count, 0);

        // Switching to a non-existent room does nothing
        state.switch_to_room("nowhere");
        assert_eq!(state.active_room, "dev");
    }

    #[test]
    fn test_log_line_is_bounded() {
        let mut state = ClientState::new();
        for i in 0..(MAX_SYSTEM_LOG_LINES + 20) {
            state.log_line(format!("line {}", i));
        }
        assert_eq!(state.system_log.len(), MAX_SYSTEM_LOG_LINES);
    }
}
