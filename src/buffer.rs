use crate::wire::{ChatMessage, RoomEvent};

/// Maximum messages to keep in a buffer before trimming
const MAX_BUFFER_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const BUFFER_TRIM_COUNT: usize = 500;

/// What applying an event did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A fresh id was appended to the end.
    Appended,
    /// An `add` for a known id replaced the entry at its existing position.
    ReplacedInPlace,
    /// An `update` replaced the fields of a known id.
    Updated,
    /// An `update` for an unknown id; nothing changed.
    Ignored,
    /// The whole list was swapped for server state.
    ReplacedAll,
}

/// Represents a single room's client-side view: the reconciled message list
/// plus unread bookkeeping.
///
/// Invariant: `id` is unique within `messages`; order is insertion order
/// except where an event replaces an entry in place.
#[derive(Default, Clone)]
pub struct RoomBuffer {
    pub messages: Vec<ChatMessage>,
    /// Number of unread messages
    pub unread_count: usize,
    /// Whether an unread message mentions the local display name
    pub has_mention: bool,
}

impl RoomBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one room event to the message list and report what happened.
    ///
    /// The contract mirrors the server's reconciliation rules: `add` is an
    /// upsert that preserves an existing entry's position, `update` touches
    /// exactly one entry (or nothing), `all` adopts server state verbatim.
    pub fn apply(&mut self, event: RoomEvent) -> Applied {
        match event {
            RoomEvent::Add {
                id,
                content,
                user,
                role,
            } => self.upsert(ChatMessage {
                id,
                content,
                user,
                role,
            }),
            RoomEvent::Update {
                id,
                content,
                user,
                role,
            } => self.update(ChatMessage {
                id,
                content,
                user,
                role,
            }),
            RoomEvent::All { messages } => {
                self.replace_all(messages);
                Applied::ReplacedAll
            }
        }
    }

    /// Append a message, or replace it at its current position if the id is
    /// already present.
    pub fn upsert(&mut self, msg: ChatMessage) -> Applied {
        if let Some(pos) = self.messages.iter().position(|m| m.id == msg.id) {
            self.messages[pos] = msg;
            return Applied::ReplacedInPlace;
        }
        self.messages.push(msg);
        // Trim old messages if the buffer gets too large
        if self.messages.len() > MAX_BUFFER_MESSAGES {
            self.messages.drain(0..BUFFER_TRIM_COUNT);
        }
        Applied::Appended
    }

    /// Replace the fields of the entry matching `msg.id`, preserving its
    /// position. Unknown ids are silently ignored.
    pub fn update(&mut self, msg: ChatMessage) -> Applied {
        match self.messages.iter().position(|m| m.id == msg.id) {
            Some(pos) => {
                self.messages[pos] = msg;
                Applied::Updated
            }
            None => Applied::Ignored,
        }
    }

    /// Discard the current list and adopt `messages` verbatim.
    pub fn replace_all(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn clear_unread(&mut self) {
        self.unread_count = 0;
        self.has_mention = false;
    }
}
