use crate::wire::{ChatMessage, RoomEvent};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Connect to a room channel on a chat server
    Connect { server: String, room: String },
    /// Switch the channel to another room on the same server
    Join(String),
    /// Send a locally composed message to the current room
    SendMessage(ChatMessage),
    /// Disconnect from the server
    Disconnect,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Channel to a room is open
    Connected { room: String },
    /// Disconnected from the server
    Disconnected(String),
    /// Connection or send error
    Error(String),
    /// One parsed room event to reconcile into the room's buffer
    Room { room: String, event: RoomEvent },
    /// Diagnostic line for the system log
    Raw(String),
}
