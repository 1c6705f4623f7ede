//! Wire format for the room channel.
//!
//! The server speaks JSON, one event per WebSocket text frame, tagged on
//! `"type"`:
//!
//! - `{"type":"add","id":...,"content":...,"user":...,"role":...}`
//! - `{"type":"update","id":...,"content":...,"user":...,"role":...}`
//! - `{"type":"all","messages":[...]}`
//!
//! Outbound traffic is a single shape: an `add` frame carrying a
//! client-generated id.

use serde::{Deserialize, Serialize};

/// Author role attached to every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message as it appears on the wire and in room buffers.
///
/// `id` is opaque and unique within a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub user: String,
    pub role: Role,
}

/// One parsed inbound (or outbound) room event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RoomEvent {
    /// Append a message, or replace it in place if the id is already present.
    Add {
        id: String,
        content: String,
        user: String,
        role: Role,
    },
    /// Replace the fields of an existing message; unknown ids are a no-op.
    Update {
        id: String,
        content: String,
        user: String,
        role: Role,
    },
    /// Full state: discard the local list and adopt this one verbatim.
    All { messages: Vec<ChatMessage> },
}

impl RoomEvent {
    /// Build an outbound `add` event from a locally composed message.
    pub fn add(message: ChatMessage) -> Self {
        RoomEvent::Add {
            id: message.id,
            content: message.content,
            user: message.user,
            role: message.role,
        }
    }

    /// Parse a raw text frame. Malformed frames are a boundary error the
    /// caller reports and drops; they never reach a room buffer.
    pub fn decode(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("malformed frame: {}", e))
    }

    /// Serialize for sending.
    pub fn encode(&self) -> String {
        // Safe expect: the event types contain only strings and enums
        serde_json::to_string(self).expect("room event serializes")
    }
}

/// Generate a fresh client-side message id (12 hex chars, unique enough
/// within a room's lifetime).
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Generate a random room id for the "new room" action.
pub fn new_room_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_add_frame() {
        let raw = r#"{"type":"add","id":"a1","content":"hi","user":"bob","role":"user"}"#;
        let event = RoomEvent::decode(raw).unwrap();
        assert_eq!(
            event,
            RoomEvent::Add {
                id: "a1".into(),
                content: "hi".into(),
                user: "bob".into(),
                role: Role::User,
            }
        );
    }

    #[test]
    fn test_decode_update_frame() {
        let raw = r#"{"type":"update","id":"a1","content":"hi!","user":"bob","role":"user"}"#;
        match RoomEvent::decode(raw).unwrap() {
            RoomEvent::Update { id, content, .. } => {
                assert_eq!(id, "a1");
                assert_eq!(content, "hi!");
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_all_frame() {
        let raw = r#"{"type":"all","messages":[
            {"id":"a","content":"one","user":"alice","role":"user"},
            {"id":"b","content":"two","user":"helper","role":"assistant"}
        ]}"#;
        match RoomEvent::decode(raw).unwrap() {
            RoomEvent::All { messages } => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0].id, "a");
                assert_eq!(messages[1].role, Role::Assistant);
            }
            other => panic!("expected all, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_round_trip() {
        let event = RoomEvent::add(ChatMessage {
            id: "x9".into(),
            content: "hello there".into(),
            user: "carol".into(),
            role: Role::User,
        });
        let decoded = RoomEvent::decode(&event.encode()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_malformed_frames_rejected() {
        // Not JSON at all
        assert!(RoomEvent::decode("not json").is_err());
        // Unknown tag
        assert!(RoomEvent::decode(r#"{"type":"delete","id":"a"}"#).is_err());
        // Missing field
        assert!(RoomEvent::decode(r#"{"type":"add","id":"a","content":"x"}"#).is_err());
        // Unknown role value
        assert!(
            RoomEvent::decode(
                r#"{"type":"add","id":"a","content":"x","user":"u","role":"robot"}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = new_message_id();
        let b = new_message_id();
        assert_eq!(a.len(), 12);
        assert_ne!(a, b);
        assert_eq!(new_room_id().len(), 8);
    }
}
