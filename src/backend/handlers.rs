//! Backend action dispatch and inbound frame routing
//!
//! This module converts UI actions into socket traffic and inbound WebSocket
//! frames into GUI events. Malformed frames are reported and dropped here;
//! they never reach a room buffer.

use crossbeam_channel::Sender;
use futures_util::SinkExt;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::protocol::{BackendAction, GuiEvent};
use crate::wire::RoomEvent;

use super::connection::{self, RoomChannel};

/// Handle one action from the UI, possibly replacing the open channel.
pub async fn handle_backend_action(
    action: BackendAction,
    channel: &mut Option<RoomChannel>,
    event_tx: &Sender<GuiEvent>,
) {
    match action {
        BackendAction::Connect { server, room } => {
            connect(server, room, channel, event_tx).await;
        }

        BackendAction::Join(room) => {
            let Some(current) = channel.take() else {
                let _ = event_tx.send(GuiEvent::Error("Not connected".into()));
                return;
            };
            // One room per socket: switching rooms means reconnecting
            let server = current.server.clone();
            close_channel(current).await;
            let _ = event_tx.send(GuiEvent::Raw(format!("Switching to room {}...", room)));
            connect(server, room, channel, event_tx).await;
        }

        BackendAction::SendMessage(message) => {
            let Some(ch) = channel.as_mut() else {
                let _ = event_tx.send(GuiEvent::Error("Not connected".into()));
                return;
            };
            let frame = RoomEvent::add(message).encode();
            if let Err(e) = ch.stream.send(WsMessage::Text(frame)).await {
                let _ = event_tx.send(GuiEvent::Error(format!("Failed to send: {}", e)));
            }
        }

        BackendAction::Disconnect => {
            if let Some(current) = channel.take() {
                close_channel(current).await;
            }
            let _ = event_tx.send(GuiEvent::Disconnected("User disconnected".into()));
        }
    }
}

async fn connect(
    server: String,
    room: String,
    channel: &mut Option<RoomChannel>,
    event_tx: &Sender<GuiEvent>,
) {
    let _ = event_tx.send(GuiEvent::Raw(format!(
        "Connecting to {}...",
        connection::room_url(&server, &room)
    )));

    match connection::establish_connection(&server, &room).await {
        Ok(ch) => {
            *channel = Some(ch);
            let _ = event_tx.send(GuiEvent::Connected { room });
        }
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(e));
        }
    }
}

async fn close_channel(mut ch: RoomChannel) {
    // Best-effort close handshake; the server drops the subscription either way
    let _ = ch.stream.close(None).await;
}

/// Route one inbound frame. Returns false when the channel should be dropped.
pub fn handle_server_frame(frame: WsMessage, room: &str, event_tx: &Sender<GuiEvent>) -> bool {
    match frame {
        WsMessage::Text(raw) => {
            match RoomEvent::decode(&raw) {
                Ok(event) => {
                    let _ = event_tx.send(GuiEvent::Room {
                        room: room.to_string(),
                        event,
                    });
                }
                Err(e) => {
                    // Report and drop; a bad frame never reaches a buffer
                    log::warn!("dropping frame from room {}: {}", room, e);
                    let _ = event_tx.send(GuiEvent::Raw(format!("Ignored {}", e)));
                }
            }
            true
        }
        WsMessage::Close(_) => false,
        // Ping/pong are answered by tungstenite; binary frames are not part
        // of the protocol
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_text_frame_becomes_room_event() {
        let (tx, rx) = unbounded();
        let raw = r#"{"type":"add","id":"m1","content":"hi","user":"bob","role":"user"}"#;

        assert!(handle_server_frame(WsMessage::Text(raw.into()), "lobby", &tx));
        match rx.try_recv().unwrap() {
            GuiEvent::Room { room, event } => {
                assert_eq!(room, "lobby");
                assert!(matches!(event, RoomEvent::Add { .. }));
            }
            other => panic!("expected Room event, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_frame_is_reported_and_dropped() {
        let (tx, rx) = unbounded();

        assert!(handle_server_frame(
            WsMessage::Text("{not json".into()),
            "lobby",
            &tx
        ));
        match rx.try_recv().unwrap() {
            GuiEvent::Raw(line) => assert!(line.contains("malformed")),
            other => panic!("expected Raw log line, got {:?}", other),
        }
        // Nothing else queued: the frame never reaches a buffer
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_close_frame_drops_channel() {
        let (tx, _rx) = unbounded();
        assert!(!handle_server_frame(WsMessage::Close(None), "lobby", &tx));
    }
}
