//! Backend main event loop bridging the UI channels and the room socket.

use crossbeam_channel::{Receiver, Sender};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::timeout;

use crate::protocol::{BackendAction, GuiEvent};

use super::connection::RoomChannel;
use super::handlers;

/// Run the backend event loop on a tokio runtime
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut channel: Option<RoomChannel> = None;

        loop {
            // Check for actions from the UI (non-blocking)
            while let Ok(action) = action_rx.try_recv() {
                handlers::handle_backend_action(action, &mut channel, &event_tx).await;
            }

            // Read from the socket (with short timeout so we can check for actions)
            if let Some(ref mut ch) = channel {
                match timeout(Duration::from_millis(50), ch.stream.next()).await {
                    Ok(Some(Ok(frame))) => {
                        if !handlers::handle_server_frame(frame, &ch.room, &event_tx) {
                            channel = None;
                            let _ = event_tx.send(GuiEvent::Disconnected(
                                "Channel closed by server".into(),
                            ));
                        }
                    }
                    Ok(Some(Err(e))) => {
                        let _ = event_tx.send(GuiEvent::Error(format!("Read error: {}", e)));
                        channel = None;
                        let _ = event_tx.send(GuiEvent::Disconnected("Read error".into()));
                    }
                    Ok(None) => {
                        // Stream ended without a close frame
                        channel = None;
                        let _ = event_tx.send(GuiEvent::Disconnected(
                            "Connection closed by server".into(),
                        ));
                    }
                    Err(_) => {
                        // Timeout - this is normal, just loop
                    }
                }
            } else {
                // No connection, sleep a bit to avoid busy-looping
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    });
}
