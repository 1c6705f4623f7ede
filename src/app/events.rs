//! Event processing and reconciliation from the backend

use chrono::Local;

use super::ui::messages::contains_mention;
use super::ParleyApp;
use crate::buffer::Applied;
use crate::logging::LogEntry;
use crate::protocol::GuiEvent;
use crate::wire::RoomEvent;

impl ParleyApp {
    /// Drain all pending events from the backend.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.process_single_event(event);
        }
    }

    fn process_single_event(&mut self, event: GuiEvent) {
        match event {
            GuiEvent::Connected { room } => {
                self.state.connected = true;
                self.state.ensure_room(&room).clear_unread();
                self.state.active_room = room.clone();
                self.state.log_line(format!("✓ Joined room {}", room));
                self.state.toast(format!("Joined {}", room));
            }

            GuiEvent::Disconnected(reason) => {
                self.state.connected = false;
                self.state.log_line(format!("✗ Disconnected: {}", reason));
                self.state.toast("Disconnected");
            }

            GuiEvent::Error(msg) => {
                self.state.log_line(format!("⚠ Error: {}", msg));
                self.state.toast(format!("Error: {}", msg));
            }

            GuiEvent::Raw(line) => {
                self.state.log_line(line);
            }

            GuiEvent::Room { room, event } => {
                self.apply_room_event(room, event);
            }
        }
    }

    /// Reconcile one room event into its buffer, then do the unread/mention
    /// and transcript bookkeeping around it.
    fn apply_room_event(&mut self, room: String, event: RoomEvent) {
        let is_active = self.state.active_room == room;
        let name = self.state.display_name.clone();

        // Pull out what the side effects need before the event is consumed
        let incoming = match &event {
            RoomEvent::Add { content, user, .. } => Some((content.clone(), user.clone())),
            _ => None,
        };

        let applied = self.state.ensure_room(&room).apply(event);

        // Only genuinely new messages count as unread or hit the transcript;
        // in-place replacements and updates just refresh what is on screen.
        if applied != Applied::Appended {
            return;
        }
        let (content, user) = incoming.expect("appended implies an add event");
        let own_message = user == name;

        if !is_active && !own_message {
            if let Some(buffer) = self.state.rooms.get_mut(&room) {
                buffer.unread_count += 1;
                if contains_mention(&content, &name) {
                    buffer.has_mention = true;
                }
            }
        }

        // Own messages are logged at send time
        if !own_message {
            if let Some(logger) = &self.state.logger {
                logger.log(LogEntry {
                    server: self.connection.server.clone(),
                    room,
                    timestamp: Local::now().format("%H:%M:%S").to_string(),
                    user,
                    content,
                });
            }
        }
    }
}
