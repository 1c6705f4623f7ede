//! Slash command handling (/join, /leave, /name, etc.).

use crossbeam_channel::Sender;

use crate::config::ConnectionConfig;
use crate::protocol::BackendAction;
use crate::state::{ClientState, SYSTEM_ROOM};
use crate::validation;

/// Outcome of feeding input to the command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Input did not start with '/'; send it as a chat message.
    NotACommand,
    /// Input was a command and has been handled (clear the input field).
    Handled,
    /// The user asked to quit; the caller should close the window.
    Quit,
}

/// Handle user commands starting with '/'.
pub fn handle_user_command(
    message_input: &str,
    state: &mut ClientState,
    connection: &mut ConnectionConfig,
    action_tx: &Sender<BackendAction>,
) -> CommandResult {
    let s = message_input.trim();
    if !s.starts_with('/') {
        return CommandResult::NotACommand;
    }

    // Remove leading '/'
    let cmdline = s[1..].trim();
    let mut parts = cmdline.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();

    match cmd.as_str() {
        "join" | "j" => {
            if let Some(room) = parts.next() {
                match validation::validate_room_id(room) {
                    Ok(()) => {
                        connection.room = room.to_string();
                        state.ensure_room(room);
                        state.switch_to_room(room);
                        if state.connected {
                            let _ = action_tx.send(BackendAction::Join(room.to_string()));
                        } else {
                            let _ = action_tx.send(BackendAction::Connect {
                                server: connection.server.clone(),
                                room: room.to_string(),
                            });
                        }
                    }
                    Err(e) => state.log_line(e),
                }
            } else {
                state.log_line("Usage: /join <room>");
            }
        }
        "leave" | "l" => {
            if state.connected {
                let _ = action_tx.send(BackendAction::Disconnect);
            } else {
                state.log_line("Not connected");
            }
        }
        "name" | "n" => {
            if let Some(newname) = parts.next() {
                let rest: Vec<&str> = parts.collect();
                let full = if rest.is_empty() {
                    newname.to_string()
                } else {
                    format!("{} {}", newname, rest.join(" "))
                };
                match validation::validate_display_name(&full) {
                    Ok(()) => {
                        let old = state.display_name.clone();
                        state.display_name = full.trim().to_string();
                        state.log_line(format!(
                            "Now chatting as {} (was: {})",
                            state.display_name, old
                        ));
                    }
                    Err(e) => state.log_line(e),
                }
            } else {
                state.log_line("Usage: /name <newname>");
            }
        }
        "clear" => {
            let active = state.active_room.clone();
            if active == SYSTEM_ROOM {
                state.system_log.clear();
            } else if let Some(buffer) = state.rooms.get_mut(&active) {
                buffer.messages.clear();
            }
        }
        "quit" | "exit" => {
            if state.connected {
                let _ = action_tx.send(BackendAction::Disconnect);
            }
            return CommandResult::Quit;
        }
        "help" => {
            state.log_line("Supported commands: /join, /leave, /name, /clear, /quit, /help");
        }
        unknown => {
            state.log_line(format!("Unknown command: /{}", unknown));
        }
    }
    CommandResult::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_join_when_disconnected_connects() {
        let (tx, rx) = unbounded();
        let mut state = ClientState::new();
        let mut connection = ConnectionConfig::default();

        let result = handle_user_command("/join team-42", &mut state, &mut connection, &tx);
        assert_eq!(result, CommandResult::Handled);
        assert_eq!(connection.room, "team-42");
        assert_eq!(state.active_room, "team-42");
        match rx.try_recv().unwrap() {
            BackendAction::Connect { room, .. } => assert_eq!(room, "team-42"),
            other => panic!("expected Connect, got {:?}", other),
        }
    }

    #[test]
    fn test_join_when_connected_switches_channel() {
        let (tx, rx) = unbounded();
        let mut state = ClientState::new();
        state.connected = true;
        let mut connection = ConnectionConfig::default();

        handle_user_command("/join lobby", &mut state, &mut connection, &tx);
        match rx.try_recv().unwrap() {
            BackendAction::Join(room) => assert_eq!(room, "lobby"),
            other => panic!("expected Join, got {:?}", other),
        }
    }

    #[test]
    fn test_join_rejects_bad_room_id() {
        let (tx, rx) = unbounded();
        let mut state = ClientState::new();
        let mut connection = ConnectionConfig::default();

        handle_user_command("/join bad!room", &mut state, &mut connection, &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(connection.room, crate::config::DEFAULT_ROOM);
    }

    #[test]
    fn test_name_updates_display_name() {
        let (tx, _rx) = unbounded();
        let mut state = ClientState::new();
        state.display_name = "alice".into();
        let mut connection = ConnectionConfig::default();

        handle_user_command("/name Alice B", &mut state, &mut connection, &tx);
        assert_eq!(state.display_name, "Alice B");
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        let (tx, _rx) = unbounded();
        let mut state = ClientState::new();
        let mut connection = ConnectionConfig::default();

        assert_eq!(
            handle_user_command("hello", &mut state, &mut connection, &tx),
            CommandResult::NotACommand
        );
    }

    #[test]
    fn test_quit_disconnects() {
        let (tx, rx) = unbounded();
        let mut state = ClientState::new();
        state.connected = true;
        let mut connection = ConnectionConfig::default();

        let result = handle_user_command("/quit", &mut state, &mut connection, &tx);
        assert_eq!(result, CommandResult::Quit);
        assert!(matches!(rx.try_recv().unwrap(), BackendAction::Disconnect));
    }
}
