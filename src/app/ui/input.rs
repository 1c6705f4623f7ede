//! Message input panel with history and name completion

use chrono::Local;
use eframe::egui;

use crate::app::ParleyApp;
use crate::commands::{self, CommandResult};
use crate::logging::LogEntry;
use crate::protocol::BackendAction;
use crate::state::SYSTEM_ROOM;
use crate::validation;
use crate::wire::{new_message_id, ChatMessage, Role};

impl ParleyApp {
    /// Render the input panel at the bottom of the window.
    /// Returns true if a message or command was submitted this frame.
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) -> bool {
        let mut submitted = false;

        egui::TopBottomPanel::bottom("input_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let hint = format!("Hello {}! Type a message...", self.state.display_name);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input.message_input)
                        .desired_width(ui.available_width() - 70.0)
                        .hint_text(hint),
                );

                // Typing invalidates any in-flight completion cycling
                if response.changed() {
                    self.input.reset_completion();
                }

                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                // Input history navigation
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                    if let Some(text) = self.input.history_back() {
                        self.input.message_input = text;
                    }
                }
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                    if let Some(text) = self.input.history_forward() {
                        self.input.message_input = text;
                    }
                }

                // Tab completes sender names from the active room;
                // Shift+Tab cycles backward
                let tab_pressed =
                    response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Tab));
                if tab_pressed {
                    let shift = ui.input(|i| i.modifiers.shift);
                    self.complete_name(if shift { -1 } else { 1 });
                }

                let send_clicked = ui.button("Send").clicked();

                if enter_pressed || send_clicked {
                    submitted = self.submit_input(ctx);
                    if submitted {
                        response.request_focus();
                    }
                }
            });
            ui.add_space(6.0);
        });

        submitted
    }

    /// Splice the next completion candidate over the last word of the input.
    fn complete_name(&mut self, dir: isize) {
        if self.input.completions.is_empty() {
            let (start, end) = self.input.current_last_word_bounds();
            let prefix = self.input.message_input[start..end].to_string();
            let candidates = match self.state.rooms.get(&self.state.active_room) {
                Some(buffer) => self.input.collect_completions(&prefix, buffer),
                None => Vec::new(),
            };
            self.input.completions = candidates;
        }
        if let Some(candidate) = self.input.cycle_completion(dir) {
            let (start, _) = self.input.current_last_word_bounds();
            self.input.message_input.truncate(start);
            self.input.message_input.push_str(&candidate);
        }
    }

    /// Handle a submitted line: slash command or chat message.
    fn submit_input(&mut self, ctx: &egui::Context) -> bool {
        let raw = self.input.message_input.trim().to_string();
        if raw.is_empty() {
            return false;
        }

        match commands::handle_user_command(
            &raw,
            &mut self.state,
            &mut self.connection,
            &self.action_tx,
        ) {
            CommandResult::Quit => {
                self.input.message_input.clear();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return true;
            }
            CommandResult::Handled => {
                self.input.push_history(&raw);
                self.input.message_input.clear();
                return true;
            }
            CommandResult::NotACommand => {}
        }

        if !self.state.connected {
            self.state
                .log_line("Not connected - press Connect or use /join <room>");
            return false;
        }
        let room = self.state.active_room.clone();
        if room == SYSTEM_ROOM {
            self.state.log_line("Pick a room before chatting");
            return false;
        }

        let content = validation::sanitize_message(&raw);
        if let Err(e) = validation::validate_message(&content) {
            self.state.log_line(e);
            return false;
        }

        let message = ChatMessage {
            id: new_message_id(),
            content,
            user: self.state.display_name.clone(),
            role: Role::User,
        };

        // Local echo; the server's add broadcast for this id reconciles
        // in place instead of duplicating
        self.state.ensure_room(&room).upsert(message.clone());

        if let Some(logger) = &self.state.logger {
            logger.log(LogEntry {
                server: self.connection.server.clone(),
                room,
                timestamp: Local::now().format("%H:%M:%S").to_string(),
                user: message.user.clone(),
                content: message.content.clone(),
            });
        }

        let _ = self.action_tx.send(BackendAction::SendMessage(message));

        self.input.push_history(&raw);
        self.input.message_input.clear();
        true
    }
}
