//! Connection bar, room sidebar, toasts, and central panel rendering

use eframe::egui;
use std::time::Instant;

use super::messages;
use crate::app::ParleyApp;
use crate::protocol::BackendAction;
use crate::state::SYSTEM_ROOM;
use crate::wire::new_room_id;

impl ParleyApp {
    /// Render the top connection bar: server URL, room id, connect controls.
    pub(in crate::app) fn render_connection_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("connection_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Server");
                ui.add(
                    egui::TextEdit::singleline(&mut self.connection.server)
                        .desired_width(230.0)
                        .hint_text("wss://..."),
                );

                ui.separator();

                ui.label("Room");
                ui.add(
                    egui::TextEdit::singleline(&mut self.connection.room)
                        .desired_width(120.0)
                        .hint_text("room id"),
                );
                if ui
                    .button("🎲")
                    .on_hover_text("Generate a random room id")
                    .clicked()
                {
                    self.connection.room = new_room_id();
                }

                ui.separator();

                if self.state.connected {
                    if ui.button("Disconnect").clicked() {
                        let _ = self.action_tx.send(BackendAction::Disconnect);
                    }
                } else if ui.button("Connect").clicked() {
                    self.do_connect();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("🌓")
                        .on_hover_text("Toggle dark/light theme")
                        .clicked()
                    {
                        if self.theme == "light" {
                            self.theme = "dark".into();
                            ctx.set_visuals(egui::Visuals::dark());
                        } else {
                            self.theme = "light".into();
                            ctx.set_visuals(egui::Visuals::light());
                        }
                    }
                    ui.label(
                        egui::RichText::new(format!("as {}", self.state.display_name)).weak(),
                    );
                    let (dot, color) = if self.state.connected {
                        ("●", egui::Color32::from_rgb(100, 200, 100))
                    } else {
                        ("●", egui::Color32::from_rgb(200, 100, 100))
                    };
                    ui.colored_label(color, dot);
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Render the left room list panel with unread badges.
    pub(in crate::app) fn render_room_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("rooms_panel")
            .resizable(true)
            .default_width(170.0)
            .min_width(130.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("ROOMS")
                            .size(11.0)
                            .strong()
                            .color(egui::Color32::GRAY),
                    );
                });
                ui.add_space(6.0);

                let mut clicked_room: Option<String> = None;

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for room in &self.state.rooms_order {
                            let is_active = *room == self.state.active_room;
                            let label = if room == SYSTEM_ROOM {
                                "• system".to_string()
                            } else {
                                format!("# {}", room)
                            };

                            let mut text = egui::RichText::new(label);
                            if let Some(buffer) = self.state.rooms.get(room) {
                                if buffer.unread_count > 0 {
                                    text = text.strong();
                                }
                                if buffer.has_mention {
                                    text = text.color(egui::Color32::from_rgb(230, 180, 80));
                                }
                            }

                            let response = ui.selectable_label(is_active, text);
                            if response.clicked() {
                                clicked_room = Some(room.clone());
                            }
                            if let Some(buffer) = self.state.rooms.get(room) {
                                if buffer.unread_count > 0 {
                                    response.on_hover_text(format!(
                                        "{} unread",
                                        buffer.unread_count
                                    ));
                                }
                            }
                        }
                    });

                if let Some(room) = clicked_room {
                    self.state.switch_to_room(&room);
                }
            });
    }

    /// Render the central panel: the active room's messages, or the system log.
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.active_room == SYSTEM_ROOM {
                messages::render_system_log(ui, &self.state.system_log);
            } else if let Some(buffer) = self.state.rooms.get(&self.state.active_room) {
                messages::render_messages(ui, buffer, &self.state.display_name);
            }
        });
    }
}

/// Render auto-expiring status toasts in the bottom-right corner.
pub fn render_toasts(ctx: &egui::Context, status_messages: &[(String, Instant)]) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -48.0))
        .show(ctx, |ui| {
            for (text, _) in status_messages {
                egui::Frame::new()
                    .fill(ctx.style().visuals.extreme_bg_color)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(text);
                    });
                ui.add_space(4.0);
            }
        });
}
