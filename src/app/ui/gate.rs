//! Name-entry screen shown before the chat UI.
//!
//! The chat screen is gated on a display name: until one is set, this is the
//! only thing the app renders. The submitted name is persisted immediately so
//! it survives future sessions.

use eframe::egui;

use crate::app::ParleyApp;
use crate::config::save_settings;
use crate::validation;

impl ParleyApp {
    pub(in crate::app) fn render_name_gate(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);

                ui.heading("Set Your Name");
                ui.add_space(4.0);
                ui.label("Please enter your desired name to join the chat.");
                ui.add_space(12.0);

                let response = ui.add_sized(
                    [260.0, 28.0],
                    egui::TextEdit::singleline(&mut self.name_input)
                        .hint_text("Enter your name"),
                );
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if let Some(error) = &self.name_error {
                    ui.add_space(6.0);
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
                }

                ui.add_space(10.0);
                if ui.button("Join Chat").clicked() || enter_pressed {
                    self.submit_name();
                }
            });
        });
    }

    fn submit_name(&mut self) {
        match validation::validate_display_name(&self.name_input) {
            Ok(()) => {
                self.state.display_name = self.name_input.trim().to_string();
                self.name_error = None;

                // Persist right away so the name is remembered even if the
                // session later exits uncleanly
                if let Err(e) = save_settings(&self.current_settings()) {
                    log::warn!("Failed to save settings: {}", e);
                }

                let name = self.state.display_name.clone();
                self.state.log_line(format!("Welcome, {}!", name));

                // Land the user in their last room
                self.do_connect();
            }
            Err(e) => {
                self.name_error = Some(e);
            }
        }
    }
}
