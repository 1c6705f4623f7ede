//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::ui;
use super::ParleyApp;

impl eframe::App for ParleyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process network events
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));

        // Until a display name is chosen, only the name gate renders
        if self.state.display_name.is_empty() {
            self.render_name_gate(ctx);
            return;
        }

        // Global keyboard shortcuts (work even when input doesn't have focus)
        ctx.input(|i| {
            // Ctrl+N: Next room
            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                self.state.next_room();
            }
            // Ctrl+P: Previous room
            if i.modifiers.ctrl && i.key_pressed(egui::Key::P) {
                self.state.prev_room();
            }
            // Ctrl+B: Toggle room list
            if i.modifiers.ctrl && i.key_pressed(egui::Key::B) {
                self.show_room_list = !self.show_room_list;
            }
        });

        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        // Top: server/room connection bar
        self.render_connection_bar(ctx);

        // Left panel: room list
        if self.show_room_list {
            self.render_room_list(ctx);
        }

        // Bottom panel: message input
        self.render_input_panel(ctx);

        // Central panel: messages (or the system log)
        self.render_central_panel(ctx);

        // Status toasts over everything else
        ui::panels::render_toasts(ctx, &self.state.status_messages);
    }
}
