//! Message list rendering and text helpers.

use eframe::egui::{self, Color32};

use crate::buffer::RoomBuffer;
use crate::wire::{ChatMessage, Role};

/// Sender-column color for our own messages.
const OWN_NAME_COLOR: Color32 = Color32::from_rgb(110, 170, 255);
/// Sender-column color for assistant messages.
const ASSISTANT_NAME_COLOR: Color32 = Color32::from_rgb(170, 130, 240);
/// Sender-column color for everyone else.
const OTHER_NAME_COLOR: Color32 = Color32::from_rgb(140, 200, 140);
/// Background tint for messages that mention the local name.
const MENTION_BG: Color32 = Color32::from_rgba_premultiplied(70, 60, 20, 60);

/// Render the message list of a room.
pub fn render_messages(ui: &mut egui::Ui, buffer: &RoomBuffer, display_name: &str) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for message in &buffer.messages {
                render_message_row(ui, message, display_name);
            }
            ui.add_space(8.0);
        });
}

/// Render the system log as the pseudo-room's content.
pub fn render_system_log(ui: &mut egui::Ui, system_log: &[String]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for line in system_log {
                ui.horizontal(|ui| {
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new(line).size(13.0).weak());
                });
                ui.add_space(2.0);
            }
            ui.add_space(8.0);
        });
}

fn render_message_row(ui: &mut egui::Ui, message: &ChatMessage, display_name: &str) {
    let own = message.user == display_name;
    let mentioned = !own && contains_mention(&message.content, display_name);

    let frame = if mentioned {
        egui::Frame::new()
            .fill(MENTION_BG)
            .inner_margin(egui::Margin::symmetric(8, 3))
    } else {
        egui::Frame::new().inner_margin(egui::Margin::symmetric(8, 3))
    };

    frame.show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            let name_color = if own {
                OWN_NAME_COLOR
            } else if message.role == Role::Assistant {
                ASSISTANT_NAME_COLOR
            } else {
                OTHER_NAME_COLOR
            };
            ui.label(
                egui::RichText::new(&message.user)
                    .strong()
                    .color(name_color),
            );
            render_message_text(ui, &message.content);
        });
    });
}

/// Render message text with clickable links for anything that looks like a URL.
fn render_message_text(ui: &mut egui::Ui, text: &str) {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static URL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(https?://[^\s]+)").expect("URL regex pattern is valid"));

    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        if m.start() > last {
            ui.label(&text[last..m.start()]);
        }
        ui.hyperlink_to(m.as_str(), m.as_str());
        last = m.end();
    }
    if last < text.len() {
        ui.label(&text[last..]);
    }
}

/// Check if a message contains a mention of the given display name.
///
/// A mention is a whole-word, case-insensitive occurrence; an `@` directly
/// before the name also counts as a word boundary.
pub(crate) fn contains_mention(text: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let text_lower = text.to_lowercase();
    let name_lower = name.to_lowercase();
    let bytes = text_lower.as_bytes();

    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&name_lower) {
        let start = from + pos;
        let end = start + name_lower.len();

        let boundary_before = start == 0
            || bytes[start - 1] == b'@'
            || !bytes[start - 1].is_ascii_alphanumeric();
        let boundary_after = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();

        if boundary_before && boundary_after {
            return true;
        }
        from = start + 1;
    }

    false
}
