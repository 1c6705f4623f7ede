//! Core ParleyApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, ConnectionConfig, Settings};
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::validation;

pub struct ParleyApp {
    // Core state (rooms, connection status, display name, etc.)
    pub state: ClientState,

    // Connection settings (form inputs)
    pub connection: ConnectionConfig,

    // Name-entry form state (gate screen)
    pub name_input: String,
    pub name_error: Option<String>,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Input state (message composition, history, name completion)
    pub input: InputState,

    // Theme ("dark" or "light")
    pub theme: String,

    // UI visibility toggles
    pub show_room_list: bool,
}

impl ParleyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        // Try to load persisted settings and apply theme in creation context
        let settings = load_settings();
        if let Some(s) = &settings {
            match s.theme.as_str() {
                "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
                _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
            }
        }

        let mut app = Self {
            state: ClientState::new(),
            connection: ConnectionConfig::default(),

            name_input: String::new(),
            name_error: None,

            action_tx,
            event_rx,

            input: InputState::new(),

            theme: "dark".to_string(),

            show_room_list: true,
        };

        // Restore settings if present
        if let Some(s) = settings {
            if !s.server.is_empty() {
                app.connection.server = s.server;
            }
            if !s.last_room.is_empty() {
                app.connection.room = s.last_room;
            }
            if !s.history.is_empty() {
                app.input.history = s.history;
            }
            if !s.theme.is_empty() {
                app.theme = s.theme;
            }
            // A remembered display name skips the name-entry screen
            if validation::validate_display_name(&s.name).is_ok() {
                app.state.display_name = s.name.trim().to_string();
            }
        }

        app
    }

    /// Initiate a connection to the configured room using current UI inputs.
    pub(in crate::app) fn do_connect(&mut self) {
        if let Err(e) = validation::validate_server_url(&self.connection.server) {
            self.state.log_line(e);
            return;
        }
        if let Err(e) = validation::validate_room_id(&self.connection.room) {
            self.state.log_line(e);
            return;
        }

        let room = self.connection.room.clone();
        self.state.ensure_room(&room);
        let _ = self.action_tx.send(BackendAction::Connect {
            server: self.connection.server.clone(),
            room,
        });
    }

    /// Snapshot of everything worth persisting.
    pub(in crate::app) fn current_settings(&self) -> Settings {
        Settings {
            server: self.connection.server.clone(),
            name: self.state.display_name.clone(),
            last_room: self.connection.room.clone(),
            history: self.input.history.clone(),
            theme: self.theme.clone(),
        }
    }
}

impl Drop for ParleyApp {
    fn drop(&mut self) {
        // Persist settings on exit
        if let Err(e) = save_settings(&self.current_settings()) {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}
