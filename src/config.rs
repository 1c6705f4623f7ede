use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_SERVER: &str = "wss://chat.parley.example";
pub const DEFAULT_ROOM: &str = "lobby";

/// Connection form inputs (server URL and room id).
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    pub server: String,
    pub room: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            room: DEFAULT_ROOM.to_string(),
        }
    }
}

/// Settings persisted across sessions. `name` is the remembered display
/// name; everything else restores the last session's shape.
#[derive(Serialize, Deserialize, Default)]
pub struct Settings {
    pub server: String,
    pub name: String,
    pub last_room: String,
    pub history: Vec<String>,
    pub theme: String,
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("org", "parley", "parley-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        // Safe expect: Settings contains only strings and vectors of strings
        let data = serde_json::to_string_pretty(settings).expect("settings serialize");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
