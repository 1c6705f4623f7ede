//! Application module structure for ParleyApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: ParleyApp struct and initialization
//! - `events`: Event processing and reconciliation from the backend
//! - `update`: Main update loop and global shortcuts
//! - `ui::gate`: Name-entry screen shown before the chat UI
//! - `ui::panels`: Connection bar, room sidebar, and central panel
//! - `ui::messages`: Message list rendering and mention/URL helpers
//! - `ui::input`: Message input panel with history and completion

pub mod core;
pub mod events;
pub mod ui;
pub mod update;

// Re-export ParleyApp for public API
pub use core::ParleyApp;
