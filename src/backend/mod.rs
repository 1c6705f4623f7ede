/// Backend submodules for connection and frame handling
///
/// This module breaks down the backend logic into focused components:
/// - `connection`: room URL construction and WebSocket/TLS establishment
/// - `handlers`: action dispatch and inbound frame routing
/// - `main_loop`: core event loop bridging UI channels and the socket
mod connection;
mod handlers;
mod main_loop;

// Re-export the main backend entry point
pub use main_loop::run_backend;

pub use connection::room_url;

#[cfg(test)]
pub(crate) use handlers::handle_server_frame;
