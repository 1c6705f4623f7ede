//! Connection establishment utilities for the room channel
//!
//! Handles WebSocket and TLS connection setup with proper error handling.

use std::sync::Arc;

use rustls::RootCertStore;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async_tls_with_config, Connector, MaybeTlsStream, WebSocketStream,
};

/// An open channel to one room on one server.
pub struct RoomChannel {
    pub stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    pub server: String,
    pub room: String,
}

/// Build the per-room channel URL: `<server>/rooms/<room>`.
pub fn room_url(server: &str, room: &str) -> String {
    format!("{}/rooms/{}", server.trim_end_matches('/'), room)
}

/// Create a rustls TLS connector with webpki root certificates for
/// cross-platform wss:// support.
fn create_tls_connector() -> Connector {
    let mut root_store = RootCertStore::empty();

    // Use webpki-roots for cross-platform compatibility
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Connector::Rustls(Arc::new(config))
}

/// Open the WebSocket channel for a room.
///
/// # Arguments
/// * `server` - Base server URL (`ws://` or `wss://`)
/// * `room` - Room id, appended to the channel path
///
/// # Errors
/// Returns an error string if connection fails at any stage (TCP, TLS
/// handshake, WebSocket upgrade).
pub async fn establish_connection(server: &str, room: &str) -> Result<RoomChannel, String> {
    let url = room_url(server, room);

    // The connector is only consulted for wss:// URLs
    let connector = if url.starts_with("wss://") {
        Some(create_tls_connector())
    } else {
        None
    };

    let (stream, _response) = connect_async_tls_with_config(&url, None, false, connector)
        .await
        .map_err(|e| format!("Connection to {} failed: {}", url, e))?;

    Ok(RoomChannel {
        stream,
        server: server.to_string(),
        room: room.to_string(),
    })
}
