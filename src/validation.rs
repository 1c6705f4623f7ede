//! Input validation for connection and message fields


/// Maximum accepted room id length.
const MAX_ROOM_ID_LEN: usize = 64;
/// Maximum accepted display name length.
const MAX_NAME_LEN: usize = 32;
/// Maximum accepted message length (in bytes).
const MAX_MESSAGE_LEN: usize = 2000;

/// Validates a chat server URL (ws:// or wss:// with a non-empty host).
pub fn validate_server_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Server URL cannot be empty".to_string());
    }

    let rest = if let Some(rest) = url.strip_prefix("wss://") {
        rest
    } else if let Some(rest) = url.strip_prefix("ws://") {
        rest
    } else {
        return Err("Server URL must start with ws:// or wss://".to_string());
    };

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err("Server URL has no host".to_string());
    }

    Ok(())
}

/// Validates a room id: URL-safe, bounded length.
pub fn validate_room_id(room: &str) -> Result<(), String> {
    if room.is_empty() {
        return Err("Room id cannot be empty".to_string());
    }

    if room.len() > MAX_ROOM_ID_LEN {
        return Err(format!("Room id too long (max {} characters)", MAX_ROOM_ID_LEN));
    }

    // Room ids travel in the URL path, so keep them to a safe charset
    for c in room.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            return Err(format!("Invalid character '{}' in room id", c));
        }
    }

    Ok(())
}

/// Validates a display name.
pub fn validate_display_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name too long (max {} characters)", MAX_NAME_LEN));
    }

    if trimmed.contains(|c: char| c.is_control()) {
        return Err("Name contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates message text before sending.
pub fn validate_message(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Message cannot be empty".to_string());
    }

    if text.contains('\n') || text.contains('\r') {
        return Err("Message cannot contain line breaks".to_string());
    }

    if text.len() > MAX_MESSAGE_LEN {
        return Err(format!("Message too long (max {} bytes)", MAX_MESSAGE_LEN));
    }

    Ok(())
}

/// Strip line breaks and clamp length so the text always validates.
pub fn sanitize_message(text: &str) -> String {
    let mut cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    if cleaned.len() > MAX_MESSAGE_LEN {
        // Truncate on a char boundary
        let mut end = MAX_MESSAGE_LEN;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("wss://chat.example.net").is_ok());
        assert!(validate_server_url("ws://localhost:1999").is_ok());
        assert!(validate_server_url("ws://localhost:1999/base").is_ok());

        assert!(validate_server_url("").is_err());
        assert!(validate_server_url("http://chat.example.net").is_err());
        assert!(validate_server_url("chat.example.net").is_err());
        assert!(validate_server_url("wss://").is_err());
    }

    #[test]
    fn test_validate_room_id() {
        assert!(validate_room_id("lobby").is_ok());
        assert!(validate_room_id("team-42").is_ok());
        assert!(validate_room_id("a1b2c3d4").is_ok());

        assert!(validate_room_id("").is_err());
        assert!(validate_room_id("two words").is_err());
        assert!(validate_room_id("slash/room").is_err());
        assert!(validate_room_id(&"x".repeat(MAX_ROOM_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("alice").is_ok());
        assert!(validate_display_name("  bob  ").is_ok()); // trimmed before use
        assert!(validate_display_name("Dr. Strange").is_ok());

        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name("tab\there").is_err());
        assert!(validate_display_name(&"n".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("Hello, world!").is_ok());

        assert!(validate_message("").is_err());
        assert!(validate_message("Line1\nLine2").is_err());
        assert!(validate_message(&"x".repeat(MAX_MESSAGE_LEN + 1)).is_err());
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("Hello"), "Hello");
        assert_eq!(sanitize_message("Line1\nLine2"), "Line1Line2");
        assert_eq!(
            sanitize_message(&"x".repeat(MAX_MESSAGE_LEN + 100)),
            "x".repeat(MAX_MESSAGE_LEN)
        );
        // Sanitized output always validates (when non-empty)
        assert!(validate_message(&sanitize_message("a\r\nb")).is_ok());
    }
}
