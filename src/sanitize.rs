// src/sanitize.rs
//
// Output sanitization for terminal display.
// Group names and target fields come from the server and may contain
// terminal control sequences; error messages may echo credentials.

use regex::Regex;
use std::sync::OnceLock;

use crate::contact::Contact;

/// Sanitizes a contact before it is printed
///
/// # Arguments
/// * `contact` - The contact to sanitize
///
/// # Returns
/// * `Contact` - A sanitized copy of the input contact
pub fn sanitize_contact(contact: &Contact) -> Contact {
    Contact {
        email: sanitize_text(&contact.email),
        first_name: sanitize_text(&contact.first_name),
        last_name: sanitize_text(&contact.last_name),
        position: sanitize_text(&contact.position),
    }
}

/// Removes control characters and surrounding whitespace
///
/// Control characters include the ESC byte that starts ANSI sequences, so
/// a hostile group name cannot rewrite the terminal.
pub fn sanitize_text(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
}

fn bearer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(bearer\s+|api_key=)[^\s&]+").expect("static pattern is valid")
    })
}

/// Sanitizes error messages so they never leak the API key
///
/// # Arguments
/// * `error` - Error message to sanitize
/// * `secret` - The configured API key, if known
///
/// # Returns
/// * `String` - Message with the key and any bearer token redacted
pub fn sanitize_error(error: &str, secret: Option<&str>) -> String {
    let mut message = error.replace(|c: char| c.is_control() && c != '\n', "");

    if let Some(secret) = secret.filter(|s| !s.is_empty()) {
        message = message.replace(secret, "[REDACTED]");
    }

    bearer_pattern()
        .replace_all(&message, "${1}[REDACTED]")
        .to_string()
}
