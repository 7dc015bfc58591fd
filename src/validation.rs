use std::net::IpAddr;

/// Provides validation for the GoPhish instance host
pub struct HostValidator;

impl HostValidator {
    /// Creates a new HostValidator instance
    pub fn new() -> Self {
        Self {}
    }

    /// Validates a host name or IP literal
    ///
    /// IPv4 and IPv6 literals (with or without brackets) are accepted as is.
    /// Host names must:
    /// - Not exceed 253 characters (RFC 1035)
    /// - Consist of valid characters (a-z, 0-9, -, .)
    /// - Not have empty labels (consecutive, leading or trailing dots)
    /// - Not start or end a label with a hyphen
    /// - Keep each label within 63 characters
    ///
    /// Single-label names such as `localhost` or an internal `gophish` host
    /// are allowed since admin consoles usually live on private networks.
    pub fn validate_host_format(&self, host: &str) -> bool {
        let unbracketed = host.trim_start_matches('[').trim_end_matches(']');
        if unbracketed.parse::<IpAddr>().is_ok() {
            return true;
        }

        if host.is_empty() || host.len() > 253 {
            return false;
        }

        for label in host.split('.') {
            if label.is_empty() || label.len() > 63 {
                return false;
            }

            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return false;
            }

            if label.starts_with('-') || label.ends_with('-') {
                return false;
            }
        }

        true
    }
}

impl Default for HostValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a host and returns a Result with a validation error message if invalid
pub fn validate_host(host: &str) -> Result<(), String> {
    let validator = HostValidator::new();

    if !validator.validate_host_format(host) {
        return Err(format!("Invalid host format: {}", host));
    }

    Ok(())
}
