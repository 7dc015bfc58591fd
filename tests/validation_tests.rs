#[path = "../src/validation.rs"]
mod validation;
use validation::{validate_host, HostValidator};

#[test]
fn test_valid_host_formats() {
    let validator = HostValidator::new();

    assert!(validator.validate_host_format("phish.example.com"));
    assert!(validator.validate_host_format("gophish"));
    assert!(validator.validate_host_format("localhost"));
    assert!(validator.validate_host_format("admin-01.corp.example.co.uk"));
    assert!(validator.validate_host_format("10.0.0.15"));
    assert!(validator.validate_host_format("[::1]"));
}

#[test]
fn test_invalid_host_formats() {
    let validator = HostValidator::new();

    assert!(!validator.validate_host_format("")); // Empty
    assert!(!validator.validate_host_format(&"x".repeat(254))); // Too long
    assert!(!validator.validate_host_format("example.")); // Ends with dot
    assert!(!validator.validate_host_format(".example.com")); // Starts with dot
    assert!(!validator.validate_host_format("sub..example.com")); // Double dot
    assert!(!validator.validate_host_format("-example.com")); // Starts with hyphen
    assert!(!validator.validate_host_format("example-.com")); // Label ends with hyphen
    assert!(!validator.validate_host_format("exam!ple.com")); // Invalid character
    assert!(!validator.validate_host_format(&("x".repeat(64) + ".com"))); // Label too long
}

#[test]
fn test_validate_host_function() {
    assert!(validate_host("phish.example.com").is_ok());

    let err = validate_host("bad_host!").unwrap_err();
    assert!(err.contains("Invalid host format"));
}
