//! Contact records and the header synonym table
//!
//! A [`Contact`] is one recipient in a target group. The same shape is used
//! for contacts parsed from a local file and for the targets returned by the
//! GoPhish API, so it serializes with GoPhish's field names.

use serde::{Deserialize, Serialize};

/// One target record: email plus optional name and position
///
/// Contacts produced by the parser always carry a non-empty, trimmed email.
/// Targets deserialized from the server may have any field missing, in which
/// case it defaults to an empty string.
///
/// # Examples
///
/// ```
/// use groupctl::contact::Contact;
///
/// let contact = Contact::new("jdoe@example.com", "Jane", "Doe", "Analyst");
/// assert_eq!(contact.email, "jdoe@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
}

impl Contact {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
        }
    }
}

/// Semantic columns recognized in a contact file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Email,
    FirstName,
    LastName,
    Position,
}

const EMAIL_SYNONYMS: &[&str] = &["email", "email_address", "e-mail", "Email Address"];
const FIRST_NAME_SYNONYMS: &[&str] = &[
    "first_name",
    "firstname",
    "fname",
    "First Name",
    "first name",
    "FirstName",
];
const LAST_NAME_SYNONYMS: &[&str] = &[
    "last_name",
    "lastname",
    "lname",
    "Last Name",
    "last name",
    "LastName",
];
const POSITION_SYNONYMS: &[&str] = &["Title", "title", "Position", "position"];

impl ContactField {
    /// Accepted header spellings, highest priority first
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            ContactField::Email => EMAIL_SYNONYMS,
            ContactField::FirstName => FIRST_NAME_SYNONYMS,
            ContactField::LastName => LAST_NAME_SYNONYMS,
            ContactField::Position => POSITION_SYNONYMS,
        }
    }
}

/// Request body for creating a group on the server
#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub targets: Vec<Contact>,
}
