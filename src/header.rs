//! Header row resolution
//!
//! Contact files come from many sources and rarely agree on column names.
//! Each semantic field has a list of accepted spellings; resolution picks the
//! concrete column once per file so rows can be read by index afterwards.

use crate::contact::ContactField;
use crate::error::IngestError;

/// A header cell chosen for a field: its position and literal spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub header: String,
}

/// Finds the column for the first candidate present in `headers`
///
/// Candidates are tried in priority order and compared case-insensitively
/// (surrounding whitespace in header cells is ignored). The returned column
/// carries the spelling found in the file, not the candidate.
///
/// # Errors
///
/// Returns [`IngestError::MissingRequiredHeader`] when `required` is set and
/// none of the candidates is present.
///
/// # Examples
///
/// ```
/// use groupctl::header::resolve;
///
/// let headers = ["Email Address", "FNAME"];
/// let column = resolve(&headers, &["fname", "first_name"], false).unwrap().unwrap();
/// assert_eq!(column.index, 1);
/// assert_eq!(column.header, "FNAME");
/// ```
pub fn resolve<H: AsRef<str>>(
    headers: &[H],
    candidates: &[&str],
    required: bool,
) -> Result<Option<Column>, IngestError> {
    match find_column(headers, candidates) {
        Some(column) => Ok(Some(column)),
        None if required => Err(missing(candidates)),
        None => Ok(None),
    }
}

/// Like [`resolve`] for a column that must exist
///
/// # Errors
///
/// Returns [`IngestError::MissingRequiredHeader`] listing `candidates` when
/// none of them is present.
pub fn resolve_required<H: AsRef<str>>(
    headers: &[H],
    candidates: &[&str],
) -> Result<Column, IngestError> {
    find_column(headers, candidates).ok_or_else(|| missing(candidates))
}

fn find_column<H: AsRef<str>>(headers: &[H], candidates: &[&str]) -> Option<Column> {
    candidates.iter().find_map(|candidate| {
        let wanted = candidate.to_lowercase();
        headers
            .iter()
            .position(|h| h.as_ref().trim().to_lowercase() == wanted)
            .map(|index| Column {
                index,
                header: headers[index].as_ref().to_string(),
            })
    })
}

fn missing(candidates: &[&str]) -> IngestError {
    IngestError::MissingRequiredHeader {
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    }
}

/// Resolved columns for every contact field of one file
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub email: Column,
    pub first_name: Option<Column>,
    pub last_name: Option<Column>,
    pub position: Option<Column>,
}

impl ColumnMap {
    /// Resolves all fields against a header row
    pub fn from_headers<H: AsRef<str>>(headers: &[H]) -> Result<Self, IngestError> {
        let email = resolve_required(headers, ContactField::Email.synonyms())?;
        let optional = |field: ContactField| resolve(headers, field.synonyms(), false);

        Ok(Self {
            email,
            first_name: optional(ContactField::FirstName)?,
            last_name: optional(ContactField::LastName)?,
            position: optional(ContactField::Position)?,
        })
    }

    pub fn get(&self, field: ContactField) -> Option<&Column> {
        match field {
            ContactField::Email => Some(&self.email),
            ContactField::FirstName => self.first_name.as_ref(),
            ContactField::LastName => self.last_name.as_ref(),
            ContactField::Position => self.position.as_ref(),
        }
    }
}
