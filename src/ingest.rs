//! Contact file ingestion
//!
//! Reads a delimited text file with a header row and turns every data row
//! into a [`Contact`]. Bulk contact exports are frequently messy, so a bad row
//! never aborts the run: it is recorded as a [`RowError`] with its line number
//! and skipped. The only fatal conditions are an unreadable file and a header
//! row without any recognizable email column.

use csv::{ReaderBuilder, StringRecord};
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::contact::{Contact, ContactField};
use crate::error::IngestError;
use crate::header::ColumnMap;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Why a single row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowErrorDetail {
    /// The row has no value under the named header
    MissingField(String),
    /// The row could not be decoded
    Malformed(String),
}

impl fmt::Display for RowErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowErrorDetail::MissingField(header) => write!(f, "missing value for '{}'", header),
            RowErrorDetail::Malformed(message) => write!(f, "{}", message),
        }
    }
}

/// A skipped row, attributed to its 1-based line in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub detail: RowErrorDetail,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.detail)
    }
}

/// Contacts that parsed cleanly plus every row that did not
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub contacts: Vec<Contact>,
    pub errors: Vec<RowError>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses contacts from any byte stream
///
/// A leading UTF-8 byte-order mark is skipped. Rows may have differing
/// lengths; a short row only fails if it lacks the email value. Data row `i`
/// (0-based) is reported as line `i + 2`.
///
/// # Errors
///
/// * [`IngestError::MissingRequiredHeader`] - no email column in the header row
/// * [`IngestError::Io`] / [`IngestError::Csv`] - the stream itself failed
///
/// # Examples
///
/// ```
/// use groupctl::ingest::parse;
///
/// let data = "Email,First Name\n a@example.com ,Ann\n";
/// let outcome = parse(data.as_bytes(), b',').unwrap();
/// assert_eq!(outcome.contacts[0].email, "a@example.com");
/// assert_eq!(outcome.contacts[0].first_name, "Ann");
/// ```
pub fn parse<R: Read>(mut source: R, delimiter: u8) -> Result<ParseOutcome, IngestError> {
    // take() keeps reading until 3 bytes or EOF, so short reads cannot hide the mark
    let mut head = Vec::with_capacity(UTF8_BOM.len());
    source
        .by_ref()
        .take(UTF8_BOM.len() as u64)
        .read_to_end(&mut head)?;
    if head == UTF8_BOM {
        head.clear();
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(head).chain(source));

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    debug!("Detected headers: {:?}", headers);

    let columns = ColumnMap::from_headers(&headers)?;
    debug!("Resolved columns: {:?}", columns);

    let mut outcome = ParseOutcome::default();

    for (row, record) in reader.records().enumerate() {
        let line = row + 2;

        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let error = RowError {
                    line,
                    detail: RowErrorDetail::Malformed(err.to_string()),
                };
                warn!("Skipping {}", error);
                outcome.errors.push(error);
                continue;
            }
        };

        match contact_from_record(&record, &columns) {
            Ok(contact) => outcome.contacts.push(contact),
            Err(detail) => {
                let error = RowError { line, detail };
                warn!("Skipping {}", error);
                outcome.errors.push(error);
            }
        }
    }

    info!(
        "Parsed {} contacts ({} rows skipped)",
        outcome.contacts.len(),
        outcome.errors.len()
    );
    Ok(outcome)
}

/// Opens and parses a contact file
///
/// The file handle is owned by this call and closed on every return path.
pub fn parse_file(path: &Path, delimiter: u8) -> Result<ParseOutcome, IngestError> {
    info!("Reading contacts from {}", path.display());
    let file = File::open(path)?;
    parse(file, delimiter)
}

fn contact_from_record(
    record: &StringRecord,
    columns: &ColumnMap,
) -> Result<Contact, RowErrorDetail> {
    let email = record
        .get(columns.email.index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RowErrorDetail::MissingField(columns.email.header.clone()))?;

    let optional = |field: ContactField| {
        columns
            .get(field)
            .and_then(|column| record.get(column.index))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    Ok(Contact {
        email: email.to_string(),
        first_name: optional(ContactField::FirstName),
        last_name: optional(ContactField::LastName),
        position: optional(ContactField::Position),
    })
}
