//! External collaborators: nationality records and document scanners.
//!
//! Neither backend lives in this crate. Callers plug in their own
//! implementation (or a plain closure), and tests use the bundled mocks.

use std::collections::HashMap;

use tracing::{debug, warn};

/// Error returned by a [`NationalityLookup`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The backing store could not be reached.
    #[error("Nationality lookup unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backing store answered with an error.
    #[error("Nationality lookup failed: {0}")]
    Backend(String),
}

/// Error returned by a [`DocumentScanner`] device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// No device attached, or it did not respond.
    #[error("Scanner unavailable: {reason}")]
    DeviceUnavailable { reason: String },

    /// The device responded but the read did not complete.
    #[error("Scan failed: {0}")]
    ReadFailed(String),
}

/// Source of a person's nationality code, typically a records database.
pub trait NationalityLookup: Send + Sync {
    /// Returns the nationality code recorded for `person_id`, or `None` when
    /// there is no record.
    fn nationality(&self, person_id: u64) -> Result<Option<String>, LookupError>;
}

/// Hardware that reads the raw MRZ text off a document.
pub trait DocumentScanner: Send + Sync {
    fn scan(&self) -> Result<String, ScanError>;
}

impl<F> NationalityLookup for F
where
    F: Fn(u64) -> Result<Option<String>, LookupError> + Send + Sync,
{
    fn nationality(&self, person_id: u64) -> Result<Option<String>, LookupError> {
        self(person_id)
    }
}

impl<F> DocumentScanner for F
where
    F: Fn() -> Result<String, ScanError> + Send + Sync,
{
    fn scan(&self) -> Result<String, ScanError> {
        self()
    }
}

/// In-memory nationality records for tests and development.
#[derive(Debug, Clone, Default)]
pub struct MockNationalityLookup {
    records: HashMap<u64, String>,
    failure: Option<LookupError>,
}

impl MockNationalityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any earlier one for the same id.
    #[must_use]
    pub fn with_record(mut self, person_id: u64, code: impl Into<String>) -> Self {
        self.records.insert(person_id, code.into());
        self
    }

    /// A lookup that fails every call with `error`.
    pub fn failing(error: LookupError) -> Self {
        Self {
            records: HashMap::new(),
            failure: Some(error),
        }
    }
}

impl NationalityLookup for MockNationalityLookup {
    fn nationality(&self, person_id: u64) -> Result<Option<String>, LookupError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.records.get(&person_id).cloned())
    }
}

/// Scanner that returns the same outcome on every call.
#[derive(Debug, Clone)]
pub struct MockDocumentScanner {
    outcome: Result<String, ScanError>,
}

impl MockDocumentScanner {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    pub const fn failing(error: ScanError) -> Self {
        Self { outcome: Err(error) }
    }
}

impl DocumentScanner for MockDocumentScanner {
    fn scan(&self) -> Result<String, ScanError> {
        self.outcome.clone()
    }
}

/// Entry point tying the MRZ helpers to their external collaborators.
#[derive(Debug, Clone)]
pub struct Mrtd<L, S> {
    lookup:  L,
    scanner: S,
}

impl<L, S> Mrtd<L, S>
where
    L: NationalityLookup,
    S: DocumentScanner,
{
    pub const fn new(lookup: L, scanner: S) -> Self {
        Self { lookup, scanner }
    }

    /// Fetches the nationality recorded for `person_id`.
    ///
    /// # Errors
    /// Propagates the backend's `LookupError` unchanged.
    pub fn retrieve_nationality(&self, person_id: u64) -> Result<Option<String>, LookupError> {
        match self.lookup.nationality(person_id) {
            Ok(found) => {
                debug!(person_id, found = ?found, "nationality lookup");
                Ok(found)
            }
            Err(error) => {
                warn!(person_id, %error, "nationality lookup failed");
                Err(error)
            }
        }
    }

    /// Reads the raw text from the attached scanner.
    ///
    /// # Errors
    /// Propagates the device's `ScanError` unchanged.
    pub fn scan_document(&self) -> Result<String, ScanError> {
        match self.scanner.scan() {
            Ok(text) => {
                debug!(chars = text.chars().count(), "document scanned");
                Ok(text)
            }
            Err(error) => {
                warn!(%error, "document scan failed");
                Err(error)
            }
        }
    }

    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    pub const fn scanner(&self) -> &S {
        &self.scanner
    }
}
