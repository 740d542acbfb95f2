use color_eyre::eyre::Report;
use thiserror::Error;

use super::{LeaveRequestId, MemberId};

#[derive(Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("Duplicate member ID in roster: {0}")]
    DuplicateMember(MemberId),
}

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("Leave data source error")]
    SourceError(#[from] LeaveDataSourceError),
    #[error("Failed to build availability")]
    ConstructionError(#[from] ConstructionError),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum LeaveDataSourceError {
    #[error("Invalid payload")]
    InvalidPayload(#[source] serde_json::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for LeaveDataSourceError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidPayload(_), Self::InvalidPayload(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Which kind of upstream record a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Member,
    LeaveRequest,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInputError {
    #[error("Missing or invalid field: {0}")]
    InvalidShape(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown leave status: {0}")]
    UnknownStatus(String),
    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },
    #[error("Validation error: {0}")]
    Invalid(String),
}

impl From<ValidationError> for MalformedInputError {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error.as_ref().to_owned())
    }
}

/// A record dropped at the parse boundary, kept so callers can warn about it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub kind: RecordKind,
    /// Position of the record in the concatenated upstream list.
    pub index: usize,
    pub reason: MalformedInputError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildDiagnostics {
    pub skipped: Vec<SkippedRecord>,
    /// Requests whose member is not in the roster.
    pub orphaned_requests: Vec<LeaveRequestId>,
}

impl BuildDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.orphaned_requests.is_empty()
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
