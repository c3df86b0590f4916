use chrono::{DateTime, Utc};
use std::fmt;

/// Result type for rentview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// An expiration timestamp was not a valid RFC 3339 instant
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp { value, source } => {
                write!(f, "invalid expiration timestamp {:?}: {}", value, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidTimestamp { source, .. } => Some(source),
        }
    }
}

/// Parse an upstream `expirationDate` string into a normalized UTC instant.
///
/// Ordering against "now" is only meaningful once both sides are the same
/// representation, so the load boundary parses eagerly and fails fast
/// instead of letting a malformed string turn into a silently wrong boolean
/// downstream.
pub fn parse_expiration(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
