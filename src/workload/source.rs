//! Process-spec providers.
//!
//! A [`ProcessSource`] yields the process set a simulation runs over.
//! [`TextSource`] reads the plain-text format, one process per line:
//!
//! ```text
//! id,arrival_time,burst_time
//! 1,0,5
//! 2,1,3
//! ```
//!
//! Whitespace around fields is ignored; blank lines and lines starting
//! with `#` are skipped. There is no header line.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::ProcessSpec;
use crate::validation::ValidationError;

/// Anything that can produce a process set.
pub trait ProcessSource {
    /// Loads the process specs.
    fn load(&mut self) -> Result<Vec<ProcessSpec>, SourceError>;
}

impl ProcessSource for Vec<ProcessSpec> {
    fn load(&mut self) -> Result<Vec<ProcessSpec>, SourceError> {
        Ok(self.clone())
    }
}

/// Errors produced while loading process specs.
#[derive(Debug)]
pub enum SourceError {
    /// The input could not be read.
    Io(std::io::Error),
    /// A line does not match `id,arrival,burst`.
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
    },
    /// A line parsed but describes an invalid process.
    Invalid {
        /// 1-based line number.
        line: usize,
        /// The validation failure.
        error: ValidationError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "failed to read process list: {e}"),
            SourceError::Malformed { line, reason } => write!(f, "line {line}: {reason}"),
            SourceError::Invalid { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            SourceError::Invalid { error, .. } => Some(error),
            SourceError::Malformed { .. } => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// Text provider for the `id,arrival,burst` line format.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    /// Wraps in-memory text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a whole file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

impl ProcessSource for TextSource {
    fn load(&mut self) -> Result<Vec<ProcessSpec>, SourceError> {
        parse_process_list(&self.text)
    }
}

/// Parses the `id,arrival,burst` line format.
pub fn parse_process_list(text: &str) -> Result<Vec<ProcessSpec>, SourceError> {
    let mut specs = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = content.split(',').map(str::trim).collect();
        let &[id, arrival, burst] = fields.as_slice() else {
            return Err(SourceError::Malformed {
                line,
                reason: format!("expected 3 comma-separated fields, found {}", fields.len()),
            });
        };

        let arrival = parse_field(arrival, "arrival_time", line)?;
        let burst = parse_field(burst, "burst_time", line)?;
        let spec = ProcessSpec::new(id, arrival, burst)
            .map_err(|error| SourceError::Invalid { line, error })?;
        specs.push(spec);
    }

    Ok(specs)
}

fn parse_field(value: &str, name: &str, line: usize) -> Result<i64, SourceError> {
    value.parse().map_err(|_| SourceError::Malformed {
        line,
        reason: format!("{name} '{value}' is not an integer"),
    })
}
