//! Non-fatal anomalies found while decoding event lines.
//!
//! Decoding never stops on bad input. Every problem is recorded here and
//! mirrored to the log, and the decoder carries on with a best-effort value.

use std::fmt;

use log::warn;
use thiserror::Error;

/// What went wrong while decoding part of an event line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("precondition \"{token}\" has {found} parameters but type '{id}' declares {expected}")]
    ArityMismatch {
        token: String,
        id: char,
        found: usize,
        expected: usize,
    },
    #[error("unknown precondition type '{id}' in \"{token}\"")]
    UnknownPreconditionType { id: char, token: String },
    #[error("empty precondition in \"{list}\"")]
    EmptyPrecondition { list: String },
    #[error("no ':' separating key and value")]
    MalformedEventLine,
    #[error("no quoted value after ':'")]
    MissingValue,
    #[error("value is missing its closing quote")]
    UnterminatedValue,
    #[error("invalid integer '{raw}' for {field}")]
    InvalidInteger { field: &'static str, raw: String },
    #[error("missing {field}")]
    MissingField { field: &'static str },
}

/// A `DiagnosticKind` tagged with the 1-based source line it came from, if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Collector handed to the decoder.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    line: Option<usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag everything reported from now on with `line`.
    pub fn set_line(&mut self, line: Option<usize>) {
        self.line = line;
    }

    pub fn report(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { line: self.line, kind };
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticKind> {
        self.entries.iter().map(|d| &d.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_carry_the_current_line() {
        let mut diags = Diagnostics::new();
        diags.report(DiagnosticKind::MalformedEventLine);
        diags.set_line(Some(12));
        diags.report(DiagnosticKind::MissingField { field: "viewport" });

        let all: Vec<&Diagnostic> = diags.iter().collect();
        assert_eq!(all[0].line, None);
        assert_eq!(all[1].to_string(), "line 12: missing viewport");
    }
}
