//! Error handling for the union checker
//! 
//! This module defines the top-level error type and the diagnostic
//! reporter used to collect failures from independent checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type that encompasses every stage of a checking run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    /// A checking rule rejected the program. `kind` is the kebab-case
    /// rule kind (kept as a string so this crate stays independent of
    /// the semantic crate).
    #[error("Semantic Error: {message}")]
    Semantic { kind: String, message: String },

    #[error("Redefinition of symbol '{name}'")]
    Redefinition { name: String },

    #[error("Undefined symbol '{name}'")]
    UndefinedSymbol { name: String },

    #[error("Symbol table is full ({capacity} symbols)")]
    SymbolTableFull { capacity: usize },

    #[error("Invalid union type: {message}")]
    InvalidUnion { message: String },

    #[error("Script error: {message}")]
    Script { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a semantic error from a rule kind and message
    pub fn semantic_error(kind: &str, message: String) -> Self {
        CompilerError::Semantic {
            kind: kind.to_string(),
            message,
        }
    }

    /// Create a script error
    pub fn script_error(message: String) -> Self {
        CompilerError::Script { message }
    }

    /// Short machine-readable category of this error
    pub fn kind(&self) -> &str {
        match self {
            CompilerError::Semantic { kind, .. } => kind,
            CompilerError::Redefinition { .. } => "redefinition",
            CompilerError::UndefinedSymbol { .. } => "undefined-symbol",
            CompilerError::SymbolTableFull { .. } => "symbol-table-full",
            CompilerError::InvalidUnion { .. } => "invalid-union",
            CompilerError::Script { .. } => "script",
            CompilerError::IoError { .. } => "io",
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and an optional error kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            kind: None,
            message,
            notes: Vec::new(),
        }
    }

    pub fn note(message: String) -> Self {
        Self {
            severity: Severity::Note,
            kind: None,
            message,
            notes: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }
}

impl From<&CompilerError> for Diagnostic {
    fn from(err: &CompilerError) -> Self {
        Diagnostic::error(err.to_string()).with_kind(err.kind())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(kind) = &self.kind {
            write!(f, "[{}]", kind)?;
        }
        write!(f, ": {}", self.message)?;

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}

/// Error reporter for collecting and displaying diagnostics
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, diagnostic: Diagnostic) -> &mut Diagnostic {
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        let index = self.diagnostics.len();
        self.diagnostics.push(diagnostic);
        &mut self.diagnostics[index]
    }

    /// Report a note diagnostic
    pub fn note(&mut self, message: String) -> &mut Diagnostic {
        self.push(Diagnostic::note(message))
    }

    /// Record a failed check as an error diagnostic
    pub fn report(&mut self, err: &CompilerError) -> &mut Diagnostic {
        self.push(Diagnostic::from(err))
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match self.error_count {
            0 => "No errors".to_string(),
            1 => "1 error".to_string(),
            e => format!("{} errors", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_error_display() {
        let err = CompilerError::semantic_error(
            "missing-field",
            "Type 'Point' has no field 'z'".to_string(),
        );
        assert_eq!(err.to_string(), "Semantic Error: Type 'Point' has no field 'z'");
        assert_eq!(err.kind(), "missing-field");
    }

    #[test]
    fn test_diagnostic_from_error() {
        let err = CompilerError::Redefinition { name: "x".to_string() };
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.kind.as_deref(), Some("redefinition"));
        assert_eq!(diag.to_string(), "error[redefinition]: Redefinition of symbol 'x'");
    }

    #[test]
    fn test_error_reporter() {
        let mut reporter = ErrorReporter::new();
        assert!(!reporter.has_errors());
        assert_eq!(reporter.error_count(), 0);

        reporter.report(&CompilerError::UndefinedSymbol { name: "y".to_string() });
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);

        reporter.note("Just a note".to_string());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.diagnostics().len(), 2);
    }

    #[test]
    fn test_diagnostic_with_notes() {
        let mut reporter = ErrorReporter::new();
        let diag = reporter.report(&CompilerError::script_error("bad check".to_string()));
        diag.notes.push("This is a note".to_string());
        diag.notes.push("This is another note".to_string());

        let diag = &reporter.diagnostics()[0];
        assert_eq!(diag.notes.len(), 2);
        assert_eq!(
            diag.to_string(),
            "error[script]: Script error: bad check\n  note: This is a note\n  note: This is another note"
        );
    }

    #[test]
    fn test_summary() {
        let mut reporter = ErrorReporter::new();
        assert_eq!(reporter.summary(), "No errors");

        reporter.report(&CompilerError::Redefinition { name: "x".to_string() });
        assert_eq!(reporter.summary(), "1 error");

        reporter.note("Note 1".to_string());
        assert_eq!(reporter.summary(), "1 error");

        reporter.report(&CompilerError::Redefinition { name: "y".to_string() });
        assert_eq!(reporter.summary(), "2 errors");
    }
}
