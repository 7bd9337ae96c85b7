//! Semantic error definitions
//! 
//! Each checking rule fails with exactly one of these variants.

use std::fmt;
use thiserror::Error;
use ucheck_common::CompilerError;

/// Failures reported by the checking rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Type mismatch in assignment to '{symbol}'")]
    TypeMismatch {
        symbol: String,
        expected: String,
        found: String,
    },

    #[error("Cannot assign type '{found}' to union variable '{symbol}'")]
    UnionMemberMismatch { symbol: String, found: String },

    #[error("Invalid type test: '{target}' not part of union")]
    InvalidNarrowing { target: String },

    #[error("Invalid type check: '{target}' does not match '{found}'")]
    InvalidTypeCheck { target: String, found: String },

    #[error("Unsafe field access '{field}' on union type. Type discrimination required.")]
    UnsafeUnionAccess { field: String },

    #[error("Type '{type_name}' has no field '{field}'")]
    MissingField { type_name: String, field: String },
}

/// Closed set of error categories, one per rule outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    UnionMemberMismatch,
    InvalidNarrowing,
    InvalidTypeCheck,
    UnsafeUnionAccess,
    MissingField,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::UnionMemberMismatch => "union-member-mismatch",
            ErrorKind::InvalidNarrowing => "invalid-narrowing",
            ErrorKind::InvalidTypeCheck => "invalid-type-check",
            ErrorKind::UnsafeUnionAccess => "unsafe-union-access",
            ErrorKind::MissingField => "missing-field",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SemanticError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SemanticError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            SemanticError::UnionMemberMismatch { .. } => ErrorKind::UnionMemberMismatch,
            SemanticError::InvalidNarrowing { .. } => ErrorKind::InvalidNarrowing,
            SemanticError::InvalidTypeCheck { .. } => ErrorKind::InvalidTypeCheck,
            SemanticError::UnsafeUnionAccess { .. } => ErrorKind::UnsafeUnionAccess,
            SemanticError::MissingField { .. } => ErrorKind::MissingField,
        }
    }
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        CompilerError::semantic_error(err.kind().as_str(), err.to_string())
    }
}
