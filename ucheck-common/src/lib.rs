//! Union Checker - Common Error Types and Reporting
//! 
//! This crate contains the error definitions and diagnostic reporting
//! shared by the semantic checker and the driver.

pub mod error;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
