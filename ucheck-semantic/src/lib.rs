//! Union Checker - Semantic Rules
//! 
//! This crate provides the static checks a front end runs against
//! pre-built type descriptors:
//! - Types: nominal types and union types
//! - Schema: which fields a nominal type exposes
//! - Symbols: names bound to declared types
//! - Checker: assignment compatibility, `is` narrowing and field access

pub mod checker;
pub mod config;
pub mod errors;
pub mod schema;
pub mod symbols;
pub mod types;

pub use checker::TypeChecker;
pub use config::{CheckerConfig, UnionEquality};
pub use errors::{ErrorKind, SemanticError};
pub use schema::{BuiltinSchema, FieldSchema, TableSchema};
pub use symbols::{Symbol, SymbolId, SymbolTable};
pub use types::{TaggedValue, Type, UnionType};

/// Check an assignment using name equality
pub fn check_assignment(symbol: &Symbol, expr_type: &Type) -> Result<(), SemanticError> {
    TypeChecker::default().check_assignment(symbol, expr_type)
}

/// Check an `is` test using name equality, returning the narrowed type
pub fn check_is<'t>(expr_type: &Type, target: &'t Type) -> Result<&'t Type, SemanticError> {
    TypeChecker::default().check_is(expr_type, target)
}

/// Check a field access against the built-in schema
pub fn check_field_access(ty: &Type, field: &str) -> Result<(), SemanticError> {
    TypeChecker::default().check_field_access(ty, field)
}
