//! Built-in demonstration program
//!
//! Declares `x: int | string | Point`, assigns an `int`, narrows `x` to
//! `Point` and reads `x.x`.

use log::info;
use ucheck_common::CompilerError;
use ucheck_semantic::{Symbol, SymbolTable, Type, TypeChecker};

/// Message printed when every check passes
pub const SUCCESS_MESSAGE: &str = "Program is semantically correct.";

pub fn run_demo(checker: &TypeChecker<'_>) -> Result<(), CompilerError> {
    let int_type = Type::nominal("int");
    let string_type = Type::nominal("string");
    let point_type = Type::nominal("Point");

    let union = Type::try_union(vec![int_type.clone(), string_type, point_type.clone()])?;

    let mut symbols = SymbolTable::new();
    let id = symbols.declare(Symbol::new("x", union))?;
    let x = symbols
        .get(id)
        .ok_or_else(|| CompilerError::UndefinedSymbol { name: "x".to_string() })?;
    info!("declared {}: {}", x.name, x.ty);

    checker.check_assignment(x, &int_type)?;

    let narrowed = checker.check_is(&x.ty, &point_type)?;

    checker.check_field_access(narrowed, "x")?;

    Ok(())
}
