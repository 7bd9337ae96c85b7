//! Assignment compatibility

use super::TypeChecker;
use crate::errors::SemanticError;
use crate::symbols::Symbol;
use crate::types::Type;
use log::debug;

impl TypeChecker<'_> {
    /// Check that a value of type `expr_type` may be assigned to `symbol`.
    ///
    /// A union-typed symbol accepts any of its members; any other symbol
    /// requires an exact match. There is no widening.
    pub fn check_assignment(
        &self,
        symbol: &Symbol,
        expr_type: &Type,
    ) -> Result<(), SemanticError> {
        debug!("check_assignment: {}: {} <- {}", symbol.name, symbol.ty, expr_type);

        match &symbol.ty {
            Type::Union(union) => {
                if !self.union_contains(union, expr_type) {
                    return Err(SemanticError::UnionMemberMismatch {
                        symbol: symbol.name.clone(),
                        found: expr_type.to_string(),
                    });
                }
            }
            declared @ Type::Nominal(_) => {
                if !self.types_equal(declared, expr_type) {
                    return Err(SemanticError::TypeMismatch {
                        symbol: symbol.name.clone(),
                        expected: declared.to_string(),
                        found: expr_type.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
