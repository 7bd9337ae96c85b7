//! `is` type discrimination

use super::TypeChecker;
use crate::errors::SemanticError;
use crate::types::Type;
use log::debug;

impl TypeChecker<'_> {
    /// Validate `expr is target` and return the type `expr` has inside the
    /// branch guarded by the test.
    ///
    /// Against a union the target must be one of its members; against any
    /// other type the target must match it exactly. The front end applies
    /// the returned type only within the guarded branch.
    pub fn check_is<'t>(
        &self,
        expr_type: &Type,
        target: &'t Type,
    ) -> Result<&'t Type, SemanticError> {
        debug!("check_is: {} is {}", expr_type, target);

        match expr_type {
            Type::Union(union) => {
                if !self.union_contains(union, target) {
                    return Err(SemanticError::InvalidNarrowing {
                        target: target.to_string(),
                    });
                }
                debug!("narrowed {} to {}", expr_type, target);
            }
            Type::Nominal(_) => {
                if !self.types_equal(expr_type, target) {
                    return Err(SemanticError::InvalidTypeCheck {
                        target: target.to_string(),
                        found: expr_type.to_string(),
                    });
                }
            }
        }

        Ok(target)
    }
}
