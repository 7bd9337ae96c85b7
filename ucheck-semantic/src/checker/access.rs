//! Field access safety

use super::TypeChecker;
use crate::errors::SemanticError;
use crate::types::Type;
use log::debug;

impl TypeChecker<'_> {
    /// Check `expr.field` where `expr` has static type `ty`.
    ///
    /// Access through a union is always rejected, even when every member
    /// has the field: the expression must be narrowed first.
    pub fn check_field_access(&self, ty: &Type, field: &str) -> Result<(), SemanticError> {
        debug!("check_field_access: {}.{}", ty, field);

        match ty {
            Type::Union(_) => Err(SemanticError::UnsafeUnionAccess {
                field: field.to_string(),
            }),
            Type::Nominal(name) if self.schema.has_field(name, field) => Ok(()),
            Type::Nominal(name) => Err(SemanticError::MissingField {
                type_name: name.clone(),
                field: field.to_string(),
            }),
        }
    }
}
