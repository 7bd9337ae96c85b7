//! Checking rules
//! 
//! `TypeChecker` bundles the field schema and configuration used by the
//! three rules. Each rule lives in its own module:
//! - `assignment`: assignment compatibility
//! - `narrowing`: `is` type discrimination
//! - `access`: field access safety
//!
//! Rules are independent and side-effect free; a front end may call them in
//! any order and keep going after a failure.

mod access;
mod assignment;
mod narrowing;

use crate::config::CheckerConfig;
use crate::schema::{BuiltinSchema, FieldSchema};
use crate::types::{Type, UnionType};

pub struct TypeChecker<'s> {
    schema: &'s dyn FieldSchema,
    config: CheckerConfig,
}

impl<'s> TypeChecker<'s> {
    pub fn new(schema: &'s dyn FieldSchema) -> Self {
        Self::with_config(schema, CheckerConfig::default())
    }

    pub fn with_config(schema: &'s dyn FieldSchema, config: CheckerConfig) -> Self {
        Self { schema, config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Type equality as configured
    pub fn types_equal(&self, a: &Type, b: &Type) -> bool {
        self.config.union_equality.types_equal(a, b)
    }

    fn union_contains(&self, union: &UnionType, ty: &Type) -> bool {
        union.contains_by(ty, |member, ty| self.types_equal(member, ty))
    }
}

impl Default for TypeChecker<'static> {
    fn default() -> Self {
        TypeChecker::new(&BuiltinSchema)
    }
}
