//! Checker configuration

use crate::types::Type;
use serde::{Deserialize, Serialize};

/// How the checking rules compare two types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnionEquality {
    /// Plain name equality. Every union equals every other union and any
    /// nominal type named `union`.
    #[default]
    ByName,
    /// Unions compare by member set and never equal a nominal type
    Structural,
}

impl UnionEquality {
    pub fn types_equal(self, a: &Type, b: &Type) -> bool {
        match self {
            UnionEquality::ByName => a.equals(b),
            UnionEquality::Structural => a.structurally_equals(b),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckerConfig {
    pub union_equality: UnionEquality,
}

impl CheckerConfig {
    pub fn structural() -> Self {
        Self {
            union_equality: UnionEquality::Structural,
        }
    }
}
