//! Type model for the union checker
//! 
//! Types are nominal: a plain type is identified by its name alone, and a
//! union type carries the ordered list of its member types. Equality is
//! name equality, so every union compares equal to every other union (they
//! all share the name `union`). See `CheckerConfig` for the structural
//! alternative used by the checking rules.

use log::trace;
use std::fmt;
use ucheck_common::CompilerError;

/// Name shared by every union type
pub const UNION_TYPE_NAME: &str = "union";

/// A static type as seen by the checker
#[derive(Debug, Clone)]
pub enum Type {
    /// Primitive or object type identified by name (`int`, `Point`, ...)
    Nominal(String),
    /// One of a fixed set of member types
    Union(UnionType),
}

/// The member list of a union type, in declaration order
#[derive(Debug, Clone)]
pub struct UnionType {
    members: Vec<Type>,
}

impl Type {
    pub fn nominal(name: impl Into<String>) -> Self {
        Type::Nominal(name.into())
    }

    /// Build a union from its members.
    ///
    /// Callers must not pass an empty list; use [`Type::try_union`] when the
    /// members come from untrusted input.
    pub fn union(members: Vec<Type>) -> Self {
        debug_assert!(!members.is_empty(), "union type with no members");
        Type::Union(UnionType { members })
    }

    /// Build a union, rejecting an empty member list
    pub fn try_union(members: Vec<Type>) -> Result<Self, CompilerError> {
        if members.is_empty() {
            return Err(CompilerError::InvalidUnion {
                message: "a union must have at least one member".to_string(),
            });
        }
        Ok(Type::Union(UnionType { members }))
    }

    /// The nominal identity of this type
    pub fn name(&self) -> &str {
        match self {
            Type::Nominal(name) => name,
            Type::Union(_) => UNION_TYPE_NAME,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Type::Union(_))
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Type::Union(union) => Some(union),
            Type::Nominal(_) => None,
        }
    }

    /// Name equality: true iff both types carry the same name
    pub fn equals(&self, other: &Type) -> bool {
        self.name() == other.name()
    }

    /// Structural equality: nominal types compare by name, unions compare
    /// by member set (order and duplicates ignored). A union never equals
    /// a nominal type.
    pub fn structurally_equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Nominal(a), Type::Nominal(b)) => a == b,
            (Type::Union(a), Type::Union(b)) => a.same_members(b),
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nominal(name) => write!(f, "{}", name),
            Type::Union(union) => write!(f, "{}", union),
        }
    }
}

impl UnionType {
    pub fn members(&self) -> &[Type] {
        &self.members
    }

    /// True iff some member has the same name as `ty`
    pub fn contains(&self, ty: &Type) -> bool {
        self.contains_by(ty, Type::equals)
    }

    /// Membership test under a caller-supplied equality
    pub fn contains_by(&self, ty: &Type, eq: impl Fn(&Type, &Type) -> bool) -> bool {
        trace!("scanning {} union members for '{}'", self.members.len(), ty);
        self.members.iter().any(|member| eq(member, ty))
    }

    fn same_members(&self, other: &UnionType) -> bool {
        let covers = |a: &UnionType, b: &UnionType| {
            a.members
                .iter()
                .all(|m| b.members.iter().any(|n| m.structurally_equals(n)))
        };
        covers(self, other) && covers(other, self)
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            match member {
                Type::Union(inner) => write!(f, "({})", inner)?,
                Type::Nominal(name) => write!(f, "{}", name)?,
            }
        }
        Ok(())
    }
}

/// A value carrying its runtime type tag.
///
/// Nothing is evaluated here; the tag only lets a front end describe which
/// member of a union a value actually holds.
#[derive(Debug, Clone)]
pub struct TaggedValue {
    type_tag: Type,
}

impl TaggedValue {
    pub fn new(type_tag: Type) -> Self {
        Self { type_tag }
    }

    pub fn type_tag(&self) -> &Type {
        &self.type_tag
    }

    /// Runtime discrimination: does the tag match `target` by name?
    pub fn is(&self, target: &Type) -> bool {
        self.type_tag.equals(target)
    }

    /// Whether a value with this tag may be stored in a slot of type `declared`
    pub fn inhabits(&self, declared: &Type) -> bool {
        match declared {
            Type::Union(union) => union.contains(&self.type_tag),
            Type::Nominal(_) => declared.equals(&self.type_tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_types() -> Vec<Type> {
        vec![
            Type::nominal("int"),
            Type::nominal("string"),
            Type::nominal("Point"),
            Type::nominal("union"),
            Type::union(vec![Type::nominal("int"), Type::nominal("bool")]),
            Type::union(vec![Type::nominal("Point")]),
        ]
    }

    #[test]
    fn test_equality_is_reflexive() {
        for ty in sample_types() {
            assert!(ty.equals(&ty), "{} should equal itself", ty);
            assert!(ty.structurally_equals(&ty), "{} should structurally equal itself", ty);
        }
    }

    #[test]
    fn test_equality_is_symmetric() {
        let types = sample_types();
        for a in &types {
            for b in &types {
                assert_eq!(a.equals(b), b.equals(a));
                assert_eq!(a.structurally_equals(b), b.structurally_equals(a));
            }
        }
    }

    #[test]
    fn test_unions_compare_equal_by_name() {
        let a = Type::union(vec![Type::nominal("int")]);
        let b = Type::union(vec![Type::nominal("string"), Type::nominal("Point")]);
        assert!(a.equals(&b));
        assert!(a.equals(&Type::nominal("union")));
        assert!(!a.structurally_equals(&b));
        assert!(!a.structurally_equals(&Type::nominal("union")));
    }

    #[test]
    fn test_structural_equality_ignores_order_and_duplicates() {
        let a = Type::union(vec![Type::nominal("int"), Type::nominal("string")]);
        let b = Type::union(vec![
            Type::nominal("string"),
            Type::nominal("int"),
            Type::nominal("int"),
        ]);
        assert!(a.structurally_equals(&b));
    }

    #[test]
    fn test_union_membership() {
        let members = vec![Type::nominal("int"), Type::nominal("string"), Type::nominal("Point")];
        let union = Type::union(members.clone());
        let union = union.as_union().unwrap();

        for member in &members {
            assert!(union.contains(member));
        }
        assert!(union.contains(&Type::nominal("Point")));
        assert!(!union.contains(&Type::nominal("bool")));
        assert!(!union.contains(&Type::nominal("point")));
    }

    #[test]
    fn test_try_union_rejects_empty() {
        let err = Type::try_union(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), "invalid-union");
        assert!(Type::try_union(vec![Type::nominal("int")]).is_ok());
    }

    #[test]
    fn test_display() {
        let inner = Type::union(vec![Type::nominal("a"), Type::nominal("b")]);
        let ty = Type::union(vec![Type::nominal("int"), inner, Type::nominal("Point")]);
        assert_eq!(ty.to_string(), "int | (a | b) | Point");
        assert_eq!(ty.name(), "union");
        assert_eq!(Type::nominal("int").to_string(), "int");
    }

    #[test]
    fn test_tagged_value() {
        let union = Type::union(vec![Type::nominal("int"), Type::nominal("Point")]);
        let value = TaggedValue::new(Type::nominal("Point"));

        assert!(value.is(&Type::nominal("Point")));
        assert!(!value.is(&Type::nominal("int")));
        assert!(value.inhabits(&union));
        assert!(value.inhabits(&Type::nominal("Point")));
        assert!(!TaggedValue::new(Type::nominal("bool")).inhabits(&union));
        assert_eq!(value.type_tag().name(), "Point");
    }
}
