//! Field schemas
//! 
//! A schema answers one question: does a nominal type expose a field with
//! the given name? Union types have no schema; the field access rule
//! rejects them before a schema is ever consulted.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Lookup of the fields exposed by nominal types
pub trait FieldSchema {
    fn has_field(&self, type_name: &str, field: &str) -> bool;
}

impl<F> FieldSchema for F
where
    F: Fn(&str, &str) -> bool,
{
    fn has_field(&self, type_name: &str, field: &str) -> bool {
        self(type_name, field)
    }
}

/// The built-in schema: `Point` has fields `x` and `y`, nothing else has fields
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSchema;

impl FieldSchema for BuiltinSchema {
    fn has_field(&self, type_name: &str, field: &str) -> bool {
        match type_name {
            "Point" => matches!(field, "x" | "y"),
            _ => false,
        }
    }
}

/// Schema populated by a front end, one field set per object type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableSchema {
    types: HashMap<String, BTreeSet<String>>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register fields for a type. Fields accumulate across calls.
    pub fn register<I, S>(&mut self, type_name: &str, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types
            .entry(type_name.to_string())
            .or_default()
            .extend(fields.into_iter().map(Into::into));
    }

    pub fn with_type<I, S>(mut self, type_name: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(type_name, fields);
        self
    }

    /// Fields of a type in sorted order
    pub fn fields(&self, type_name: &str) -> Option<impl Iterator<Item = &str>> {
        self.types
            .get(type_name)
            .map(|fields| fields.iter().map(String::as_str))
    }
}

impl FieldSchema for TableSchema {
    fn has_field(&self, type_name: &str, field: &str) -> bool {
        self.types
            .get(type_name)
            .is_some_and(|fields| fields.contains(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schema() {
        let schema = BuiltinSchema;
        assert!(schema.has_field("Point", "x"));
        assert!(schema.has_field("Point", "y"));
        assert!(!schema.has_field("Point", "z"));
        assert!(!schema.has_field("int", "x"));
        assert!(!schema.has_field("union", "x"));
    }

    #[test]
    fn test_table_schema() {
        let mut schema = TableSchema::new().with_type("Point", ["x", "y"]);
        schema.register("Point", ["z"]);
        schema.register("Circle", vec!["radius".to_string()]);

        assert!(schema.has_field("Point", "z"));
        assert!(schema.has_field("Circle", "radius"));
        assert!(!schema.has_field("Circle", "x"));
        assert!(!schema.has_field("Square", "side"));

        let fields: Vec<&str> = schema.fields("Point").unwrap().collect();
        assert_eq!(fields, vec!["x", "y", "z"]);
        assert!(schema.fields("Square").is_none());
    }

    #[test]
    fn test_table_schema_from_json() {
        let schema: TableSchema =
            serde_json::from_str(r#"{ "Circle": ["radius"], "Point": ["x", "y"] }"#).unwrap();
        assert!(schema.has_field("Circle", "radius"));
        assert!(schema.has_field("Point", "y"));
    }

    #[test]
    fn test_closure_schema() {
        let schema = |type_name: &str, field: &str| type_name == "Pair" && field.len() == 1;
        assert!(schema.has_field("Pair", "a"));
        assert!(!schema.has_field("Pair", "ab"));
    }
}
