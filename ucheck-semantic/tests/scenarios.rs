//! End-to-end checks over the `int | string | Point` example

use pretty_assertions::assert_eq;
use ucheck_semantic::*;

struct Fixture {
    int: Type,
    string: Type,
    point: Type,
    boolean: Type,
    union: Type,
}

fn fixture() -> Fixture {
    let int = Type::nominal("int");
    let string = Type::nominal("string");
    let point = Type::nominal("Point");
    let union = Type::union(vec![int.clone(), string.clone(), point.clone()]);
    Fixture {
        int,
        string,
        point,
        boolean: Type::nominal("bool"),
        union,
    }
}

#[test]
fn test_assign_member_to_union_variable() {
    let f = fixture();
    let x = Symbol::new("x", f.union.clone());
    assert_eq!(check_assignment(&x, &f.int), Ok(()));
}

#[test]
fn test_assign_non_member_to_union_variable() {
    let f = fixture();
    let x = Symbol::new("x", f.union.clone());
    let err = check_assignment(&x, &f.boolean).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnionMemberMismatch);
    assert_eq!(err.to_string(), "Cannot assign type 'bool' to union variable 'x'");
}

#[test]
fn test_narrow_then_access_field() {
    let f = fixture();
    let narrowed = check_is(&f.union, &f.point).unwrap();
    assert_eq!(narrowed.name(), "Point");
    assert_eq!(check_field_access(narrowed, "x"), Ok(()));
}

#[test]
fn test_missing_field_after_narrowing() {
    let f = fixture();
    let err = check_field_access(&f.point, "z").unwrap_err();
    assert_eq!(
        err,
        SemanticError::MissingField {
            type_name: "Point".to_string(),
            field: "z".to_string(),
        }
    );
}

#[test]
fn test_field_access_without_narrowing() {
    let f = fixture();
    let err = check_field_access(&f.union, "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsafeUnionAccess);
}

#[test]
fn test_is_on_nominal_type() {
    let f = fixture();
    assert_eq!(
        check_is(&f.int, &f.string).unwrap_err().kind(),
        ErrorKind::InvalidTypeCheck
    );
    assert_eq!(check_is(&f.int, &f.int).unwrap().name(), "int");
}

#[test]
fn test_checks_continue_after_failure() {
    let f = fixture();
    let schema = TableSchema::new().with_type("Point", ["x", "y"]);
    let checker = TypeChecker::new(&schema);
    let x = Symbol::new("x", f.union.clone());

    let outcomes: Vec<Option<ErrorKind>> = vec![
        checker.check_assignment(&x, &f.boolean).err().map(|e| e.kind()),
        checker.check_assignment(&x, &f.string).err().map(|e| e.kind()),
        checker.check_is(&x.ty, &f.boolean).err().map(|e| e.kind()),
        checker.check_field_access(&x.ty, "y").err().map(|e| e.kind()),
        checker
            .check_is(&x.ty, &f.point)
            .and_then(|narrowed| checker.check_field_access(narrowed, "y"))
            .err()
            .map(|e| e.kind()),
    ];

    assert_eq!(
        outcomes,
        vec![
            Some(ErrorKind::UnionMemberMismatch),
            None,
            Some(ErrorKind::InvalidNarrowing),
            Some(ErrorKind::UnsafeUnionAccess),
            None,
        ]
    );
}

#[test]
fn test_errors_convert_to_compiler_errors() {
    let f = fixture();
    let err: ucheck_common::CompilerError = check_field_access(&f.union, "x").unwrap_err().into();
    assert_eq!(err.kind(), "unsafe-union-access");
    assert_eq!(
        err.to_string(),
        "Semantic Error: Unsafe field access 'x' on union type. Type discrimination required."
    );
}
