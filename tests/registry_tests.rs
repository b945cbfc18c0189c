// Integration tests for the type registry and size/alignment derivation

use structty::registry::{Registry, RegistryError, TypeEntry};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_insert_atomic() {
    let mut registry = Registry::new();
    registry.insert_atomic("mychar", 1, 1).unwrap();

    let entry = registry.lookup("mychar").unwrap();
    match entry {
        TypeEntry::Atomic(a) => {
            assert_eq!(a.name, "mychar");
            assert_eq!(a.size, 1);
            assert_eq!(a.align, 1);
        }
        _ => panic!("Expected an atomic entry"),
    }
}

#[test]
fn test_atomic_rejects_nonpositive_dimensions() {
    let mut registry = Registry::new();

    let err = registry.insert_atomic("bad", 0, 4).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidDimension { .. }));

    let err = registry.insert_atomic("bad", 4, -2).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidDimension { .. }));

    // The registry stays untouched on failure
    assert!(!registry.contains("bad"));
}

#[test]
fn test_builtin_seed() {
    let registry = Registry::with_builtins();
    for (name, size, align) in [
        ("char", 1, 1),
        ("short", 2, 2),
        ("int", 4, 4),
        ("long", 8, 8),
        ("float", 4, 4),
        ("double", 8, 8),
        ("bool", 1, 2),
    ] {
        let entry = registry.lookup(name).unwrap();
        assert_eq!(entry.size(), size, "size of {}", name);
        assert_eq!(entry.align(), align, "align of {}", name);
    }
}

#[test]
fn test_flat_struct_dimensions() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_struct(
            "MyStruct1",
            names(&["int", "char", "char", "int", "double", "bool"]),
        )
        .unwrap();

    let entry = registry.lookup("MyStruct1").unwrap();
    assert_eq!(entry.size(), 19); // 4+1+1+4+8+1
    assert_eq!(entry.align(), 4); // first field is int
}

#[test]
fn test_nested_struct_uses_cached_dimensions() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_struct(
            "MyStruct1",
            names(&["int", "char", "char", "int", "double", "bool"]),
        )
        .unwrap();
    registry
        .insert_struct("MyStruct2", names(&["MyStruct1", "bool", "char"]))
        .unwrap();

    let entry = registry.lookup("MyStruct2").unwrap();
    assert_eq!(entry.size(), 21); // 19 + 1 + 1
    assert_eq!(entry.align(), 4); // MyStruct1's cached align
}

#[test]
fn test_first_field_alignment_propagates_recursively() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_struct("Inner", names(&["double", "char"]))
        .unwrap();
    registry
        .insert_struct("Outer", names(&["Inner", "int"]))
        .unwrap();

    // Outer's first field is Inner, whose first field is double (align 8).
    assert_eq!(registry.lookup("Outer").unwrap().align(), 8);
}

#[test]
fn test_union_max_size_and_lcm_alignment() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_union("U1", names(&["int", "double", "short"]))
        .unwrap();

    let entry = registry.lookup("U1").unwrap();
    assert_eq!(entry.size(), 8); // max(4, 8, 2)
    assert_eq!(entry.align(), 8); // lcm(4, 8, 2)
}

#[test]
fn test_union_of_struct() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_struct(
            "MyStruct1",
            names(&["int", "char", "char", "int", "double", "bool"]),
        )
        .unwrap();
    registry
        .insert_union("MyUnion1", names(&["MyStruct1"]))
        .unwrap();

    let entry = registry.lookup("MyUnion1").unwrap();
    assert_eq!(entry.size(), 19);
    assert_eq!(entry.align(), 4);
}

#[test]
fn test_struct_of_union() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_union("MyUnion1", names(&["int", "char", "double"]))
        .unwrap();
    registry
        .insert_struct("Holder", names(&["MyUnion1"]))
        .unwrap();

    let entry = registry.lookup("Holder").unwrap();
    assert_eq!(entry.size(), 8);
    assert_eq!(entry.align(), 8);
}

#[test]
fn test_self_reference_rejected() {
    let mut registry = Registry::with_builtins();

    let err = registry
        .insert_struct("R", names(&["int", "R"]))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::SelfReference {
            name: "R".to_string()
        }
    );
    assert!(!registry.contains("R"));

    let err = registry.insert_union("U", names(&["U"])).unwrap_err();
    assert!(matches!(err, RegistryError::SelfReference { .. }));
    assert!(!registry.contains("U"));
}

#[test]
fn test_lookup_unknown_type() {
    let registry = Registry::new();
    let err = registry.lookup("ghost").unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownType {
            name: "ghost".to_string()
        }
    );
}

#[test]
fn test_overwrite_keeps_composites_stale() {
    let mut registry = Registry::with_builtins();
    registry
        .insert_struct("Pair", names(&["int", "int"]))
        .unwrap();
    assert_eq!(registry.lookup("Pair").unwrap().size(), 8);

    // Shrink int out from under Pair; the cached size must not move.
    registry.insert_atomic("int", 2, 2).unwrap();
    assert_eq!(registry.lookup("Pair").unwrap().size(), 8);
    assert_eq!(registry.lookup("int").unwrap().size(), 2);
}

#[test]
fn test_overwrite_keeps_listing_position() {
    let mut registry = Registry::new();
    registry.insert_atomic("a", 1, 1).unwrap();
    registry.insert_atomic("b", 2, 2).unwrap();
    registry.insert_atomic("a", 4, 4).unwrap();

    assert_eq!(registry.names(), &["a".to_string(), "b".to_string()]);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.lookup("a").unwrap().size(), 4);
}
