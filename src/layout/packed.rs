//! Fully packed layout
//!
//! Identical traversal and nesting behavior to the unpacked strategy, with
//! alignment ignored entirely: every field is appended immediately after the
//! previous one. No padding is ever written, so `wasted` is always 0 and the
//! footprint equals the struct's sum-of-parts size.

use crate::layout::bytes::{ByteMap, LayoutReport};
use crate::registry::{Registry, TypeEntry};

/// Lay out a type with zero padding.
pub fn layout_packed(registry: &Registry, entry: &TypeEntry) -> LayoutReport {
    let mut map = ByteMap::new();
    match entry {
        TypeEntry::Struct(s) => place_fields(registry, &s.fields, &mut map),
        TypeEntry::Atomic(_) | TypeEntry::Union(_) => map.push_used(entry.size()),
    }
    map.into_report()
}

fn place_fields(registry: &Registry, fields: &[String], map: &mut ByteMap) {
    for field_name in fields {
        match registry.get(field_name) {
            Some(TypeEntry::Struct(inner)) => {
                place_fields(registry, &inner.fields, map);
            }
            Some(entry) => map.push_used(entry.size()),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_packed_has_zero_waste() {
        let mut registry = Registry::with_builtins();
        registry
            .insert_struct("S", names(&["int", "char", "short"]))
            .unwrap();

        let entry = registry.lookup("S").unwrap().clone();
        let report = layout_packed(&registry, &entry);
        assert_eq!(report.bytes, vec![1, 1, 1, 1, 1, 1, 1]);
        assert_eq!((report.used, report.wasted, report.total), (7, 0, 7));
    }

    #[test]
    fn test_packed_footprint_equals_cached_size() {
        let mut registry = Registry::with_builtins();
        registry
            .insert_struct(
                "MyStruct1",
                names(&["int", "char", "char", "int", "double", "bool"]),
            )
            .unwrap();
        registry
            .insert_struct("Wrap", names(&["MyStruct1", "bool", "char"]))
            .unwrap();

        let entry = registry.lookup("Wrap").unwrap().clone();
        let report = layout_packed(&registry, &entry);
        assert_eq!(report.total, entry.size());
        assert_eq!(report.wasted, 0);
    }
}
