//! Naturally aligned layout
//!
//! Walks fields in declaration order; before each placement the write cursor
//! is padded forward until it satisfies the field's alignment, then the
//! field's bytes are appended. A nested struct does not get its own aligned
//! sub-block: its fields are inlined directly into the parent's byte stream
//! at the running cursor. Unions are placed as single opaque blocks under the
//! same alignment rule.

use crate::layout::bytes::{ByteMap, LayoutReport};
use crate::registry::{Registry, TypeEntry};

/// Lay out a type with natural alignment and padding.
///
/// Atomics and unions become one contiguous block (the cursor starts at 0,
/// so no leading padding ever appears).
pub fn layout_unpacked(registry: &Registry, entry: &TypeEntry) -> LayoutReport {
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
            Some(entry) => {
                map.pad_to_align(entry.align());
                map.push_used(entry.size());
            }
            // Unknown names were validated away upstream; contribute nothing.
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
    fn test_padding_inserted_before_misaligned_field() {
        let mut registry = Registry::with_builtins();
        registry
            .insert_struct("S", names(&["int", "char", "short"]))
            .unwrap();

        let entry = registry.lookup("S").unwrap().clone();
        let report = layout_unpacked(&registry, &entry);
        // int 0..4, char at 4, pad at 5, short 6..8
        assert_eq!(report.bytes, vec![1, 1, 1, 1, 1, 0, 1, 1]);
        assert_eq!((report.used, report.wasted, report.total), (7, 1, 8));
    }

    #[test]
    fn test_nested_struct_inlines_at_cursor() {
        let mut registry = Registry::with_builtins();
        registry.insert_struct("Inner", names(&["short"])).unwrap();
        registry
            .insert_struct("Outer", names(&["char", "Inner"]))
            .unwrap();

        let entry = registry.lookup("Outer").unwrap().clone();
        let report = layout_unpacked(&registry, &entry);
        // char at 0, pad at 1, short 2..4 - Inner's block is not re-aligned
        // as a unit, its field is.
        assert_eq!(report.bytes, vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_union_is_an_opaque_aligned_block() {
        let mut registry = Registry::with_builtins();
        registry
            .insert_union("Num", names(&["int", "double"]))
            .unwrap();
        registry
            .insert_struct("S", names(&["char", "Num"]))
            .unwrap();

        let entry = registry.lookup("S").unwrap().clone();
        let report = layout_unpacked(&registry, &entry);
        // char at 0, pad 1..8 (union align 8), union block 8..16
        assert_eq!(report.used, 9);
        assert_eq!(report.wasted, 7);
        assert_eq!(report.total, 16);
    }

    #[test]
    fn test_atomic_lays_out_as_its_own_block() {
        let registry = Registry::with_builtins();
        let entry = registry.lookup("double").unwrap().clone();
        let report = layout_unpacked(&registry, &entry);
        assert_eq!((report.used, report.wasted, report.total), (8, 0, 8));
    }
}
