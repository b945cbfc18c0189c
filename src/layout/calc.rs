//! Size and alignment derivation
//!
//! Pure functions deriving a composite's size and alignment from its field
//! list by consulting the registry. These run once, at insertion time; the
//! results are cached on the stored entry and re-read by every later layout.
//!
//! # Derivation Rules
//!
//! - Struct size: sum of the resolved field sizes in declaration order.
//!   Padding is a layout-strategy concern, not a size-derivation concern.
//! - Struct alignment: the alignment of the *first* declared field,
//!   propagated recursively through nested structs via their cached aligns.
//!   This intentionally ignores every other field - it keeps alignment
//!   propagation monotonic and cheap, and is not a real ABI's max-over-fields
//!   rule.
//! - Union size: maximum resolved field size.
//! - Union alignment: least common multiple of the field alignments, seeded
//!   at 1. A union's start address must satisfy every member's alignment
//!   simultaneously, and the lcm is the smallest such divisor.

use crate::registry::Registry;

/// Resolved size of a named type: stored size for atomics, cached size for
/// composites. A missing name resolves to 0 (callers validate existence
/// before composites are inserted; this is the documented fallback, not an
/// error path).
pub fn size_of(registry: &Registry, name: &str) -> usize {
    registry.get(name).map_or(0, |entry| entry.size())
}

/// Resolved alignment of a named type. A missing name resolves to 1.
pub fn align_of(registry: &Registry, name: &str) -> usize {
    registry.get(name).map_or(1, |entry| entry.align())
}

/// Sum of the resolved field sizes, in declaration order.
pub fn struct_size(registry: &Registry, fields: &[String]) -> usize {
    fields.iter().map(|f| size_of(registry, f)).sum()
}

/// Alignment of the first declared field; 1 for an empty field list.
pub fn struct_align(registry: &Registry, fields: &[String]) -> usize {
    match fields.first() {
        Some(first) => align_of(registry, first),
        None => 1,
    }
}

/// Maximum resolved field size; 0 for an empty field list.
pub fn union_size(registry: &Registry, fields: &[String]) -> usize {
    fields.iter().map(|f| size_of(registry, f)).max().unwrap_or(0)
}

/// Least common multiple of the resolved field alignments, seeded at 1.
pub fn union_align(registry: &Registry, fields: &[String]) -> usize {
    fields
        .iter()
        .fold(1, |acc, f| lcm(acc, align_of(registry, f)))
}

/// Least common multiple of two alignments.
pub(crate) fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_basics() -> Registry {
        Registry::with_builtins()
    }

    #[test]
    fn test_lcm_basics() {
        assert_eq!(lcm(4, 8), 8);
        assert_eq!(lcm(3, 4), 12);
        assert_eq!(lcm(1, 7), 7);
        assert_eq!(lcm(6, 4), 12);
    }

    #[test]
    fn test_struct_size_is_sum_of_parts() {
        let registry = registry_with_basics();
        let fields = vec!["int".to_string(), "char".to_string(), "short".to_string()];
        assert_eq!(struct_size(&registry, &fields), 4 + 1 + 2);
    }

    #[test]
    fn test_struct_align_is_first_field() {
        let registry = registry_with_basics();
        let fields = vec!["char".to_string(), "double".to_string()];
        assert_eq!(struct_align(&registry, &fields), 1);
    }

    #[test]
    fn test_union_size_is_max() {
        let registry = registry_with_basics();
        let fields = vec!["int".to_string(), "double".to_string(), "short".to_string()];
        assert_eq!(union_size(&registry, &fields), 8);
    }

    #[test]
    fn test_union_align_is_lcm() {
        let registry = registry_with_basics();
        // lcm(4, 8, 2) = 8
        let fields = vec!["int".to_string(), "double".to_string(), "short".to_string()];
        assert_eq!(union_align(&registry, &fields), 8);
    }

    #[test]
    fn test_union_align_composes_odd_alignments() {
        let mut registry = Registry::new();
        registry.insert_atomic("a3", 3, 3).unwrap();
        registry.insert_atomic("b4", 4, 4).unwrap();
        let fields = vec!["a3".to_string(), "b4".to_string()];
        assert_eq!(union_align(&registry, &fields), 12);
    }

    #[test]
    fn test_missing_name_falls_back() {
        let registry = Registry::new();
        assert_eq!(size_of(&registry, "ghost"), 0);
        assert_eq!(align_of(&registry, "ghost"), 1);
    }
}
