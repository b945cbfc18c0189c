//! Recursive field flattening
//!
//! Walks a struct's fields depth-first, left-to-right, inlining nested
//! structs and collecting the genuinely placeable leaves: atomics and unions.
//! Unions stay opaque - they are sized and aligned as single blocks, so their
//! members never appear in a flattened list.
//!
//! Recursion depth is bounded by the nesting depth of the declarations.
//! Immediate self-reference is rejected at insertion; an indirect cycle
//! (A embeds B, B embeds A) is not detected anywhere and would recurse
//! without bound here, matching the registry's documented gap.

use crate::layout::calc::align_of;
use crate::registry::{Registry, TypeEntry};

/// Flatten a field list into its placeable leaves, depth-first in
/// declaration order.
pub fn flatten(registry: &Registry, fields: &[String]) -> Vec<String> {
    let mut leaves = Vec::new();
    collect_leaves(registry, fields, &mut leaves);
    leaves
}

fn collect_leaves(registry: &Registry, fields: &[String], leaves: &mut Vec<String>) {
    for field_name in fields {
        match registry.get(field_name) {
            Some(TypeEntry::Struct(inner)) => {
                // Inline the nested struct's fields, never its own name.
                collect_leaves(registry, &inner.fields, leaves);
            }
            Some(TypeEntry::Atomic(_)) | Some(TypeEntry::Union(_)) | None => {
                leaves.push(field_name.clone());
            }
        }
    }
}

/// Flatten, then sort the leaves by alignment descending. The sort is stable:
/// leaves with equal alignment keep their flattened relative order.
pub fn sort_by_alignment(registry: &Registry, fields: &[String]) -> Vec<String> {
    let mut leaves = flatten(registry, fields);
    leaves.sort_by(|a, b| align_of(registry, b).cmp(&align_of(registry, a)));
    leaves
}
