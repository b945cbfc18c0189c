//! Type registry
//!
//! This module provides the [`Registry`], the single store mapping type names
//! to [`TypeEntry`] values. Insertion is the only mutation; the calculator,
//! resolver, and layout strategies are all read-only over it.
//!
//! # Insertion Contract
//!
//! - `insert_atomic` rejects non-positive dimensions with
//!   [`RegistryError::InvalidDimension`].
//! - `insert_struct` / `insert_union` reject a declaration that lists its own
//!   name as a field with [`RegistryError::SelfReference`], then derive and
//!   cache the composite's size and alignment from the already-registered
//!   field types. Field names are NOT checked for existence here - callers
//!   validate them before inserting (the console does this). Indirect cycles
//!   (A embeds B, B embeds A) are likewise not detected.
//! - Inserting under an existing name silently overwrites the old entry.
//!   Composites that already embedded the old entry keep their cached
//!   dimensions; nothing re-derives them.

pub mod entry;

use crate::layout::calc;
use rustc_hash::FxHashMap;
use std::fmt;

pub use entry::{AtomicType, StructType, TypeEntry, TypeKind, UnionType};

/// Errors surfaced by registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Atomic insertion with a non-positive size or alignment
    InvalidDimension {
        name: String,
        size: i64,
        align: i64,
    },

    /// A struct or union declared itself as one of its own fields
    SelfReference { name: String },

    /// Lookup of a name absent from the registry
    UnknownType { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidDimension { name, size, align } => {
                write!(
                    f,
                    "Invalid dimensions for '{}': size {} and alignment {} must be positive",
                    name, size, align
                )
            }
            RegistryError::SelfReference { name } => {
                write!(f, "Recursive declaration of type '{}'", name)
            }
            RegistryError::UnknownType { name } => {
                write!(f, "Unknown type '{}'", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The process-wide type store, owned and threaded explicitly by the caller
/// rather than living in a global.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: FxHashMap<String, TypeEntry>,
    insertion_order: Vec<String>, // listing order; FxHashMap iteration is unstable
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            entries: FxHashMap::default(),
            insertion_order: Vec::new(),
        }
    }

    /// Create a registry pre-seeded with the built-in atomics.
    ///
    /// Note `bool` deliberately carries a 2-byte alignment despite its 1-byte
    /// size; several listings and layouts exercise that mismatch.
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();
        for (name, size, align) in [
            ("char", 1, 1),
            ("short", 2, 2),
            ("int", 4, 4),
            ("long", 8, 8),
            ("float", 4, 4),
            ("double", 8, 8),
            ("bool", 1, 2),
        ] {
            // Dimensions are static positives; insertion cannot fail.
            let _ = registry.insert_atomic(name, size, align);
        }
        registry
    }

    /// Register an atomic type.
    ///
    /// Fails with [`RegistryError::InvalidDimension`] when `size` or `align`
    /// is not strictly positive; the registry is left unmodified.
    pub fn insert_atomic(&mut self, name: &str, size: i64, align: i64) -> Result<(), RegistryError> {
        if size <= 0 || align <= 0 {
            return Err(RegistryError::InvalidDimension {
                name: name.to_string(),
                size,
                align,
            });
        }

        self.store(TypeEntry::Atomic(AtomicType {
            name: name.to_string(),
            size: size as usize,
            align: align as usize,
        }));
        Ok(())
    }

    /// Register a struct type, deriving and caching its size and alignment.
    ///
    /// Fails with [`RegistryError::SelfReference`] if `name` appears among
    /// `fields`; the registry is left unmodified. Field names are assumed to
    /// already exist (caller-validated).
    pub fn insert_struct(&mut self, name: &str, fields: Vec<String>) -> Result<(), RegistryError> {
        self.reject_self_reference(name, &fields)?;

        let size = calc::struct_size(self, &fields);
        let align = calc::struct_align(self, &fields);
        self.store(TypeEntry::Struct(StructType {
            name: name.to_string(),
            fields,
            size,
            align,
        }));
        Ok(())
    }

    /// Register a union type, deriving and caching its size and alignment.
    ///
    /// Same contract as [`Registry::insert_struct`], substituted for union
    /// accumulation rules (max size, lcm alignment).
    pub fn insert_union(&mut self, name: &str, fields: Vec<String>) -> Result<(), RegistryError> {
        self.reject_self_reference(name, &fields)?;

        let size = calc::union_size(self, &fields);
        let align = calc::union_align(self, &fields);
        self.store(TypeEntry::Union(UnionType {
            name: name.to_string(),
            fields,
            size,
            align,
        }));
        Ok(())
    }

    /// Look up an entry by name.
    pub fn lookup(&self, name: &str) -> Result<&TypeEntry, RegistryError> {
        self.entries.get(name).ok_or_else(|| RegistryError::UnknownType {
            name: name.to_string(),
        })
    }

    /// Non-failing lookup for internal traversals.
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in insertion order (for stable listings).
    pub fn names(&self) -> &[String] {
        &self.insertion_order
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reject_self_reference(&self, name: &str, fields: &[String]) -> Result<(), RegistryError> {
        if fields.iter().any(|f| f == name) {
            return Err(RegistryError::SelfReference {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn store(&mut self, entry: TypeEntry) {
        let name = entry.name().to_string();
        if self.entries.insert(name.clone(), entry).is_none() {
            self.insertion_order.push(name);
        }
        // Overwrites keep their original listing position.
    }
}
