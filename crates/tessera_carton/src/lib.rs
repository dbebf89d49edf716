//! Carton - The artist's toolbox for Tessera.
//!
//! This crate provides the shared data structures used across the Tessera
//! workspace, much like a carton (artist's portfolio case) holds all the
//! essential tools and materials an artist needs for their work.
//!
//! # Modules
//!
//! - **Collections**: insertion-ordered and fast-hash maps, stack-optimized vectors
//! - **DOM tag config**: static tag tables shared by hosts and serializers
//!
//! # Example
//!
//! ```
//! use tessera_carton::{CompactString, FxIndexMap};
//!
//! let mut attrs: FxIndexMap<CompactString, u32> = FxIndexMap::default();
//! attrs.insert("b".into(), 1);
//! attrs.insert("a".into(), 2);
//!
//! // Iteration follows insertion order, not key order
//! let keys: Vec<&str> = attrs.keys().map(|k| k.as_str()).collect();
//! assert_eq!(keys, ["b", "a"]);
//! ```

pub mod dom_tag_config;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

// Re-export compact_str::CompactString for convenience
pub use compact_str::{format_compact, CompactString};

// Re-export smallvec for stack-optimized collections
pub use smallvec::SmallVec;

// Re-export rustc-hash for fast hash maps
pub use rustc_hash::FxHashMap;

// Re-export shared utilities
pub use dom_tag_config::*;

/// Insertion-ordered map keyed with the Fx hasher.
///
/// Attribute and style maps are iterated in author order, which is observable
/// in serialized host output.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
