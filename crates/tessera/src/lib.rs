//! # Tessera
//!
//! Keyed virtual tree reconciler written in Rust.
//!
//! This crate re-exports all Tessera sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared collections and tag tables
//! - [`relief`] - Virtual node model, description grammar and host trait
//! - [`atelier`] - Reconciler (mount, diff, remove)
//! - [`gesso`] - In-memory reference host with HTML serialization

/// Shared collections and tag tables.
pub use tessera_carton as carton;

/// Virtual node model, description grammar and host trait.
pub use tessera_relief as relief;

/// Reconciler (mount, diff, remove).
pub use tessera_atelier as atelier;

/// In-memory reference host with HTML serialization.
pub use tessera_gesso as gesso;
