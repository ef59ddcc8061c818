//! Solar-system configuration store
//!
//! The destination for imported comet elements: an INI-style file of named
//! sections, one per body, each holding the key/value settings the host's
//! solar-system loader reads.
//!
//! - [`store`] - The section store: load, upsert, atomic flush
//! - [`paths`] - Per-user store location, bootstrap and reset

pub mod paths;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use paths::StoreLayout;
pub use store::SolarSystemStore;
