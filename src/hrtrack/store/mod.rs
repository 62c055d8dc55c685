//! # Storage Layer
//!
//! This module defines the persistence abstraction for hrtrack. The
//! [`StateStore`] trait is a small key-value contract: four fixed keys, one
//! serialized collection per key.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (embedded database, remote storage) without
//!   changing the domain state logic
//! - Keep the domain state **decoupled** from the storage medium
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one JSON file per
//!   collection (`hr-employees.json`, `hr-reviews.json`, ...)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Guarantees
//!
//! Each collection is saved independently and last-write-wins; there is no
//! partial-write or cross-collection transactional guarantee. A missing entry
//! loads as `None` — the domain state initializes that collection empty.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// The four persisted collections and their fixed storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Employees,
    Reviews,
    Documents,
    Incidents,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Employees,
        Collection::Reviews,
        Collection::Documents,
        Collection::Incidents,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Collection::Employees => "hr-employees",
            Collection::Reviews => "hr-reviews",
            Collection::Documents => "hr-documents",
            Collection::Incidents => "hr-incidents",
        }
    }
}

/// Abstract interface for persisted collection state.
///
/// Implementations must return `Ok(None)` for keys that have never been
/// saved, and overwrite wholesale on save.
pub trait StateStore {
    /// Load the serialized payload for a collection, if present
    fn load(&self, collection: Collection) -> Result<Option<String>>;

    /// Persist the serialized payload for a collection (overwrites)
    fn save(&mut self, collection: Collection, payload: &str) -> Result<()>;
}
