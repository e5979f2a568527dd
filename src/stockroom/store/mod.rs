//! # Storage Layer
//!
//! The [`ProductStore`] trait is the seam between the in-memory [`Inventory`] and wherever
//! its snapshot lives. A store only knows how to load and save the *whole* id → product map;
//! there are no per-record operations, because the inventory rewrites everything after each
//! mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single pretty-printed JSON file, `inventory.json` by default
//!   - Overwritten in place on every save
//!
//! - [`memory::InMemoryStore`]: Storage for tests
//!   - Keeps the last saved snapshot in memory
//!   - Can be told to fail reads or writes
//!
//! ## Storage Format
//!
//! ```text
//! .stockroom/
//! ├── inventory.json      # { "<id>": { "id": ..., "name": ..., ... }, ... }
//! └── config.json         # Scope configuration
//! ```
//!
//! [`Inventory`]: crate::inventory::Inventory

use crate::error::Result;
use crate::model::Product;
use std::collections::HashMap;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory snapshots.
pub trait ProductStore {
    /// Load the full map. A store with nothing saved yet returns an empty map.
    fn load(&self) -> Result<HashMap<String, Product>>;

    /// Replace whatever was saved before with `products`.
    fn save(&mut self, products: &HashMap<String, Product>) -> Result<()>;

    /// Where the snapshot lives, for stores that have a path.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
