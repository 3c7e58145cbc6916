//! errata-storage
//!
//! Key-value persistence. A small capability trait plus a file-backed and an
//! in-memory implementation, and JSON helpers on top.

pub mod error;
pub mod fs;
pub mod memory;
pub mod state;
pub mod store;

pub use error::StorageError;
pub use fs::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
