//! Local persistence for the Comfort temperature widget.
//!
//! Widget state lives in a durable string key-value store, one key per field
//! (unit, temperature, comfort bounds, history). This crate provides the
//! store abstraction, a SQLite backend, and the per-field decoding used to
//! restore state on startup.
//!
//! # Features
//!
//! - [`KeyValueStore`] trait with SQLite ([`SqliteStore`]) and in-memory
//!   ([`MemoryStore`]) backends
//! - Best-effort, per-field decoding ([`decode`])
//! - [`PersistedState`] load/save/clear over the widget's keys
//! - History export as CSV or JSON
//!
//! # Example
//!
//! ```
//! use comfort_store::{KeyValueStore, MemoryStore, PersistedState, keys};
//!
//! let mut store = MemoryStore::new();
//! store.set(keys::TEMP_C, "24")?;
//! store.set(keys::HISTORY, "not json")?;
//!
//! let state = PersistedState::load(&store);
//! assert_eq!(state.temperature, Some(24));
//! assert_eq!(state.history, None);
//! # Ok::<(), comfort_store::Error>(())
//! ```

pub mod decode;
mod error;
mod export;
mod kv;
mod persist;
mod schema;
mod store;

pub use error::{Error, Result};
pub use export::{export_history_csv, export_history_json};
pub use kv::{KeyValueStore, MemoryStore};
pub use persist::{PersistedState, keys};
pub use store::SqliteStore;

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/comfort/widget.db`
/// - macOS: `~/Library/Application Support/comfort/widget.db`
/// - Windows: `C:\Users\<user>\AppData\Local\comfort\widget.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("comfort")
        .join("widget.db")
}
