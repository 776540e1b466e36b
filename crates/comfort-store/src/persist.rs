//! Persisted widget state.

use tracing::{debug, warn};

use comfort_types::{History, Unit};

use crate::decode::{decode_history, decode_number, decode_unit};
use crate::error::Result;
use crate::kv::KeyValueStore;

/// Storage keys, one per field.
pub mod keys {
    /// Display unit, `"C"` or `"F"`.
    pub const UNIT: &str = "st_unit";
    /// Canonical temperature in Celsius.
    pub const TEMP_C: &str = "st_temp_c";
    /// Lower comfort bound in Celsius.
    pub const MIN_C: &str = "st_min_c";
    /// Upper comfort bound in Celsius.
    pub const MAX_C: &str = "st_max_c";
    /// JSON array of saved readings.
    pub const HISTORY: &str = "st_history";

    /// Every key owned by the widget.
    pub const ALL: [&str; 5] = [UNIT, TEMP_C, MIN_C, MAX_C, HISTORY];
}

/// Widget state as stored, one optional value per key.
///
/// When loading, `None` means the key was absent or malformed. When saving,
/// `None` removes the key so the next load falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub unit: Option<Unit>,
    pub temperature: Option<i32>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub history: Option<History>,
}

impl PersistedState {
    /// Read and decode every key independently.
    ///
    /// A read error on one key is logged and treated as an absent value.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let read = |key: &str| match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, "Failed to read stored value: {}", e);
                None
            }
        };

        let state = Self {
            unit: decode_unit(read(keys::UNIT).as_deref()),
            temperature: decode_number(read(keys::TEMP_C).as_deref()),
            min: decode_number(read(keys::MIN_C).as_deref()),
            max: decode_number(read(keys::MAX_C).as_deref()),
            history: decode_history(read(keys::HISTORY).as_deref()),
        };
        debug!(?state, "Loaded persisted state");
        state
    }

    /// Write every field. `None` fields are removed from the store.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        write(store, keys::UNIT, self.unit.map(|u| u.code().to_string()))?;
        write(store, keys::TEMP_C, self.temperature.map(|t| t.to_string()))?;
        write(store, keys::MIN_C, self.min.map(|v| v.to_string()))?;
        write(store, keys::MAX_C, self.max.map(|v| v.to_string()))?;
        let history = match &self.history {
            Some(history) => Some(serde_json::to_string(history)?),
            None => None,
        };
        write(store, keys::HISTORY, history)?;
        Ok(())
    }

    /// Remove every widget key from the store.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
        for key in keys::ALL {
            store.remove(key)?;
        }
        Ok(())
    }
}

fn write<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: Option<String>) -> Result<()> {
    match value {
        Some(value) => store.set(key, &value),
        None => store.remove(key),
    }
}
