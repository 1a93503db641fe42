//! Best-score persistence
//!
//! A single integer stored under one key. Anything missing or unparsable
//! counts as zero.

use crate::persistence::{Storage, StorageError};

/// Storage key for the best score
pub const STORAGE_KEY: &str = "best";

/// Load the best score, falling back to 0
pub fn load_best(storage: &dyn Storage) -> u32 {
    match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(best) => {
                log::info!("Loaded best score {}", best);
                best
            }
            Err(_) => {
                log::warn!("Ignoring malformed best score {:?}", raw);
                0
            }
        },
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Could not read best score: {}", e);
            0
        }
    }
}

/// Persist the best score
pub fn save_best(storage: &mut dyn Storage, best: u32) -> Result<(), StorageError> {
    storage.set(STORAGE_KEY, &best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_missing_is_zero() {
        let store = MemoryStorage::new();
        assert_eq!(load_best(&store), 0);
    }

    #[test]
    fn test_malformed_is_zero() {
        let mut store = MemoryStorage::new();
        for raw in ["", "abc", "-3", "1.5"] {
            store.set(STORAGE_KEY, raw).unwrap();
            assert_eq!(load_best(&store), 0, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStorage::new();
        save_best(&mut store, 17).unwrap();
        assert_eq!(load_best(&store), 17);

        store.set(STORAGE_KEY, " 23\n").unwrap();
        assert_eq!(load_best(&store), 23);
    }
}
