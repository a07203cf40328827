//! # Liked Listings Module
//!
//! ## Purpose
//! The single canonical home for liked/favorite listing state: a value object
//! holding the liked ID set plus per-listing metadata, an explicit load/save
//! boundary to a storage collaborator, and listener registration so interested
//! views can refresh on change.
//!
//! ## Input/Output Specification
//! - **Input**: Listing records to like/unlike, a `LikedStore` collaborator
//! - **Output**: Membership queries, ordered liked entries, change events
//! - **Persistence**: Only through the `LikedStore` boundary, never implicit

use crate::errors::{Result, SearchError};
use crate::{ListingId, PropertyRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Metadata retained for a liked listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedEntry {
    /// The liked listing
    pub id: ListingId,
    /// Listing title at the time it was liked
    pub title: String,
    /// Address at the time it was liked
    pub address: String,
    /// When the listing was liked
    pub liked_at: DateTime<Utc>,
}

/// Storage collaborator for liked state
pub trait LikedStore {
    fn load(&self) -> Result<Vec<LikedEntry>>;
    fn save(&self, entries: &[LikedEntry]) -> Result<()>;
}

/// Change listener invoked with the current liked IDs
pub type LikedListener = Box<dyn Fn(&[ListingId])>;

/// Liked-listing state with change notification
#[derive(Default)]
pub struct LikedSet {
    entries: BTreeMap<ListingId, LikedEntry>,
    listeners: Vec<LikedListener>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the listing is currently liked
    pub fn contains(&self, id: &ListingId) -> bool {
        self.entries.contains_key(id)
    }

    /// Currently liked IDs in stable (ID) order
    pub fn ids(&self) -> Vec<ListingId> {
        self.entries.keys().copied().collect()
    }

    /// Currently liked entries in stable (ID) order
    pub fn entries(&self) -> Vec<LikedEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Toggle the liked state of a record; returns whether it is now liked
    pub fn toggle(&mut self, record: &PropertyRecord) -> bool {
        let now_liked = if self.entries.remove(&record.id).is_none() {
            self.entries.insert(
                record.id,
                LikedEntry {
                    id: record.id,
                    title: record.title.clone(),
                    address: record.address.clone(),
                    liked_at: Utc::now(),
                },
            );
            true
        } else {
            false
        };
        self.notify();
        now_liked
    }

    /// Remove a listing from the liked set; returns whether it was present
    pub fn unlike(&mut self, id: &ListingId) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            self.notify();
        }
        removed
    }

    /// Register a change listener; it fires on every subsequent change
    pub fn subscribe(&mut self, listener: LikedListener) {
        self.listeners.push(listener);
    }

    /// Replace the in-memory state from the storage collaborator
    pub fn load_from(&mut self, store: &dyn LikedStore) -> Result<()> {
        let entries = store.load()?;
        self.entries = entries.into_iter().map(|e| (e.id, e)).collect();
        self.notify();
        Ok(())
    }

    /// Persist the in-memory state through the storage collaborator
    pub fn save_to(&self, store: &dyn LikedStore) -> Result<()> {
        store.save(&self.entries())
    }

    fn notify(&self) {
        let ids = self.ids();
        for listener in &self.listeners {
            listener(&ids);
        }
    }
}

/// JSON-file implementation of [`LikedStore`]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LikedStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LikedEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            SearchError::LikedStorage {
                location: self.path.display().to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &[LikedEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|e| SearchError::LikedStorage {
            location: self.path.display().to_string(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_records;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_and_membership() {
        let records = generate_records(2);
        let mut liked = LikedSet::new();

        assert!(liked.toggle(&records[0]));
        assert!(liked.contains(&records[0].id));
        assert!(!liked.contains(&records[1].id));
        assert_eq!(liked.len(), 1);

        assert!(!liked.toggle(&records[0]));
        assert!(liked.is_empty());
    }

    #[test]
    fn test_listeners_fire_on_change() {
        let records = generate_records(1);
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut liked = LikedSet::new();
        liked.subscribe(Box::new(move |ids| sink.borrow_mut().push(ids.len())));

        liked.toggle(&records[0]);
        liked.toggle(&records[0]);
        assert_eq!(*seen.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("liked.json"));
        let records = generate_records(3);

        let mut liked = LikedSet::new();
        liked.toggle(&records[0]);
        liked.toggle(&records[2]);
        liked.save_to(&store).unwrap();

        let mut restored = LikedSet::new();
        restored.load_from(&store).unwrap();
        assert_eq!(restored.ids(), liked.ids());
        assert!(restored.contains(&records[2].id));
    }

    #[test]
    fn test_missing_store_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        let mut liked = LikedSet::new();
        liked.load_from(&store).unwrap();
        assert!(liked.is_empty());
    }

    #[test]
    fn test_unlike_only_notifies_when_present() {
        let records = generate_records(1);
        let count = Rc::new(RefCell::new(0usize));
        let sink = count.clone();

        let mut liked = LikedSet::new();
        liked.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        assert!(!liked.unlike(&records[0].id));
        assert_eq!(*count.borrow(), 0);

        liked.toggle(&records[0]);
        assert!(liked.unlike(&records[0].id));
        assert_eq!(*count.borrow(), 2);
    }
}
