//! Persisted purchase and enabled flags.
//!
//! Two independent records live in a string key-value store, each a JSON
//! object from category key to boolean. Anything missing or unreadable
//! counts as `false`; storage trouble is logged and never surfaces to
//! callers.

use crate::constants::{ENABLED_STORAGE_KEY, PURCHASES_STORAGE_KEY};
use crate::error::StoreError;
use crate::gate::{CapabilitySnapshot, FeatureCategory, FeatureGate};
use fnv::FnvHashMap;
use std::cell::RefCell;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store, used when the host has no persistent storage.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<FnvHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

type FlagRecord = FnvHashMap<String, bool>;

#[derive(Default)]
struct Records {
    purchases: FlagRecord,
    enabled: FlagRecord,
}

/// Purchase/enabled state per [`FeatureCategory`], backed by a [`KeyValueStore`].
pub struct CapabilityStore {
    backend: Box<dyn KeyValueStore>,
    records: RefCell<Records>,
}

impl CapabilityStore {
    /// Read both records, falling back to all-`false` for anything absent or malformed.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let records = Records {
            purchases: read_record(backend.as_ref(), PURCHASES_STORAGE_KEY),
            enabled: read_record(backend.as_ref(), ENABLED_STORAGE_KEY),
        };
        Self {
            backend,
            records: RefCell::new(records),
        }
    }

    /// Unlock `category`. A fresh purchase is switched on straight away.
    pub fn purchase(&self, category: FeatureCategory) {
        {
            let mut records = self.records.borrow_mut();
            records
                .purchases
                .insert(category.purchase_key().to_owned(), true);
            records.enabled.insert(category.enabled_key().to_owned(), true);
        }
        log::info!("[store] purchased {:?}", category);
        self.persist_purchases();
        self.persist_enabled();
    }

    /// Flip the user toggle for a purchased category; unpurchased ones stay off.
    /// Returns the resulting enabled state.
    pub fn toggle_enabled(&self, category: FeatureCategory) -> bool {
        if !self.is_purchased(category) {
            log::debug!("[store] toggle ignored, {:?} not purchased", category);
            return self.is_enabled(category);
        }
        let now_enabled = {
            let mut records = self.records.borrow_mut();
            let flag = records
                .enabled
                .entry(category.enabled_key().to_owned())
                .or_insert(false);
            *flag = !*flag;
            *flag
        };
        self.persist_enabled();
        now_enabled
    }

    pub fn snapshot(&self, category: FeatureCategory) -> CapabilitySnapshot {
        CapabilitySnapshot::query(self, category)
    }

    fn persist_purchases(&self) {
        let record = full_record(&self.records.borrow().purchases, FeatureCategory::purchase_key);
        write_record(self.backend.as_ref(), PURCHASES_STORAGE_KEY, &record);
    }

    fn persist_enabled(&self) {
        let record = full_record(&self.records.borrow().enabled, FeatureCategory::enabled_key);
        write_record(self.backend.as_ref(), ENABLED_STORAGE_KEY, &record);
    }
}

impl FeatureGate for CapabilityStore {
    fn is_enabled(&self, category: FeatureCategory) -> bool {
        flag(&self.records.borrow().enabled, category.enabled_key())
    }

    fn is_purchased(&self, category: FeatureCategory) -> bool {
        flag(&self.records.borrow().purchases, category.purchase_key())
    }
}

fn flag(record: &FlagRecord, key: &str) -> bool {
    record.get(key).copied().unwrap_or(false)
}

// Every known category is written explicitly so the stored record is self-describing.
fn full_record(record: &FlagRecord, key_of: fn(FeatureCategory) -> &'static str) -> FlagRecord {
    let mut out = record.clone();
    for category in FeatureCategory::all() {
        out.entry(key_of(category).to_owned()).or_insert(false);
    }
    out
}

fn read_record(store: &dyn KeyValueStore, key: &str) -> FlagRecord {
    match load_record(store, key) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("[store] using defaults for {}: {}", key, e);
            FlagRecord::default()
        }
    }
}

fn load_record(store: &dyn KeyValueStore, key: &str) -> Result<FlagRecord, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(FlagRecord::default());
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
        key: key.to_owned(),
        source,
    })
}

fn write_record(store: &dyn KeyValueStore, key: &str, record: &FlagRecord) {
    let result = serde_json::to_string(record)
        .map_err(|source| StoreError::Encode {
            key: key.to_owned(),
            source,
        })
        .and_then(|json| store.set(key, &json));
    if let Err(e) = result {
        log::warn!("[store] failed to persist {}: {}", key, e);
    }
}
