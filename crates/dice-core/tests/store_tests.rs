// Host-side tests for the persisted capability store.

use dice_core::constants::{ENABLED_STORAGE_KEY, PURCHASES_STORAGE_KEY};
use dice_core::*;
use std::rc::Rc;

fn stored_flags(store: &MemoryStore, key: &str) -> serde_json::Value {
    let raw = store.get(key).unwrap().expect("record not written");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn empty_storage_defaults_everything_to_false() {
    let store = CapabilityStore::load(Box::new(MemoryStore::new()));
    for category in FeatureCategory::all() {
        assert!(!store.is_purchased(category));
        assert!(!store.is_enabled(category));
        assert_eq!(store.snapshot(category), CapabilitySnapshot::default());
    }
}

#[test]
fn malformed_records_fall_back_to_defaults() {
    let backend = MemoryStore::new()
        .with_entry(PURCHASES_STORAGE_KEY, "{not json")
        .with_entry(ENABLED_STORAGE_KEY, r#"{"sound": "yes"}"#);
    let store = CapabilityStore::load(Box::new(backend));
    assert!(!store.is_purchased(FeatureCategory::SoundEffects));
    assert!(!store.is_enabled(FeatureCategory::SoundEffects));
}

#[test]
fn partial_records_default_missing_keys() {
    let backend = MemoryStore::new()
        .with_entry(PURCHASES_STORAGE_KEY, r#"{"soundEffects": true}"#)
        .with_entry(ENABLED_STORAGE_KEY, r#"{"sound": true}"#);
    let store = CapabilityStore::load(Box::new(backend));
    assert!(store.snapshot(FeatureCategory::SoundEffects).allows_playback());
    assert!(!store.is_purchased(FeatureCategory::AmbientSound));
    assert!(!store.is_enabled(FeatureCategory::AmbientSound));
}

#[test]
fn purchase_unlocks_enables_and_persists() {
    let backend = Rc::new(MemoryStore::new());
    let store = CapabilityStore::load(Box::new(backend.clone()));

    store.purchase(FeatureCategory::SoundEffects);
    assert!(store.is_purchased(FeatureCategory::SoundEffects));
    assert!(store.is_enabled(FeatureCategory::SoundEffects));
    assert!(!store.is_purchased(FeatureCategory::AmbientSound));

    let purchases = stored_flags(&backend, PURCHASES_STORAGE_KEY);
    assert_eq!(purchases["soundEffects"], true);
    assert_eq!(purchases["ambientSound"], false);
    let enabled = stored_flags(&backend, ENABLED_STORAGE_KEY);
    assert_eq!(enabled["sound"], true);
    assert_eq!(enabled["ambient"], false);
}

#[test]
fn toggle_requires_a_purchase() {
    let store = CapabilityStore::load(Box::new(MemoryStore::new()));
    assert!(!store.toggle_enabled(FeatureCategory::SoundEffects));
    assert!(!store.is_enabled(FeatureCategory::SoundEffects));

    store.purchase(FeatureCategory::SoundEffects);
    assert!(!store.toggle_enabled(FeatureCategory::SoundEffects));
    assert!(store.toggle_enabled(FeatureCategory::SoundEffects));
    assert!(store.is_enabled(FeatureCategory::SoundEffects));
}

#[test]
fn state_survives_a_reload() {
    let backend = Rc::new(MemoryStore::new());
    {
        let store = CapabilityStore::load(Box::new(backend.clone()));
        store.purchase(FeatureCategory::SoundEffects);
        store.purchase(FeatureCategory::AmbientSound);
        store.toggle_enabled(FeatureCategory::AmbientSound);
    }
    let reloaded = CapabilityStore::load(Box::new(backend));
    assert!(reloaded.is_purchased(FeatureCategory::SoundEffects));
    assert!(reloaded.is_enabled(FeatureCategory::SoundEffects));
    assert!(reloaded.is_purchased(FeatureCategory::AmbientSound));
    assert!(!reloaded.is_enabled(FeatureCategory::AmbientSound));
}

#[test]
fn store_drives_the_synthesizer_gate() {
    let store = Rc::new(CapabilityStore::load(Box::new(MemoryStore::new())));
    let backend = dice_core::testing::RecordingBackend::new();
    let synth = ToneSynthesizer::new(store.clone(), dice_core::testing::recording_factory(&backend));

    assert_eq!(synth.play_cue(CueKind::Roll), CuePlayback::Gated);
    store.purchase(FeatureCategory::SoundEffects);
    assert_eq!(synth.play_cue(CueKind::Roll), CuePlayback::Scheduled(6));
    store.toggle_enabled(FeatureCategory::SoundEffects);
    assert_eq!(synth.play_cue(CueKind::Roll), CuePlayback::Gated);

    // Ambience has its own flags and never unlocks the cues.
    store.purchase(FeatureCategory::AmbientSound);
    assert_eq!(synth.play_cue(CueKind::Flip), CuePlayback::Gated);
}

/// Backend whose every call fails, like `localStorage` over quota or blocked.
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("storage disabled".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".to_owned()))
    }
}

#[test]
fn unreadable_backend_loads_defaults() {
    let store = CapabilityStore::load(Box::new(FailingStore));
    for category in FeatureCategory::all() {
        assert_eq!(store.snapshot(category), CapabilitySnapshot::default());
    }
}

#[test]
fn failed_writes_keep_in_memory_state() {
    let store = CapabilityStore::load(Box::new(FailingStore));
    store.purchase(FeatureCategory::SoundEffects);
    assert!(store.is_purchased(FeatureCategory::SoundEffects));
    assert!(store.is_enabled(FeatureCategory::SoundEffects));

    assert!(!store.toggle_enabled(FeatureCategory::SoundEffects));
    assert!(!store.is_enabled(FeatureCategory::SoundEffects));
    assert!(store.is_purchased(FeatureCategory::SoundEffects));
}
