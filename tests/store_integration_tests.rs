//! Integration tests for the settings store lifecycle
//!
//! These tests verify:
//! - Defaults when durable storage is empty
//! - Round-trip persistence of text scale and engine-config lists
//! - Hydration tolerance for malformed persisted data
//! - Session-only scope of the active selection
//! - Write-through calls against a mocked backend
//! - Change-event delivery to subscribers

use chatprefs::{
    ENGINE_CONFIGS_KEY, EngineConfig, FONT_SIZE_KEY, KeyValueStorage, MemoryStorage,
    SettingsChange, SettingsStore, StorageError, TextScale,
};
use mockall::predicate::eq;
use proptest::prelude::*;
use std::sync::Arc;

mockall::mock! {
    Storage {}

    impl KeyValueStorage for Storage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        fn remove(&self, key: &str) -> Result<(), StorageError>;
    }
}

/// Mock with an empty hydration phase already stubbed out.
fn empty_mock() -> MockStorage {
    let mut mock = MockStorage::new();
    mock.expect_get().returning(|_| Ok(None));
    mock
}

#[test]
fn test_defaults_on_empty_storage() {
    let store = SettingsStore::new(MemoryStorage::new());
    let state = store.snapshot();

    assert_eq!(state.text_scale, TextScale::Medium);
    assert!(state.engine_configs.is_empty());
    assert!(state.active_config.is_none());
}

#[test]
fn test_scale_round_trips_through_fresh_hydration() {
    for scale in TextScale::ALL {
        let backend = Arc::new(MemoryStorage::new());

        let store = SettingsStore::with_backend(backend.clone());
        store.set_text_scale(scale);
        drop(store);

        let rehydrated = SettingsStore::with_backend(backend);
        assert_eq!(rehydrated.text_scale(), scale);
    }
}

#[test]
fn test_list_round_trips_and_selects_first() {
    let backend = Arc::new(MemoryStorage::new());
    let configs = vec![
        EngineConfig::new("gpt", "k1"),
        EngineConfig::new("claude", "k2"),
        EngineConfig::new("claude", "k3"),
    ];

    let store = SettingsStore::with_backend(backend.clone());
    store.set_engine_configs(configs.clone());
    drop(store);

    let rehydrated = SettingsStore::with_backend(backend);
    assert_eq!(rehydrated.engine_configs(), configs);
    assert_eq!(rehydrated.active_config(), Some(configs[0].clone()));
}

#[test]
fn test_empty_list_round_trips_without_selection() {
    let backend = Arc::new(MemoryStorage::new());

    let store = SettingsStore::with_backend(backend.clone());
    store.set_engine_configs(Vec::new());
    drop(store);

    let rehydrated = SettingsStore::with_backend(backend);
    assert!(rehydrated.engine_configs().is_empty());
    assert!(rehydrated.active_config().is_none());
}

#[test]
fn test_malformed_list_tolerance() {
    for bad in [r#"{"a":1}"#, "not json at all", "42", r#""just a string""#] {
        let storage = MemoryStorage::new();
        storage.seed(ENGINE_CONFIGS_KEY, bad);

        let store = SettingsStore::new(storage);
        let state = store.snapshot();

        assert!(state.engine_configs.is_empty(), "input: {bad}");
        assert!(state.active_config.is_none(), "input: {bad}");
    }
}

#[test]
fn test_selection_is_session_only() {
    let backend = Arc::new(MemoryStorage::new());
    let configs = vec![
        EngineConfig::new("gpt", "k1"),
        EngineConfig::new("claude", "k2"),
    ];

    let store = SettingsStore::with_backend(backend.clone());
    store.set_engine_configs(configs.clone());
    store.set_active_config(Some(configs[1].clone()));
    assert_eq!(store.active_config(), Some(configs[1].clone()));
    drop(store);

    // A fresh session falls back to the first list entry, not the previous
    // selection.
    let rehydrated = SettingsStore::with_backend(backend);
    assert_eq!(rehydrated.active_config(), Some(configs[0].clone()));
}

#[test]
fn test_invalid_persisted_scale_is_ignored() {
    let storage = MemoryStorage::new();
    storage.seed(FONT_SIZE_KEY, "huge");

    let store = SettingsStore::new(storage);
    assert_eq!(store.text_scale(), TextScale::Medium);
}

#[test]
fn test_end_to_end_seeded_scenario() {
    let storage = MemoryStorage::new();
    storage.seed(
        ENGINE_CONFIGS_KEY,
        r#"[{"engineName":"gpt","accessKey":"k1"},{"engineName":"claude","accessKey":"k2"}]"#,
    );
    storage.seed(FONT_SIZE_KEY, "large");

    let store = SettingsStore::new(storage);
    let state = store.snapshot();

    assert_eq!(state.text_scale, TextScale::Large);
    assert_eq!(state.engine_configs.len(), 2);
    assert_eq!(state.engine_configs[0], EngineConfig::new("gpt", "k1"));
    assert_eq!(state.engine_configs[1], EngineConfig::new("claude", "k2"));
    assert_eq!(state.active_config, Some(EngineConfig::new("gpt", "k1")));
}

#[test]
fn test_set_text_scale_writes_reserved_key() {
    let mut mock = empty_mock();
    mock.expect_set()
        .with(eq("fontSize"), eq("small"))
        .times(1)
        .returning(|_, _| Ok(()));

    let store = SettingsStore::new(mock);
    store.set_text_scale(TextScale::Small);
}

#[test]
fn test_set_engine_configs_writes_reserved_key() {
    let mut mock = empty_mock();
    mock.expect_set()
        .with(
            eq("chatbotConfigurations"),
            eq(r#"[{"engineName":"gpt","accessKey":"k1"}]"#),
        )
        .times(1)
        .returning(|_, _| Ok(()));

    let store = SettingsStore::new(mock);
    store.set_engine_configs(vec![EngineConfig::new("gpt", "k1")]);
}

#[test]
fn test_set_active_config_never_writes() {
    let mut mock = empty_mock();
    mock.expect_set().times(0);

    let store = SettingsStore::new(mock);
    store.set_active_config(Some(EngineConfig::new("gpt", "k1")));
    store.set_active_config(None);
}

#[test]
fn test_write_failure_is_swallowed_and_memory_updated() {
    let mut mock = empty_mock();
    mock.expect_set().returning(|_, _| {
        Err(StorageError::Io {
            path: "settings.yaml".to_string(),
            source: std::io::Error::other("disk full"),
        })
    });

    let store = SettingsStore::new(mock);
    store.set_text_scale(TextScale::Large);
    store.set_engine_configs(vec![EngineConfig::new("gpt", "k1")]);

    // Callers see no failure; the in-memory state moved on.
    assert_eq!(store.text_scale(), TextScale::Large);
    assert_eq!(store.engine_configs().len(), 1);
}

#[tokio::test]
async fn test_subscriber_receives_change_stream() {
    let store = SettingsStore::new(MemoryStorage::new());
    let mut rx = store.subscribe();

    store.set_text_scale(TextScale::Small);
    store.set_engine_configs(vec![EngineConfig::new("gpt", "k1")]);
    store.set_active_config(Some(EngineConfig::new("gpt", "k1")));

    assert_eq!(
        rx.recv().await.unwrap(),
        SettingsChange::TextScaleChanged {
            scale: TextScale::Small
        }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        SettingsChange::EngineConfigsChanged { count: 1 }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        SettingsChange::ActiveConfigChanged {
            engine_name: Some("gpt".to_string())
        }
    );
}

fn engine_config_strategy() -> impl Strategy<Value = EngineConfig> {
    ("[a-zA-Z0-9 _-]{0,16}", "[ -~]{0,32}")
        .prop_map(|(engine_name, access_key)| EngineConfig::new(engine_name, access_key))
}

proptest! {
    #[test]
    fn prop_list_round_trips_for_arbitrary_configs(
        configs in proptest::collection::vec(engine_config_strategy(), 0..8)
    ) {
        let backend = Arc::new(MemoryStorage::new());

        let store = SettingsStore::with_backend(backend.clone());
        store.set_engine_configs(configs.clone());
        drop(store);

        let rehydrated = SettingsStore::with_backend(backend);
        prop_assert_eq!(rehydrated.engine_configs(), configs.clone());
        prop_assert_eq!(rehydrated.active_config(), configs.first().cloned());
    }
}
