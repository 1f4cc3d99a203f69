use crate::{
    sanitize_state, EngineConfig, RngState, SanitizeError, SessionState, SNAPSHOT_VERSION,
    VERSION_KEY,
};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("snapshot rejected: {0}")]
    Rejected(#[from] SanitizeError),
    #[error("no saved session")]
    Missing,
}

/// Synchronous string store, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store with an optional byte quota, for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if self.used_without(key) + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug)]
pub struct PersistenceGateway<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Writes every non-transient field plus the schema version.
    pub fn save(&mut self, state: &SessionState) -> Result<(), PersistError> {
        let body = encode_snapshot(state)?;
        self.store.set(&self.key, &body)?;
        Ok(())
    }

    /// Saves, logging and dropping any failure. The session carries on in memory.
    pub fn persist(&mut self, state: &SessionState) {
        if let Err(err) = self.save(state) {
            log::debug!("session not saved under '{}': {err}", self.key);
        }
    }

    pub fn try_load(
        &self,
        config: &EngineConfig,
        rng: &mut RngState,
    ) -> Result<SessionState, PersistError> {
        let body = self.store.get(&self.key)?.ok_or(PersistError::Missing)?;
        let value: Value = serde_json::from_str(&body)?;
        let sanitized = sanitize_state(&value, config, rng)?;
        for note in &sanitized.notes {
            log::warn!("repaired stored session: {note}");
        }
        Ok(sanitized.state)
    }

    /// `None` means start a fresh session.
    pub fn load(&self, config: &EngineConfig, rng: &mut RngState) -> Option<SessionState> {
        match self.try_load(config, rng) {
            Ok(state) => Some(state),
            Err(PersistError::Missing) => None,
            Err(err) => {
                log::debug!("stored session under '{}' unusable: {err}", self.key);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        if let Err(err) = self.store.remove(&self.key) {
            log::debug!("could not clear '{}': {err}", self.key);
        }
    }
}

pub fn encode_snapshot(state: &SessionState) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(state)?;
    if let Value::Object(obj) = &mut value {
        obj.insert(VERSION_KEY.to_string(), Value::from(SNAPSHOT_VERSION));
    }
    serde_json::to_string(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test.session";

    #[test]
    fn memory_store_enforces_quota() {
        let mut store = MemoryStore::with_quota(10);
        assert_eq!(store.set("k", "12345"), Ok(()));
        assert_eq!(store.set("k", "123456789"), Ok(()));
        assert_eq!(store.set("k", "1234567890"), Err(StoreError::QuotaExceeded));
        assert_eq!(store.raw("k"), Some("123456789"));
    }

    #[test]
    fn missing_key_loads_nothing() {
        let gateway = PersistenceGateway::new(MemoryStore::new(), KEY);
        let mut rng = RngState::from_seed(1);
        assert!(gateway.load(&EngineConfig::default(), &mut rng).is_none());
        assert!(matches!(
            gateway.try_load(&EngineConfig::default(), &mut rng),
            Err(PersistError::Missing)
        ));
    }

    #[test]
    fn garbage_loads_nothing() {
        let mut rng = RngState::from_seed(1);
        for body in ["{not json", "[1,2,3]", "42", r#"{"version": 9}"#] {
            let mut store = MemoryStore::new();
            store.set(KEY, body).expect("set");
            let gateway = PersistenceGateway::new(store, KEY);
            assert!(
                gateway.load(&EngineConfig::default(), &mut rng).is_none(),
                "{body}"
            );
        }
    }

    #[test]
    fn snapshot_carries_version_and_skips_transients() {
        let mut state = SessionState::empty(&EngineConfig::default());
        state.is_dealing = true;
        state.selected_card_ids.insert("x".into());
        let body = encode_snapshot(&state).expect("encode");
        let value: Value = serde_json::from_str(&body).expect("json");
        assert_eq!(value[VERSION_KEY], Value::from(SNAPSHOT_VERSION));
        assert!(value.get("isDealing").is_none());
        assert!(value.get("selectedCardIds").is_none());
    }

    #[test]
    fn persist_swallows_quota_failures() {
        let state = SessionState::empty(&EngineConfig::default());
        let mut gateway = PersistenceGateway::new(MemoryStore::with_quota(16), KEY);
        assert!(matches!(
            gateway.save(&state),
            Err(PersistError::Store(StoreError::QuotaExceeded))
        ));
        gateway.persist(&state);
        assert!(gateway.store().raw(KEY).is_none());
    }

    #[test]
    fn clear_removes_record() {
        let state = SessionState::empty(&EngineConfig::default());
        let mut gateway = PersistenceGateway::new(MemoryStore::new(), KEY);
        gateway.save(&state).expect("save");
        gateway.clear();
        assert!(gateway.store().raw(KEY).is_none());
    }
}
