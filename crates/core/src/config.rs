use serde::{Deserialize, Serialize};

pub const MIN_HAND_SIZE: usize = 1;
pub const MAX_HAND_SIZE: usize = 10;
pub const MAX_DISCARD_COUNT: usize = 10;

pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_DISCARD_COUNT: usize = 2;
pub const DEFAULT_STORAGE_KEY: &str = "deckhand.session";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    #[serde(default = "default_hand_size")]
    pub default_hand_size: usize,
    #[serde(default = "default_discard_count")]
    pub default_discard_count: usize,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_hand_size() -> usize {
    DEFAULT_HAND_SIZE
}

fn default_discard_count() -> usize {
    DEFAULT_DISCARD_COUNT
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_hand_size: DEFAULT_HAND_SIZE,
            default_discard_count: DEFAULT_DISCARD_COUNT,
            storage_key: default_storage_key(),
        }
    }
}

impl EngineConfig {
    /// Defaults forced into range, for callers that received an unchecked config.
    pub fn normalized(mut self) -> Self {
        if !hand_size_in_range(self.default_hand_size) {
            self.default_hand_size = DEFAULT_HAND_SIZE;
        }
        if !discard_count_in_range(self.default_discard_count) {
            self.default_discard_count = DEFAULT_DISCARD_COUNT;
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = default_storage_key();
        }
        self
    }
}

pub fn hand_size_in_range(value: usize) -> bool {
    (MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&value)
}

pub fn discard_count_in_range(value: usize) -> bool {
    value <= MAX_DISCARD_COUNT
}

pub fn clamp_hand_size(value: i64) -> usize {
    value.clamp(MIN_HAND_SIZE as i64, MAX_HAND_SIZE as i64) as usize
}

pub fn clamp_discard_count(value: i64) -> usize {
    value.clamp(0, MAX_DISCARD_COUNT as i64) as usize
}
