use serde::Serialize;

pub use deckhand_core::{DeckPreset, EngineConfig, PresetReport};

/// A catalog entry that failed validation, kept so callers can show why.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RejectedPreset {
    pub index: usize,
    pub id: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PresetCatalog {
    pub presets: Vec<DeckPreset>,
    pub rejected: Vec<RejectedPreset>,
}
