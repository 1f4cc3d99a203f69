use crate::schema::{DeckPreset, EngineConfig, PresetCatalog, RejectedPreset};
use anyhow::{bail, Context};
use deckhand_core::{
    discard_count_in_range, hand_size_in_range, validate_preset, Action, MAX_DISCARD_COUNT,
    MAX_HAND_SIZE, MIN_HAND_SIZE,
};
use serde_json::Value;
use std::fs;
use std::path::Path;

const BUILTIN_PRESETS: &str = include_str!("../../../assets/presets.json");

pub const ENGINE_CONFIG_FILE: &str = "engine.json";
pub const PRESETS_FILE: &str = "presets.json";

pub fn load_engine_config(path: &Path) -> anyhow::Result<EngineConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: EngineConfig =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    if !hand_size_in_range(config.default_hand_size) {
        bail!(
            "default_hand_size {} outside {}..={}",
            config.default_hand_size,
            MIN_HAND_SIZE,
            MAX_HAND_SIZE
        );
    }
    if !discard_count_in_range(config.default_discard_count) {
        bail!(
            "default_discard_count {} above {}",
            config.default_discard_count,
            MAX_DISCARD_COUNT
        );
    }
    if config.storage_key.trim().is_empty() {
        bail!("storage_key must not be empty");
    }
    Ok(config)
}

/// Loads `engine.json` from `dir`, or the built-in defaults when it is absent.
pub fn load_engine_config_or_default(dir: &Path) -> anyhow::Result<EngineConfig> {
    let path = dir.join(ENGINE_CONFIG_FILE);
    if path.exists() {
        load_engine_config(&path)
    } else {
        Ok(EngineConfig::default())
    }
}

pub fn load_preset_catalog(path: &Path) -> anyhow::Result<PresetCatalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_preset_catalog(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Every entry is validated on its own; bad entries land in `rejected` and the
/// rest of the catalog still loads.
pub fn parse_preset_catalog(raw: &str) -> anyhow::Result<PresetCatalog> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = value else {
        bail!("preset catalog must be a JSON array");
    };
    let mut catalog = PresetCatalog::default();
    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);
        let report = validate_preset(entry);
        if !report.valid {
            log::warn!("preset #{index} rejected: {}", report.errors.join("; "));
            catalog.rejected.push(RejectedPreset {
                index,
                id,
                errors: report.errors,
            });
            continue;
        }
        if catalog.get(id.as_deref().unwrap_or_default()).is_some() {
            catalog.rejected.push(RejectedPreset {
                index,
                id,
                errors: vec!["duplicate preset id".to_string()],
            });
            continue;
        }
        let preset: DeckPreset = serde_json::from_value(entry.clone())
            .with_context(|| format!("decode preset #{index}"))?;
        catalog.presets.push(preset);
    }
    log::info!(
        "preset catalog: {} loaded, {} rejected",
        catalog.presets.len(),
        catalog.rejected.len()
    );
    Ok(catalog)
}

pub fn builtin_presets() -> PresetCatalog {
    parse_preset_catalog(BUILTIN_PRESETS).expect("built-in presets.json must be valid")
}

impl PresetCatalog {
    pub fn get(&self, id: &str) -> Option<&DeckPreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.iter().map(|preset| preset.id.as_str())
    }

    /// The intent that installs preset `id` as the session deck.
    pub fn apply_action(&self, id: &str) -> Option<Action> {
        let preset = self.get(id)?;
        let descriptor = serde_json::to_value(preset).ok()?;
        Some(Action::ApplyPreset { descriptor })
    }
}
