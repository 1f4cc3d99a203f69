use crate::Card;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const MAX_PRESET_NAME_LEN: usize = 50;
pub const MAX_PRESET_DESCRIPTION_LEN: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck override is not valid JSON: {0}")]
    Parse(String),
    #[error("deck override must be a JSON array of card names")]
    NotArray,
    #[error("deck override entry {index} must be a non-empty string")]
    InvalidEntry { index: usize },
    #[error("invalid deck preset: {}", .0.join("; "))]
    Preset(Vec<String>),
}

/// What a syntactically valid deck override asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckOverride {
    /// `[]`: go back to the built-in deck.
    Revert,
    Replace(Vec<Card>),
}

pub fn parse_deck_override(raw_text: &str) -> Result<DeckOverride, DeckError> {
    let value: Value =
        serde_json::from_str(raw_text).map_err(|err| DeckError::Parse(err.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(DeckError::NotArray);
    };
    if entries.is_empty() {
        return Ok(DeckOverride::Revert);
    }
    let mut cards = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(label) if !label.is_empty() => {
                cards.push(Card::new(label.clone()));
            }
            _ => return Err(DeckError::InvalidEntry { index }),
        }
    }
    Ok(DeckOverride::Replace(cards))
}

/// A named deck from the preset catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks every rule and reports all violations together.
pub fn validate_preset(descriptor: &Value) -> PresetReport {
    let Some(obj) = descriptor.as_object() else {
        return PresetReport {
            valid: false,
            errors: vec!["preset must be a JSON object".to_string()],
        };
    };
    let mut errors = Vec::new();

    match obj.get("id").and_then(Value::as_str) {
        Some(id) if id.is_empty() => errors.push("id must not be empty".to_string()),
        Some(id) if !is_kebab_case(id) => {
            errors.push(format!("id '{id}' must be kebab-case"));
        }
        Some(_) => {}
        None => errors.push("id must be a string".to_string()),
    }

    check_text(obj.get("name"), "name", MAX_PRESET_NAME_LEN, &mut errors);
    check_text(
        obj.get("description"),
        "description",
        MAX_PRESET_DESCRIPTION_LEN,
        &mut errors,
    );

    match obj.get("cards") {
        Some(Value::Array(cards)) if cards.is_empty() => {
            errors.push("cards must not be empty".to_string());
        }
        Some(Value::Array(cards)) => {
            for (index, card) in cards.iter().enumerate() {
                let ok = card.as_str().is_some_and(|label| !label.is_empty());
                if !ok {
                    errors.push(format!("cards[{index}] must be a non-empty string"));
                }
            }
        }
        _ => errors.push("cards must be an array".to_string()),
    }

    PresetReport {
        valid: errors.is_empty(),
        errors,
    }
}

impl DeckPreset {
    pub fn from_value(descriptor: &Value) -> Result<Self, DeckError> {
        let report = validate_preset(descriptor);
        if !report.valid {
            return Err(DeckError::Preset(report.errors));
        }
        serde_json::from_value(descriptor.clone())
            .map_err(|err| DeckError::Preset(vec![err.to_string()]))
    }
}

fn check_text(value: Option<&Value>, field: &str, max: usize, errors: &mut Vec<String>) {
    match value.and_then(Value::as_str) {
        Some(text) if text.is_empty() => errors.push(format!("{field} must not be empty")),
        Some(text) if text.chars().count() > max => {
            errors.push(format!("{field} must be at most {max} characters"));
        }
        Some(_) => {}
        None => errors.push(format!("{field} must be a string")),
    }
}

fn is_kebab_case(id: &str) -> bool {
    id.split('-').all(|part| {
        !part.is_empty()
            && part
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
    })
}
