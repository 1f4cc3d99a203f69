//! Repair of persisted sessions.
//!
//! Snapshots come from storage we do not control: older builds, hand edits,
//! truncated writes. Every known field is checked on its own and replaced with
//! its default when unusable, so one bad field never costs the whole session.

use crate::{
    discard_count_in_range, hand_size_in_range, shuffled, standard52, Card, CardInstance,
    DiscardPhase, EngineConfig, InstanceId, RngState, SessionState,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

pub const SNAPSHOT_VERSION: u32 = 1;
pub const VERSION_KEY: &str = "version";

const KNOWN_FIELDS: [&str; 15] = [
    "deck",
    "drawPile",
    "discardPile",
    "hand",
    "handCards",
    "turnNumber",
    "handSize",
    "discardCount",
    "discardPhase",
    "playOrderSequence",
    "playOrderLocked",
    "planningPhase",
    "warning",
    "error",
    VERSION_KEY,
];

const TRANSIENT_FIELDS: [&str; 2] = ["selectedCardIds", "isDealing"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("stored session is not an object")]
    NotAnObject,
    #[error("unsupported snapshot version {found} (expected {})", SNAPSHOT_VERSION)]
    UnsupportedVersion { found: String },
}

#[derive(Debug, Clone)]
pub struct Sanitized {
    pub state: SessionState,
    /// One line per repaired field. Empty when the snapshot was clean.
    pub notes: Vec<String>,
}

pub fn sanitize_state(
    value: &Value,
    config: &EngineConfig,
    rng: &mut RngState,
) -> Result<Sanitized, SanitizeError> {
    let obj = value.as_object().ok_or(SanitizeError::NotAnObject)?;
    // A missing version is a snapshot written before versioning; treat it as current.
    if let Some(version) = obj.get(VERSION_KEY) {
        if version.as_u64() != Some(u64::from(SNAPSHOT_VERSION)) {
            return Err(SanitizeError::UnsupportedVersion {
                found: version.to_string(),
            });
        }
    }

    let mut fields = Fields {
        obj,
        notes: Vec::new(),
    };
    let mut state = SessionState::empty(config);

    state.deck = fields.take("deck", standard52(), |deck: &Vec<Card>| {
        !deck.is_empty() && deck.iter().all(|card| !card.label().is_empty())
    });
    state.draw_pile = fields.take("drawPile", Vec::new(), |_: &Vec<Card>| true);
    state.discard_pile = fields.take("discardPile", Vec::new(), |_: &Vec<Card>| true);
    state.hand = fields.take("hand", Vec::new(), |_: &Vec<Card>| true);
    state.hand_cards = fields.take("handCards", Vec::new(), |_: &Vec<CardInstance>| true);
    state.turn_number = fields.take("turnNumber", 1, |turn: &u32| *turn >= 1);
    state.hand_size = fields.take("handSize", config.default_hand_size, |size: &usize| {
        hand_size_in_range(*size)
    });
    state.discard_count = fields.take(
        "discardCount",
        config.default_discard_count,
        |count: &usize| discard_count_in_range(*count),
    );
    state.discard_phase =
        fields.take("discardPhase", DiscardPhase::default(), |_: &DiscardPhase| true);
    state.play_order_sequence =
        fields.take("playOrderSequence", Vec::new(), |_: &Vec<InstanceId>| true);
    state.play_order_locked = fields.take("playOrderLocked", false, |_: &bool| true);
    state.planning_phase = fields.take("planningPhase", false, |_: &bool| true);
    state.warning = fields.take("warning", None, |_: &Option<String>| true);
    state.error = fields.take("error", None, |_: &Option<String>| true);

    state.selected_card_ids = BTreeSet::new();
    state.is_dealing = false;
    state.extra = obj
        .iter()
        .filter(|(key, _)| {
            !KNOWN_FIELDS.contains(&key.as_str()) && !TRANSIENT_FIELDS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect::<Map<String, Value>>();

    let mut notes = fields.notes;
    repair_relations(&mut state, rng, &mut notes);
    repair_piles(&mut state, rng, &mut notes);
    Ok(Sanitized { state, notes })
}

struct Fields<'a> {
    obj: &'a Map<String, Value>,
    notes: Vec<String>,
}

impl Fields<'_> {
    fn take<T, F>(&mut self, key: &str, default: T, accept: F) -> T
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let Some(raw) = self.obj.get(key) else {
            return default;
        };
        match serde_json::from_value::<T>(raw.clone()) {
            Ok(value) if accept(&value) => value,
            Ok(_) => {
                self.notes.push(format!("{key}: out of range, using default"));
                default
            }
            Err(err) => {
                self.notes.push(format!("{key}: {err}, using default"));
                default
            }
        }
    }
}

fn repair_relations(state: &mut SessionState, rng: &mut RngState, notes: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let mut renamed = false;
    for card in &mut state.hand_cards {
        while !seen.insert(card.instance_id.clone()) {
            card.instance_id = rng.instance_id();
            renamed = true;
        }
    }
    if renamed {
        notes.push("handCards: duplicate instance ids replaced".to_string());
    }

    let from_instances: Vec<Card> = state
        .hand_cards
        .iter()
        .map(|card| card.value.clone())
        .collect();
    if state.hand != from_instances {
        notes.push("hand: rebuilt from handCards".to_string());
        state.hand = from_instances;
    }

    let mut kept = HashSet::new();
    let before = state.play_order_sequence.len();
    let hand_ids: HashSet<&InstanceId> =
        state.hand_cards.iter().map(|card| &card.instance_id).collect();
    state
        .play_order_sequence
        .retain(|id| hand_ids.contains(id) && kept.insert(id.clone()));
    if state.play_order_sequence.len() != before {
        notes.push("playOrderSequence: unknown or repeated ids dropped".to_string());
    }

    if state.play_order_locked && !state.all_cards_ordered() {
        notes.push("playOrderLocked: sequence incomplete, unlocked".to_string());
        state.play_order_locked = false;
    }
    if state.play_order_locked && state.planning_phase {
        notes.push("planningPhase: cleared while locked".to_string());
        state.planning_phase = false;
    }
    if state.discard_phase.active && state.planning_phase {
        notes.push("planningPhase: cleared during discard".to_string());
        state.planning_phase = false;
    }
    if state.discard_phase.active && state.hand_cards.is_empty() {
        notes.push("discardPhase: no cards to discard, deactivated".to_string());
        state.discard_phase.active = false;
    }
    let cap = state.hand_cards.len();
    if state.discard_phase.remaining_discards > cap {
        notes.push("discardPhase: remaining discards capped to hand size".to_string());
        state.discard_phase.remaining_discards = cap;
    }
}

/// Draw, discard and hand must together be exactly the deck. When they are
/// not, the deck is reshuffled into the draw pile and the hand is dropped.
fn repair_piles(state: &mut SessionState, rng: &mut RngState, notes: &mut Vec<String>) {
    let mut held: Vec<&Card> = state
        .draw_pile
        .iter()
        .chain(&state.discard_pile)
        .chain(&state.hand)
        .collect();
    let mut deck: Vec<&Card> = state.deck.iter().collect();
    held.sort_unstable();
    deck.sort_unstable();
    if held == deck {
        return;
    }
    notes.push("piles: do not match the deck, reshuffled".to_string());
    state.draw_pile = shuffled(&state.deck, rng);
    state.discard_pile.clear();
    state.hand.clear();
    state.hand_cards.clear();
    state.discard_phase = DiscardPhase::default();
    state.clear_play_order();
}
