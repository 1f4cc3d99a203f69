use crate::{standard52, Card, CardInstance, EngineConfig, InstanceId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Coarse phase label derived from the session flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Discarding,
    Planning,
    Executing,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscardPhase {
    pub active: bool,
    pub remaining_discards: usize,
}

/// The whole session. Owned by the caller and replaced on every dispatch.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub deck: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub hand: Vec<Card>,
    pub hand_cards: Vec<CardInstance>,
    pub turn_number: u32,
    pub hand_size: usize,
    pub discard_count: usize,
    #[serde(skip)]
    pub selected_card_ids: BTreeSet<InstanceId>,
    pub discard_phase: DiscardPhase,
    pub play_order_sequence: Vec<InstanceId>,
    pub play_order_locked: bool,
    pub planning_phase: bool,
    pub warning: Option<String>,
    pub error: Option<String>,
    #[serde(skip)]
    pub is_dealing: bool,
    /// Persisted fields this version does not understand, kept for round trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionState {
    /// An undealt session: the whole deck sits unshuffled in the draw pile.
    pub fn empty(config: &EngineConfig) -> Self {
        let deck = standard52();
        Self {
            draw_pile: deck.clone(),
            deck,
            discard_pile: Vec::new(),
            hand: Vec::new(),
            hand_cards: Vec::new(),
            turn_number: 1,
            hand_size: config.default_hand_size,
            discard_count: config.default_discard_count,
            selected_card_ids: BTreeSet::new(),
            discard_phase: DiscardPhase::default(),
            play_order_sequence: Vec::new(),
            play_order_locked: false,
            planning_phase: false,
            warning: None,
            error: None,
            is_dealing: false,
            extra: Map::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.discard_phase.active {
            Phase::Discarding
        } else if self.planning_phase {
            Phase::Planning
        } else if self.play_order_locked {
            Phase::Executing
        } else {
            Phase::Idle
        }
    }

    pub fn find_card(&self, id: &InstanceId) -> Option<&CardInstance> {
        self.hand_cards.iter().find(|card| &card.instance_id == id)
    }

    pub fn holds(&self, id: &InstanceId) -> bool {
        self.find_card(id).is_some()
    }

    /// One-based position of `id` in the play order.
    pub fn position_of(&self, id: &InstanceId) -> Option<usize> {
        self.play_order_sequence
            .iter()
            .position(|entry| entry == id)
            .map(|index| index + 1)
    }

    pub fn all_cards_ordered(&self) -> bool {
        self.play_order_sequence.len() == self.hand_cards.len()
    }

    pub fn is_selected(&self, id: &InstanceId) -> bool {
        self.selected_card_ids.contains(id)
    }

    /// Cards across every pile; equals `deck` as a multiset when the session is sound.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hand.len()
    }

    pub fn can_end_turn(&self) -> bool {
        !(self.is_dealing
            || self.discard_phase.active
            || self.planning_phase
            || (!self.play_order_sequence.is_empty() && !self.play_order_locked))
    }

    pub(crate) fn clear_play_order(&mut self) {
        self.play_order_sequence.clear();
        self.play_order_locked = false;
        self.planning_phase = false;
    }
}
