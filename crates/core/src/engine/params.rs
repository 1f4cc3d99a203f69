use super::Engine;
use crate::{
    clamp_discard_count, clamp_hand_size, parse_deck_override, standard52, DeckOverride,
    DeckPreset, SessionState,
};
use serde_json::Value;

pub const DECK_REVERT_WARNING: &str = "empty deck override; reverted to the default deck";

impl Engine {
    pub(super) fn change_parameters(
        &mut self,
        mut state: SessionState,
        hand_size: i64,
        discard_count: i64,
        immediate_reset: bool,
    ) -> SessionState {
        state.hand_size = clamp_hand_size(hand_size);
        state.discard_count = clamp_discard_count(discard_count);
        state.error = None;
        if immediate_reset {
            return self.rebuild_and_deal(state);
        }
        state
    }

    pub(super) fn apply_deck_override(
        &mut self,
        mut state: SessionState,
        raw_text: &str,
    ) -> SessionState {
        match parse_deck_override(raw_text) {
            Ok(DeckOverride::Revert) => {
                state.deck = standard52();
                let mut state = self.rebuild_and_deal(state);
                state.warning = Some(DECK_REVERT_WARNING.to_string());
                state
            }
            Ok(DeckOverride::Replace(cards)) => {
                log::debug!("deck override installed with {} cards", cards.len());
                state.deck = cards;
                self.rebuild_and_deal(state)
            }
            Err(err) => {
                state.error = Some(err.to_string());
                state
            }
        }
    }

    pub(super) fn apply_preset(
        &mut self,
        mut state: SessionState,
        descriptor: &Value,
    ) -> SessionState {
        match DeckPreset::from_value(descriptor) {
            Ok(preset) => {
                log::debug!("preset '{}' installed", preset.id);
                state.deck = preset.cards;
                self.rebuild_and_deal(state)
            }
            Err(err) => {
                state.error = Some(err.to_string());
                state
            }
        }
    }
}
