use super::Engine;
use crate::{discard_count_in_range, hand_size_in_range, standard52, SessionState};

impl Engine {
    /// First load: configured defaults, built-in deck, fresh shuffle.
    pub(super) fn init(&mut self) -> SessionState {
        let state = SessionState::empty(&self.config);
        self.rebuild_and_deal(state)
    }

    /// Starts over with the session's deck and (validated) settings.
    pub(super) fn reset(&mut self, current: SessionState) -> SessionState {
        let mut state = SessionState::empty(&self.config);
        if hand_size_in_range(current.hand_size) {
            state.hand_size = current.hand_size;
        }
        if discard_count_in_range(current.discard_count) {
            state.discard_count = current.discard_count;
        }
        state.deck = if current.deck.is_empty() {
            standard52()
        } else {
            current.deck
        };
        state.extra = current.extra;
        self.rebuild_and_deal(state)
    }

    /// Replaces the hand without advancing the turn.
    pub(super) fn redeal(&mut self, mut state: SessionState) -> SessionState {
        if state.is_dealing {
            return state;
        }
        Self::fold_hand(&mut state);
        self.deal_next_hand(state)
    }

    pub(super) fn end_turn(&mut self, mut state: SessionState) -> SessionState {
        if !state.can_end_turn() {
            return state;
        }
        Self::fold_hand(&mut state);
        state.turn_number = state.turn_number.saturating_add(1);
        self.deal_next_hand(state)
    }
}
