use super::Engine;
use crate::{InstanceId, SessionState};

impl Engine {
    pub(super) fn toggle_selection(
        &mut self,
        mut state: SessionState,
        id: &InstanceId,
    ) -> SessionState {
        if !state.discard_phase.active || !state.holds(id) {
            return state;
        }
        if !state.selected_card_ids.remove(id)
            && state.selected_card_ids.len() < state.discard_phase.remaining_discards
        {
            state.selected_card_ids.insert(id.clone());
        }
        state
    }

    pub(super) fn confirm_discard(&mut self, mut state: SessionState) -> SessionState {
        if !state.discard_phase.active {
            return state;
        }
        let selected = std::mem::take(&mut state.selected_card_ids);
        let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.hand_cards)
            .into_iter()
            .partition(|card| selected.contains(&card.instance_id));
        state
            .discard_pile
            .extend(gone.into_iter().map(|card| card.value));
        state.hand = kept.iter().map(|card| card.value.clone()).collect();
        state.hand_cards = kept;

        state.discard_phase.active = false;
        state.discard_phase.remaining_discards = 0;
        state.play_order_sequence.clear();
        state.play_order_locked = false;
        state.planning_phase = !state.hand_cards.is_empty();
        state
    }
}
