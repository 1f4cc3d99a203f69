use super::Engine;
use crate::{draw_cards, shuffled, Card, CardInstance, DiscardPhase, SessionState};
use std::collections::HashSet;

impl Engine {
    /// Deals a fresh hand from the piles. The previous hand must already have
    /// been moved out; whatever is still in `hand` is overwritten.
    pub fn deal_next_hand(&mut self, mut state: SessionState) -> SessionState {
        state.is_dealing = true;
        let wanted = state.hand_size;
        let draw = draw_cards(
            &mut state.draw_pile,
            &mut state.discard_pile,
            wanted,
            &mut self.rng,
        );
        if draw.reshuffled {
            log::debug!("draw pile exhausted, discard pile folded back in");
        }
        state.hand_cards = self.instances(&draw.cards);
        state.hand = draw.cards;

        let dealt = state.hand.len();
        state.selected_card_ids.clear();
        state.clear_play_order();
        state.discard_phase = DiscardPhase {
            active: state.discard_count > 0 && dealt > 0,
            remaining_discards: state.discard_count.min(dealt),
        };
        // With no discards allowed the hand goes straight to planning.
        state.planning_phase = !state.discard_phase.active && dealt > 0;
        state.error = None;
        state.warning =
            (dealt < wanted).then(|| format!("insufficient cards: dealt {dealt} of {wanted}"));
        state.is_dealing = false;
        state
    }

    /// Throws away hand and discard pile, reshuffles the canonical deck into
    /// the draw pile and deals.
    pub(super) fn rebuild_and_deal(&mut self, mut state: SessionState) -> SessionState {
        state.draw_pile = shuffled(&state.deck, &mut self.rng);
        state.discard_pile.clear();
        state.hand.clear();
        state.hand_cards.clear();
        self.deal_next_hand(state)
    }

    /// Moves the whole hand to the end of the discard pile, in hand order.
    pub(super) fn fold_hand(state: &mut SessionState) {
        state.discard_pile.append(&mut state.hand);
        state.hand_cards.clear();
    }

    fn instances(&mut self, cards: &[Card]) -> Vec<CardInstance> {
        let mut seen = HashSet::with_capacity(cards.len());
        cards
            .iter()
            .map(|card| {
                let mut id = self.rng.instance_id();
                while !seen.insert(id.clone()) {
                    id = self.rng.instance_id();
                }
                CardInstance::new(id, card.clone())
            })
            .collect()
    }
}
