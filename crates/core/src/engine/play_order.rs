use super::Engine;
use crate::{InstanceId, SessionState};

fn editable(state: &SessionState) -> bool {
    state.planning_phase && !state.play_order_locked
}

impl Engine {
    pub(super) fn select_for_play_order(
        &mut self,
        mut state: SessionState,
        id: &InstanceId,
    ) -> SessionState {
        if !editable(&state) || !state.holds(id) || state.position_of(id).is_some() {
            return state;
        }
        state.play_order_sequence.push(id.clone());
        state
    }

    /// Removing an entry shifts everything after it up by one position.
    pub(super) fn deselect_from_play_order(
        &mut self,
        mut state: SessionState,
        id: &InstanceId,
    ) -> SessionState {
        if !editable(&state) {
            return state;
        }
        if let Some(index) = state.play_order_sequence.iter().position(|entry| entry == id) {
            state.play_order_sequence.remove(index);
        }
        state
    }

    pub(super) fn clear_play_order(&mut self, mut state: SessionState) -> SessionState {
        if editable(&state) {
            state.play_order_sequence.clear();
        }
        state
    }

    pub(super) fn lock_play_order(&mut self, mut state: SessionState) -> SessionState {
        if !editable(&state) || !state.all_cards_ordered() {
            return state;
        }
        state.play_order_locked = true;
        state.planning_phase = false;
        state
    }
}

#[cfg(test)]
mod tests {
    use crate::{Action, Engine, EngineConfig, InstanceId, Phase, SessionState};

    fn planning() -> (Engine, SessionState) {
        let mut engine = Engine::seeded(EngineConfig::default(), 44);
        let state = engine.reduce(&SessionState::empty(&engine.config), &Action::Init);
        let state = engine.reduce(&state, &Action::ConfirmDiscard);
        assert_eq!(state.phase(), Phase::Planning);
        (engine, state)
    }

    fn ids(state: &SessionState) -> Vec<InstanceId> {
        state
            .hand_cards
            .iter()
            .map(|card| card.instance_id.clone())
            .collect()
    }

    fn select(engine: &mut Engine, state: &SessionState, id: &InstanceId) -> SessionState {
        engine.reduce(
            state,
            &Action::SelectForPlayOrder {
                instance_id: id.clone(),
            },
        )
    }

    fn deselect(engine: &mut Engine, state: &SessionState, id: &InstanceId) -> SessionState {
        engine.reduce(
            state,
            &Action::DeselectFromPlayOrder {
                instance_id: id.clone(),
            },
        )
    }

    #[test]
    fn select_appends_and_ignores_repeats_and_strangers() {
        let (mut engine, state) = planning();
        let ids = ids(&state);
        let state = select(&mut engine, &state, &ids[2]);
        let state = select(&mut engine, &state, &ids[0]);
        assert_eq!(state.play_order_sequence, vec![ids[2].clone(), ids[0].clone()]);
        assert_eq!(select(&mut engine, &state, &ids[2]), state);
        assert_eq!(select(&mut engine, &state, &InstanceId::from("ghost")), state);
    }

    #[test]
    fn deselect_renumbers_the_rest() {
        let (mut engine, mut state) = planning();
        let ids = ids(&state);
        for id in &ids {
            state = select(&mut engine, &state, id);
        }
        let state = deselect(&mut engine, &state, &ids[1]);
        let mut expected = ids.clone();
        expected.remove(1);
        assert_eq!(state.play_order_sequence, expected);
        assert_eq!(state.position_of(&ids[2]), Some(2));
        assert_eq!(state.position_of(&ids[1]), None);
        assert_eq!(deselect(&mut engine, &state, &ids[1]), state);
    }

    #[test]
    fn lock_requires_every_card() {
        let (mut engine, mut state) = planning();
        let ids = ids(&state);
        for id in &ids[..ids.len() - 1] {
            state = select(&mut engine, &state, id);
        }
        assert_eq!(engine.reduce(&state, &Action::LockPlayOrder), state);

        state = select(&mut engine, &state, &ids[ids.len() - 1]);
        let locked = engine.reduce(&state, &Action::LockPlayOrder);
        assert!(locked.play_order_locked);
        assert!(!locked.planning_phase);
        assert_eq!(locked.phase(), Phase::Executing);
        assert!(locked.can_end_turn());
    }

    #[test]
    fn clear_empties_the_sequence() {
        let (mut engine, state) = planning();
        let ids = ids(&state);
        let state = select(&mut engine, &state, &ids[0]);
        assert!(!state.can_end_turn());
        let state = engine.reduce(&state, &Action::ClearPlayOrder);
        assert!(state.play_order_sequence.is_empty());
        assert!(state.planning_phase);
    }

    #[test]
    fn planning_opens_straight_after_a_deal_without_discards() {
        let config = EngineConfig {
            default_discard_count: 0,
            ..EngineConfig::default()
        };
        let mut engine = Engine::seeded(config, 44);
        let state = engine.reduce(&SessionState::empty(&engine.config), &Action::Init);
        assert_eq!(state.phase(), Phase::Planning);
        let ids = ids(&state);
        let state = select(&mut engine, &state, &ids[0]);
        assert_eq!(state.play_order_sequence, vec![ids[0].clone()]);
        let state = engine.reduce(&state, &Action::ClearPlayOrder);
        assert!(state.play_order_sequence.is_empty());
    }

    #[test]
    fn nothing_moves_outside_planning() {
        let mut engine = Engine::seeded(EngineConfig::default(), 44);
        let state = engine.reduce(&SessionState::empty(&engine.config), &Action::Init);
        let id = ids(&state)[0].clone();
        assert_eq!(select(&mut engine, &state, &id), state);
        assert_eq!(engine.reduce(&state, &Action::LockPlayOrder), state);
        assert_eq!(engine.reduce(&state, &Action::ClearPlayOrder), state);
    }
}
