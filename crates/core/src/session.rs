use crate::{Action, Engine, InstanceId, KeyValueStore, PersistenceGateway, Phase, SessionState};

/// A running session bound to its store: every dispatch is reduced by the
/// engine and then written through the gateway.
#[derive(Debug)]
pub struct Session<S> {
    engine: Engine,
    gateway: PersistenceGateway<S>,
    state: SessionState,
}

impl<S: KeyValueStore> Session<S> {
    /// Resumes the stored session, or deals a fresh one when nothing usable is stored.
    pub fn open(mut engine: Engine, store: S) -> Self {
        let mut gateway = PersistenceGateway::new(store, engine.config.storage_key.clone());
        let state = match gateway.load(&engine.config, &mut engine.rng) {
            Some(state) => state,
            None => {
                let blank = SessionState::empty(&engine.config);
                let state = engine.reduce(&blank, &Action::Init);
                gateway.persist(&state);
                state
            }
        };
        Self {
            engine,
            gateway,
            state,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> &SessionState {
        self.state = self.engine.reduce(&self.state, &action);
        self.gateway.persist(&self.state);
        &self.state
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn position_of(&self, id: &InstanceId) -> Option<usize> {
        self.state.position_of(id)
    }

    pub fn all_cards_ordered(&self) -> bool {
        self.state.all_cards_ordered()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    pub fn into_store(self) -> S {
        self.gateway.into_store()
    }
}
