use crate::{Action, EngineConfig, RngState, SessionState};

mod deal;
mod discard;
mod params;
mod play_order;
mod turn;

pub use params::DECK_REVERT_WARNING;

/// The session state machine. Holds configuration and the random source; the
/// session itself is passed in and a new one handed back for every intent.
#[derive(Debug, Clone)]
pub struct Engine {
    pub config: EngineConfig,
    pub rng: RngState,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, RngState::from_entropy())
    }

    pub fn with_rng(config: EngineConfig, rng: RngState) -> Self {
        Self {
            config: config.normalized(),
            rng,
        }
    }

    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, RngState::from_seed(seed))
    }

    /// Computes the successor of `state` under `action`. Invalid intents return
    /// an identical copy.
    pub fn reduce(&mut self, state: &SessionState, action: &Action) -> SessionState {
        let current = state.clone();
        let next = match action {
            Action::Init => self.init(),
            Action::Reset => self.reset(current),
            Action::DealNextHand => self.redeal(current),
            Action::EndTurn => self.end_turn(current),
            Action::ToggleCardSelection { instance_id } => {
                self.toggle_selection(current, instance_id)
            }
            Action::ConfirmDiscard => self.confirm_discard(current),
            Action::SelectForPlayOrder { instance_id } => {
                self.select_for_play_order(current, instance_id)
            }
            Action::DeselectFromPlayOrder { instance_id } => {
                self.deselect_from_play_order(current, instance_id)
            }
            Action::LockPlayOrder => self.lock_play_order(current),
            Action::ClearPlayOrder => self.clear_play_order(current),
            Action::ChangeParameters {
                hand_size,
                discard_count,
                immediate_reset,
            } => self.change_parameters(current, *hand_size, *discard_count, *immediate_reset),
            Action::ApplyDeckOverride { raw_text } => self.apply_deck_override(current, raw_text),
            Action::ApplyPreset { descriptor } => self.apply_preset(current, descriptor),
        };
        if next == *state {
            log::trace!("{} left the session unchanged", action.kind());
        }
        next
    }
}
