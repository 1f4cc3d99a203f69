use crate::InstanceId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Intents the engine understands. Wire form is `{"type": "END_TURN", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Init,
    Reset,
    DealNextHand,
    EndTurn,
    #[serde(rename_all = "camelCase")]
    ToggleCardSelection { instance_id: InstanceId },
    ConfirmDiscard,
    #[serde(rename_all = "camelCase")]
    SelectForPlayOrder { instance_id: InstanceId },
    #[serde(rename_all = "camelCase")]
    DeselectFromPlayOrder { instance_id: InstanceId },
    LockPlayOrder,
    ClearPlayOrder,
    #[serde(rename_all = "camelCase")]
    ChangeParameters {
        hand_size: i64,
        discard_count: i64,
        #[serde(default)]
        immediate_reset: bool,
    },
    #[serde(rename_all = "camelCase")]
    ApplyDeckOverride { raw_text: String },
    ApplyPreset { descriptor: Value },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::Reset => "RESET",
            Self::DealNextHand => "DEAL_NEXT_HAND",
            Self::EndTurn => "END_TURN",
            Self::ToggleCardSelection { .. } => "TOGGLE_CARD_SELECTION",
            Self::ConfirmDiscard => "CONFIRM_DISCARD",
            Self::SelectForPlayOrder { .. } => "SELECT_FOR_PLAY_ORDER",
            Self::DeselectFromPlayOrder { .. } => "DESELECT_FROM_PLAY_ORDER",
            Self::LockPlayOrder => "LOCK_PLAY_ORDER",
            Self::ClearPlayOrder => "CLEAR_PLAY_ORDER",
            Self::ChangeParameters { .. } => "CHANGE_PARAMETERS",
            Self::ApplyDeckOverride { .. } => "APPLY_DECK_OVERRIDE",
            Self::ApplyPreset { .. } => "APPLY_PRESET",
        }
    }
}
