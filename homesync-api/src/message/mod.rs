use serde::{Deserialize, Serialize};

/// Event name the backend uses when broadcasting a state change.
pub const DEVICE_UPDATE_EVENT: &str = "device_update";
/// Event name the client emits when requesting a state change.
pub const DEVICE_UPDATE_COMMAND: &str = "device:update";

/// On/off state as it travels on the wire (`"ON"` / `"OFF"`).
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwitchState {
    On,
    Off,
}

impl From<bool> for SwitchState {
    fn from(status: bool) -> Self {
        if status { SwitchState::On } else { SwitchState::Off }
    }
}

impl From<SwitchState> for bool {
    fn from(state: SwitchState) -> Self {
        matches!(state, SwitchState::On)
    }
}

/// Push payload carried by both update events.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    /// Raw device name, matching the registry entry
    pub device_name: String,
    /// New on/off state
    pub status: SwitchState,
}

impl DeviceUpdate {
    pub fn new(device_name: impl Into<String>, status: bool) -> Self {
        Self {
            device_name: device_name.into(),
            status: status.into(),
        }
    }
}
