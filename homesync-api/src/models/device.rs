use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device identifier
    pub id: Id,
    /// Display name, may contain spaces or underscores
    pub name: String,
    /// Device description
    pub description: String,
    /// Current on/off state
    pub status: bool,
    /// Device category label
    #[serde(rename = "type")]
    pub device_type: String,
    /// Last reported reading
    pub value: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceListResponse {
    /// Response envelope
    pub data: DeviceList,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceList {
    /// Known devices in backend order
    pub devices: Vec<Device>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleDeviceRequest {
    /// Target device name
    pub name: String,
    /// Requested on/off state
    pub status: bool,
}
