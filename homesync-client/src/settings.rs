use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backend {
    /// Base URL of the home automation backend
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    /// Device list refresh period in seconds
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Updates {
    /// Broadcast channel capacity for push updates
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub backend: Backend,
    pub poll: Poll,
    pub updates: Updates,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        Ok(settings)
    }
}
