//! Character selection and slot settings for the headless driver.
use std::env;

/// Which ranger to play and where to read and write it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub name: String,
    pub color: String,
    pub power_type: String,
    /// Slot to resume from, when it holds a save.
    pub load_slot: Option<u8>,
    /// Slot written once all encounters are done.
    pub save_slot: Option<u8>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RANGER_NAME` - Character name (default: Jason)
    /// - `RANGER_COLOR` - Red, Blue, Yellow, Pink, Black or Green (default: Red)
    /// - `RANGER_POWER` - Tech, Magic or Nature (default: Tech)
    /// - `RANGER_LOAD_SLOT` - Resume from this slot if it is filled (default: none)
    /// - `RANGER_SAVE_SLOT` - Save here when finished (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("RANGER_NAME") {
            config.name = name;
        }
        if let Ok(color) = env::var("RANGER_COLOR") {
            config.color = color;
        }
        if let Ok(power_type) = env::var("RANGER_POWER") {
            config.power_type = power_type;
        }

        config.load_slot = read_env::<u8>("RANGER_LOAD_SLOT");
        config.save_slot = read_env::<u8>("RANGER_SAVE_SLOT");

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: "Jason".to_string(),
            color: "Red".to_string(),
            power_type: "Tech".to_string(),
            load_slot: None,
            save_slot: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
