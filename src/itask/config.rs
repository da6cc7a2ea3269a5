use crate::error::{ItaskError, Result};
use crate::notify::DEFAULT_TTL_MS;
use crate::store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for itask, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItaskConfig {
    /// Name of the durable slot holding the todos
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Whether completed todos are listed when a session starts
    #[serde(default = "default_show_completed")]
    pub show_completed: bool,

    /// How long notifications stay visible, in milliseconds
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_show_completed() -> bool {
    true
}

fn default_notification_ttl_ms() -> u64 {
    DEFAULT_TTL_MS
}

impl Default for ItaskConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            show_completed: default_show_completed(),
            notification_ttl_ms: default_notification_ttl_ms(),
        }
    }
}

impl ItaskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ItaskError::Io)?;
        let config: ItaskConfig =
            serde_json::from_str(&content).map_err(ItaskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ItaskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ItaskError::Serialization)?;
        fs::write(config_path, content).map_err(ItaskError::Io)?;
        Ok(())
    }

    /// Set the slot name. Only letters, digits, `-` and `_` are allowed since
    /// the name doubles as a file name.
    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ItaskError::Api(format!("Invalid storage key: {}", key)));
        }
        self.storage_key = key.to_string();
        Ok(())
    }

    /// Look up a setting by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "show-completed" => Ok(self.show_completed.to_string()),
            "notification-ttl" => Ok(self.notification_ttl_ms.to_string()),
            other => Err(ItaskError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Update a setting by its CLI name, parsing the value as needed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => self.set_storage_key(value),
            "show-completed" => {
                self.show_completed = value.trim().parse().map_err(|_| {
                    ItaskError::Api(format!("Expected true or false, got: {}", value))
                })?;
                Ok(())
            }
            "notification-ttl" => {
                self.notification_ttl_ms = value.trim().parse().map_err(|_| {
                    ItaskError::Api(format!("Expected milliseconds, got: {}", value))
                })?;
                Ok(())
            }
            other => Err(ItaskError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("storage-key", self.storage_key.clone()),
            ("show-completed", self.show_completed.to_string()),
            ("notification-ttl", self.notification_ttl_ms.to_string()),
        ]
    }
}
