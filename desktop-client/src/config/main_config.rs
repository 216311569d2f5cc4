use std::path::PathBuf;
use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, OpponentConfig, WindowConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_desktop_config.yaml";

pub fn get_config_manager(path: impl Into<PathBuf>) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub opponent: OpponentConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.opponent.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
