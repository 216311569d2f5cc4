mod main_config;
mod opponent_config;
mod window_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{CONFIG_FILE, get_config_manager, Config};
pub use opponent_config::OpponentConfig;
pub use window_config::WindowConfig;
