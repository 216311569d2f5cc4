use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 600.0,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let range = 200.0..=2000.0;
        if !range.contains(&self.width) {
            return Err(format!("window width must be between 200 and 2000, got {}", self.width));
        }
        if !range.contains(&self.height) {
            return Err(format!("window height must be between 200 and 2000, got {}", self.height));
        }
        Ok(())
    }
}
