use std::time::Duration;
use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct OpponentConfig {
    pub delay_ms: u64,
    pub seed: Option<u64>,
}

impl OpponentConfig {
    pub const MAX_DELAY_MS: u64 = 5000;

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            seed: None,
        }
    }
}

impl Validate for OpponentConfig {
    fn validate(&self) -> Result<(), String> {
        if self.delay_ms > Self::MAX_DELAY_MS {
            return Err(format!(
                "opponent delay_ms must not exceed {}, got {}",
                Self::MAX_DELAY_MS,
                self.delay_ms
            ));
        }
        Ok(())
    }
}
