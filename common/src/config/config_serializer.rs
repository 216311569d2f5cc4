use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML via `serde_yaml_ng`. Parse errors name the line and column so a
/// hand-edited config file can be fixed.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }

    fn describe_error(action: &str, err: &serde_yaml_ng::Error) -> String {
        match err.location() {
            Some(location) => format!(
                "Failed to {} config at line {}, column {}: {}",
                action,
                location.line(),
                location.column(),
                err
            ),
            None => format!("Failed to {} config: {}", action, err),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| Self::describe_error("serialize", &e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Failed to deserialize config: file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| Self::describe_error("deserialize", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type Settings = BTreeMap<String, u64>;

    #[test]
    fn test_parse_error_names_line() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Settings, String> = serializer.deserialize("delay_ms: 1\nseed: [oops\n");
        let message = result.unwrap_err();
        assert!(message.starts_with("Failed to deserialize config at line"), "{}", message);
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Settings, String> = serializer.deserialize("  \n");
        assert_eq!(result.unwrap_err(), "Failed to deserialize config: file is empty");
    }

    #[test]
    fn test_serialized_map_reads_back() {
        let serializer = YamlConfigSerializer::new();
        let settings = Settings::from([("delay_ms".to_string(), 250)]);
        let text = serializer.serialize(&settings).unwrap();
        assert_eq!(text.trim(), "delay_ms: 250");
        let parsed: Settings = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
