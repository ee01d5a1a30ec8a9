use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub detection: DetectionConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub camera_index: u32,
    pub model_path: String,
    pub mirror_mode: bool,
    pub notification_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font_family: String,
    pub font_size_pt: u32,
    pub text_scale: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            model_path: "models/pose_landmark.onnx".to_string(),
            mirror_mode: true,
            notification_timeout_secs: 3,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: "Monospace".to_string(),
            font_size_pt: 14,
            text_scale: 2,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    const PATH: &'static str = "config.json";

    /// Load the config next to the binary, falling back to defaults on a
    /// missing or unparseable file. Always saves back so newly added
    /// fields show up in the file.
    pub fn load() -> Result<Self> {
        let config = if Path::new(Self::PATH).exists() {
            let content = fs::read_to_string(Self::PATH)?;
            // Missing fields fill in from Default via #[serde(default)].
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    println!("Loaded configuration from {}", Self::PATH);
                    c
                }
                Err(e) => {
                    println!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!("Configuration file not found. Creating default at {}", Self::PATH);
            Self::default()
        };

        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::PATH, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_loads_all_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.detection.camera_index, 0);
        assert_eq!(config.detection.notification_timeout_secs, 3);
        assert!(config.detection.mirror_mode);
        assert_eq!(config.ui.font_family, "Monospace");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"detection": {"camera_index": 2}}"#).unwrap();
        assert_eq!(config.detection.camera_index, 2);
        assert_eq!(config.detection.model_path, "models/pose_landmark.onnx");
        assert_eq!(config.ui.font_size_pt, 14);
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = AppConfig::default();
        config.detection.camera_index = 1;
        config.detection.mirror_mode = false;
        let text = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.detection.camera_index, 1);
        assert!(!back.detection.mirror_mode);
    }
}
