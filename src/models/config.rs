use crate::error::ConfigError;
use crate::models::SavedPalette;
use color_harmony::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration shipped with the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../../config.yaml");

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Color selected when a session starts
    #[serde(default = "default_initial_color")]
    pub initial_color: Color,

    /// Working palette settings
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Image extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Palettes available in the saved list at session start
    #[serde(default = "default_saved_palettes")]
    pub saved_palettes: Vec<SavedPalette>,
}

fn default_initial_color() -> Color {
    Color::new(0x3b, 0x82, 0xf6)
}

fn default_saved_palettes() -> Vec<SavedPalette> {
    vec![
        SavedPalette::new(
            "Ocean Blues",
            vec![
                Color::new(0x0e, 0xa5, 0xe9),
                Color::new(0x02, 0x84, 0xc7),
                Color::new(0x03, 0x69, 0xa1),
                Color::new(0x07, 0x59, 0x85),
                Color::new(0x0c, 0x4a, 0x6e),
            ],
        ),
        SavedPalette::new(
            "Sunset Vibes",
            vec![
                Color::new(0xf9, 0x73, 0x16),
                Color::new(0xea, 0x58, 0x0c),
                Color::new(0xdc, 0x26, 0x26),
                Color::new(0xbe, 0x12, 0x3c),
                Color::new(0x9f, 0x12, 0x39),
            ],
        ),
    ]
}

/// Working palette limits and initial contents
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Upper bound enforced by `add`; `None` disables it
    #[serde(default = "default_capacity")]
    pub capacity: Option<usize>,

    #[serde(default = "default_initial_palette")]
    pub initial: Vec<Color>,
}

fn default_capacity() -> Option<usize> {
    Some(10)
}

fn default_initial_palette() -> Vec<Color> {
    vec![
        Color::new(0x3b, 0x82, 0xf6),
        Color::new(0xef, 0x44, 0x44),
        Color::new(0x10, 0xb9, 0x81),
        Color::new(0xf5, 0x9e, 0x0b),
        Color::new(0x8b, 0x5c, 0xf6),
    ]
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            initial: default_initial_palette(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Number of colors requested from the extractor
    #[serde(default = "default_extraction_count")]
    pub count: usize,
}

fn default_extraction_count() -> usize {
    6
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            count: default_extraction_count(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2000
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `CONFIG_FILE` if set, else the embedded file.
    ///
    /// Never fails: unreadable or invalid configuration is logged and the
    /// defaults are used instead.
    pub fn load() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        let result = match &config_file {
            Some(path) => Self::load_from_path(path),
            None => Self::from_yaml(EMBEDDED_CONFIG),
        };

        let source = config_file
            .as_ref()
            .map_or_else(|| "embedded".to_string(), |p| p.display().to_string());

        match result {
            Ok(config) => {
                tracing::info!(
                    %source,
                    palette = config.palette.initial.len(),
                    saved = config.saved_palettes.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_color: default_initial_color(),
            palette: PaletteConfig::default(),
            extraction: ExtractionConfig::default(),
            notifications: NotificationConfig::default(),
            saved_palettes: default_saved_palettes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(config: &AppConfig) -> Vec<&str> {
        config
            .saved_palettes
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.initial_color.to_hex(), "#3B82F6");
        assert_eq!(config.palette.capacity, Some(10));
        assert_eq!(config.palette.initial.len(), 5);
        assert_eq!(config.extraction.count, 6);
        assert_eq!(config.notifications.timeout(), Duration::from_millis(2000));
        assert_eq!(names(&config), vec!["Ocean Blues", "Sunset Vibes"]);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let embedded = AppConfig::from_yaml(EMBEDDED_CONFIG).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(embedded.initial_color, defaults.initial_color);
        assert_eq!(embedded.palette, defaults.palette);
        assert_eq!(embedded.extraction, defaults.extraction);
        assert_eq!(embedded.notifications, defaults.notifications);
        assert_eq!(names(&embedded), names(&defaults));
        for (a, b) in embedded.saved_palettes.iter().zip(&defaults.saved_palettes) {
            assert_eq!(a.colors, b.colors, "{}", a.name);
        }
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.palette.capacity, Some(10));
        assert_eq!(config.extraction.count, 6);
        assert_eq!(config.saved_palettes.len(), 2);
    }

    #[test]
    fn test_null_capacity_disables_limit() {
        let yaml = r#"
palette:
  capacity: null
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.palette.capacity, None);
        // Unspecified sibling keeps its default
        assert_eq!(config.palette.initial.len(), 5);
    }

    #[test]
    fn test_parse_custom_config() {
        let yaml = r##"
initial_color: "ff0000"
palette:
  capacity: 3
  initial: ["#000000"]
extraction:
  count: 4
notifications:
  timeout_ms: 500
saved_palettes: []
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.initial_color, Color::new(255, 0, 0));
        assert_eq!(config.palette.capacity, Some(3));
        assert_eq!(config.palette.initial, vec![Color::BLACK]);
        assert_eq!(config.extraction.count, 4);
        assert_eq!(config.notifications.timeout_ms, 500);
        assert!(config.saved_palettes.is_empty());
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        let result = AppConfig::from_yaml("initial_color: \"#12\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = AppConfig::load_from_path(Path::new("/nonexistent/swatchbook.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
