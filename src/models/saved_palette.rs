use chrono::{DateTime, Utc};
use color_harmony::Color;
use serde::{Deserialize, Serialize};

/// A named snapshot of a palette.
///
/// The colors are copied at save time, so later edits to the working palette
/// never reach a saved one. Names are trimmed but not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub colors: Vec<Color>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl SavedPalette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
            created_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
