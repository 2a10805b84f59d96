//! Test fixtures and constants.

use std::sync::Arc;

use color_harmony::Color;
use swatchbook::models::AppConfig;
use swatchbook::services::MemoryClipboard;
use swatchbook::Session;

/// Colors of the default working palette
pub mod colors {
    pub const BLUE: &str = "#3B82F6";
    pub const RED: &str = "#EF4444";
    pub const GREEN: &str = "#10B981";
    pub const AMBER: &str = "#F59E0B";
    pub const VIOLET: &str = "#8B5CF6";
}

/// Config with a small palette capacity for limit tests
pub const SMALL_CONFIG: &str = r##"
initial_color: "#000000"
palette:
  capacity: 3
  initial: ["#000000", "#FFFFFF"]
extraction:
  count: 4
notifications:
  timeout_ms: 50
saved_palettes: []
"##;

pub fn color(hex: &str) -> Color {
    hex.parse().unwrap()
}

/// Session on the default config plus a handle to its clipboard
pub fn default_session() -> (Session, Arc<MemoryClipboard>) {
    session_with(&AppConfig::default())
}

pub fn session_with(config: &AppConfig) -> (Session, Arc<MemoryClipboard>) {
    let clipboard = Arc::new(MemoryClipboard::new());
    let session = Session::new(config, clipboard.clone());
    (session, clipboard)
}
