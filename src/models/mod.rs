pub mod color_info;
pub mod config;
pub mod saved_palette;

pub use color_info::ColorInfo;
pub use config::{AppConfig, ExtractionConfig, NotificationConfig, PaletteConfig};
pub use saved_palette::SavedPalette;
