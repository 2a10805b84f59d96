pub mod clipboard;
pub mod extractor;
pub mod notifier;
pub mod palette_store;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use extractor::{FixedExtractor, PaletteExtractor};
pub use notifier::{Level, Notification, Notifier};
pub use palette_store::{AddOutcome, PaletteStore};
