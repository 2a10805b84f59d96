use crate::error::PaletteError;
use crate::models::{AppConfig, SavedPalette};
use color_harmony::Color;

/// Result of adding a color to the working palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Color appended at the end
    Added,
    /// An equal color is already present; palette unchanged
    Duplicate,
}

/// In-memory working palette plus the list of saved palettes.
///
/// Every failing operation returns before touching either list.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    current: Vec<Color>,
    saved: Vec<SavedPalette>,
    capacity: Option<usize>,
}

impl PaletteStore {
    /// Create an empty store. `capacity` bounds `add_current`; `None` means
    /// unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            current: Vec::new(),
            saved: Vec::new(),
            capacity,
        }
    }

    /// Create a store seeded with a working palette and saved palettes
    pub fn with_palettes(
        current: Vec<Color>,
        saved: Vec<SavedPalette>,
        capacity: Option<usize>,
    ) -> Self {
        Self {
            current,
            saved,
            capacity,
        }
    }

    /// Create a store from configuration. The initial palette is held to
    /// the same rules as `add_current`: first occurrence of each color wins
    /// and anything past the capacity is dropped.
    pub fn from_config(config: &AppConfig) -> Self {
        let capacity = config.palette.capacity;
        let mut current: Vec<Color> = Vec::with_capacity(config.palette.initial.len());
        for &color in &config.palette.initial {
            if current.contains(&color) {
                tracing::warn!(%color, "Duplicate color in initial palette, skipped");
                continue;
            }
            if capacity.is_some_and(|capacity| current.len() >= capacity) {
                tracing::warn!(%color, ?capacity, "Initial palette exceeds capacity, truncated");
                break;
            }
            current.push(color);
        }

        Self::with_palettes(current, config.saved_palettes.clone(), capacity)
    }

    pub fn current(&self) -> &[Color] {
        &self.current
    }

    pub fn saved(&self) -> &[SavedPalette] {
        &self.saved
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append `color` unless an equal color is already present.
    ///
    /// A duplicate is not an error, and is reported even when the palette is
    /// full.
    pub fn add_current(&mut self, color: Color) -> Result<AddOutcome, PaletteError> {
        if self.current.contains(&color) {
            tracing::debug!(%color, "Color already in palette");
            return Ok(AddOutcome::Duplicate);
        }
        if let Some(capacity) = self.capacity {
            if self.current.len() >= capacity {
                tracing::warn!(%color, capacity, "Palette full, color not added");
                return Err(PaletteError::PaletteFull { capacity });
            }
        }

        self.current.push(color);
        tracing::debug!(%color, len = self.current.len(), "Added color to palette");
        Ok(AddOutcome::Added)
    }

    /// Remove and return the color at `index`
    pub fn remove_current(&mut self, index: usize) -> Result<Color, PaletteError> {
        let len = self.current.len();
        if index >= len {
            return Err(PaletteError::IndexOutOfRange { index, len });
        }
        let color = self.current.remove(index);
        tracing::debug!(%color, index, "Removed color from palette");
        Ok(color)
    }

    /// Replace the working palette wholesale.
    ///
    /// Harmony sets and extracted palettes come in as a unit, so neither
    /// deduplication nor the capacity applies here.
    pub fn replace_current(&mut self, colors: Vec<Color>) {
        tracing::debug!(len = colors.len(), "Replaced palette");
        self.current = colors;
    }

    /// Store a snapshot of `colors` under the trimmed `name`. `colors` must
    /// not be empty.
    pub fn save(&mut self, name: &str, colors: &[Color]) -> Result<&SavedPalette, PaletteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        self.saved.push(SavedPalette::new(name, colors.to_vec()));
        tracing::debug!(name, colors = colors.len(), "Saved palette");
        let index = self.saved.len() - 1;
        Ok(&self.saved[index])
    }

    /// Make a copy of `saved` the working palette and return its first
    /// color, which becomes the new current color.
    pub fn load(&mut self, saved: &SavedPalette) -> Result<Color, PaletteError> {
        let first = *saved.colors.first().ok_or(PaletteError::EmptyPalette)?;
        self.current = saved.colors.clone();
        tracing::debug!(name = %saved.name, len = self.current.len(), "Loaded palette");
        Ok(first)
    }

    /// [`load`](Self::load) the saved palette at `index`
    pub fn load_index(&mut self, index: usize) -> Result<Color, PaletteError> {
        let saved = self
            .saved
            .get(index)
            .cloned()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.saved.len(),
            })?;
        self.load(&saved)
    }

    /// Delete and return the saved palette at `index`
    pub fn delete(&mut self, index: usize) -> Result<SavedPalette, PaletteError> {
        let len = self.saved.len();
        if index >= len {
            return Err(PaletteError::IndexOutOfRange { index, len });
        }
        let removed = self.saved.remove(index);
        tracing::debug!(name = %removed.name, index, "Deleted saved palette");
        Ok(removed)
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
