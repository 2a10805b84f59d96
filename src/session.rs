//! Session state
//!
//! A [`Session`] owns everything one user interacts with: the current color,
//! the palette store, the notification slot and the clipboard. Each user
//! action is one method; a failing action leaves the state unchanged and
//! posts an error notification.

use crate::error::PaletteError;
use crate::models::{AppConfig, ColorInfo, SavedPalette};
use crate::services::{AddOutcome, Clipboard, Notifier, PaletteExtractor, PaletteStore};
use color_harmony::{harmony, random_color, Color, HarmonyScheme};
use std::sync::Arc;

pub struct Session {
    current_color: Color,
    store: PaletteStore,
    notifier: Notifier,
    clipboard: Arc<dyn Clipboard>,
    extraction_count: usize,
}

impl Session {
    pub fn new(config: &AppConfig, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            current_color: config.initial_color,
            store: PaletteStore::from_config(config),
            notifier: Notifier::new(config.notifications.timeout()),
            clipboard,
            extraction_count: config.extraction.count,
        }
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn palette(&self) -> &[Color] {
        self.store.current()
    }

    pub fn saved(&self) -> &[SavedPalette] {
        self.store.saved()
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Number of colors requested from an image extractor
    pub fn extraction_count(&self) -> usize {
        self.extraction_count
    }

    /// Make `color` the current color
    pub fn select(&mut self, color: Color) {
        tracing::debug!(%color, "Selected color");
        self.current_color = color;
    }

    /// Manual color entry: the text must parse, otherwise nothing changes
    pub fn enter_color(&mut self, text: &str) -> Result<Color, PaletteError> {
        let result = text.parse::<Color>().map_err(PaletteError::from);
        let color = self.report(result)?;
        self.select(color);
        Ok(color)
    }

    pub fn randomize(&mut self) -> Color {
        let color = random_color();
        self.select(color);
        color
    }

    /// Add the current color to the working palette
    pub fn add_current(&mut self) -> Result<AddOutcome, PaletteError> {
        let result = self.store.add_current(self.current_color);
        self.report(result)
    }

    pub fn remove(&mut self, index: usize) -> Result<Color, PaletteError> {
        let result = self.store.remove_current(index);
        self.report(result)
    }

    /// Select the palette color at `index`
    pub fn pick(&mut self, index: usize) -> Result<Color, PaletteError> {
        let len = self.store.current().len();
        let result = self
            .store
            .current()
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange { index, len });
        let color = self.report(result)?;
        self.select(color);
        Ok(color)
    }

    /// Replace the working palette with the harmony set of the current
    /// color. The current color itself does not change.
    pub fn apply_harmony(&mut self, scheme: HarmonyScheme) -> &[Color] {
        let colors = harmony(self.current_color, scheme);
        tracing::debug!(%scheme, base = %self.current_color, "Applied harmony");
        self.store.replace_current(colors);
        self.store.current()
    }

    /// Accept a palette delivered by an extractor.
    ///
    /// Every entry must parse or the whole batch is rejected. An empty batch
    /// is ignored. On success the palette is replaced and its first color
    /// becomes current.
    pub fn palette_ready<S: AsRef<str>>(
        &mut self,
        hexes: &[S],
    ) -> Result<Option<Color>, PaletteError> {
        let parsed = hexes
            .iter()
            .map(|hex| hex.as_ref().parse::<Color>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(PaletteError::from);
        let colors = self.report(parsed)?;

        let Some(&first) = colors.first() else {
            tracing::warn!("Extractor delivered no colors, palette unchanged");
            return Ok(None);
        };
        self.store.replace_current(colors);
        self.select(first);
        Ok(Some(first))
    }

    /// Run `extractor` on `image` and feed the result to
    /// [`palette_ready`](Self::palette_ready)
    pub async fn extract(
        &mut self,
        extractor: &dyn PaletteExtractor,
        image: &[u8],
    ) -> Result<Option<Color>, PaletteError> {
        let result = extractor.extract(image).await.map_err(PaletteError::from);
        let hexes = self.report(result)?;
        self.palette_ready(&hexes)
    }

    /// Save the working palette under `name`
    pub fn save(&mut self, name: &str) -> Result<SavedPalette, PaletteError> {
        let colors = self.store.current().to_vec();
        let result = self.store.save(name, &colors).cloned();
        let saved = self.report(result)?;
        self.notifier.info(format!("Saved \"{}\"", saved.name));
        Ok(saved)
    }

    /// Load the saved palette at `index`; its first color becomes current
    pub fn load(&mut self, index: usize) -> Result<Color, PaletteError> {
        let result = self.store.load_index(index);
        let color = self.report(result)?;
        self.select(color);
        Ok(color)
    }

    pub fn delete(&mut self, index: usize) -> Result<SavedPalette, PaletteError> {
        let result = self.store.delete(index);
        let removed = self.report(result)?;
        self.notifier.info(format!("Deleted \"{}\"", removed.name));
        Ok(removed)
    }

    pub async fn copy_current(&mut self) -> Result<Color, PaletteError> {
        let color = self.current_color;
        self.copy_color(color).await
    }

    /// Copy `hex` to the clipboard in canonical form
    pub async fn copy(&mut self, hex: &str) -> Result<Color, PaletteError> {
        let result = hex.parse::<Color>().map_err(PaletteError::from);
        let color = self.report(result)?;
        self.copy_color(color).await
    }

    async fn copy_color(&mut self, color: Color) -> Result<Color, PaletteError> {
        let result = self
            .clipboard
            .write_text(&color.to_hex())
            .await
            .map_err(PaletteError::from);
        self.report(result)?;
        self.notifier.info(format!("Copied {color}"));
        Ok(color)
    }

    /// Display details of the current color
    pub fn color_info(&self) -> ColorInfo {
        ColorInfo::new(self.current_color)
    }

    fn report<T>(&mut self, result: Result<T, PaletteError>) -> Result<T, PaletteError> {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Action rejected");
            self.notifier.error(e.to_string());
        }
        result
    }
}
