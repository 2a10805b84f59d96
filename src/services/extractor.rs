use crate::error::ExtractError;
use async_trait::async_trait;

/// Image-to-palette collaborator.
///
/// Implementations sample the image and return hex color strings. The
/// strings are untrusted; the session validates every one before use.
#[async_trait]
pub trait PaletteExtractor: Send + Sync {
    async fn extract(&self, image: &[u8]) -> Result<Vec<String>, ExtractError>;
}

/// Extractor that ignores the image and returns a fixed list, limited to
/// `count` entries
pub struct FixedExtractor {
    colors: Vec<String>,
    count: usize,
    failure: Option<String>,
}

impl FixedExtractor {
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>, count: usize) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            count,
            failure: None,
        }
    }

    /// An extractor whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            colors: Vec::new(),
            count: 0,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl PaletteExtractor for FixedExtractor {
    async fn extract(&self, image: &[u8]) -> Result<Vec<String>, ExtractError> {
        if let Some(message) = &self.failure {
            return Err(ExtractError::Failed(message.clone()));
        }
        tracing::debug!(bytes = image.len(), count = self.count, "Extracting palette");
        Ok(self.colors.iter().take(self.count).cloned().collect())
    }
}
