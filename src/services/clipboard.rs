use crate::error::ClipboardError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for clipboard access
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard that remembers the last written value
pub struct MemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
    available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: Arc::new(RwLock::new(None)),
            available: true,
        }
    }

    /// A clipboard whose writes always fail with [`ClipboardError::Unavailable`]
    pub fn unavailable() -> Self {
        Self {
            contents: Arc::new(RwLock::new(None)),
            available: false,
        }
    }

    /// Last successfully written value
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::Unavailable);
        }
        let mut contents = self.contents.write().await;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_and_read_back() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents().await, None);

        clipboard.write_text("#3B82F6").await.unwrap();
        clipboard.write_text("#EF4444").await.unwrap();

        assert_eq!(clipboard.contents().await.as_deref(), Some("#EF4444"));
    }

    #[tokio::test]
    async fn test_unavailable_clipboard_fails() {
        let clipboard = MemoryClipboard::unavailable();
        let result = clipboard.write_text("#3B82F6").await;

        assert!(matches!(result, Err(ClipboardError::Unavailable)));
        assert_eq!(clipboard.contents().await, None);
    }
}
