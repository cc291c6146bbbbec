//! Translation providers.
//!
//! Each provider implements the [`Translator`] capability and is selected by
//! name from the configuration file via [`create_translator`].

mod baidu;
mod prompt;
mod qwen;
mod sse;

pub use baidu::BaiduTranslator;
pub use qwen::QwenTranslator;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

use crate::config::ConfigFile;

/// An ordered stream of translated text fragments.
///
/// Streaming providers yield fragments as they arrive from the wire;
/// non-streaming providers yield the whole translation as a single fragment.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// A translation capability bound to one provider's settings.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name as it appears in the configuration file.
    fn name(&self) -> &'static str;

    /// Translates `text` into English.
    ///
    /// Returns a stream of fragments in arrival order. Request setup errors
    /// (connection failure, non-success status) are returned from this call;
    /// errors during stream consumption surface as `Err` items in the stream.
    async fn translate(&self, text: &str) -> Result<TextStream>;
}

impl std::fmt::Debug for dyn Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("name", &self.name())
            .finish()
    }
}

/// Constructs the translator selected by `current_provider`.
///
/// # Errors
///
/// Returns an error if the selected provider has no settings in `providers`,
/// if its settings fail to parse, or if the name is not a known provider.
/// All of these are resolved before any network call is made.
pub fn create_translator(config: &ConfigFile) -> Result<Box<dyn Translator>> {
    let name = config.current_provider.as_str();

    let settings = config.providers.get(name).ok_or_else(|| {
        let available: Vec<_> = config.providers.keys().map(String::as_str).collect();
        if available.is_empty() {
            anyhow::anyhow!(
                "Provider '{name}' not found in config\n\n\
                 No providers configured. Add providers to ~/.config/atrans/config.json"
            )
        } else {
            anyhow::anyhow!(
                "Provider '{name}' not found in config\n\n\
                 Configured providers:\n  - {}",
                available.join("\n  - ")
            )
        }
    })?;

    match name {
        "qwen" => {
            let settings = serde_json::from_value(settings.clone())
                .context("Invalid settings for provider 'qwen'")?;
            Ok(Box::new(QwenTranslator::new(settings)))
        }
        "baidu" => {
            let settings = serde_json::from_value(settings.clone())
                .context("Invalid settings for provider 'baidu'")?;
            Ok(Box::new(BaiduTranslator::new(settings)))
        }
        other => bail!("Unknown provider '{other}' (supported: qwen, baidu)"),
    }
}
