//! Streaming translator for OpenAI-compatible chat-completion endpoints.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::prompt::SYSTEM_PROMPT;
use super::sse::sse_text_stream;
use super::{TextStream, Translator};

/// Settings for the `qwen` provider in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct QwenSettings {
    pub api_key: String,
    /// Endpoint base, including the version segment
    /// (e.g. `https://dashscope.aliyuncs.com/compatible-mode/v1`).
    pub base_url: String,
    pub model: String,
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Translator backed by a streaming chat-completion request.
pub struct QwenTranslator {
    client: Client,
    settings: QwenSettings,
}

impl QwenTranslator {
    pub fn new(settings: QwenSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Translator for QwenTranslator {
    fn name(&self) -> &'static str {
        "qwen"
    }

    async fn translate(&self, text: &str) -> Result<TextStream> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .json(&chat_request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        Ok(Box::pin(sse_text_stream(response.bytes_stream())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(base_url: &str) -> QwenSettings {
        QwenSettings {
            api_key: "sk-test".to_string(),
            base_url: base_url.to_string(),
            model: "qwen-plus".to_string(),
        }
    }

    #[test]
    fn test_completions_url_appends_path() {
        let translator = QwenTranslator::new(settings("https://example.com/v1"));
        assert_eq!(
            translator.completions_url(),
            "https://example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let translator = QwenTranslator::new(settings("https://example.com/v1/"));
        assert_eq!(
            translator.completions_url(),
            "https://example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_settings_require_all_fields() {
        let result: Result<QwenSettings, _> =
            serde_json::from_value(json!({"api_key": "k", "model": "m"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_serializes_system_and_user_messages() {
        let request = ChatCompletionRequest {
            model: "qwen-plus",
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed("你好"),
                },
            ],
            stream: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], json!("qwen-plus"));
        assert_eq!(value["stream"], json!(true));
        assert_eq!(value["messages"][0]["role"], json!("system"));
        assert_eq!(value["messages"][1]["role"], json!("user"));
        assert_eq!(value["messages"][1]["content"], json!("你好"));
    }
}
