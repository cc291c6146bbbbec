//! Non-streaming translator for the Baidu text-translation API.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures_util::stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{TextStream, Translator};

const ENDPOINT: &str = "https://fanyi-api.baidu.com/ait/api/aiTextTranslate";

fn default_model_type() -> String {
    "llm".to_string()
}

/// Settings for the `baidu` provider in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct BaiduSettings {
    pub appid: String,
    pub api_key: String,
    #[serde(default = "default_model_type")]
    pub model_type: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    appid: &'a str,
    from: &'a str,
    to: &'a str,
    q: &'a str,
    model_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    trans_result: Vec<TransResult>,
}

#[derive(Debug, Deserialize)]
struct TransResult {
    dst: String,
}

/// Translator backed by a single blocking-style POST to the Baidu API.
///
/// The API translates Chinese to English (`from=zh, to=en`); the result is
/// delivered as a one-fragment [`TextStream`] so the caller can treat both
/// provider kinds uniformly.
pub struct BaiduTranslator {
    client: Client,
    settings: BaiduSettings,
}

impl BaiduTranslator {
    pub fn new(settings: BaiduSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl Translator for BaiduTranslator {
    fn name(&self) -> &'static str {
        "baidu"
    }

    async fn translate(&self, text: &str) -> Result<TextStream> {
        let request = TranslateRequest {
            appid: &self.settings.appid,
            from: "zh",
            to: "en",
            q: text,
            model_type: &self.settings.model_type,
        };

        let response = self
            .client
            .post(ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {ENDPOINT}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read API response")?;

        let fragment: Result<String> = Ok(extract_translation(&body)?);

        Ok(Box::pin(stream::iter([fragment])))
    }
}

/// Extracts `trans_result[0].dst` from a response body.
///
/// The raw body is carried in the error message so an unexpected response
/// can be diagnosed.
fn extract_translation(body: &str) -> Result<String> {
    let response: TranslateResponse = serde_json::from_str(body)
        .map_err(|_| anyhow!("Unexpected response format: {body}"))?;

    response
        .trans_result
        .into_iter()
        .next()
        .map(|result| result.dst)
        .ok_or_else(|| anyhow!("Unexpected response format: {body}"))
}
