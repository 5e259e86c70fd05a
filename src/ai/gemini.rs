use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChatTurn, GenerationRequest, ModelTier, TextGenerator};
use crate::config::AppConfig;
use crate::errors::{Result, TeknofestError};

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GenerateContentResponse {
    /// 拼接第一个候选的全部文本片段
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// 密钥放在请求头，避免出现在 URL 与错误信息中
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` REST 客户端
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    chat_model: String,
    report_model: String,
}

impl GeminiClient {
    pub fn from_config() -> Result<Self> {
        let ai = &AppConfig::get().ai;
        if ai.api_key.is_empty() {
            warn!("GEMINI API key is not configured; AI features will return fallback messages");
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(ai.timeout))
            .build()
            .map_err(|e| TeknofestError::ai_service(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            client,
            api_key: ai.api_key.clone(),
            base_url: ai.base_url.trim_end_matches('/').to_string(),
            chat_model: ai.chat_model.clone(),
            report_model: ai.report_model.clone(),
        })
    }

    fn model(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Chat => &self.chat_model,
            ModelTier::Report => &self.report_model,
        }
    }

    fn endpoint(&self, tier: ModelTier) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model(tier))
    }
}

fn build_body(request: &GenerationRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        system_instruction: request.system_instruction.as_deref().map(|text| Content {
            role: None,
            parts: vec![Part { text }],
        }),
        contents: request
            .contents
            .iter()
            .map(|ChatTurn { role, text }| Content {
                role: Some(role.as_str()),
                parts: vec![Part { text }],
            })
            .collect(),
        generation_config: request
            .temperature
            .map(|temperature| GenerationConfig { temperature }),
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(TeknofestError::ai_service("GEMINI API key is not configured"));
        }

        debug!(
            "Calling {} with {} content turn(s)",
            self.model(request.tier),
            request.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint(request.tier))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&build_body(&request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(TeknofestError::ai_service(format!(
                "Gemini returned {status}: {message}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}
