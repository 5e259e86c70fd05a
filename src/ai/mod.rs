//! 生成式文本服务
//!
//! 业务层只依赖 [`TextGenerator`]，生产环境使用 Gemini REST 客户端，
//! 测试使用按脚本回放的实现。

pub mod gemini;
pub mod prompts;
pub mod sanitize;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::chat::ChatRole;

pub use gemini::GeminiClient;

/// 模型档位：对话用快速模型，报告与分析用高质量模型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Chat,
    Report,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub tier: ModelTier,
    pub system_instruction: Option<String>,
    pub contents: Vec<ChatTurn>,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// 单条用户输入、无系统提示的请求（报告生成、文档分析）
    pub fn single_prompt(tier: ModelTier, prompt: impl Into<String>) -> Self {
        Self {
            tier,
            system_instruction: None,
            contents: vec![ChatTurn::user(prompt)],
            temperature: None,
        }
    }

    /// 带人设的多轮对话请求
    pub fn conversation(system_instruction: &str, contents: Vec<ChatTurn>, temperature: f32) -> Self {
        Self {
            tier: ModelTier::Chat,
            system_instruction: Some(system_instruction.to_string()),
            contents,
            temperature: Some(temperature),
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 返回模型输出的纯文本；模型未给出内容时返回空串，由调用方决定兜底文案
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}

pub fn create_generator() -> Result<Arc<dyn TextGenerator>> {
    Ok(Arc::new(GeminiClient::from_config()?))
}
