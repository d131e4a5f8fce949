use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::ConfigError;

/// 判分策略
///
/// 解析器从 "correct answer" 行同时捕获字母和尾部文本，
/// 两者都可能作为"正确答案"的依据，由该配置显式决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMatching {
    /// 直接比较捕获到的尾部文本（原始前端行为，尾部缺失时答案为空串）
    CapturedText,
    /// 将捕获字母映射回对应选项文本，映射失败时回退到尾部文本
    LetterMapped,
}

impl Default for AnswerMatching {
    fn default() -> Self {
        AnswerMatching::LetterMapped
    }
}

impl AnswerMatching {
    /// 尝试从字符串解析判分策略
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "captured_text" => Some(AnswerMatching::CapturedText),
            "letter_mapped" => Some(AnswerMatching::LetterMapped),
            _ => None,
        }
    }
}

/// 程序配置文件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- 测评配置 ---
    /// 出题主题
    pub topic: String,
    /// 每次测评的总轮数
    pub total_rounds: usize,
    /// 判分策略
    pub answer_matching: AnswerMatching,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.groq.com/openai/v1".to_string(),
            llm_model_name: "llama3-8b-8192".to_string(),
            topic: "aptitude".to_string(),
            total_rounds: 5,
            answer_matching: AnswerMatching::default(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            topic: std::env::var("QUIZ_TOPIC").unwrap_or(default.topic),
            total_rounds: std::env::var("QUIZ_TOTAL_ROUNDS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.total_rounds),
            answer_matching: std::env::var("QUIZ_ANSWER_MATCHING").ok().and_then(|v| AnswerMatching::from_str(&v)).unwrap_or(default.answer_matching),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置
    ///
    /// 文件中缺失的字段使用默认值补齐
    pub async fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;

        Ok(config)
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::InvalidTotalRounds {
                value: self.total_rounds,
            });
        }
        Ok(())
    }
}
