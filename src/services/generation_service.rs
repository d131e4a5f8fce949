//! 出题服务 - 业务能力层
//!
//! 只负责"向生成服务要一道题的原始文本"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 兼容 OpenAI API 的服务（Groq、Azure、Doubao 等）
//! - 返回的文本格式不做任何假设，交由解析器兜底

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::difficulty::DifficultyLevel;

/// 出题服务
///
/// 职责：
/// - 按（主题, 难度）调用生成服务产出一道题的原始文本
/// - 只处理单次出题请求
/// - 不出现会话状态
/// - 不关心流程顺序
pub struct GenerationService {
    client: Client<OpenAIConfig>,
    model_name: String,
    api_key_configured: bool,
}

impl GenerationService {
    /// 创建新的出题服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            api_key_configured: !config.llm_api_key.is_empty(),
        }
    }

    /// 请求生成一道选择题的原始文本
    ///
    /// # 参数
    /// - `topic`: 出题主题
    /// - `level`: 难度等级
    ///
    /// # 返回
    /// 返回生成服务的响应文本（去除首尾空白）
    pub async fn generate_question(&self, topic: &str, level: DifficultyLevel) -> Result<String> {
        if !self.api_key_configured {
            anyhow::bail!("未配置生成服务 API 密钥 (LLM_API_KEY)");
        }

        debug!("调用生成服务，模型: {}, 主题: {}, 难度: {}", self.model_name, topic, level);

        let (user_message, system_message) = build_generation_messages(topic, level);

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;

        let messages = vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(1024u32)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("生成服务调用失败: {}", e);
            anyhow::anyhow!("生成服务调用失败: {}", e)
        })?;

        debug!("生成服务调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("生成服务返回内容为空"))?;

        Ok(content.trim().to_string())
    }
}

/// 构建出题消息
///
/// 返回 (user_message, system_message)
fn build_generation_messages(topic: &str, level: DifficultyLevel) -> (String, String) {
    let user_message = format!(
        "Generate a {}-difficulty {} multiple-choice question for placement. \
         Provide 4 options labeled A–D, clearly mention the correct answer.",
        level.as_str(),
        topic
    );

    let system_message =
        "You are a quiz question generator for placement preparation.".to_string();

    (user_message, system_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generation_messages() {
        let (user, system) = build_generation_messages("aptitude", DifficultyLevel::Hard);
        assert!(user.contains("hard-difficulty aptitude"));
        assert!(user.contains("4 options labeled"));
        assert!(system.contains("quiz question generator"));
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        // 默认配置没有 API 密钥，调用应立即失败而不是发起网络请求
        let service = GenerationService::new(&Config::default());
        let result = tokio_test::block_on(service.generate_question("aptitude", DifficultyLevel::Medium));
        assert!(result.is_err());
    }
}
