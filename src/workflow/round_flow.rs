//! 单轮出题流程 - 流程层
//!
//! 核心职责：定义"一轮题"的完整出题流程
//!
//! 流程顺序：
//! 1. 生成服务出题（网络调用，唯一的挂起点）
//! 2. 解析为结构化题目
//! 3. 失败兜底（占位题目，流程绝不向上抛错）

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::models::question::Question;
use crate::services::{GenerationService, QuestionParser};
use crate::utils::logging;
use crate::workflow::round_ctx::RoundCtx;

/// 单轮出题流程
///
/// - 编排出题 → 解析两步
/// - 生成失败时降级为占位题目，不中断会话
/// - 不持有会话状态
/// - 只依赖业务能力（services）
pub struct RoundFlow {
    generation: GenerationService,
    parser: QuestionParser,
    topic: String,
    verbose_logging: bool,
}

impl RoundFlow {
    /// 创建新的单轮流程
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            generation: GenerationService::new(config),
            parser: QuestionParser::new()?,
            topic: config.topic.clone(),
            verbose_logging: config.verbose_logging,
        })
    }

    /// 执行一轮出题
    ///
    /// 全函数：生成服务调用失败时返回占位题目，
    /// 展示层会看到"加载失败请重试"而不是崩溃
    pub async fn run(&self, ctx: &RoundCtx) -> Question {
        info!("{} 🔍 正在请求生成服务出题 (主题: {})...", ctx, self.topic);

        match self.generation.generate_question(&self.topic, ctx.level).await {
            Ok(raw_text) => {
                if self.verbose_logging {
                    debug!("{} 原始生成文本:\n{}", ctx, raw_text);
                }

                let question = self.parse_raw(&raw_text);
                info!("{} ✓ 出题完成，题干: {}", ctx, logging::truncate_text(&question.text, 80));

                if question.options.len() != 4 {
                    warn!(
                        "{} ⚠️ 解析出 {} 个选项（预期 4 个），按退化结果继续",
                        ctx,
                        question.options.len()
                    );
                }

                question
            }
            Err(e) => {
                error!("{} ❌ 出题失败: {}，使用占位题目", ctx, e);
                Question::placeholder()
            }
        }
    }

    /// 直接解析已有的原始文本
    ///
    /// 供自带传输层的展示端使用：它们自己拿到了生成文本，
    /// 只需要引擎的解析和会话逻辑
    pub fn parse_raw(&self, raw_text: &str) -> Question {
        self.parser.parse(raw_text)
    }
}
