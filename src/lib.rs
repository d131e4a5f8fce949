//! # Adaptive Quiz
//!
//! 一个自适应难度的选择题测评引擎
//!
//! 题目由外部生成服务（任意兼容 OpenAI API 的端点）以自由文本产出，
//! 引擎负责把文本解析成结构化题目、按信心等级累计答题统计、
//! 在轮次之间调整难度，并在结束时给出分层报告和质性洞察。
//! 展示层（UI）和持久化不在本 crate 范围内。
//!
//! ## 架构设计
//!
//! 本引擎采用严格的四层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 纯数据类型
//! - `Question` / `ConfidenceLevel` / `DifficultyLevel` / `QuizReport`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次调用
//! - `GenerationService` - 出题能力（唯一的网络调用）
//! - `QuestionParser` - 自由文本 → 结构化题目（全函数，绝不报错）
//! - `ConfidenceTracker` - 按信心等级累计统计
//! - `DifficultyAdapter` - 难度调整规则（纯函数）
//! - `InsightGenerator` - 统计 → 质性反馈（纯函数）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一轮题"的完整出题流程
//! - `RoundCtx` - 轮次上下文（第几轮 + 难度）
//! - `RoundFlow` - 流程编排（生成 → 解析 → 失败兜底）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/QuizSession` - 会话状态机，持有全部会话状态
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{AnswerMatching, Config};
pub use error::{ConfigError, SessionError};
pub use models::{
    ConfidenceLevel, ConfidenceStats, DifficultyLevel, OutcomeStat, ParsedOption, Question,
    QuizReport,
};
pub use orchestrator::{AnswerOutcome, QuizSession, SessionState};
pub use services::{
    ConfidenceTracker, DifficultyAdapter, GenerationService, InsightGenerator, QuestionParser,
};
pub use workflow::{RoundCtx, RoundFlow};
