//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层持有会话状态机，是引擎的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::QuizSession (会话状态机: 判分 / 调难度 / 报告)
//!     ↓
//! workflow::RoundFlow (单轮流程: 生成 → 解析 → 兜底)
//!     ↓
//! services (能力层: generation / parser / tracker / adapter / insight)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：轮内细节归 workflow，会话推进归本层
//! 2. **状态隔离**：只有本层持有 `SessionState` 和统计追踪器
//! 3. **向下依赖**：编排层 → workflow → services

pub mod session;

pub use session::{AnswerOutcome, QuizSession, SessionState};
