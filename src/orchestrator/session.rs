//! 测评会话 - 编排层
//!
//! ## 职责
//!
//! 本模块是引擎的对外入口，负责单个测评会话的完整生命周期。
//!
//! ## 核心功能
//!
//! 1. **会话状态**：唯一持有 `SessionState`（当前难度、轮次、得分、终态标志）
//! 2. **出题**：委托 `RoundFlow` 完成生成 → 解析（失败兜底为占位题目）
//! 3. **判分**：按配置的判分策略比较用户选项文本
//! 4. **难度调整**：每轮作答后调用 `DifficultyAdapter`
//! 5. **报告**：终态时组合得分、统计快照和洞察
//!
//! ## 设计特点
//!
//! - 单会话单参与者，操作严格串行，无锁
//! - 答题前重复调用 `start_round` 时后到者覆盖先到者（last-write-wins）
//! - 前置条件违规返回类型化的 `SessionError`，不做静默容忍

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::SessionError;
use crate::models::confidence::ConfidenceLevel;
use crate::models::difficulty::DifficultyLevel;
use crate::models::question::Question;
use crate::models::report::{ConfidenceStats, QuizReport};
use crate::services::{ConfidenceTracker, DifficultyAdapter, InsightGenerator};
use crate::utils::logging;
use crate::workflow::{RoundCtx, RoundFlow};

/// 会话状态
///
/// 起始值：难度 Medium、轮次 0、得分 0、未完成；
/// 只有显式 `reset` 会把所有字段还原到起始值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// 下一轮请求的难度
    pub current_level: DifficultyLevel,
    /// 已完成的轮次数（0-based 游标）
    pub round_index: usize,
    /// 总轮数
    pub total_rounds: usize,
    /// 当前得分
    pub score: u32,
    /// 是否已到达终态
    pub completed: bool,
}

impl SessionState {
    fn new(total_rounds: usize) -> Self {
        Self {
            current_level: DifficultyLevel::Medium,
            round_index: 0,
            total_rounds,
            score: 0,
            completed: false,
        }
    }
}

/// 单次作答的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// 本轮是否答对
    pub was_correct: bool,
    /// 会话是否因此到达终态
    pub is_complete: bool,
}

/// 测评会话
///
/// # 示例
/// ```no_run
/// # use adaptive_quiz::{Config, ConfidenceLevel, QuizSession};
/// # async fn example() -> anyhow::Result<()> {
/// let mut session = QuizSession::new(Config::from_env())?;
///
/// while !session.is_complete() {
///     let question = session.start_round().await?;
///     println!("题目: {}", question.text);
///     // 展示层收集用户的选项文本和信心等级后提交
///     session.submit_answer(Some("42"), ConfidenceLevel::High)?;
/// }
///
/// let report = session.report()?;
/// println!("{}", report.to_json()?);
/// # Ok(())
/// # }
/// ```
pub struct QuizSession {
    config: Config,
    flow: RoundFlow,
    adapter: DifficultyAdapter,
    insight: InsightGenerator,
    tracker: ConfidenceTracker,
    state: SessionState,
    current_question: Option<Question>,
}

impl QuizSession {
    /// 创建新的测评会话
    ///
    /// # 返回
    /// 配置非法（如总轮数为 0）或解析器初始化失败时报错
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let flow = RoundFlow::new(&config)?;
        let state = SessionState::new(config.total_rounds);

        logging::log_session_start(&config);

        Ok(Self {
            config,
            flow,
            adapter: DifficultyAdapter::new(),
            insight: InsightGenerator::new(),
            tracker: ConfidenceTracker::new(),
            state,
            current_question: None,
        })
    }

    /// 开始新的一轮：请求生成服务出题并解析
    ///
    /// 生成失败时返回占位题目而不是错误；答题前重复调用时，
    /// 以最后一次的题目为准（轮次严格串行，旧题直接作废）
    pub async fn start_round(&mut self) -> Result<&Question, SessionError> {
        if self.state.completed {
            return Err(SessionError::SessionCompleted);
        }

        let ctx = self.round_ctx();
        let question = self.flow.run(&ctx).await;

        Ok(&*self.current_question.insert(question))
    }

    /// 用已有的原始文本开始新的一轮
    ///
    /// 供自带传输层的展示端和测试使用，解析语义与 `start_round` 一致
    pub fn start_round_with_text(&mut self, raw_text: &str) -> Result<&Question, SessionError> {
        if self.state.completed {
            return Err(SessionError::SessionCompleted);
        }

        let ctx = self.round_ctx();
        let question = self.flow.parse_raw(raw_text);
        info!("{} ✓ 出题完成: {}", ctx, question);

        Ok(&*self.current_question.insert(question))
    }

    /// 提交本轮答案
    ///
    /// # 参数
    /// - `selected`: 用户选中的选项文本，`None` 表示没有选择（拒绝提交，不改状态）
    /// - `confidence`: 用户自报的信心等级
    ///
    /// # 返回
    /// 本轮判分结果；前置条件违规时返回 `SessionError`
    pub fn submit_answer(
        &mut self,
        selected: Option<&str>,
        confidence: ConfidenceLevel,
    ) -> Result<AnswerOutcome, SessionError> {
        if self.state.completed {
            return Err(SessionError::SessionCompleted);
        }

        let selected = selected.ok_or(SessionError::NoSelection)?;

        let question = self
            .current_question
            .as_ref()
            .ok_or(SessionError::NoActiveQuestion)?;

        let expected = question.expected_answer(self.config.answer_matching);
        let was_correct = selected == expected;

        let round_no = self.state.round_index + 1;
        if was_correct {
            self.state.score += 1;
            info!(
                "[第 {}/{} 轮] ✓ 回答正确 (信心: {})",
                round_no, self.state.total_rounds, confidence
            );
        } else {
            info!(
                "[第 {}/{} 轮] ✗ 回答错误 (信心: {})",
                round_no, self.state.total_rounds, confidence
            );
        }

        self.tracker.record_outcome(confidence, was_correct);

        let next_level = self
            .adapter
            .next_level(self.state.current_level, was_correct, confidence);
        if next_level != self.state.current_level {
            info!(
                "📈 难度调整: {} → {}",
                self.state.current_level, next_level
            );
        }
        self.state.current_level = next_level;

        // 本轮题目用完即弃
        self.current_question = None;
        self.state.round_index += 1;

        if self.state.round_index >= self.state.total_rounds {
            self.state.completed = true;
            info!(
                "🎉 测评完成，得分 {}/{}",
                self.state.score, self.state.total_rounds
            );
        }

        Ok(AnswerOutcome {
            was_correct,
            is_complete: self.state.completed,
        })
    }

    /// 生成最终报告
    ///
    /// 仅在会话到达终态后可用
    pub fn report(&self) -> Result<QuizReport, SessionError> {
        if !self.state.completed {
            return Err(SessionError::SessionNotCompleted);
        }

        let stats = self.tracker.snapshot();
        let insights = self.insight.generate(&stats);

        Ok(QuizReport {
            score: self.state.score,
            total_rounds: self.state.total_rounds,
            stats,
            insights,
        })
    }

    /// 重置会话：所有字段还原到起始值（对应前端的"重新测评"）
    pub fn reset(&mut self) {
        self.state = SessionState::new(self.config.total_rounds);
        self.tracker.reset();
        self.current_question = None;
        info!("🔄 会话已重置，从 medium 难度重新开始");
    }

    /// 当前会话状态（只读）
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 当前统计快照（展示层在会话中途显示分层进度时使用）
    pub fn stats_snapshot(&self) -> ConfidenceStats {
        self.tracker.snapshot()
    }

    /// 当前待作答的题目（本轮尚未提交时）
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// 会话是否已到达终态
    pub fn is_complete(&self) -> bool {
        self.state.completed
    }

    fn round_ctx(&self) -> RoundCtx {
        RoundCtx::new(
            self.state.round_index,
            self.state.total_rounds,
            self.state.current_level,
        )
    }
}
