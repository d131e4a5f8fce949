//! 信心统计服务 - 业务能力层
//!
//! 只负责"按信心等级累计答题结果"能力，不关心流程

use tracing::debug;

use crate::models::confidence::ConfidenceLevel;
use crate::models::report::ConfidenceStats;

/// 信心统计追踪器
///
/// 职责：
/// - 每次作答后累计对应信心等级的 total/correct
/// - 对外只提供只读快照
/// - 归零仅发生在显式的会话重置
pub struct ConfidenceTracker {
    stats: ConfidenceStats,
}

impl ConfidenceTracker {
    /// 创建新的追踪器（三个等级全部归零）
    pub fn new() -> Self {
        Self {
            stats: ConfidenceStats::default(),
        }
    }

    /// 记录一次作答结果
    pub fn record_outcome(&mut self, level: ConfidenceLevel, was_correct: bool) {
        self.stats.get_mut(level).record(was_correct);
        debug!(
            "记录作答: 信心 {} | 正确 {} | 当前 {}",
            level,
            was_correct,
            self.stats.get(level)
        );
    }

    /// 获取当前统计的副本（供报告和洞察使用）
    pub fn snapshot(&self) -> ConfidenceStats {
        self.stats.clone()
    }

    /// 归零所有等级的统计
    pub fn reset(&mut self) {
        self.stats = ConfidenceStats::default();
    }
}

impl Default for ConfidenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
