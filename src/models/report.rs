use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::confidence::ConfidenceLevel;

/// 单个信心等级的答题统计
///
/// 不变式：`correct <= total`，只能通过 `record` 增长
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStat {
    pub correct: u32,
    pub total: u32,
}

impl OutcomeStat {
    /// 记录一次作答结果
    pub fn record(&mut self, was_correct: bool) {
        self.total += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    /// 正确率百分比，无作答时为 0
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

impl std::fmt::Display for OutcomeStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.correct, self.total, self.accuracy())
    }
}

/// 三个信心等级的统计集合
///
/// 固定三个字段而非映射表，"三项始终存在"由结构本身保证
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceStats {
    pub high: OutcomeStat,
    pub medium: OutcomeStat,
    pub low: OutcomeStat,
}

impl ConfidenceStats {
    pub fn get(&self, level: ConfidenceLevel) -> &OutcomeStat {
        match level {
            ConfidenceLevel::High => &self.high,
            ConfidenceLevel::Medium => &self.medium,
            ConfidenceLevel::Low => &self.low,
        }
    }

    pub fn get_mut(&mut self, level: ConfidenceLevel) -> &mut OutcomeStat {
        match level {
            ConfidenceLevel::High => &mut self.high,
            ConfidenceLevel::Medium => &mut self.medium,
            ConfidenceLevel::Low => &mut self.low,
        }
    }
}

/// 测评结束后的完整报告
///
/// 交给展示层渲染结果页的数据载体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizReport {
    /// 总得分
    pub score: u32,
    /// 总轮数
    pub total_rounds: usize,
    /// 按信心等级分层的统计快照
    pub stats: ConfidenceStats,
    /// 质性反馈列表（至少一条）
    pub insights: Vec<String>,
}

impl QuizReport {
    /// 序列化为 JSON（展示层通过接口消费时使用）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
