//! 洞察生成服务 - 业务能力层
//!
//! 只负责"从统计快照推导质性反馈"能力，纯函数
//!
//! 各规则独立判断、可同时命中；一条都没命中时
//! 输出兜底鼓励语，保证反馈列表非空

use crate::models::report::ConfidenceStats;

/// 高信心正确率达到该值视为状态稳定
const HIGH_ACCURACY_BAR: f64 = 70.0;
/// 中信心正确率低于该值视为需要加强
const MEDIUM_ACCURACY_BAR: f64 = 50.0;
/// 低信心正确率高于该值视为低估了自己
const LOW_ACCURACY_BAR: f64 = 60.0;

/// 洞察生成器
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 从统计快照生成反馈列表（至少一条）
    pub fn generate(&self, stats: &ConfidenceStats) -> Vec<String> {
        let mut insights = Vec::new();

        if stats.high.total > 0 {
            if stats.high.accuracy() >= HIGH_ACCURACY_BAR {
                insights.push("✅ You're doing well when you're confident!".to_string());
            } else {
                insights.push(
                    "⚠️ Accuracy drops when you're confident — try reviewing those topics."
                        .to_string(),
                );
            }
        }

        if stats.medium.total > 0 && stats.medium.accuracy() < MEDIUM_ACCURACY_BAR {
            insights.push("📘 Your medium confidence answers need work.".to_string());
        }

        if stats.low.total > 0 && stats.low.accuracy() > LOW_ACCURACY_BAR {
            insights.push(
                "🔍 You're underconfident — you're performing better than you think!".to_string(),
            );
        }

        if insights.is_empty() {
            insights.push("👍 Great effort! Keep practicing to improve even more.".to_string());
        }

        insights
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}
