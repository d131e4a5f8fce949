//! 难度调整服务 - 业务能力层
//!
//! 只负责"根据本轮结果决定下一轮难度"能力，纯函数、无状态
//!
//! ## 调整规则
//!
//! | 当前 | 答对 | 信心 | 下一轮 |
//! |------|------|------|--------|
//! | Easy | 是 | High | Medium |
//! | Medium | 是 | High | Hard |
//! | Medium | 否 | Low/Medium | Easy |
//! | Hard | 否 | Low/Medium | Medium |
//!
//! 其余组合不变：高信心答错和低/中信心答对都是模糊信号，
//! 不作为升降级依据；Hard 不再上探，Easy 不再下探

use crate::models::confidence::ConfidenceLevel;
use crate::models::difficulty::DifficultyLevel;

/// 难度调整器
pub struct DifficultyAdapter;

impl DifficultyAdapter {
    pub fn new() -> Self {
        Self
    }

    /// 计算下一轮难度
    ///
    /// 纯函数：相同输入必得相同输出
    pub fn next_level(
        &self,
        current: DifficultyLevel,
        was_correct: bool,
        confidence: ConfidenceLevel,
    ) -> DifficultyLevel {
        match (was_correct, confidence) {
            // 高信心答对：视为当前档位已掌握，上探一级
            (true, ConfidenceLevel::High) => match current {
                DifficultyLevel::Easy => DifficultyLevel::Medium,
                DifficultyLevel::Medium => DifficultyLevel::Hard,
                DifficultyLevel::Hard => DifficultyLevel::Hard,
            },
            // 低/中信心答错：视为超出能力，下探一级
            (false, ConfidenceLevel::Low | ConfidenceLevel::Medium) => match current {
                DifficultyLevel::Hard => DifficultyLevel::Medium,
                DifficultyLevel::Medium => DifficultyLevel::Easy,
                DifficultyLevel::Easy => DifficultyLevel::Easy,
            },
            _ => current,
        }
    }
}

impl Default for DifficultyAdapter {
    fn default() -> Self {
        Self::new()
    }
}
