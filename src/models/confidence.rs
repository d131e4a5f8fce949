/// 信心等级枚举
///
/// 用户作答时自报的把握程度，用于难度调整和报告分层，
/// 不影响判分本身
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// 很有把握
    High,
    /// 一般把握
    Medium,
    /// 没有把握
    Low,
}

impl ConfidenceLevel {
    /// 获取标准名称（与前端下拉框取值一致）
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    /// 尝试从字符串解析信心等级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(ConfidenceLevel::High),
            "medium" => Some(ConfidenceLevel::Medium),
            "low" => Some(ConfidenceLevel::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ConfidenceLevel::from_str("high"), Some(ConfidenceLevel::High));
        assert_eq!(ConfidenceLevel::from_str(" Medium "), Some(ConfidenceLevel::Medium));
        assert_eq!(ConfidenceLevel::from_str("LOW"), Some(ConfidenceLevel::Low));
        assert_eq!(ConfidenceLevel::from_str("无把握"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfidenceLevel::High.to_string(), "high");
    }
}
