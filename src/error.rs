use thiserror::Error;

/// 会话层错误
///
/// 前两个变体对应前置条件违规（调用方代码缺陷），
/// 后两个对应需要重新提示用户的输入校验失败
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// 会话已到达终态，不能再开始新轮次或提交答案
    #[error("测评会话已结束，无法继续操作")]
    SessionCompleted,

    /// 会话尚未到达终态，报告还不可用
    #[error("测评会话尚未结束，无法生成报告")]
    SessionNotCompleted,

    /// 当前没有待作答的题目（先调用 start_round）
    #[error("当前轮次没有待作答的题目")]
    NoActiveQuestion,

    /// 用户没有选择任何选项，需要重新提示
    #[error("未选择任何选项")]
    NoSelection,
}

/// 配置错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 总轮数必须为正整数
    #[error("总轮数必须大于 0，当前值: {value}")]
    InvalidTotalRounds { value: usize },
}
