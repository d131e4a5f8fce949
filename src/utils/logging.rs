/// 日志工具模块
///
/// 提供日志初始化和结果输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::report::QuizReport;

/// 初始化日志
///
/// 默认 info 级别，可用 `RUST_LOG` 环境变量覆盖；
/// 重复调用是无害的空操作
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录会话启动信息
pub fn log_session_start(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 测评会话启动 - 自适应难度模式");
    info!("📊 主题: {} | 总轮数: {}", config.topic, config.total_rounds);
    info!("{}", "=".repeat(60));
}

/// 打印最终报告
///
/// # 参数
/// - `report`: 会话终态的完整报告
pub fn print_final_report(report: &QuizReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测评结果");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 得分: {}/{}", report.score, report.total_rounds);
    info!("信心分层 High:   {}", report.stats.high);
    info!("信心分层 Medium: {}", report.stats.medium);
    info!("信心分层 Low:    {}", report.stats.low);
    info!("💡 洞察:");
    for insight in &report.insights {
        info!("  • {}", insight);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
