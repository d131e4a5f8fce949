//! 真实生成服务联调测试
//!
//! 默认忽略，需要配置 LLM_API_KEY 后手动运行：
//! `cargo test -- --ignored --nocapture`

use adaptive_quiz::utils::logging;
use adaptive_quiz::{Config, ConfidenceLevel, DifficultyLevel, GenerationService, QuestionParser, QuizSession};

#[tokio::test]
#[ignore]
async fn test_generate_and_parse_live() {
    logging::init();

    let config = Config::from_env();
    let service = GenerationService::new(&config);

    let raw_text = service
        .generate_question(&config.topic, DifficultyLevel::Medium)
        .await
        .expect("生成服务调用失败");

    println!("\n========== 原始生成文本 ==========");
    println!("{}", raw_text);
    println!("==================================\n");

    assert!(!raw_text.is_empty());

    let parser = QuestionParser::new().expect("创建解析器失败");
    let question = parser.parse(&raw_text);

    println!("题干: {}", question.text);
    for option in &question.options {
        println!("  {}) {}", option.letter, option.text);
    }
    println!("正确答案字母: {:?}", question.correct_letter);
    println!("正确答案文本: {}", question.correct_answer_text);

    // 生成服务的格式没有契约，这里只验证解析出了点东西
    assert!(!question.text.is_empty() || !question.options.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_full_session_live() {
    logging::init();

    let mut session = QuizSession::new(Config::from_env()).expect("创建会话失败");

    while !session.is_complete() {
        let selected: Option<String> = {
            let question = session.start_round().await.expect("开始轮次失败");
            println!("\n题目: {}", question.text);
            // 无人值守：总是选第一个选项
            question.option_texts().first().map(|s| s.to_string())
        };

        session
            .submit_answer(selected.as_deref(), ConfidenceLevel::Medium)
            .expect("提交答案失败");
    }

    let report = session.report().expect("生成报告失败");
    logging::print_final_report(&report);

    assert_eq!(report.stats.medium.total as usize, report.total_rounds);
    assert!(!report.insights.is_empty());
}
