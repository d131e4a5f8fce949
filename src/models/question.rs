use serde::{Deserialize, Serialize};

use crate::config::AnswerMatching;

/// 解析出的单个选项
///
/// 保留字母标签，显示层只使用 `text`，
/// 判分时按 `AnswerMatching` 策略使用 `letter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOption {
    /// 选项字母（A-D）
    pub letter: char,
    /// 选项正文
    pub text: String,
}

impl ParsedOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// 结构化题目
///
/// 由 `QuestionParser` 从生成服务的自由文本解析得到；
/// 一轮结束后即丢弃，不做持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题干文本
    pub text: String,
    /// 选项列表，按解析遇到的顺序排列（可能不足 4 个）
    pub options: Vec<ParsedOption>,
    /// "correct answer" 行捕获到的字母（可能缺失）
    pub correct_letter: Option<char>,
    /// "correct answer" 行字母之后的尾部文本（可能为空字符串）
    pub correct_answer_text: String,
}

impl Question {
    /// 获取用于展示的选项文本列表
    pub fn option_texts(&self) -> Vec<&str> {
        self.options.iter().map(|opt| opt.text.as_str()).collect()
    }

    /// 按判分策略解析"正确答案文本"
    ///
    /// - `CapturedText`: 直接使用捕获到的尾部文本
    /// - `LetterMapped`: 将捕获字母映射回对应选项的文本；
    ///   字母缺失或没有对应选项时回退到尾部文本
    pub fn expected_answer(&self, matching: AnswerMatching) -> &str {
        match matching {
            AnswerMatching::CapturedText => &self.correct_answer_text,
            AnswerMatching::LetterMapped => {
                let mapped = self
                    .correct_letter
                    .and_then(|letter| self.options.iter().find(|opt| opt.letter == letter));
                match mapped {
                    Some(opt) => &opt.text,
                    None => &self.correct_answer_text,
                }
            }
        }
    }

    /// 生成失败时的占位题目
    ///
    /// 展示"加载失败请重试"文案和四个 "-" 选项，保证会话不中断
    pub fn placeholder() -> Self {
        Self {
            text: "Unable to load question. Please try again.".to_string(),
            options: ['A', 'B', 'C', 'D']
                .into_iter()
                .map(|letter| ParsedOption::new(letter, "-"))
                .collect(),
            correct_letter: None,
            correct_answer_text: "-".to_string(),
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便日志显示（最多80个字符）
        let preview = if self.text.chars().count() > 80 {
            self.text.chars().take(80).collect::<String>() + "..."
        } else {
            self.text.clone()
        };
        write!(f, "{} [{} 个选项]", preview, self.options.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            text: "What is 25% of 80?".to_string(),
            options: vec![
                ParsedOption::new('A', "10"),
                ParsedOption::new('B', "20"),
                ParsedOption::new('C', "30"),
                ParsedOption::new('D', "40"),
            ],
            correct_letter: Some('B'),
            correct_answer_text: "20".to_string(),
        }
    }

    #[test]
    fn test_expected_answer_letter_mapped() {
        let question = sample_question();
        assert_eq!(question.expected_answer(AnswerMatching::LetterMapped), "20");
    }

    #[test]
    fn test_expected_answer_letter_mapped_fallback() {
        // 字母缺失时回退到捕获文本
        let mut question = sample_question();
        question.correct_letter = None;
        question.correct_answer_text = "20".to_string();
        assert_eq!(question.expected_answer(AnswerMatching::LetterMapped), "20");

        // 字母没有对应选项时同样回退
        question.correct_letter = Some('E');
        assert_eq!(question.expected_answer(AnswerMatching::LetterMapped), "20");
    }

    #[test]
    fn test_expected_answer_captured_text() {
        let mut question = sample_question();
        question.correct_answer_text = String::new();
        assert_eq!(question.expected_answer(AnswerMatching::CapturedText), "");
    }

    #[test]
    fn test_placeholder() {
        let question = Question::placeholder();
        assert_eq!(question.text, "Unable to load question. Please try again.");
        assert_eq!(question.option_texts(), vec!["-", "-", "-", "-"]);
        assert_eq!(question.correct_letter, None);
        // 占位题目的答案与选项一致，用户选任意 "-" 都算答对
        assert_eq!(question.expected_answer(AnswerMatching::LetterMapped), "-");
    }
}
