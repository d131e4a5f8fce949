//! 题目文本解析服务 - 业务能力层
//!
//! 只负责"把生成服务的自由文本变成结构化题目"能力，不关心流程
//!
//! 生成服务的输出格式没有契约保证，因此 `parse` 是全函数：
//! 任何输入都产出一个（可能退化的）`Question`，绝不报错

use anyhow::Result;
use regex::Regex;

use crate::models::question::{ParsedOption, Question};

/// 选项行：大写字母 A-D + `.` 或 `)` + 空白 + 正文
const OPTION_PATTERN: &str = r"^([A-D])[.)]\s+(.*)$";

/// 正确答案行：字母不区分大小写，冒号必须存在，尾部文本可为空
const ANSWER_PATTERN: &str = r"(?i)correct answer:\s*([A-D])[.)]?\s*(.*)";

/// 题目文本解析器
///
/// 职责：
/// - 逐行扫描原始文本，识别选项行和 correct answer 行
/// - 其余行累积为题干（跳过 "here is" / "explanation" 开头的铺垫行）
/// - 只处理单条文本，不出现 Vec<Question>
/// - 不关心流程顺序
pub struct QuestionParser {
    option_re: Regex,
    answer_re: Regex,
}

impl QuestionParser {
    /// 创建新的解析器（预编译正则）
    pub fn new() -> Result<Self> {
        Ok(Self {
            option_re: Regex::new(OPTION_PATTERN)?,
            answer_re: Regex::new(ANSWER_PATTERN)?,
        })
    }

    /// 解析原始生成文本
    ///
    /// # 参数
    /// - `raw_text`: 生成服务返回的自由文本
    ///
    /// # 返回
    /// 始终返回一个 `Question`；格式不符时各字段退化为空
    ///
    /// 已知限制：小写选项字母（如 "a) 10"）不会被识别为选项，
    /// 该行会落入题干累积，与既有前端行为保持一致
    pub fn parse(&self, raw_text: &str) -> Question {
        let mut question_lines: Vec<&str> = Vec::new();
        let mut options: Vec<ParsedOption> = Vec::new();
        let mut correct_letter: Option<char> = None;
        let mut correct_answer_text = String::new();

        for line in raw_text.trim().lines() {
            let line = line.trim();

            // 选项行，如 "A) 40%"
            if let Some(caps) = self.option_re.captures(line) {
                if let Some(letter) = caps[1].chars().next() {
                    options.push(ParsedOption::new(letter, &caps[2]));
                }
                continue;
            }

            let lower = line.to_lowercase();

            // 正确答案行，如 "Correct answer: C) 67%"
            // 无论捕获成功与否，该行都不进入题干
            if lower.starts_with("correct answer") {
                if let Some(caps) = self.answer_re.captures(line) {
                    correct_letter = caps[1].chars().next().map(|c| c.to_ascii_uppercase());
                    correct_answer_text = caps[2].to_string();
                }
                continue;
            }

            // 铺垫行丢弃，其余累积为题干
            if !lower.starts_with("here is") && !lower.starts_with("explanation") {
                question_lines.push(line);
            }
        }

        Question {
            text: question_lines.join(" ").trim().to_string(),
            options,
            correct_letter,
            correct_answer_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> QuestionParser {
        QuestionParser::new().expect("正则编译失败")
    }

    const WELL_FORMED: &str = "Here is a medium-difficulty aptitude question:\n\
        \n\
        What is 25% of 80?\n\
        \n\
        A) 10\n\
        B) 20\n\
        C) 30\n\
        D) 40\n\
        \n\
        Correct answer: B) 20";

    #[test]
    fn test_parse_well_formed() {
        let question = parser().parse(WELL_FORMED);

        assert_eq!(question.text, "What is 25% of 80?");
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.option_texts(), vec!["10", "20", "30", "40"]);
        assert_eq!(question.options[1].letter, 'B');
        assert_eq!(question.correct_letter, Some('B'));
        assert_eq!(question.correct_answer_text, "20");
    }

    #[test]
    fn test_parse_dot_separator() {
        let question = parser().parse("Pick one.\nA. first\nB. second\nCorrect answer: A. first");
        assert_eq!(question.option_texts(), vec!["first", "second"]);
        assert_eq!(question.correct_letter, Some('A'));
        assert_eq!(question.correct_answer_text, "first");
    }

    #[test]
    fn test_parse_empty_input() {
        let question = parser().parse("");
        assert_eq!(question.text, "");
        assert!(question.options.is_empty());
        assert_eq!(question.correct_letter, None);
        assert_eq!(question.correct_answer_text, "");
    }

    #[test]
    fn test_parse_no_matching_lines() {
        let question = parser().parse("totally unstructured text\nwithout any options");
        assert_eq!(question.text, "totally unstructured text without any options");
        assert!(question.options.is_empty());
        assert_eq!(question.correct_answer_text, "");
    }

    #[test]
    fn test_lowercase_option_letters_not_recognized() {
        // 已知限制：小写字母选项不识别，落入题干
        let question = parser().parse("What?\na) 10\nb) 20");
        assert!(question.options.is_empty());
        assert_eq!(question.text, "What? a) 10 b) 20");
    }

    #[test]
    fn test_answer_letter_case_insensitive() {
        // 答案行的字母不区分大小写，统一转为大写
        let question = parser().parse("Q?\nA) yes\nB) no\ncorrect answer: b) no");
        assert_eq!(question.correct_letter, Some('B'));
        assert_eq!(question.correct_answer_text, "no");
    }

    #[test]
    fn test_answer_without_trailing_text() {
        let question = parser().parse("Q?\nA) yes\nB) no\nCorrect answer: A");
        assert_eq!(question.correct_letter, Some('A'));
        // 尾部文本缺失是已知的歧义来源，保持为空串
        assert_eq!(question.correct_answer_text, "");
    }

    #[test]
    fn test_answer_without_colon_is_consumed_but_not_captured() {
        // "correct answer" 开头但没有冒号：该行被吃掉，什么都捕获不到
        let question = parser().parse("Q?\nA) yes\nCorrect answer is A");
        assert_eq!(question.correct_letter, None);
        assert_eq!(question.correct_answer_text, "");
        assert_eq!(question.text, "Q?");
    }

    #[test]
    fn test_preamble_and_explanation_lines_dropped() {
        let raw = "Here is your question:\n\
            How many sides does a hexagon have?\n\
            A) 5\n\
            B) 6\n\
            Correct answer: B) 6\n\
            Explanation: a hexagon has six sides.";
        let question = parser().parse(raw);
        assert_eq!(question.text, "How many sides does a hexagon have?");
        assert_eq!(question.options.len(), 2);
    }

    #[test]
    fn test_option_order_is_encounter_order() {
        let question = parser().parse("Q?\nB) second\nA) first");
        assert_eq!(question.options[0].letter, 'B');
        assert_eq!(question.options[1].letter, 'A');
    }
}
