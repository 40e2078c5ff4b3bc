//! 测验会话
//!
//! 封装"正在做哪套题、选了什么、得了多少分"这一状态

use crate::error::BusinessError;
use crate::models::quiz::{AnswerMap, QuizItem, ScoreResult};
use crate::services::AnswerScorer;

/// 测验会话
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    quiz: Vec<QuizItem>,
    answers: AnswerMap,
    result: Option<ScoreResult>,
}

impl QuizSession {
    pub fn new(quiz: Vec<QuizItem>) -> Self {
        Self {
            quiz,
            ..Self::default()
        }
    }

    pub fn quiz(&self) -> &[QuizItem] {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// 最近一次提交的成绩，作答变动后清空
    pub fn result(&self) -> Option<ScoreResult> {
        self.result
    }

    /// 记录一次选择
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), BusinessError> {
        if question >= self.quiz.len() {
            return Err(BusinessError::IndexOutOfRange {
                index: question,
                len: self.quiz.len(),
            });
        }
        self.answers.select(question, option);
        self.result = None;
        Ok(())
    }

    /// 批量记录选择
    pub fn select_all(&mut self, answers: &AnswerMap) -> Result<(), BusinessError> {
        for (question, option) in answers.iter() {
            self.select(question, option)?;
        }
        Ok(())
    }

    /// 提交并计分
    pub fn submit(&mut self) -> ScoreResult {
        let result = AnswerScorer::score(&self.quiz, &self.answers);
        self.result = Some(result);
        result
    }

    /// 清空作答和成绩，保留题目
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }

    /// 换一套新题
    pub fn replace(&mut self, quiz: Vec<QuizItem>) {
        self.quiz = quiz;
        self.reset();
    }
}
