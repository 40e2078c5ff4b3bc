//! 测验计分 - 业务能力层
//!
//! 只负责"给一组作答打分"，不关心题目从哪里来

use tracing::debug;

use crate::models::quiz::{AnswerMap, QuizItem, ScoreResult};

/// 测验计分器
///
/// 规则：
/// - 未作答或缺少答案键的题目跳过，既不算对也不算错
/// - 数字答案 `0` 是有效答案键，不按"假值即缺失"跳过
/// - 数字答案：所选下标与答案相等即正确
/// - 字母答案：所选下标映射到 A/B/C/D 后与答案相等即正确，下标 ≥ 4 无对应字母
/// - `total` 始终是题目总数
pub struct AnswerScorer;

impl AnswerScorer {
    pub fn score(quiz: &[QuizItem], answers: &AnswerMap) -> ScoreResult {
        let mut correct = 0;
        let mut skipped = 0;

        for (index, item) in quiz.iter().enumerate() {
            // `Index(0)` 在这里照常计分，与旧前端把 0 当作无答案的做法不同
            let (Some(selected), Some(key)) = (answers.get(index), item.answer) else {
                skipped += 1;
                continue;
            };

            if key.matches(selected) {
                correct += 1;
            }
        }

        debug!(
            "计分完成: 正确 {}/{}，跳过 {} 道",
            correct,
            quiz.len(),
            skipped
        );

        ScoreResult {
            correct,
            total: quiz.len(),
        }
    }
}
