use std::path::PathBuf;

use study_buddy::models::{load_answer_map, load_quiz_file};
use study_buddy::{AnswerKey, AnswerMap, AnswerScorer, QuizItem, QuizSession, ScoreResult};

fn options() -> Vec<String> {
    ["A1", "B1", "C1", "D1"].iter().map(|s| s.to_string()).collect()
}

fn parse_quiz(json: &str) -> Vec<QuizItem> {
    serde_json::from_str(json).expect("测验 JSON 应该可以解析")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("study_buddy_{}_{}", std::process::id(), name))
}

#[test]
fn test_numeric_and_letter_keys_score_alike() {
    let quiz = parse_quiz(
        r#"[
            {"question": "q1", "options": ["a","b","c","d"], "answer": 0},
            {"question": "q2", "options": ["a","b","c","d"], "answer": "C"},
            {"question": "q3", "options": ["a","b","c","d"], "answer": 3}
        ]"#,
    );
    let answers: AnswerMap = "0=0,1=2,2=1".parse().unwrap();

    let result = AnswerScorer::score(&quiz, &answers);
    assert_eq!(result, ScoreResult { correct: 2, total: 3 });
    assert_eq!(result.to_string(), "Score: 2 / 3");
}

#[test]
fn test_unscorable_keys_never_count() {
    let quiz = parse_quiz(
        r#"[
            {"question": "lowercase", "options": ["a","b"], "answer": "a"},
            {"question": "out of alphabet", "options": ["a","b"], "answer": "E"},
            {"question": "null", "options": ["a","b"], "answer": null},
            {"question": "missing", "options": ["a","b"]},
            {"question": "negative", "options": ["a","b"], "answer": -1}
        ]"#,
    );
    assert!(quiz.iter().all(|item| item.answer.is_none()));

    let answers: AnswerMap = (0..5).map(|q| (q, 0)).collect();
    let result = AnswerScorer::score(&quiz, &answers);
    assert_eq!(result, ScoreResult { correct: 0, total: 5 });
}

#[test]
fn test_empty_quiz_and_empty_answers() {
    let result = AnswerScorer::score(&[], &AnswerMap::new());
    assert_eq!(result, ScoreResult { correct: 0, total: 0 });
    assert_eq!(result.percentage(), 0);

    let quiz = vec![QuizItem::new("q", options(), Some(AnswerKey::Index(1)))];
    assert_eq!(
        AnswerScorer::score(&quiz, &AnswerMap::new()),
        ScoreResult { correct: 0, total: 1 }
    );
}

#[test]
fn test_letter_key_never_matches_fifth_option() {
    let quiz = vec![QuizItem::new("q", options(), Some(AnswerKey::Letter('D')))];
    let answers: AnswerMap = "0=4".parse().unwrap();
    assert_eq!(AnswerScorer::score(&quiz, &answers).correct, 0);

    let answers: AnswerMap = "0=3".parse().unwrap();
    assert_eq!(AnswerScorer::score(&quiz, &answers).correct, 1);
}

#[test]
fn test_scoring_is_repeatable() {
    let quiz = vec![
        QuizItem::new("q1", options(), Some(AnswerKey::Letter('B'))),
        QuizItem::new("q2", options(), Some(AnswerKey::Index(2))),
    ];
    let answers: AnswerMap = "0=1,1=0".parse().unwrap();

    let first = AnswerScorer::score(&quiz, &answers);
    let second = AnswerScorer::score(&quiz, &answers);
    assert_eq!(first, second);
    assert_eq!(first.percentage(), 50);
}

#[test]
fn test_session_scores_like_scorer() {
    let quiz = vec![
        QuizItem::new("q1", options(), Some(AnswerKey::Letter('A'))),
        QuizItem::new("q2", options(), Some(AnswerKey::Index(3))),
        QuizItem::new("q3", options(), None),
    ];
    let answers: AnswerMap = "0=0,1=3,2=1".parse().unwrap();

    let mut session = QuizSession::new(quiz.clone());
    session.select_all(&answers).unwrap();
    assert_eq!(session.submit(), AnswerScorer::score(&quiz, &answers));
}

#[test]
fn test_load_quiz_and_answers_from_files() {
    tokio_test::block_on(async {
        let quiz_path = temp_path("quiz.json");
        let answers_path = temp_path("answers.json");
        tokio::fs::write(
            &quiz_path,
            r#"{"quiz": [
                {"question": "2 + 2?", "options": ["3", "4"], "answer": "B"},
                {"question": "det(I)?", "options": ["1", "0"], "answer": 0}
            ]}"#,
        )
        .await
        .unwrap();
        tokio::fs::write(&answers_path, r#"{"0": 1, "1": 1}"#).await.unwrap();

        let quiz = load_quiz_file(&quiz_path).await.unwrap();
        let answers = load_answer_map(&answers_path).await.unwrap();
        assert_eq!(
            AnswerScorer::score(&quiz, &answers),
            ScoreResult { correct: 1, total: 2 }
        );

        let _ = tokio::fs::remove_file(&quiz_path).await;
        let _ = tokio::fs::remove_file(&answers_path).await;
    });
}
