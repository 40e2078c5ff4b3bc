use crate::error::FileError;
use crate::models::quiz::{AnswerMap, QuizItem};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 测验文件可以是裸数组，也可以是 `{ "quiz": [...] }`（与后端响应一致）
#[derive(Deserialize)]
#[serde(untagged)]
enum QuizDocument {
    Items(Vec<QuizItem>),
    Wrapped { quiz: Vec<QuizItem> },
}

impl QuizDocument {
    fn into_items(self) -> Vec<QuizItem> {
        match self {
            QuizDocument::Items(items) => items,
            QuizDocument::Wrapped { quiz } => quiz,
        }
    }
}

/// TOML 只能以表为根，题目写在 `[[quiz]]` 下
#[derive(Deserialize)]
struct TomlQuizFile {
    #[serde(default)]
    quiz: Vec<QuizItem>,
}

/// 从 JSON 或 TOML 文件加载测验题
pub async fn load_quiz_file(path: &Path) -> Result<Vec<QuizItem>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取测验文件: {}", path.display()))?;

    let items = match extension(path).as_deref() {
        Some("json") => serde_json::from_str::<QuizDocument>(&content)
            .with_context(|| format!("无法解析测验文件: {}", path.display()))?
            .into_items(),
        Some("toml") => {
            toml::from_str::<TomlQuizFile>(&content)
                .with_context(|| format!("无法解析测验文件: {}", path.display()))?
                .quiz
        }
        _ => {
            return Err(FileError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into())
        }
    };

    let unscorable = items.iter().filter(|item| item.answer.is_none()).count();
    tracing::info!("成功加载 {} 道题目", items.len());
    if unscorable > 0 {
        tracing::warn!("其中 {} 道题目缺少有效答案，将不计分", unscorable);
    }

    Ok(items)
}

/// 从 JSON 文件加载作答记录：`{"0": 2, "1": 0}`
pub async fn load_answer_map(path: &Path) -> Result<AnswerMap> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取作答文件: {}", path.display()))?;

    let answers: AnswerMap = serde_json::from_str(&content)
        .with_context(|| format!("无法解析作答文件: {}", path.display()))?;

    Ok(answers)
}

/// 读取用于生成测验/闪卡的原始文本
pub async fn load_source_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", path.display()))?;

    if content.trim().is_empty() {
        anyhow::bail!("文本文件为空: {}", path.display());
    }

    Ok(content)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::AnswerKey;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("study_buddy_loader_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_json_array_and_wrapped() {
        let array = temp_file(
            "array.json",
            r#"[{"question":"1+1?","options":["1","2"],"answer":1}]"#,
        );
        let items = load_quiz_file(&array).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].answer, Some(AnswerKey::Index(1)));

        let wrapped = temp_file(
            "wrapped.json",
            r#"{"quiz":[{"question":"q","options":["a","b"],"answer":"B"}]}"#,
        );
        let items = load_quiz_file(&wrapped).await.unwrap();
        assert_eq!(items[0].answer, Some(AnswerKey::Letter('B')));
    }

    #[tokio::test]
    async fn test_load_toml_quiz() {
        let path = temp_file(
            "quiz.toml",
            r#"
[[quiz]]
question = "Capital of France?"
options = ["Berlin", "Paris", "Rome", "Madrid"]
answer = "B"

[[quiz]]
question = "2 * 3?"
options = ["5", "6"]
answer = 1
"#,
        );
        let items = load_quiz_file(&path).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].answer, Some(AnswerKey::Letter('B')));
        assert_eq!(items[1].answer, Some(AnswerKey::Index(1)));
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let path = temp_file("quiz.yaml", "- question: q");
        assert!(load_quiz_file(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_load_answer_map_and_empty_text() {
        let path = temp_file("answers.json", r#"{"0": 1, "2": 3}"#);
        let answers = load_answer_map(&path).await.unwrap();
        assert_eq!(answers.get(2), Some(3));

        let empty = temp_file("empty.txt", "   \n");
        assert!(load_source_text(&empty).await.is_err());
    }
}
