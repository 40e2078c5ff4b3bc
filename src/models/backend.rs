//! 与学习助手后端交互的请求/响应结构

use serde::{Deserialize, Serialize};

use super::flashcard::Flashcard;
use super::quiz::QuizItem;

/// `/api/query` 的查询模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// 文档总结
    Summarize,
    /// 无文档的对话（学习计划）
    Chat,
    /// 基于所选文档的讲解（聊天导师）
    Explain,
}

/// `POST /api/query`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub prompt: String,
    pub docs: Vec<String>,
    pub mode: QueryMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// `POST /api/quiz` 与 `POST /api/flashcards` 共用的请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub num_questions: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub quiz: Vec<QuizItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashcardResponse {
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

/// `GET /api/docs` 列表项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: String,
    pub name: String,
}

/// `POST /api/feedback`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub feature: String,
    pub item_name: String,
    pub thumbs_up: u32,
    pub rating: u32,
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: usize,
}

/// `GET /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// 后端错误响应体，`detail` 来自 FastAPI，`message` 来自其他实现
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        self.detail.or(self.message)
    }
}
