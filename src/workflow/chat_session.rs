//! 聊天导师会话 - 流程层
//!
//! 维护对话历史和所选文档，把每次提问转成 `explain` 模式的查询

use std::fmt::Display;

use tracing::{debug, warn};

use crate::models::backend::{QueryMode, QueryRequest};
use crate::services::QueryBackend;

const EMPTY_ANSWER: &str = "No answer returned.";
const CONNECTION_ERROR: &str = "⚠️ Error connecting to backend.";

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// 一条聊天消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sources: Vec<String>,
    /// 是否是请求失败时的提示
    pub is_error: bool,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            sources: Vec::new(),
            is_error: false,
        }
    }

    fn assistant(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            sources,
            is_error: false,
        }
    }

    fn error() -> Self {
        Self {
            is_error: true,
            ..Self::assistant(CONNECTION_ERROR, Vec::new())
        }
    }
}

impl Display for ChatMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let speaker = match self.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "Tutor",
        };
        write!(f, "{}: {}", speaker, self.text)?;
        if !self.sources.is_empty() {
            write!(f, "\n  Sources: {}", self.sources.join(", "))?;
        }
        Ok(())
    }
}

/// 聊天会话
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    selected_docs: Vec<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn selected_docs(&self) -> &[String] {
        &self.selected_docs
    }

    /// 选中或取消选中一个文档
    pub fn toggle_document(&mut self, name: &str) {
        if let Some(pos) = self.selected_docs.iter().position(|d| d == name) {
            self.selected_docs.remove(pos);
        } else {
            self.selected_docs.push(name.to_string());
        }
    }

    /// 发送一条消息
    ///
    /// 空白输入直接忽略并返回 `None`；否则返回本次追加的回复。
    /// 请求失败不会返回错误，而是追加一条错误提示消息。
    pub async fn send<B: QueryBackend>(&mut self, backend: &B, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(input));

        let request = QueryRequest {
            prompt: input.to_string(),
            docs: self.selected_docs.clone(),
            mode: QueryMode::Explain,
            style: None,
        };
        debug!("聊天提问，附带 {} 个文档", request.docs.len());

        let reply = match backend.query(&request).await {
            Ok(response) => {
                let text = if response.answer.trim().is_empty() {
                    EMPTY_ANSWER.to_string()
                } else {
                    response.answer
                };
                ChatMessage::assistant(text, response.sources)
            }
            Err(e) => {
                warn!("聊天请求失败: {}", e);
                ChatMessage::error()
            }
        };

        self.messages.push(reply);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_document() {
        let mut session = ChatSession::new();
        session.toggle_document("notes.pdf");
        session.toggle_document("slides.pptx");
        assert_eq!(session.selected_docs(), ["notes.pdf", "slides.pptx"]);

        session.toggle_document("notes.pdf");
        assert_eq!(session.selected_docs(), ["slides.pptx"]);
    }

    #[test]
    fn test_message_display_lists_sources() {
        let message = ChatMessage::assistant("A matrix is...", vec!["notes.pdf".to_string()]);
        assert_eq!(message.to_string(), "Tutor: A matrix is...\n  Sources: notes.pdf");
        assert_eq!(ChatMessage::user("hi").to_string(), "You: hi");
    }
}
