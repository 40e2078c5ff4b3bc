//! 学习助手后端客户端 - 业务能力层
//!
//! 封装所有与后端 HTTP API 的交互：总结、测验、闪卡、聊天、学习计划、反馈。
//!
//! ## 技术栈
//! - 使用 `reqwest` 发送 JSON 请求，客户端在生命周期内复用
//! - 非 2xx 响应会解析后端的 `detail` / `message` 字段作为错误信息

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::backend::{
    DocumentInfo, ErrorBody, FeedbackRequest, FeedbackResponse, FlashcardResponse,
    GenerateRequest, HealthResponse, QueryMode, QueryRequest, QueryResponse, QuizResponse,
};
use crate::models::{Flashcard, QuizItem, SummaryStyle};

/// `/api/query` 能力
///
/// 流程层只依赖这一能力，测试时可以替换为本地实现。
pub trait QueryBackend {
    fn query(&self, request: &QueryRequest) -> impl Future<Output = AppResult<QueryResponse>> + Send;
}

/// 后端客户端
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    /// 按配置创建客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut base_url = Url::parse(&config.backend_base_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidBackendUrl {
                url: config.backend_base_url.clone(),
            })?;

        // 路径前缀以 `/` 结尾，相对路径才会拼在前缀之后
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// 健康检查：`GET /`
    pub async fn health(&self) -> AppResult<String> {
        let response: HealthResponse = self.get_json("/").await?;
        Ok(response.status)
    }

    /// 列出已上传的文档：`GET /api/docs`
    pub async fn list_documents(&self) -> AppResult<Vec<DocumentInfo>> {
        self.get_json("/api/docs").await
    }

    /// 总结文档
    pub async fn summarize(&self, doc_name: &str, style: SummaryStyle) -> AppResult<QueryResponse> {
        let request = QueryRequest {
            prompt: format!("Summarize this document in {} style", style.key()),
            docs: vec![doc_name.to_string()],
            mode: QueryMode::Summarize,
            style: Some(style.key().to_string()),
        };
        self.post_json("/api/query", &request).await
    }

    /// 生成测验题：`POST /api/quiz`
    pub async fn generate_quiz(&self, text: &str, num_questions: usize) -> AppResult<Vec<QuizItem>> {
        let request = GenerateRequest {
            text: text.to_string(),
            num_questions,
        };
        let response: QuizResponse = self.post_json("/api/quiz", &request).await?;
        debug!("后端返回 {} 道测验题", response.quiz.len());
        Ok(response.quiz)
    }

    /// 生成闪卡：`POST /api/flashcards`
    pub async fn generate_flashcards(&self, text: &str, count: usize) -> AppResult<Vec<Flashcard>> {
        let request = GenerateRequest {
            text: text.to_string(),
            num_questions: count,
        };
        let response: FlashcardResponse = self.post_json("/api/flashcards", &request).await?;
        debug!("后端返回 {} 张闪卡", response.flashcards.len());
        Ok(response.flashcards)
    }

    /// 提交反馈：`POST /api/feedback`
    pub async fn send_feedback(&self, feedback: &FeedbackRequest) -> AppResult<FeedbackResponse> {
        self.post_json("/api/feedback", feedback).await
    }

    // ========== 辅助函数 ==========

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::api_request_failed(path, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        decode(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        decode(path, response).await
    }
}

impl QueryBackend for BackendClient {
    async fn query(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
        self.post_json("/api/query", request).await
    }
}

/// 解析响应：非 2xx 转为 `BadResponse`，其余按 JSON 解码
async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> AppResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::api_request_failed(path, e))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_detail);
        warn!("后端返回错误 {} ({}): {:?}", status.as_u16(), path, detail);
        return Err(AppError::bad_response(path, status.as_u16(), detail));
    }

    Ok(serde_json::from_str(&body)?)
}

/// 构建学习计划的提示词
///
/// 后端会从提示词中解析 `{days}-day` 和 `for learning: {topic}`，格式不能随意改动。
pub fn plan_prompt(topic: &str, days: u32) -> String {
    format!(
        "Create a detailed {days}-day study plan for learning: {topic}

Please structure it as follows:
- Day-by-day breakdown with clear topics
- Daily learning objectives
- Recommended study duration per day
- Specific activities and exercises
- Mini quizzes every 3 days
- Study tips and best practices

Make it comprehensive, actionable, and motivating!"
    )
}

/// 学习计划查询：对话模式、不附带文档
pub fn plan_query(topic: &str, days: u32) -> QueryRequest {
    QueryRequest {
        prompt: plan_prompt(topic, days),
        docs: Vec::new(),
        mode: QueryMode::Chat,
        style: None,
    }
}
