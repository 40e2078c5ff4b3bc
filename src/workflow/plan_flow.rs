//! 学习计划流程 - 流程层
//!
//! 核心职责：定义"生成一份学习计划"的完整流程
//!
//! 流程顺序：
//! 1. 请求后端生成计划
//! 2. 校验后端回答是否可用
//! 3. 本地模板生成（兜底）

use tracing::{info, warn};

use crate::logger::truncate_text;
use crate::models::plan::PlanRequest;
use crate::services::{plan_query, FallbackPlanGenerator, QueryBackend};

/// 后端表示"没有可用内容"时的固定回答片段
const NO_INFORMATION_MARKER: &str = "No information was provided";

/// 计划来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// 后端生成
    Backend,
    /// 本地模板兜底
    Fallback,
}

/// 计划生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub text: String,
    pub source: PlanSource,
}

/// 学习计划流程
///
/// - 决定何时请求后端、何时兜底
/// - 后端的任何失败都不会向外传播
pub struct PlanFlow<'a, B> {
    backend: Option<&'a B>,
}

impl<'a, B: QueryBackend> PlanFlow<'a, B> {
    /// 创建使用后端的流程
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// 创建不访问后端、直接使用本地模板的流程
    pub fn offline() -> Self {
        Self { backend: None }
    }

    pub async fn run(&self, request: &PlanRequest) -> PlanOutcome {
        info!(
            "📋 生成 {} 天学习计划: {}",
            request.days(),
            truncate_text(request.topic(), 40)
        );

        if let Some(backend) = self.backend {
            match backend.query(&plan_query(request.topic(), request.days())).await {
                Ok(response) => {
                    if let Some(text) = accept_answer(&response.answer) {
                        info!("✓ 后端计划生成成功 ({} 字符)", text.chars().count());
                        return PlanOutcome {
                            text,
                            source: PlanSource::Backend,
                        };
                    }
                    warn!("⚠️ 后端返回的计划不可用，使用本地模板");
                }
                Err(e) => {
                    warn!("⚠️ 后端不可用: {}，使用本地模板", e);
                }
            }
        }

        PlanOutcome {
            text: FallbackPlanGenerator::generate(request.topic(), request.days()),
            source: PlanSource::Fallback,
        }
    }
}

/// 非空白且不含"无信息"标记的回答才可用，返回去除首尾空白后的文本
fn accept_answer(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() || trimmed.contains(NO_INFORMATION_MARKER) {
        return None;
    }
    Some(trimmed.to_string())
}
