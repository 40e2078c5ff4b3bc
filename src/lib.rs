//! # Study Buddy
//!
//! 学习助手客户端：学习计划、测验计分、闪卡和聊天导师
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 纯数据类型与文件加载
//! - `AnswerKey` - 归一化后的答案（选项下标或字母 A-D）
//! - `PlanDocument` - 三阶段学习计划的结构化表示
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `AnswerScorer` - 测验计分
//! - `FallbackPlanGenerator` - 本地学习计划模板
//! - `BackendClient` - 学习后端 HTTP 客户端
//! - `PlanWriter` - 保存计划文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义完整的处理流程和会话状态
//! - `PlanFlow` - 后端生成 → 校验 → 本地兜底
//! - `QuizSession` / `FlashcardDeck` / `ChatSession` - 交互状态
//!
//! ### ④ 编排层（Orchestration）
//! - `app` - 命令行子命令分派与输出
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Command};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, AnswerMap, PlanRequest, QuizItem, ScoreResult};
pub use services::{AnswerScorer, BackendClient, FallbackPlanGenerator, QueryBackend};
pub use workflow::{ChatSession, FlashcardDeck, PlanFlow, PlanOutcome, PlanSource, QuizSession};
