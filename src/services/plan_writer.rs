//! 学习计划保存服务 - 业务能力层
//!
//! 只负责"把计划写成 txt 文件"能力，不关心计划从哪里来

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::plan::PlanRequest;

/// 学习计划保存服务
pub struct PlanWriter {
    output_dir: PathBuf,
}

impl PlanWriter {
    /// 使用指定目录创建
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 计划文件名：`Study_Plan_{主题}_{天数}days.txt`，主题中的连续空白替换为 `_`
    pub fn file_name(request: &PlanRequest) -> String {
        static WHITESPACE: OnceLock<Regex> = OnceLock::new();
        let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

        format!(
            "Study_Plan_{}_{}days.txt",
            whitespace.replace_all(request.topic(), "_"),
            request.days()
        )
    }

    /// 写入计划，目录不存在时自动创建
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, request: &PlanRequest, plan: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_dir.display().to_string(), e))?;

        let path = self.output_dir.join(Self::file_name(request));
        debug!("写入学习计划: {} ({} 字节)", path.display(), plan.len());

        fs::write(&path, plan)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}
