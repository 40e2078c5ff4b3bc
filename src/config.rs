use std::str::FromStr;

use tracing::warn;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 学习助手后端地址
    pub backend_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 每次生成的测验题数量
    pub quiz_num_questions: usize,
    /// 每次生成的闪卡数量
    pub flashcard_count: usize,
    /// 学习计划默认天数
    pub default_plan_days: u32,
    /// 学习计划保存目录
    pub plan_output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 40,
            quiz_num_questions: 5,
            flashcard_count: 10,
            default_plan_days: 7,
            plan_output_dir: "plans".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            backend_base_url: std::env::var("STUDY_BACKEND_URL").unwrap_or(default.backend_base_url),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", default.request_timeout_secs),
            quiz_num_questions: parse_env("QUIZ_NUM_QUESTIONS", default.quiz_num_questions),
            flashcard_count: parse_env("FLASHCARD_COUNT", default.flashcard_count),
            default_plan_days: parse_env("DEFAULT_PLAN_DAYS", default.default_plan_days),
            plan_output_dir: std::env::var("PLAN_OUTPUT_DIR").unwrap_or(default.plan_output_dir),
            verbose_logging: parse_env("VERBOSE_LOGGING", default.verbose_logging),
        }
    }
}

/// 读取并解析环境变量，解析失败时回退到默认值
fn parse_env<T: FromStr>(var_name: &str, default: T) -> T {
    let Ok(value) = std::env::var(var_name) else {
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            let err = ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: std::any::type_name::<T>().to_string(),
            };
            warn!("{}，使用默认值", err);
            default
        }
    }
}
