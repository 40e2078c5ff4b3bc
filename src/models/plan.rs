use chrono::NaiveDate;

use crate::error::BusinessError;

/// 学习计划请求
///
/// 通过 [`PlanRequest::new`] 构造，保证主题非空、天数大于 0。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    topic: String,
    days: u32,
}

impl PlanRequest {
    pub fn new(topic: &str, days: u32) -> Result<Self, BusinessError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(BusinessError::EmptyGoal);
        }
        if days == 0 {
            return Err(BusinessError::InvalidDays { days });
        }
        Ok(Self {
            topic: topic.to_string(),
            days,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}

/// 学习阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 基础
    Fundamentals,
    /// 进阶
    Intermediate,
    /// 高级
    Advanced,
}

impl Phase {
    /// 固定顺序的全部阶段
    pub const ALL: [Phase; 3] = [Phase::Fundamentals, Phase::Intermediate, Phase::Advanced];

    /// 阶段序号（从 0 开始）
    pub fn index(self) -> usize {
        match self {
            Phase::Fundamentals => 0,
            Phase::Intermediate => 1,
            Phase::Advanced => 2,
        }
    }

    /// 计划中显示的阶段名称
    pub fn name(self) -> &'static str {
        match self {
            Phase::Fundamentals => "Fundamentals & Core Concepts",
            Phase::Intermediate => "Intermediate Topics",
            Phase::Advanced => "Advanced Concepts & Projects",
        }
    }

    /// 阶段占总天数的比例
    pub fn ratio(self) -> f64 {
        match self {
            Phase::Fundamentals => 0.3,
            Phase::Intermediate => 0.4,
            Phase::Advanced => 0.3,
        }
    }

    /// 该阶段的学习目标
    pub fn objectives(self) -> [&'static str; 3] {
        match self {
            Phase::Fundamentals => [
                "Understand basic terminology and concepts",
                "Learn foundational principles",
                "Build strong conceptual understanding",
            ],
            Phase::Intermediate => [
                "Apply concepts to practical problems",
                "Understand real-world use cases",
                "Practice with guided examples",
            ],
            Phase::Advanced => [
                "Master advanced techniques",
                "Work on comprehensive projects",
                "Integrate multiple concepts",
            ],
        }
    }

    /// 按比例分配的天数：`max(1, ceil(days * ratio))`
    ///
    /// 各阶段独立取整，总和可能超过 `days`，超出部分在生成时被截断。
    pub fn allotted_days(self, days: u32) -> u32 {
        let share = (f64::from(days) * self.ratio()).ceil() as u32;
        share.max(1)
    }
}

/// 计划中的一天
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyDay {
    /// 全局天数（从 1 开始，跨阶段累计）
    pub day: u32,
    /// 阶段内的第几次学习（从 1 开始）
    pub session: u32,
}

impl StudyDay {
    /// 每 3 天一次阶段测验
    pub fn has_checkpoint(&self) -> bool {
        self.day % 3 == 0
    }

    /// 每 7 天一次周复习
    pub fn has_weekly_review(&self) -> bool {
        self.day % 7 == 0
    }
}

/// 一个阶段及其包含的天
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseBlock {
    pub phase: Phase,
    pub days: Vec<StudyDay>,
}

/// 生成的学习计划
///
/// 文本形式通过 `Display` 渲染。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    pub topic: String,
    pub days: u32,
    pub generated_on: NaiveDate,
    pub phases: Vec<PhaseBlock>,
}

impl PlanDocument {
    /// 实际排入计划的天数
    pub fn scheduled_days(&self) -> usize {
        self.phases.iter().map(|block| block.days.len()).sum()
    }
}
