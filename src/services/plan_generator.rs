//! 本地学习计划生成 - 业务能力层
//!
//! 后端不可用时的兜底方案：按固定模板生成多阶段的逐日学习计划。
//! 同一天内相同的 `(topic, days)` 总是得到完全相同的文本。

use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::plan::{Phase, PhaseBlock, PlanDocument, StudyDay};

const HEAVY_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const DAILY_ACTIVITIES: [&str; 5] = [
    "Review previous day's notes (15 min)",
    "Read/Watch learning materials (60 min)",
    "Take detailed notes (30 min)",
    "Practice exercises (45 min)",
    "Self-assessment quiz (15 min)",
];

const STUDY_TIPS: [&str; 10] = [
    "🍅 Use Pomodoro: 25 min study, 5 min break",
    "📝 Practice active recall regularly",
    "🔄 Use spaced repetition",
    "👥 Join study groups or communities",
    "🎯 Set specific daily goals",
    "💻 Build projects to apply learning",
    "📚 Use multiple resources",
    "😴 Get adequate sleep for memory",
    "🏃 Stay physically active",
    "\u{270D}\u{FE0F} Teach others to reinforce learning",
];

/// 本地兜底计划生成器
pub struct FallbackPlanGenerator;

impl FallbackPlanGenerator {
    /// 以今天的本地日期生成计划文本
    pub fn generate(topic: &str, days: u32) -> String {
        Self::generate_on(topic, days, Local::now().date_naive())
    }

    /// 以指定日期生成计划文本
    pub fn generate_on(topic: &str, days: u32, date: NaiveDate) -> String {
        Self::build(topic, days, date).to_string()
    }

    /// 生成结构化的计划
    ///
    /// 每个阶段分到 `max(1, ceil(days * ratio))` 天，累计天数超过 `days` 后停止排期，
    /// 因此靠后的阶段可能被截断甚至为空（阶段标题仍会保留）。
    pub fn build(topic: &str, days: u32, date: NaiveDate) -> PlanDocument {
        let mut current_day = 1;
        let mut phases = Vec::with_capacity(Phase::ALL.len());

        for phase in Phase::ALL {
            let allotted = phase.allotted_days(days);
            let mut block = PhaseBlock {
                phase,
                days: Vec::new(),
            };

            let mut session = 1;
            while session <= allotted && current_day <= days {
                block.days.push(StudyDay {
                    day: current_day,
                    session,
                });
                session += 1;
                current_day += 1;
            }

            debug!(
                "阶段 {} 分配 {} 天，实际排期 {} 天",
                phase.index() + 1,
                allotted,
                block.days.len()
            );
            phases.push(block);
        }

        PlanDocument {
            topic: topic.to_string(),
            days,
            generated_on: date,
            phases,
        }
    }
}

impl fmt::Display for PlanDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);

        writeln!(f, "📚 {}-Day Study Plan: {}", self.days, self.topic)?;
        writeln!(f, "{}\n", HEAVY_RULE)?;
        writeln!(f, "Generated: {}", self.generated_on.format("%B %-d, %Y"))?;
        writeln!(
            f,
            "Goal: Master {} through structured daily learning\n",
            self.topic
        )?;

        for block in &self.phases {
            writeln!(f, "\n{}", rule)?;
            writeln!(f, "📌 PHASE {}: {}", block.phase.index() + 1, block.phase.name())?;
            writeln!(f, "{}\n", rule)?;

            for day in &block.days {
                write_day(f, block.phase, day)?;
            }
        }

        writeln!(f, "\n{}", rule)?;
        writeln!(f, "💡 STUDY TIPS FOR SUCCESS")?;
        writeln!(f, "{}\n", rule)?;
        for tip in STUDY_TIPS {
            writeln!(f, "{}", tip)?;
        }

        writeln!(f, "\n{}", rule)?;
        writeln!(f, "🎓 Remember: Consistency is key!")?;
        writeln!(f, "   Complete 80% of daily tasks")?;
        writeln!(f, "   Review regularly")?;
        writeln!(f, "   Practice > Passive reading")?;
        writeln!(f, "{}\n", rule)?;
        writeln!(f, "🚀 Good luck with your {}-day journey!", self.days)
    }
}

fn write_day(f: &mut fmt::Formatter<'_>, phase: Phase, day: &StudyDay) -> fmt::Result {
    writeln!(f, "\u{1F5D3}\u{FE0F}  DAY {}:", day.day)?;
    writeln!(f, "{}", "─".repeat(40))?;
    writeln!(f, "📖 Topic: {} - Session {}\n", phase.name(), day.session)?;

    writeln!(f, "🎯 Learning Objectives:")?;
    for objective in phase.objectives() {
        writeln!(f, "   • {}", objective)?;
    }

    writeln!(f, "\n\u{23F1}\u{FE0F}  Recommended Study Time: 2-3 hours\n")?;

    writeln!(f, "✅ Daily Activities:")?;
    for (i, activity) in DAILY_ACTIVITIES.iter().enumerate() {
        writeln!(f, "   {}. {}", i + 1, activity)?;
    }
    writeln!(f)?;

    if day.has_checkpoint() {
        writeln!(f, "🧪 CHECKPOINT: Take a practice quiz")?;
        writeln!(
            f,
            "   • Test understanding of Days {} to {}",
            day.day - 2,
            day.day
        )?;
        writeln!(f, "   • Review any weak areas\n")?;
    }

    if day.has_weekly_review() {
        writeln!(f, "📊 WEEKLY REVIEW:")?;
        writeln!(f, "   • Comprehensive revision of all topics")?;
        writeln!(f, "   • Complete a mini-project\n")?;
    }

    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_seven_day_plan_layout() {
        let doc = FallbackPlanGenerator::build("Linear Algebra", 7, date());
        let layout: Vec<Vec<u32>> = doc
            .phases
            .iter()
            .map(|b| b.days.iter().map(|d| d.day).collect())
            .collect();
        assert_eq!(layout, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
        assert_eq!(doc.phases[2].days[0].session, 1);
        assert_eq!(doc.scheduled_days(), 7);
    }

    #[test]
    fn test_single_day_leaves_later_phases_empty() {
        let doc = FallbackPlanGenerator::build("X", 1, date());
        assert_eq!(doc.phases.len(), 3);
        assert_eq!(doc.phases[0].days.len(), 1);
        assert!(doc.phases[1].days.is_empty());
        assert!(doc.phases[2].days.is_empty());
    }

    #[test]
    fn test_three_day_plan_uses_every_phase() {
        let doc = FallbackPlanGenerator::build("Rust", 3, date());
        let per_phase: Vec<usize> = doc.phases.iter().map(|b| b.days.len()).collect();
        assert_eq!(per_phase, vec![1, 2, 0]);
    }

    #[test]
    fn test_header_and_date_line() {
        let text = FallbackPlanGenerator::generate_on("Linear Algebra", 7, date());
        assert!(text.starts_with("📚 7-Day Study Plan: Linear Algebra\n"));
        assert!(text.contains("Generated: October 17, 2026\n"));
        assert!(text.contains("Goal: Master Linear Algebra through structured daily learning\n"));
        assert!(text.ends_with("🚀 Good luck with your 7-day journey!\n"));
    }

    #[test]
    fn test_objectives_follow_phase() {
        let text = FallbackPlanGenerator::generate_on("Rust", 7, date());
        assert_eq!(text.matches("Understand basic terminology and concepts").count(), 3);
        assert_eq!(text.matches("Apply concepts to practical problems").count(), 3);
        assert_eq!(text.matches("Master advanced techniques").count(), 1);
        assert!(text.contains("📖 Topic: Intermediate Topics - Session 2\n"));
    }

    #[test]
    fn test_checkpoint_window() {
        let text = FallbackPlanGenerator::generate_on("Rust", 14, date());
        assert!(text.contains("Test understanding of Days 1 to 3"));
        assert!(text.contains("Test understanding of Days 10 to 12"));
        assert_eq!(text.matches("🧪 CHECKPOINT").count(), 4);
        assert_eq!(text.matches("📊 WEEKLY REVIEW").count(), 2);
    }
}
