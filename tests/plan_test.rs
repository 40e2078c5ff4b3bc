use chrono::NaiveDate;
use study_buddy::FallbackPlanGenerator;

const DAY_HEADER: &str = "\u{1F5D3}\u{FE0F}  DAY ";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// 按出现顺序返回所有天数标题中的天号
fn day_numbers(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| line.strip_prefix(DAY_HEADER))
        .map(|rest| rest.trim_end_matches(':').parse().unwrap())
        .collect()
}

#[test]
fn test_seven_day_plan_has_every_day_once() {
    let text = FallbackPlanGenerator::generate_on("Linear Algebra", 7, date());
    assert_eq!(day_numbers(&text), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(text.contains("📌 PHASE 1: Fundamentals & Core Concepts"));
    assert!(text.contains("📌 PHASE 2: Intermediate Topics"));
    assert!(text.contains("📌 PHASE 3: Advanced Concepts & Projects"));
}

#[test]
fn test_checkpoints_and_weekly_review_positions() {
    let text = FallbackPlanGenerator::generate_on("Linear Algebra", 7, date());

    let sections: Vec<&str> = text.split(DAY_HEADER).skip(1).collect();
    assert_eq!(sections.len(), 7);
    for (i, section) in sections.iter().enumerate() {
        let day = i + 1;
        assert_eq!(section.contains("🧪 CHECKPOINT"), day % 3 == 0, "day {}", day);
        assert_eq!(section.contains("📊 WEEKLY REVIEW"), day % 7 == 0, "day {}", day);
    }
    assert!(text.contains("Test understanding of Days 4 to 6"));
}

#[test]
fn test_generation_is_deterministic() {
    let first = FallbackPlanGenerator::generate_on("Organic Chemistry", 10, date());
    let second = FallbackPlanGenerator::generate_on("Organic Chemistry", 10, date());
    assert_eq!(first, second);

    let today = FallbackPlanGenerator::generate("Organic Chemistry", 10);
    assert_eq!(day_numbers(&today), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_single_day_plan() {
    let text = FallbackPlanGenerator::generate_on("X", 1, date());
    assert_eq!(day_numbers(&text), vec![1]);
    assert!(!text.contains("🧪 CHECKPOINT"));
    assert!(!text.contains("📊 WEEKLY REVIEW"));
    assert!(text.contains("💡 STUDY TIPS FOR SUCCESS"));
    // 后两个阶段没有排期，标题仍然保留
    assert!(text.contains("📌 PHASE 3: Advanced Concepts & Projects"));
}

#[test]
fn test_long_plan_never_exceeds_requested_days() {
    for days in [2, 5, 10, 14, 30, 45] {
        let text = FallbackPlanGenerator::generate_on("Rust", days, date());
        assert_eq!(day_numbers(&text), (1..=days).collect::<Vec<_>>(), "{} days", days);
    }
}

#[test]
fn test_zero_days_renders_frame_only() {
    let text = FallbackPlanGenerator::generate_on("Rust", 0, date());
    assert!(day_numbers(&text).is_empty());
    assert!(text.starts_with("📚 0-Day Study Plan: Rust\n"));
    assert!(text.ends_with("🚀 Good luck with your 0-day journey!\n"));
}
