use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BusinessError;

/// 总结风格
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// 5 条要点
    #[default]
    Simple,
    /// 分节详解
    Detailed,
    /// 概念图
    Concept,
    /// 问答
    Qa,
    /// 10 条关键结论
    Takeaways,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 5] = [
        SummaryStyle::Simple,
        SummaryStyle::Detailed,
        SummaryStyle::Concept,
        SummaryStyle::Qa,
        SummaryStyle::Takeaways,
    ];

    /// 发送给后端的风格键
    pub fn key(self) -> &'static str {
        match self {
            SummaryStyle::Simple => "simple",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Concept => "concept",
            SummaryStyle::Qa => "qa",
            SummaryStyle::Takeaways => "takeaways",
        }
    }

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            SummaryStyle::Simple => "Simple",
            SummaryStyle::Detailed => "Detailed",
            SummaryStyle::Concept => "Concept Map",
            SummaryStyle::Qa => "Q&A",
            SummaryStyle::Takeaways => "Key Points",
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = BusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SummaryStyle::ALL
            .into_iter()
            .find(|style| style.key() == key)
            .ok_or(BusinessError::UnknownSummaryStyle {
                style: s.to_string(),
            })
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_style() {
        assert_eq!("QA".parse::<SummaryStyle>().unwrap(), SummaryStyle::Qa);
        assert_eq!(" takeaways ".parse::<SummaryStyle>().unwrap(), SummaryStyle::Takeaways);
        assert!("mindmap".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn test_keys_round_trip_through_display() {
        for style in SummaryStyle::ALL {
            assert_eq!(style.to_string().parse::<SummaryStyle>().unwrap(), style);
        }
    }
}
