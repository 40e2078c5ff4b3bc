use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BusinessError;

/// 选项字母表，下标即选项索引
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// 答案键
///
/// 后端返回的 `answer` 可能是数字下标，也可能是字母，
/// 在反序列化时一次性归一化为该枚举。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    /// 从 0 开始的选项下标
    Index(usize),
    /// `A`..=`D` 中的字母
    Letter(char),
}

impl AnswerKey {
    /// 判断所选选项是否与答案一致
    pub fn matches(self, selected: usize) -> bool {
        match self {
            AnswerKey::Index(index) => selected == index,
            AnswerKey::Letter(letter) => OPTION_LETTERS.get(selected) == Some(&letter),
        }
    }

    /// 答案对应的选项下标
    pub fn option_index(self) -> Option<usize> {
        match self {
            AnswerKey::Index(index) => Some(index),
            AnswerKey::Letter(letter) => OPTION_LETTERS.iter().position(|&l| l == letter),
        }
    }

    fn from_letter(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if OPTION_LETTERS.contains(&c) => Some(AnswerKey::Letter(c)),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Index(index) => write!(f, "{}", index),
            AnswerKey::Letter(letter) => write!(f, "{}", letter),
        }
    }
}

impl Serialize for AnswerKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnswerKey::Index(index) => serializer.serialize_u64(*index as u64),
            AnswerKey::Letter(letter) => serializer.serialize_char(*letter),
        }
    }
}

/// 单道选择题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_answer_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub answer: Option<AnswerKey>,
}

impl QuizItem {
    pub fn new(question: impl Into<String>, options: Vec<String>, answer: Option<AnswerKey>) -> Self {
        Self {
            question: question.into(),
            options,
            answer,
        }
    }

    /// 答案键是否指向一个存在的选项（仅用于诊断，不影响计分）
    pub fn key_in_range(&self) -> bool {
        self.answer
            .and_then(AnswerKey::option_index)
            .is_some_and(|index| index < self.options.len())
    }
}

// 非负整数 → Index，恰好为 "A".."D" 的字符串 → Letter，其余一律视为无答案
fn deserialize_answer_key<'de, D>(deserializer: D) -> Result<Option<AnswerKey>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct AnswerKeyVisitor;

    impl<'de> Visitor<'de> for AnswerKeyVisitor {
        type Value = Option<AnswerKey>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an option index or a letter A-D")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(usize::try_from(value).ok().map(AnswerKey::Index))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(usize::try_from(value).ok().map(AnswerKey::Index))
        }

        // `1.0` 与 `1` 等价，带小数部分的数字不是选项下标
        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let is_index = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
            Ok(is_index.then(|| AnswerKey::Index(value as usize)))
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(AnswerKey::from_letter(value))
        }

        fn visit_char<E>(self, value: char) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(OPTION_LETTERS.contains(&value).then_some(AnswerKey::Letter(value)))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(AnswerKeyVisitor)
        }
    }

    deserializer.deserialize_any(AnswerKeyVisitor)
}

/// 作答记录：题目下标 → 所选选项下标
///
/// 未作答的题目不出现在映射中。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<usize, usize>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录作答，重复作答会覆盖之前的选择
    pub fn select(&mut self, question: usize, option: usize) {
        self.0.insert(question, option);
    }

    pub fn get(&self, question: usize) -> Option<usize> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&q, &o)| (q, o))
    }
}

impl FromIterator<(usize, usize)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 解析命令行作答格式：`0=2,1=0`
impl FromStr for AnswerMap {
    type Err = BusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_failed = || BusinessError::AnswerParseFailed {
            input: s.to_string(),
        };

        s.split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<(usize, usize), BusinessError> {
                let (question, option) = pair.split_once('=').ok_or_else(parse_failed)?;
                let question = question.trim().parse().map_err(|_| parse_failed())?;
                let option = option.trim().parse().map_err(|_| parse_failed())?;
                Ok((question, option))
            })
            .collect()
    }
}

/// 计分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
}

impl ScoreResult {
    /// 正确率（四舍五入到整数），没有题目时为 0
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} / {}", self.correct, self.total)
    }
}
