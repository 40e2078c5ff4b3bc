//! 闪卡复习状态

use crate::models::flashcard::Flashcard;

/// 当前朝上的一面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    Front(&'a str),
    Back(&'a str),
}

/// 闪卡组
#[derive(Debug, Clone, Default)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    current: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            current: 0,
            flipped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// `(当前序号, 总数)`，序号从 1 开始；空卡组为 `(0, 0)`
    pub fn position(&self) -> (usize, usize) {
        if self.cards.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.cards.len())
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.current)
    }

    /// 当前朝上的内容
    pub fn current(&self) -> Option<CardFace<'_>> {
        self.current_card().map(|card| {
            if self.flipped {
                CardFace::Back(&card.back)
            } else {
                CardFace::Front(&card.front)
            }
        })
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// 下一张，已在最后一张时停留
    pub fn next_card(&mut self) {
        self.flipped = false;
        self.current = (self.current + 1).min(self.cards.len().saturating_sub(1));
    }

    /// 上一张，已在第一张时停留
    pub fn previous_card(&mut self) {
        self.flipped = false;
        self.current = self.current.saturating_sub(1);
    }
}
