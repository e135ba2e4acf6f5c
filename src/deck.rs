//! 幻灯片组与光标
//!
//! `Deck` 构造后不可变；`DeckStore` 持有唯一的可变状态：当前位置

use crate::error::{DeckError, Result};
use crate::models::Slide;

/// 固定、有序、非空的幻灯片序列
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
}

impl Deck {
    /// 校验后构造：至少一张幻灯片，且每张的必填字段非空
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for (index, slide) in slides.iter().enumerate() {
            slide.validate(index)?;
        }
        Ok(Self {
            title: None,
            slides,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }
}

/// 导航状态：幻灯片组 + 光标
#[derive(Debug, Clone)]
pub struct DeckStore {
    deck: Deck,
    cursor: usize,
}

impl DeckStore {
    pub fn new(deck: Deck) -> Self {
        Self { deck, cursor: 0 }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn current(&self) -> &Slide {
        &self.deck.slides[self.cursor]
    }

    /// 到达末尾时不动
    pub fn next(&mut self) {
        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
        }
    }

    /// 到达开头时不动
    pub fn previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 调用方必须保证 `index < len()`
    pub fn jump(&mut self, index: usize) {
        debug_assert!(
            index < self.deck.len(),
            "jump target {index} out of range (len {})",
            self.deck.len()
        );
        if index < self.deck.len() {
            self.cursor = index;
        }
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.deck.len()
    }

    /// 位置指示，如 "3 of 10"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.cursor + 1, self.deck.len())
    }
}
