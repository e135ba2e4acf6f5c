//! App 状态定义 (Model)

use ratatui::layout::Rect;

use super::actions::Action;
use crate::deck::DeckStore;
use crate::models::Slide;

/// 应用状态
pub struct App {
    pub store: DeckStore,
    pub mode: AppMode,
    /// 上一帧绘制的可点击区域
    pub hit_areas: Vec<(Rect, Action)>,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

impl App {
    pub fn new(store: DeckStore) -> Self {
        Self {
            store,
            mode: AppMode::Normal,
            hit_areas: Vec::new(),
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        if show_help {
            self.mode = AppMode::Help;
        }
        self
    }

    pub fn current_slide(&self) -> &Slide {
        self.store.current()
    }

    /// 记录一个可点击区域，绘制时调用
    pub fn register_hit(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.hit_areas.push((area, action));
        }
    }
}
