//! 业务逻辑处理 (Update/Dispatch)

use super::actions::Action;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Next => self.store.next(),
            Action::Previous => self.store.previous(),
            Action::Jump(index) => self.store.jump(index),
            Action::First => self.store.jump(0),
            Action::Last => self.store.jump(self.store.len() - 1),
            Action::ToggleHelp => self.toggle_help(),
        }
        false
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, DeckStore};
    use crate::models::Slide;

    fn app(len: usize) -> App {
        let slides = (0..len)
            .map(|i| Slide::Feature {
                title: format!("slide {i}"),
                bullets: vec!["point".to_string()],
            })
            .collect();
        App::new(DeckStore::new(Deck::new(slides).unwrap()))
    }

    #[test]
    fn test_dispatch_navigation() {
        let mut app = app(4);

        assert!(!app.dispatch(Action::Previous));
        assert_eq!(app.store.cursor(), 0);

        app.dispatch(Action::Next);
        app.dispatch(Action::Next);
        assert_eq!(app.store.cursor(), 2);

        app.dispatch(Action::Last);
        assert_eq!(app.store.cursor(), 3);
        app.dispatch(Action::Next);
        assert_eq!(app.store.cursor(), 3);

        app.dispatch(Action::Jump(1));
        assert_eq!(app.store.cursor(), 1);

        app.dispatch(Action::First);
        assert_eq!(app.store.cursor(), 0);
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app(1);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.dispatch(Action::ToggleHelp));
        assert_eq!(app.mode, AppMode::Help);
        app.dispatch(Action::ToggleHelp);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.dispatch(Action::Quit));
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut app = app(2);
        app.dispatch(Action::Jump(0));
        assert_eq!(app.store.cursor(), 0);
        assert_eq!(app.store.position_label(), "1 of 2");
    }
}
