//! 事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action，`len` 为幻灯片数量
pub fn get_action(mode: AppMode, key: KeyCode, len: usize) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Right
            | KeyCode::PageDown
            | KeyCode::Char('l')
            | KeyCode::Char('n')
            | KeyCode::Char(' ') => Some(Action::Next),
            KeyCode::Left
            | KeyCode::PageUp
            | KeyCode::Backspace
            | KeyCode::Char('h')
            | KeyCode::Char('p') => Some(Action::Previous),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                (index < len).then_some(Action::Jump(index))
            }
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

/// 鼠标：左键点击控件或圆点，滚轮翻页
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match (app.mode, mouse.kind) {
        (AppMode::Help, MouseEventKind::Down(MouseButton::Left)) => Some(Action::ToggleHelp),
        (AppMode::Help, _) => None,
        (AppMode::Normal, MouseEventKind::Down(MouseButton::Left)) => {
            let position = Position::new(mouse.column, mouse.row);
            app.hit_areas
                .iter()
                .find(|(area, _)| area.contains(position))
                .map(|(_, action)| *action)
        }
        (AppMode::Normal, MouseEventKind::ScrollDown) => Some(Action::Next),
        (AppMode::Normal, MouseEventKind::ScrollUp) => Some(Action::Previous),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            get_action(app.mode, key.code, app.store.len())
        }
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, DeckStore};
    use crate::storage::builtin_deck;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(DeckStore::new(builtin_deck().unwrap()))
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(mode, KeyCode::Right, 3), Some(Action::Next));
        assert_eq!(get_action(mode, KeyCode::Char(' '), 3), Some(Action::Next));
        assert_eq!(get_action(mode, KeyCode::Left, 3), Some(Action::Previous));
        assert_eq!(get_action(mode, KeyCode::Home, 3), Some(Action::First));
        assert_eq!(get_action(mode, KeyCode::Char('G'), 3), Some(Action::Last));
        assert_eq!(get_action(mode, KeyCode::Char('q'), 3), Some(Action::Quit));
        assert_eq!(get_action(mode, KeyCode::Char('x'), 3), None);
    }

    #[test]
    fn test_digit_jump_is_bounded() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(mode, KeyCode::Char('1'), 3), Some(Action::Jump(0)));
        assert_eq!(get_action(mode, KeyCode::Char('3'), 3), Some(Action::Jump(2)));
        assert_eq!(get_action(mode, KeyCode::Char('4'), 3), None);
        assert_eq!(get_action(mode, KeyCode::Char('0'), 3), None);
    }

    #[test]
    fn test_help_mode_swallows_navigation() {
        let mode = AppMode::Help;
        assert_eq!(get_action(mode, KeyCode::Right, 3), None);
        assert_eq!(get_action(mode, KeyCode::Esc, 3), Some(Action::ToggleHelp));
        assert_eq!(get_action(mode, KeyCode::Char('q'), 3), Some(Action::Quit));
    }

    #[test]
    fn test_click_hits_registered_area() {
        let mut app = app();
        app.register_hit(Rect::new(10, 5, 1, 1), Action::Jump(4));
        app.register_hit(Rect::new(0, 0, 0, 1), Action::Next);

        assert_eq!(get_mouse_action(&app, click(10, 5)), Some(Action::Jump(4)));
        assert_eq!(get_mouse_action(&app, click(11, 5)), None);
        assert_eq!(app.hit_areas.len(), 1);
    }

    #[test]
    fn test_handle_event_dispatches() {
        let mut app = app();
        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(!handle_event(&mut app, press(KeyCode::Right)));
        assert_eq!(app.store.cursor(), 1);
        assert!(!handle_event(&mut app, press(KeyCode::End)));
        assert_eq!(app.store.cursor(), app.store.len() - 1);
        assert!(handle_event(&mut app, press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_scroll_pages() {
        let mut app = App::new(DeckStore::new(Deck::new(crate::builtin::slides()).unwrap()));
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(!handle_event(&mut app, Event::Mouse(scroll)));
        assert_eq!(app.store.cursor(), 1);
    }
}
