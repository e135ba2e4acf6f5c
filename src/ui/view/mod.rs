//! 视图层模块
//!
//! 包含主渲染入口：页眉（位置与翻页按钮）、幻灯片正文、圆点指示器、快捷键提示

pub mod components;
pub mod slide;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::render::render as render_layout;
use components::{centered_rect, nav_button, render_dialog_framework};

const PREV_LABEL: &str = " ‹ Prev ";
const NEXT_LABEL: &str = " Next › ";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 页眉
            Constraint::Min(5),    // 正文
            Constraint::Length(3), // 圆点
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_dots(frame, app, chunks[2]);
    render_hints(frame, chunks[3]);

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        app.store.deck().title().unwrap_or("slidedeck").to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prev_width = Span::raw(PREV_LABEL).width() as u16;
    let next_width = Span::raw(NEXT_LABEL).width() as u16;
    let [label_area, prev_area, next_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(prev_width),
        Constraint::Length(next_width),
    ])
    .areas(inner);

    let label = Paragraph::new(format!("Slide {}", app.store.position_label()))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(label, label_area);

    frame.render_widget(nav_button(PREV_LABEL, !app.store.is_first()), prev_area);
    frame.render_widget(nav_button(NEXT_LABEL, !app.store.is_last()), next_area);
    app.register_hit(prev_area, Action::Previous);
    app.register_hit(next_area, Action::Next);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 留出边距
    let padded = Rect {
        x: inner.x.saturating_add(2).min(inner.right()),
        y: inner.y.saturating_add(1).min(inner.bottom()),
        width: inner.width.saturating_sub(4),
        height: inner.height.saturating_sub(2),
    };

    let layout = render_layout(app.current_slide());
    slide::render_slide(frame, padded, &layout);
}

fn render_dots(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let len = app.store.len();
    let cursor = app.store.cursor();
    let capacity = (inner.width as usize + 1) / 2;
    if capacity == 0 || inner.height == 0 {
        return;
    }

    // 放不下时只显示光标附近的一段，两端的 "…" 跳到窗口外相邻的一页
    let (first, last) = dot_window(len, cursor, capacity);
    let mut items = Vec::with_capacity(last - first + 2);
    if first > 0 {
        items.push(("…", Color::Gray, first - 1));
    }
    for index in first..last {
        if index == cursor {
            items.push(("●", Color::Blue, index));
        } else {
            items.push(("○", Color::DarkGray, index));
        }
    }
    if last < len {
        items.push(("…", Color::Gray, last));
    }

    let total = (items.len() * 2).saturating_sub(1);
    let start = inner.x as usize + (inner.width as usize).saturating_sub(total) / 2;

    for (slot, (symbol, color, index)) in items.into_iter().enumerate() {
        let x = start + slot * 2;
        if x >= inner.right() as usize {
            break;
        }
        let dot_area = Rect::new(x as u16, inner.y, 1, 1);
        frame.render_widget(Span::styled(symbol, Style::default().fg(color)), dot_area);
        app.register_hit(dot_area, Action::Jump(index));
    }
}

/// 可见圆点范围 `[first, last)`，始终包含光标；溢出时两端各让出一格给 "…"
fn dot_window(len: usize, cursor: usize, capacity: usize) -> (usize, usize) {
    if len <= capacity {
        return (0, len);
    }
    let visible = capacity.saturating_sub(2).max(1);
    let first = cursor.saturating_sub(visible / 2).min(len - visible);
    (first, first + visible)
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = "[←/h] 上一页  [→/l] 下一页  [1-9] 跳转  [g/G] 首/末页  [?] 帮助  [q] 退出";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "快捷键");

    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let rows = [
        ("→ l n Space PgDn", "下一页"),
        ("← h p Bksp PgUp", "上一页"),
        ("1-9", "跳到第 N 页"),
        ("g Home / G End", "第一页 / 最后一页"),
        ("鼠标点击", "按钮与圆点"),
        ("? Esc", "关闭帮助"),
        ("q", "退出"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(format!("{keys:<18}"), key),
                Span::raw(*desc),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
