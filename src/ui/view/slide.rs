//! 将 `SlideLayout` 绘制到终端

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::models::{Icon, StyleVariant};
use crate::render::{Accent, Align, CardStyle, Element, SlideLayout, Tone};

/// 图标名 -> (字形, 颜色)
fn icon_glyph(icon: &Icon) -> (&'static str, Color) {
    match icon.name() {
        "rocket" => ("🚀", Color::Blue),
        "wand" => ("🪄", Color::Magenta),
        "message" => ("💬", Color::Green),
        "palette" => ("🎨", Color::LightBlue),
        "share" => ("📤", Color::Yellow),
        "download" => ("📥", Color::Cyan),
        _ => ("◆", Color::Gray),
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Lead => Style::default().add_modifier(Modifier::BOLD),
        Tone::Body => Style::default(),
        Tone::Muted => Style::default().fg(Color::DarkGray),
        Tone::Mono => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    }
}

fn card_style(style: CardStyle) -> Style {
    match style {
        CardStyle::Tip => Style::default().fg(Color::Gray),
        CardStyle::Example(StyleVariant::Plain) => Style::default().fg(Color::White),
        CardStyle::Example(StyleVariant::Bold) => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        CardStyle::Example(StyleVariant::Casual) => Style::default().fg(Color::LightYellow),
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Export => Color::LightRed,
        Accent::Hosting => Color::Gray,
    }
}

fn push_element(lines: &mut Vec<Line<'static>>, element: &Element) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    match element {
        Element::Icon(icon) => {
            let (glyph, color) = icon_glyph(icon);
            lines.push(Line::styled(glyph, Style::default().fg(color)));
            lines.push(Line::default());
        }
        Element::Display(title) => {
            lines.push(Line::styled(
                title.clone(),
                bold.fg(Color::LightBlue),
            ));
            lines.push(Line::default());
        }
        Element::Heading(title) => {
            lines.push(Line::styled(title.clone(), bold));
            lines.push(Line::default());
        }
        Element::Subheading(text) => {
            lines.push(Line::styled(text.clone(), Style::default().fg(Color::Gray)));
        }
        Element::HeaderRow { icon, title } => {
            let mut spans = Vec::new();
            if let Some(icon) = icon {
                let (glyph, color) = icon_glyph(icon);
                spans.push(Span::styled(glyph, Style::default().fg(color)));
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(title.clone(), bold));
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
        Element::Text { text, tone } => {
            lines.push(Line::styled(text.clone(), tone_style(*tone)));
            lines.push(Line::default());
        }
        Element::Bullets(bullets) => {
            for bullet in bullets {
                lines.push(Line::from(format!("  {bullet}")));
                lines.push(Line::default());
            }
        }
        Element::Prompt(prompt) => {
            lines.push(Line::styled(
                format!("  {prompt}  "),
                Style::default().fg(Color::LightBlue).bg(Color::Black),
            ));
            lines.push(Line::default());
        }
        Element::Exchange { you, claude } => {
            lines.push(Line::from(vec![
                Span::styled("You: ", bold.fg(Color::Blue)),
                Span::raw(you.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Claude: ", bold.fg(Color::Magenta)),
                Span::raw(claude.clone()),
            ]));
            lines.push(Line::default());
        }
        Element::Card { title, body, style } => {
            let style = card_style(*style);
            lines.push(Line::from(vec![
                Span::styled("▌ ", style),
                Span::styled(title.clone(), style.add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("▌ ", style),
                Span::raw(body.clone()),
            ]));
            lines.push(Line::default());
        }
        Element::Steps { items, accent } => {
            let bar = Style::default().fg(accent_color(*accent));
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("│ ", bar),
                    Span::raw(item.clone()),
                ]));
            }
            lines.push(Line::default());
        }
    }
}

/// 版面 -> 文本，末尾空行去掉
pub fn layout_to_text(layout: &SlideLayout) -> Text<'static> {
    let mut lines = Vec::new();
    for element in &layout.elements {
        push_element(&mut lines, element);
    }
    while lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }

    Text::from(lines).alignment(alignment(layout.align))
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
    }
}

/// 换行后的近似高度
fn wrapped_height(text: &Text, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn render_slide(frame: &mut Frame, area: Rect, layout: &SlideLayout) {
    if layout.is_empty() {
        return;
    }

    let text = layout_to_text(layout);
    let mut target = area;
    if layout.centered {
        let height = wrapped_height(&text, area.width).min(area.height);
        let offset = (area.height - height) / 2;
        target = Rect {
            y: area.y + offset,
            height: area.height - offset,
            ..area
        };
    }

    let paragraph = Paragraph::new(text)
        .alignment(alignment(layout.align))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slide;
    use crate::render::render;

    #[test]
    fn test_text_follows_alignment() {
        let layout = render(&Slide::End {
            title: "Done".to_string(),
            content: "c".to_string(),
            subcontent: "s".to_string(),
        });
        let text = layout_to_text(&layout);
        assert_eq!(text.alignment, Some(Alignment::Center));
        assert_eq!(text.lines[0].to_string(), "Done");
        assert!(text.lines.last().is_some_and(|line| line.width() > 0));
    }

    #[test]
    fn test_unknown_icon_has_fallback_glyph() {
        assert_eq!(icon_glyph(&Icon::new("zebra")).0, "◆");
        assert_eq!(icon_glyph(&Icon::new("rocket")).0, "🚀");
    }

    #[test]
    fn test_wrapped_height_counts_wrapped_rows() {
        let text = Text::from(vec![Line::from("abcdefghij"), Line::default()]);
        assert_eq!(wrapped_height(&text, 4), 4);
        assert_eq!(wrapped_height(&text, 20), 2);
    }

    #[test]
    fn test_empty_layout_is_blank() {
        assert!(layout_to_text(&SlideLayout::empty()).lines.is_empty());
    }
}
