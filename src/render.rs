//! 幻灯片渲染器
//!
//! 纯函数：`Slide` -> `SlideLayout`。只读取当前变体自己的字段，
//! 不依赖任何外部状态，相同输入总是得到相同输出。

use crate::models::{Icon, Slide, StyleVariant};

/// 水平对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// 文本语气，由视图层映射到具体样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// 大号粗体陈述
    Lead,
    Body,
    Muted,
    /// 等宽弱化文字
    Mono,
}

/// 步骤面板的强调色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Export,
    Hosting,
}

/// 卡片外观
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Tip,
    Example(StyleVariant),
}

/// 版面元素
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Icon(Icon),
    /// 首页大标题
    Display(String),
    Heading(String),
    Subheading(String),
    /// 图标与标题同一行
    HeaderRow {
        icon: Option<Icon>,
        title: String,
    },
    Text {
        text: String,
        tone: Tone,
    },
    Bullets(Vec<String>),
    Prompt(String),
    Exchange {
        you: String,
        claude: String,
    },
    Card {
        title: String,
        body: String,
        style: CardStyle,
    },
    Steps {
        items: Vec<String>,
        accent: Accent,
    },
}

/// 一张幻灯片的版面
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideLayout {
    pub align: Align,
    /// 垂直居中
    pub centered: bool,
    pub elements: Vec<Element>,
}

impl SlideLayout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn centered() -> Self {
        Self {
            align: Align::Center,
            centered: true,
            elements: Vec::new(),
        }
    }

    /// 水平居中但从顶部开始排列
    fn top_centered() -> Self {
        Self {
            align: Align::Center,
            centered: false,
            elements: Vec::new(),
        }
    }

    fn left() -> Self {
        Self::default()
    }

    fn push(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    fn push_opt(self, element: Option<Element>) -> Self {
        match element {
            Some(element) => self.push(element),
            None => self,
        }
    }
}

fn text(text: &str, tone: Tone) -> Element {
    Element::Text {
        text: text.to_string(),
        tone,
    }
}

fn icon(icon: &Option<Icon>) -> Option<Element> {
    icon.clone().map(Element::Icon)
}

/// 按变体标签分发
pub fn render(slide: &Slide) -> SlideLayout {
    match slide {
        Slide::Title {
            title,
            subtitle,
            icon: i,
        } => SlideLayout::centered()
            .push_opt(icon(i))
            .push(Element::Display(title.clone()))
            .push(Element::Subheading(subtitle.clone())),

        Slide::Statement {
            content,
            subcontent,
            icon: i,
        } => SlideLayout::centered()
            .push_opt(icon(i))
            .push(text(content, Tone::Lead))
            .push(text(subcontent, Tone::Muted)),

        Slide::Feature { title, bullets } => SlideLayout::left()
            .push(Element::Heading(title.clone()))
            .push(Element::Bullets(bullets.clone())),

        Slide::Prompt {
            title,
            content,
            prompt,
            icon: i,
            subcontent,
        } => SlideLayout::centered()
            .push_opt(icon(i))
            .push(Element::Heading(title.clone()))
            .push(text(content, Tone::Body))
            .push(Element::Prompt(prompt.clone()))
            .push_opt(subcontent.as_deref().map(|s| text(s, Tone::Muted))),

        Slide::Conversation { title, exchanges } => exchanges.iter().fold(
            SlideLayout::left().push(Element::Heading(title.clone())),
            |layout, exchange| {
                layout.push(Element::Exchange {
                    you: exchange.you.clone(),
                    claude: exchange.claude.clone(),
                })
            },
        ),

        Slide::StyleExample {
            title,
            examples,
            icon: i,
        } => examples.iter().fold(
            SlideLayout::left().push(Element::HeaderRow {
                icon: i.clone(),
                title: title.clone(),
            }),
            |layout, example| {
                layout.push(Element::Card {
                    title: example.name.clone(),
                    body: example.desc.clone(),
                    style: CardStyle::Example(example.style_variant),
                })
            },
        ),

        Slide::Tips { title, tips } => tips.iter().fold(
            SlideLayout::left().push(Element::Heading(title.clone())),
            |layout, tip| {
                layout.push(Element::Card {
                    title: tip.title.clone(),
                    body: tip.content.clone(),
                    style: CardStyle::Tip,
                })
            },
        ),

        Slide::ArtifactExport {
            title,
            content,
            steps,
            note,
            icon: i,
        } => steps_layout(title, content, steps, i, Accent::Export).push(text(note, Tone::Muted)),

        Slide::Hosting {
            title,
            content,
            steps,
            note,
            icon: i,
        } => steps_layout(title, content, steps, i, Accent::Hosting).push(text(note, Tone::Mono)),

        Slide::End {
            title,
            content,
            subcontent,
        } => SlideLayout::centered()
            .push(Element::Heading(title.clone()))
            .push(text(content, Tone::Body))
            .push(text(subcontent, Tone::Muted)),

        Slide::Unknown => SlideLayout::empty(),
    }
}

fn steps_layout(
    title: &str,
    content: &str,
    steps: &[String],
    i: &Option<Icon>,
    accent: Accent,
) -> SlideLayout {
    SlideLayout::top_centered()
        .push(Element::HeaderRow {
            icon: i.clone(),
            title: title.to_string(),
        })
        .push(text(content, Tone::Body))
        .push(Element::Steps {
            items: steps.to_vec(),
            accent,
        })
}
