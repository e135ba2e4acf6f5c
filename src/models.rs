use serde::Deserialize;

use crate::error::{DeckError, Result};

/// 装饰性图标句柄，只携带名字，不参与任何逻辑
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// 风格示例的外观
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    #[default]
    Plain,
    Bold,
    Casual,
}

/// 一轮对话
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exchange {
    pub you: String,
    pub claude: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleExample {
    pub name: String,
    pub desc: String,
    #[serde(default, alias = "style")]
    pub style_variant: StyleVariant,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tip {
    pub title: String,
    pub content: String,
}

/// 幻灯片
///
/// `type` 标签决定哪些字段有意义。无法识别的标签反序列化为 `Unknown`，
/// 渲染时得到空版面，不影响其余幻灯片。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Title {
        title: String,
        subtitle: String,
        icon: Option<Icon>,
    },
    Statement {
        content: String,
        subcontent: String,
        icon: Option<Icon>,
    },
    Feature {
        title: String,
        bullets: Vec<String>,
    },
    Prompt {
        title: String,
        content: String,
        prompt: String,
        icon: Option<Icon>,
        subcontent: Option<String>,
    },
    Conversation {
        title: String,
        exchanges: Vec<Exchange>,
    },
    StyleExample {
        title: String,
        examples: Vec<StyleExample>,
        icon: Option<Icon>,
    },
    Tips {
        title: String,
        tips: Vec<Tip>,
    },
    ArtifactExport {
        title: String,
        content: String,
        steps: Vec<String>,
        note: String,
        icon: Option<Icon>,
    },
    Hosting {
        title: String,
        content: String,
        steps: Vec<String>,
        note: String,
        icon: Option<Icon>,
    },
    End {
        title: String,
        content: String,
        subcontent: String,
    },
    #[serde(other)]
    Unknown,
}

impl Slide {
    /// 标签名（与 TOML 中的 `type` 一致）
    pub fn kind(&self) -> &'static str {
        match self {
            Slide::Title { .. } => "title",
            Slide::Statement { .. } => "statement",
            Slide::Feature { .. } => "feature",
            Slide::Prompt { .. } => "prompt",
            Slide::Conversation { .. } => "conversation",
            Slide::StyleExample { .. } => "style-example",
            Slide::Tips { .. } => "tips",
            Slide::ArtifactExport { .. } => "artifact-export",
            Slide::Hosting { .. } => "hosting",
            Slide::End { .. } => "end",
            Slide::Unknown => "unknown",
        }
    }

    /// 检查必填字段非空，`index` 仅用于错误信息
    pub fn validate(&self, index: usize) -> Result<()> {
        let missing = |field: &'static str| DeckError::MissingField {
            index,
            variant: self.kind(),
            field,
        };
        let text = |value: &str, field: &'static str| {
            if value.trim().is_empty() {
                Err(missing(field))
            } else {
                Ok(())
            }
        };
        let list = |len: usize, field: &'static str| {
            if len == 0 { Err(missing(field)) } else { Ok(()) }
        };

        match self {
            Slide::Title {
                title, subtitle, ..
            } => {
                text(title, "title")?;
                text(subtitle, "subtitle")
            }
            Slide::Statement {
                content,
                subcontent,
                ..
            } => {
                text(content, "content")?;
                text(subcontent, "subcontent")
            }
            Slide::Feature { title, bullets } => {
                text(title, "title")?;
                list(bullets.len(), "bullets")
            }
            Slide::Prompt {
                title,
                content,
                prompt,
                ..
            } => {
                text(title, "title")?;
                text(content, "content")?;
                text(prompt, "prompt")
            }
            Slide::Conversation { title, exchanges } => {
                text(title, "title")?;
                list(exchanges.len(), "exchanges")
            }
            Slide::StyleExample {
                title, examples, ..
            } => {
                text(title, "title")?;
                list(examples.len(), "examples")
            }
            Slide::Tips { title, tips } => {
                text(title, "title")?;
                list(tips.len(), "tips")
            }
            Slide::ArtifactExport {
                title,
                content,
                steps,
                note,
                ..
            }
            | Slide::Hosting {
                title,
                content,
                steps,
                note,
                ..
            } => {
                text(title, "title")?;
                text(content, "content")?;
                list(steps.len(), "steps")?;
                text(note, "note")
            }
            Slide::End {
                title,
                content,
                subcontent,
            } => {
                text(title, "title")?;
                text(content, "content")?;
                text(subcontent, "subcontent")
            }
            Slide::Unknown => Ok(()),
        }
    }
}

/// TOML 幻灯片文件结构
#[derive(Debug, Clone, Deserialize)]
pub struct DeckData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}
