//! 错误类型
//!
//! 只有启动阶段（配置、幻灯片文件、终端）会失败，导航与渲染永不返回错误

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("deck contains no slides")]
    EmptyDeck,

    #[error("slide {index} ({variant}): required field `{field}` is empty")]
    MissingField {
        index: usize,
        variant: &'static str,
        field: &'static str,
    },

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install logger: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("cannot locate the user {0} directory")]
    NoUserDir(&'static str),
}

pub type Result<T> = std::result::Result<T, DeckError>;
