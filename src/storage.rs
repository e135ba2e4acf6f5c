use std::fs;
use std::path::Path;

use crate::builtin;
use crate::deck::Deck;
use crate::error::Result;
use crate::models::DeckData;

/// 从TOML文件加载幻灯片组
pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path)?;
    parse_deck(&content)
}

/// 解析TOML文本并校验
pub fn parse_deck(content: &str) -> Result<Deck> {
    let data: DeckData = toml::from_str(content)?;
    let deck = Deck::new(data.slides)?;

    Ok(match data.title {
        Some(title) => deck.with_title(title),
        None => deck,
    })
}

/// 内置幻灯片组
pub fn builtin_deck() -> Result<Deck> {
    Ok(Deck::new(builtin::slides())?.with_title(builtin::TITLE))
}

/// 有配置路径时读文件，否则使用内置
pub fn resolve_deck(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(path) => load_deck(path),
        None => builtin_deck(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;
    use crate::models::Slide;
    use std::io::Write;

    const SAMPLE: &str = r#"
title = "Sample"

[[slides]]
type = "title"
title = "Hello"
subtitle = "World"

[[slides]]
type = "mystery"
whatever = 1

[[slides]]
type = "end"
title = "Bye"
content = "Thanks"
subcontent = "Questions?"
"#;

    #[test]
    fn test_load_deck_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.title(), Some("Sample"));
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides()[1], Slide::Unknown);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_deck(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(DeckError::Io(_))));
    }

    #[test]
    fn test_empty_deck_file_rejected() {
        assert!(matches!(
            parse_deck("title = \"Nothing\""),
            Err(DeckError::EmptyDeck)
        ));
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let result = parse_deck(
            r#"
            [[slides]]
            type = "statement"
            content = ""
            subcontent = "x"
            "#,
        );
        assert!(matches!(
            result,
            Err(DeckError::MissingField {
                index: 0,
                field: "content",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        assert!(matches!(parse_deck("[[slides"), Err(DeckError::Parse(_))));
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        let deck = resolve_deck(None).unwrap();
        assert_eq!(deck.title(), Some(builtin::TITLE));
        assert_eq!(deck.len(), builtin::slides().len());
    }
}
