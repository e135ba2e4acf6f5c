//! 配置 (~/.config/slidedeck/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DeckError, Result};

pub const APP_NAME: &str = "slidedeck";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 替代内置幻灯片的TOML文件
    pub deck: Option<PathBuf>,
    /// tracing 过滤指令，如 "info" 或 "slidedeck=debug"
    pub log_level: String,
    pub mouse: bool,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: None,
            log_level: "info".to_string(),
            mouse: true,
            show_help: false,
        }
    }
}

impl Config {
    /// 文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // 相对路径按配置文件所在目录解析
        if let (Some(deck), Some(base)) = (config.deck.as_mut(), path.parent()) {
            if deck.is_relative() {
                *deck = base.join(&*deck);
            }
        }

        Ok(config)
    }
}

/// 配置文件路径
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or(DeckError::NoUserDir("config"))?
        .join(APP_NAME);
    Ok(dir.join("config.toml"))
}

/// 数据目录 (~/.local/share/slidedeck/)，不存在时创建
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(DeckError::NoUserDir("data"))?
        .join(APP_NAME);

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.mouse);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_config_and_relative_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "deck = \"talk.toml\"\nmouse = false\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.deck, Some(dir.path().join("talk.toml")));
        assert!(!config.mouse);
        assert!(!config.show_help);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_absolute_deck_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let deck = dir.path().join("elsewhere").join("deck.toml");
        fs::write(&path, format!("deck = {:?}\n", deck.display().to_string())).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.deck, Some(deck));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "moose = true\n").unwrap();

        assert!(matches!(Config::load(&path), Err(DeckError::Parse(_))));
    }
}
