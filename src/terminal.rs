//! 终端生命周期
//!
//! 正常退出与 panic 时都要恢复终端

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 进入原始模式与备用屏幕；中途失败会先恢复终端再返回错误
pub fn setup(mouse: bool) -> io::Result<Tui> {
    enable_raw_mode()?;
    enter(mouse).inspect_err(|_| {
        let _ = restore();
    })
}

fn enter(mouse: bool) -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// 可重复调用
pub fn restore() -> io::Result<()> {
    let _ = execute!(io::stdout(), DisableMouseCapture);
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// 合并主循环与恢复终端的结果，主循环的错误优先
pub fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result.and(restored.map_err(Into::into))
}

/// 在 `setup` 之前调用
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
