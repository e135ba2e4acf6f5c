mod builtin;
mod config;
mod deck;
mod error;
mod logging;
mod models;
mod render;
mod storage;
mod terminal;
mod ui;

use std::process::ExitCode;

use crate::config::Config;
use crate::deck::DeckStore;
use crate::error::Result;
use crate::storage::resolve_deck;
use crate::terminal::Tui;
use crate::ui::App;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("slidedeck: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 配置 (~/.config/slidedeck/config.toml)
    let config = Config::load(&config::config_path()?)?;

    // 日志写入 ~/.local/share/slidedeck/logs/
    let log_dir = config::data_dir()?.join("logs");
    let _guard = logging::init(&log_dir, &config.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting slidedeck");

    // 加载幻灯片
    let deck = resolve_deck(config.deck.as_deref()).inspect_err(|e| {
        tracing::error!(error = %e, "failed to load deck");
    })?;
    match &config.deck {
        Some(path) => tracing::info!(path = %path.display(), slides = deck.len(), "loaded deck file"),
        None => tracing::info!(slides = deck.len(), "using built-in deck"),
    }

    let mut app = App::new(DeckStore::new(deck)).with_help(config.show_help);

    // 设置终端
    terminal::install_panic_hook();
    let mut terminal = terminal::setup(config.mouse)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端，失败也不掩盖主循环的错误
    let restored = terminal::restore().and_then(|()| terminal.show_cursor());
    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }

    tracing::info!(last_slide = app.store.cursor() + 1, "exiting");
    terminal::finish(result, restored)
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let event = crossterm::event::read()?;
        if ui::handle_event(app, event) {
            break;
        }
    }
    Ok(())
}
