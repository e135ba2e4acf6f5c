//! 日志初始化
//!
//! TUI 占用标准输出，日志写入数据目录下按天滚动的文件

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;

/// 初始化全局订阅者；返回的 guard 需存活到程序结束，否则缓冲日志会丢失
///
/// 过滤指令无效或已有全局订阅者时返回错误，此时终端尚未进入 TUI
pub fn init(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(level)?;

    let appender = tracing_appender::rolling::daily(log_dir, "slidedeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
        .try_init()?;

    Ok(guard)
}
