//! Action 枚举定义 (Intent)
//!
//! 按键与鼠标事件转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    /// 直接跳到指定幻灯片（圆点指示器）
    Jump(usize),
    First,
    Last,
    ToggleHelp,
}
