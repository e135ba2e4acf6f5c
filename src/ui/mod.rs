//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有幻灯片组与光标
//! - View (view/): 将 State 绘制到终端，幻灯片版面来自 `crate::render`
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_event;
pub use state::App;
pub use view::render;
