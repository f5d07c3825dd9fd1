//! JupyterHub 菜单集成扩展
//!
//! 这是一个面向笔记本 IDE 宿主的 Hub 集成模块，在宿主的命令注册表、
//! 命令面板和主菜单中注册三个 Hub 相关命令：
//! - 打开 Hub 控制面板
//! - 打开 Tensor Board 面板
//! - 登出 Hub
//!
//! 宿主能力（命令注册表、面板、菜单、URL 打开器）全部通过 trait 注入，
//! 激活逻辑无需真实宿主即可测试。

// 模块声明
pub mod commands; // 命令 ID 与命令描述符
pub mod config; // 页面配置读取模块
pub mod extension; // 扩展激活入口与插件描述符
pub mod host; // 宿主能力抽象模块
pub mod menu; // 菜单容器模块
pub mod utils; // 工具和错误处理模块

pub use commands::{CommandAction, CommandDescriptor};
pub use config::{PageConfig, PageConfigError};
pub use extension::{activate, plugin, Capability, Plugin, PLUGIN_ID};
pub use host::{
    CommandPalette, CommandRegistry, HostApp, MainMenu, MenuOptions, Opener, PaletteItem,
};
pub use menu::{Menu, MenuItem};
pub use utils::{AppError, AppResult};
