/*!
 * 命令定义模块
 *
 * 定义本扩展注册的命令 id 常量和命令描述符。描述符在激活时创建并
 * 注册进宿主命令注册表，此后与宿主进程同生命周期。
 */

use std::fmt;

/// 本扩展使用的命令 id
///
/// 三个 id 为进程内唯一的字符串常量，重复激活时的去重由宿主注册表
/// 负责。
pub mod ids {
    /// 打开 Hub 控制面板
    pub const CONTROL_PANEL: &str = "hub:control-panel";

    /// 打开 Tensor Board 面板
    pub const TENSOR_BOARD: &str = "hub:tensor-board";

    /// 登出 Hub
    pub const LOGOUT: &str = "hub:logout";
}

/// 命令动作闭包
///
/// 由用户事件异步触发，同步执行一次浏览器导航后立即返回。闭包只
/// 捕获激活时计算好的 URL 和打开器句柄，不持有可变状态。
pub type CommandAction = Box<dyn Fn() + Send + Sync>;

/// 命令描述符
pub struct CommandDescriptor {
    /// 菜单和面板中展示的标签
    pub label: String,

    /// 悬浮提示文案
    pub caption: String,

    /// 命令动作
    pub execute: CommandAction,
}

impl CommandDescriptor {
    pub fn new(
        label: impl Into<String>,
        caption: impl Into<String>,
        execute: CommandAction,
    ) -> Self {
        Self {
            label: label.into(),
            caption: caption.into(),
            execute,
        }
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("label", &self.label)
            .field("caption", &self.caption)
            .finish_non_exhaustive()
    }
}
