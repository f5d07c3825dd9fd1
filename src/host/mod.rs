/*!
 * 宿主能力抽象模块
 *
 * 扩展本身不拥有命令系统、命令面板或主菜单，这些均由宿主应用提供。
 * 本模块把激活需要的宿主能力定义为一组 trait，由宿主（或测试中的
 * 模拟实现）作为参数注入。
 */

use std::sync::Arc;

use crate::commands::CommandDescriptor;
use crate::config::PageConfig;
use crate::menu::Menu;

/// 命令注册表
///
/// 对应宿主的 `addCommand(id, descriptor)` 接口。重复 id 的处理由
/// 宿主注册表负责，本扩展不做去重。
pub trait CommandRegistry {
    /// 以固定 id 注册一个命令
    fn add_command(&mut self, id: &str, descriptor: CommandDescriptor);
}

/// 命令面板条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    /// 已注册命令的 id
    pub command: String,

    /// 面板中的分类标题
    pub category: String,
}

/// 命令面板
pub trait CommandPalette {
    /// 把一个已注册命令加入面板
    fn add_item(&mut self, item: PaletteItem);
}

/// 菜单挂载选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    /// 菜单在主菜单栏中的优先级
    pub rank: u32,
}

/// 主菜单
///
/// `add_menu` 接收菜单容器的所有权，挂载后菜单归宿主所有。
pub trait MainMenu {
    fn add_menu(&mut self, menu: Menu, options: MenuOptions);
}

/// 浏览器导航原语
///
/// 在新的浏览器上下文中打开 URL，不消费返回值。导航失败（例如
/// 弹窗被拦截）由宿主浏览器处理，对本扩展不可见。
pub trait Opener: Send + Sync {
    fn open_url(&self, url: &str);
}

/// 宿主应用句柄
///
/// 聚合激活阶段需要的宿主入口：命令注册表、URL 打开器和页面配置。
pub trait HostApp {
    /// 宿主命令注册表
    fn commands(&mut self) -> &mut dyn CommandRegistry;

    /// URL 打开器，命令动作闭包持有它的共享句柄
    fn opener(&self) -> Arc<dyn Opener>;

    /// 宿主进程的页面配置，激活前由服务端注入，之后只读
    fn page_config(&self) -> &PageConfig;
}
