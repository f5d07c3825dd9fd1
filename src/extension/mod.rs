/*!
 * 扩展激活模块
 *
 * 激活入口一次性同步完成全部注册：读取页面配置、注册三个 Hub
 * 命令、构建 Hub 菜单并挂载到主菜单、把命令加入命令面板。唯一的
 * 分支是 hub_prefix 缺失时的提前返回，此时不注册任何东西。
 */

use std::sync::Arc;

use tracing::{info, warn};

use crate::commands::{ids, CommandDescriptor};
use crate::config;
use crate::host::{CommandPalette, HostApp, MainMenu, MenuOptions, PaletteItem};
use crate::menu::Menu;
use crate::utils::url;

/// 插件稳定标识
pub const PLUGIN_ID: &str = "jupyter.extensions.jupyterlab-hub";

/// Hub 菜单标题，同时作为命令面板分类
pub const CATEGORY: &str = "Hub";

/// Hub 菜单在主菜单栏中的优先级
pub const MENU_RANK: u32 = 100;

/// Tensor Board 默认地址
///
/// 历史部署遗留的固定端点，可通过页面配置 `tensorboard_url` 覆盖。
pub const DEFAULT_TENSORBOARD_URL: &str = "10.125.0.137:32006";

/// 激活函数签名
pub type ActivateFn = fn(&mut dyn HostApp, &mut dyn CommandPalette, &mut dyn MainMenu);

/// 插件声明的宿主能力依赖
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CommandPalette,
    MainMenu,
}

/// 插件描述符
///
/// 宿主按描述符加载插件，`auto_start` 为 true 时无需用户操作即调用
/// `activate`。
#[derive(Debug, Clone)]
pub struct Plugin {
    pub id: &'static str,
    pub requires: &'static [Capability],
    pub auto_start: bool,
    pub activate: ActivateFn,
}

/// 返回 Hub 扩展的插件描述符
pub fn plugin() -> Plugin {
    Plugin {
        id: PLUGIN_ID,
        requires: &[Capability::CommandPalette, Capability::MainMenu],
        auto_start: true,
        activate,
    }
}

/// 激活 Hub 扩展
///
/// 同步执行且不可失败，注册之外的故障（宿主能力缺失、导航被拦截）
/// 全部由宿主和浏览器处理。
pub fn activate(
    app: &mut dyn HostApp,
    palette: &mut dyn CommandPalette,
    main_menu: &mut dyn MainMenu,
) {
    // 配置由宿主服务端在页面启动时注入，激活时读取一次
    let hub_host = app.page_config().get_option(config::HUB_HOST);
    let hub_prefix = app.page_config().get_option(config::HUB_PREFIX);

    if hub_prefix.is_empty() {
        warn!("jupyterlab-hub: 未找到 Hub 配置，跳过注册");
        return;
    }

    info!(
        "jupyterlab-hub: 发现 Hub 配置 hub_host={:?} hub_prefix={:?}",
        hub_host, hub_prefix
    );

    // URL 在激活时计算一次，动作闭包各自持有自己的 URL 字符串
    let control_panel_url = format!("{}{}", hub_host, url::join(&hub_prefix, "home"));
    let logout_url = format!("{}{}", hub_host, url::join(&hub_prefix, "logout"));
    let mut tensor_board_url = app.page_config().get_option(config::TENSORBOARD_URL);
    if tensor_board_url.is_empty() {
        tensor_board_url = DEFAULT_TENSORBOARD_URL.to_string();
    }

    let opener = app.opener();
    let commands = app.commands();

    commands.add_command(
        ids::CONTROL_PANEL,
        CommandDescriptor::new(
            "Control Panel",
            "Open the Hub control panel in a new browser tab",
            Box::new({
                let opener = Arc::clone(&opener);
                move || opener.open_url(&control_panel_url)
            }),
        ),
    );

    commands.add_command(
        ids::TENSOR_BOARD,
        CommandDescriptor::new(
            "Tensor Board",
            "Open tensor board in a new browser tab",
            Box::new({
                let opener = Arc::clone(&opener);
                move || opener.open_url(&tensor_board_url)
            }),
        ),
    );

    commands.add_command(
        ids::LOGOUT,
        CommandDescriptor::new(
            "Logout",
            "Log out of the Hub",
            Box::new(move || opener.open_url(&logout_url)),
        ),
    );

    // 同一组命令按固定顺序进入菜单和面板
    let mut menu = Menu::new(CATEGORY);
    for command in [ids::CONTROL_PANEL, ids::TENSOR_BOARD, ids::LOGOUT] {
        menu.add_item(command);
        palette.add_item(PaletteItem {
            command: command.to_string(),
            category: CATEGORY.to_string(),
        });
    }
    main_menu.add_menu(menu, MenuOptions { rank: MENU_RANK });
}
