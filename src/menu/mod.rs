/*!
 * 菜单容器模块
 *
 * 激活时构建一次 Hub 菜单，通过 `MainMenu::add_menu` 移交给宿主，
 * 此后菜单归宿主主菜单组件所有。
 */

/// 菜单项，按命令 id 引用已注册的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub command: String,
}

/// 挂载到宿主主菜单的菜单容器
#[derive(Debug, Clone, Default)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// 追加一个命令条目，保持插入顺序
    pub fn add_item(&mut self, command: &str) {
        self.items.push(MenuItem {
            command: command.to_string(),
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}
