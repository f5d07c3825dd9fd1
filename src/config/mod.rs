/*!
 * 页面配置读取模块
 *
 * JupyterHub 的 single-user 服务端在页面启动时注入一组键值配置
 * （page_config_data），本模块提供对它的只读访问。配置在激活前
 * 填充完毕，本扩展从不修改它。
 */

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Hub 服务所在主机，可为空
pub const HUB_HOST: &str = "hub_host";

/// Hub 服务 URL 前缀，缺失时扩展不注册任何命令
pub const HUB_PREFIX: &str = "hub_prefix";

/// Tensor Board 面板地址，缺失时使用内置默认值
pub const TENSORBOARD_URL: &str = "tensorboard_url";

/// 页面配置解析错误
#[derive(Debug, Error)]
pub enum PageConfigError {
    /// 注入的页面配置不是字符串键值构成的合法 JSON 对象
    #[error("页面配置 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 只读的页面配置存储
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PageConfig {
    options: HashMap<String, String>,
}

impl PageConfig {
    /// 创建空配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对序列构建配置
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            options: pairs.into_iter().collect(),
        }
    }

    /// 从服务端注入的 JSON 对象构建配置
    ///
    /// # 错误
    ///
    /// 输入不是字符串到字符串的 JSON 对象时返回解析错误。
    pub fn from_json(raw: &str) -> Result<Self, PageConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 读取配置项，缺失时返回空字符串
    pub fn get_option(&self, key: &str) -> String {
        self.options.get(key).cloned().unwrap_or_default()
    }
}
