/*!
 * 错误处理模块
 *
 * 基于 anyhow 的统一错误处理。激活路径本身不产生错误，仅日志
 * 初始化等辅助入口使用这里的类型。
 */

use anyhow::Result as AnyhowResult;

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;
