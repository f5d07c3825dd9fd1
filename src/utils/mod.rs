// 工具模块

pub mod error;

pub mod logging;

pub mod url;

pub use error::{AppError, AppResult};
