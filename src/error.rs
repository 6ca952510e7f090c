//! 数据集错误类型定义

use thiserror::Error;

/// 数据集相关错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// 注册表中不存在该名称的数据集
    #[error("未知数据集: {0}")]
    UnknownDataset(String),

    /// 索引越界
    #[error("索引越界: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
