// crates/mf_mesh/src/error.rs
//! 网格处理错误类型
//!
//! 包含网格拓扑、尺寸一致性和生成参数错误定义

use thiserror::Error;

/// 网格模块结果类型
pub type MeshResult<T> = Result<T, MeshError>;

/// 网格错误枚举
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// 拓扑错误
    #[error("拓扑错误: {operation} 失败, {details}")]
    InvalidTopology {
        /// 出错的操作
        operation: &'static str,
        /// 详细信息
        details: String,
    },

    /// 数组长度不一致
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数组名称
        name: &'static str,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 生成参数无效
    #[error("网格生成参数无效: {0}")]
    InvalidParameter(String),
}

impl MeshError {
    /// 构造拓扑错误
    pub fn topology(operation: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidTopology {
            operation,
            details: details.into(),
        }
    }
}
