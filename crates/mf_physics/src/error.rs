// crates/mf_physics/src/error.rs

//! 界面物性层错误类型
//!
//! 汇总各子模块错误，供 [`crate::interface::InterfaceProperties`] 的构造、
//! `correct` 与 `read` 向调用方传播。

use mf_config::ConfigError;
use mf_mesh::MeshError;
use thiserror::Error;

use crate::boundary::BoundaryError;
use crate::fields::FieldError;
use crate::surface_tension::SurfaceTensionError;

/// 界面物性错误
#[derive(Debug, Error)]
pub enum InterfaceError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 场查找或尺寸错误
    #[error("场错误: {0}")]
    Field(#[from] FieldError),

    /// 边界条件错误
    #[error("边界条件错误: {0}")]
    Boundary(#[from] BoundaryError),

    /// 表面张力模型错误
    #[error("表面张力模型错误: {0}")]
    SurfaceTension(#[from] SurfaceTensionError),

    /// 网格错误
    #[error("网格错误: {0}")]
    Mesh(#[from] MeshError),

    /// 网格没有单元
    #[error("网格没有单元，无法计算 deltaN")]
    EmptyMesh,
}

/// 界面物性结果类型
pub type InterfaceResult<T> = Result<T, InterfaceError>;
