// crates/mf_physics/src/surface_tension/mod.rs

//! 表面张力系数模型
//!
//! 所有模型实现 [`SurfaceTensionModel`]，按 `transportProperties.sigma` 中的
//! 模型名称选择：
//!
//! - `constant`: σ = sigma
//! - `temperatureLinear`: σ = sigma0 + dSigmaDT·(T - Tref)
//!
//! `sigma` 写成纯数值时等价于 `constant`。
//!
//! # 使用示例
//!
//! ```rust
//! use mf_config::TransportProperties;
//! use mf_physics::surface_tension::new_surface_tension_model;
//!
//! let transport = TransportProperties::new(90.0, 1.0, 0.07);
//! let model = new_surface_tension_model(&transport).unwrap();
//! assert_eq!(model.name(), "constant");
//! ```

mod constant;
mod temperature_linear;

pub use constant::ConstantSurfaceTension;
pub use temperature_linear::TemperatureLinearSurfaceTension;

use std::fmt::Debug;

use mf_config::{ConfigError, TransportProperties};
use thiserror::Error;

use crate::adapter::PhysicsMesh;
use crate::fields::VolScalarField;

/// 表面张力模型错误
#[derive(Debug, Error)]
pub enum SurfaceTensionError {
    /// 未知模型名
    #[error("未知表面张力模型 '{name}'，可用模型: {available}")]
    UnknownModel {
        /// 请求的模型名
        name: String,
        /// 可用模型列表
        available: String,
    },

    /// 重新读取时模型类型改变
    #[error("表面张力模型类型不可更改: 当前 '{current}', 配置 '{requested}'")]
    ModelChanged {
        /// 当前模型
        current: &'static str,
        /// 配置中的模型
        requested: String,
    },

    /// 系数无效
    #[error("表面张力系数 '{key}' 无效: {value}")]
    InvalidCoefficient {
        /// 系数名
        key: &'static str,
        /// 系数值
        value: f64,
    },

    /// 缺失系数
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// 表面张力模型接口
pub trait SurfaceTensionModel: Debug + Send + Sync {
    /// 模型名称
    fn name(&self) -> &'static str;

    /// 表面张力系数场 [N/m]
    fn sigma(&self, mesh: &PhysicsMesh) -> VolScalarField;

    /// 从输运物性重新读取系数
    fn read_dict(&mut self, transport: &TransportProperties) -> Result<(), SurfaceTensionError>;
}

/// 可用模型名称
pub fn available_models() -> &'static [&'static str] {
    &[ConstantSurfaceTension::NAME, TemperatureLinearSurfaceTension::NAME]
}

/// 按配置中的模型名创建表面张力模型
pub fn new_surface_tension_model(
    transport: &TransportProperties,
) -> Result<Box<dyn SurfaceTensionModel>, SurfaceTensionError> {
    let name = transport.sigma.model_name();
    log::debug!("选择表面张力模型: {}", name);

    match name {
        ConstantSurfaceTension::NAME => Ok(Box::new(ConstantSurfaceTension::from_transport(transport)?)),
        TemperatureLinearSurfaceTension::NAME => Ok(Box::new(
            TemperatureLinearSurfaceTension::from_transport(transport)?,
        )),
        other => Err(SurfaceTensionError::UnknownModel {
            name: other.to_string(),
            available: available_models().join(", "),
        }),
    }
}

/// 读取前检查模型名是否与当前模型一致
pub(crate) fn check_model_name(
    current: &'static str,
    transport: &TransportProperties,
) -> Result<(), SurfaceTensionError> {
    let requested = transport.sigma.model_name();
    if requested != current {
        return Err(SurfaceTensionError::ModelChanged {
            current,
            requested: requested.to_string(),
        });
    }
    Ok(())
}

/// 检查系数为有限值
pub(crate) fn finite(key: &'static str, value: f64) -> Result<f64, SurfaceTensionError> {
    if !value.is_finite() {
        return Err(SurfaceTensionError::InvalidCoefficient { key, value });
    }
    Ok(value)
}
