// crates/mf_physics/src/boundary/mod.rs

//! 体积分数边界条件模块
//!
//! # 子模块
//!
//! - [`patch`]: 边界片几何（面、owner、外法向、距离系数）
//! - [`alpha`]: 边界条件接口与零梯度、固定值实现，以及边界条件集合
//! - [`contact_angle`]: 接触角能力与恒定/动态接触角边界
//!
//! # 能力查询
//!
//! 界面物性组件不关心边界条件的具体类型，只通过
//! [`AlphaPatchCondition::as_contact_angle_mut`] 询问某个边界片是否具备接触角能力，
//! 并仅通过 [`ContactAngleCondition`] 的 `theta`、`gradient_mut`、`evaluate` 修改其状态。
//!
//! ```ignore
//! for patch in alpha.boundary_conditions_mut().patches_mut() {
//!     if let Some(cap) = patch.as_contact_angle_mut() {
//!         cap.gradient_mut().fill(0.0);
//!         cap.evaluate(cells);
//!     }
//! }
//! ```

mod alpha;
mod contact_angle;
mod patch;

pub use alpha::{AlphaBoundaryConditions, AlphaPatchCondition, FixedValue, ZeroGradient};
pub use contact_angle::{
    ConstantAngle, ConstantContactAngle, ContactAngleCondition, ContactAngleModel,
    ContactAnglePatch, DynamicAngle, DynamicContactAngle,
};
pub use patch::PatchGeometry;

use mf_config::{AlphaPatchSpec, ConfigError};
use thiserror::Error;

/// 边界模块错误类型
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// 配置中的边界片在网格中不存在
    #[error("边界片 '{0}' 在网格中不存在")]
    UnknownPatch(String),

    /// 边界条件与网格不匹配
    #[error("边界面数量不匹配: 期望 {expected}, 实际 {actual}")]
    SizeMismatch {
        /// 网格边界面数
        expected: usize,
        /// 边界条件覆盖的面数
        actual: usize,
    },

    /// 边界参数无效
    #[error("边界配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 按配置构建单个边界片的条件
pub fn build_condition(geometry: PatchGeometry, spec: &AlphaPatchSpec) -> Box<dyn AlphaPatchCondition> {
    match *spec {
        AlphaPatchSpec::ZeroGradient => Box::new(ZeroGradient::new(geometry)),
        AlphaPatchSpec::FixedValue { value } => Box::new(FixedValue::new(geometry, value)),
        AlphaPatchSpec::ConstantContactAngle { theta0, limit } => Box::new(
            ConstantContactAngle::new(geometry, ConstantAngle { theta0 }, limit),
        ),
        AlphaPatchSpec::DynamicContactAngle {
            theta0,
            u_theta,
            theta_a,
            theta_r,
            limit,
        } => Box::new(DynamicContactAngle::new(
            geometry,
            DynamicAngle {
                theta0,
                u_theta,
                theta_a,
                theta_r,
            },
            limit,
        )),
    }
}
