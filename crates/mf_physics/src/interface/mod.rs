// crates/mf_physics/src/interface/mod.rs

//! 深度平均界面物性
//!
//! 由体积分数 α 计算界面法向与曲率，提供表面张力项：
//!
//! ```text
//! nHatfv = ∇α_f / (|∇α_f| + δN)          面界面法向（含壁面接触角修正）
//! nHatf  = nHatfv · Sf                   界面法向通量
//! K      = -∇·nHatf - 2cos(θ)/(f·ap)     含开度修正的曲率
//! F_st   = interpolate(σK) · snGrad(α)   面表面张力
//! ```
//!
//! 其中 θ 为全局接触角，f 为开度修正系数，ap 为单元开度。
//! δN = 1e-8 / cbrt(平均单元体积)。
//!
//! # 子模块
//!
//! - [`properties`]: 界面物性组件 [`InterfaceProperties`]
//! - [`curvature`]: 平滑与曲率分步算子
//! - [`contact_angle`]: 壁面接触角修正

pub mod contact_angle;
pub mod curvature;
mod properties;

pub use contact_angle::{contact_angle_normal, correct_contact_angle};
pub use properties::InterfaceProperties;
