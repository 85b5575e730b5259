// crates/mf_physics/src/numerics/mod.rs

//! 数值方法模块
//!
//! 包含：
//! - gradient/ - 梯度计算 (Green-Gauss)
//! - operators/ - 有限体积算子 (插值、平均、散度、面法向梯度)

pub mod gradient;
pub mod operators;

pub use gradient::{GreenGaussConfig, GreenGaussGradient};
pub use operators::{average, div, interpolate, sn_grad};
