// crates/mf_physics/src/numerics/gradient/mod.rs

//! 梯度计算模块
//!
//! 提供 Green-Gauss 梯度（面积分法），支持边界面法向梯度修正。

mod green_gauss;

pub use green_gauss::*;
