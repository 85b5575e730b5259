// crates/mf_physics/src/numerics/operators/mod.rs

//! 有限体积算子
//!
//! 全部为整场运算，按面编号顺序累加，结果与线程数无关。
//!
//! - [`interpolate`]: 单元场 → 面场
//! - [`average`]: 面场 → 单元场（|Sf| 加权）
//! - [`div`]: 面通量 → 单元散度
//! - [`sn_grad`]: 单元场 → 面法向梯度

mod average;
mod divergence;
mod interpolate;
mod sn_grad;

pub use average::average;
pub use divergence::div;
pub use interpolate::interpolate;
pub use sn_grad::sn_grad;
