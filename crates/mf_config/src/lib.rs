// crates/mf_config/src/lib.rs

//! MariFilm Config Layer
//!
//! 配置层，提供界面物性计算所需的全部字典。
//!
//! # 模块概览
//!
//! - [`transport`]: transportProperties（接触角、开度修正系数、表面张力）
//! - [`solution`]: fvSolution（cAlpha、smoothItr、kSmoothItr）
//! - [`boundary`]: 体积分数边界条件定义
//! - [`case`]: 算例汇总配置与 JSON 加载
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! mf_cli      ─> CaseConfig::from_file
//! mf_physics  ─> TransportProperties, AlphaControls, AlphaPatchSpec
//! mf_config   (本层，无数值计算)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod case;
pub mod error;
pub mod solution;
pub mod transport;

// 重导出核心类型
pub use boundary::{AlphaPatchSpec, ContactAngleLimit};
pub use case::{
    AlphaFieldConfig, ApertureConfig, CaseConfig, InitialCondition, MeshConfig, RunConfig,
    VelocityConfig, DEFAULT_ALPHA_NAME,
};
pub use error::ConfigError;
pub use solution::{AlphaControls, FvSolution};
pub use transport::{SigmaEntry, SurfaceTensionDict, TransportProperties};
