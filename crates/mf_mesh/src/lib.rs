// crates/mf_mesh/src/lib.rs

//! MariFilm 网格模块
//!
//! 提供有限体积计算用的只读网格数据结构。
//!
//! # 核心类型
//!
//! - [`FrozenMesh`]: 只读的 SoA 布局网格，用于计算
//! - [`RectMeshGenerator`]: 结构化矩形网格生成器（测试与演示算例）
//! - [`MeshError`]: 网格错误类型
//!
//! # 示例
//!
//! ```rust
//! use mf_mesh::RectMeshGenerator;
//!
//! let mesh = RectMeshGenerator::new(8, 4, 2.0, 1.0).build().unwrap();
//! assert!(mesh.validate().is_ok());
//! println!("{}", mesh.statistics());
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod frozen;
pub mod generation;

// 重新导出核心类型
pub use error::{MeshError, MeshResult};
pub use frozen::{FrozenMesh, MeshStatistics, NO_NEIGHBOR};
pub use generation::RectMeshGenerator;
