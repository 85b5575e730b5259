// crates/mf_physics/src/lib.rs

//! MariFilm 界面物性层
//!
//! 基于冻结网格的有限体积实现，计算深度平均两相流的界面法向、曲率与表面张力。
//!
//! # 模块
//!
//! - [`adapter`]: 冻结网格上的物理网格视图（插值权重、距离系数、边界片）
//! - [`fields`]: 单元场、面场、体积分数与字段注册
//! - [`boundary`]: 体积分数边界条件与接触角边界
//! - [`numerics`]: Green-Gauss 梯度与有限体积算子
//! - [`surface_tension`]: 表面张力系数模型
//! - [`interface`]: 界面物性组件
//!
//! # 示例
//!
//! ```rust
//! use mf_config::{AlphaControls, TransportProperties};
//! use mf_mesh::RectMeshGenerator;
//! use mf_physics::boundary::AlphaBoundaryConditions;
//! use mf_physics::fields::{VolScalarField, VolVectorField, VolumeFraction};
//! use mf_physics::{InterfaceProperties, PhysicsMesh};
//! use glam::DVec2;
//!
//! let mesh = PhysicsMesh::from_frozen(&RectMeshGenerator::new(8, 8, 1.0, 1.0).build().unwrap());
//! let values = mesh.cells().map(|c| if mesh.cell_center(c).x < 0.5 { 1.0 } else { 0.0 }).collect();
//! let mut alpha = VolumeFraction::new(
//!     &mesh, "alpha.water", values, AlphaBoundaryConditions::zero_gradient(&mesh),
//! ).unwrap();
//! let u = VolVectorField::uniform("U", &mesh, DVec2::ZERO);
//! let aperture = VolScalarField::uniform("aperture", &mesh, 1.0);
//!
//! let props = InterfaceProperties::new(
//!     &mesh,
//!     &mut alpha,
//!     &u,
//!     &TransportProperties::default(),
//!     &AlphaControls::new(1.0, 0, 0),
//!     aperture,
//! ).unwrap();
//! assert_eq!(props.k().n_cells(), mesh.n_cells());
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod boundary;
pub mod error;
pub mod fields;
pub mod interface;
pub mod numerics;
pub mod surface_tension;

pub use adapter::{BoundaryPatch, PhysicsMesh};
pub use error::{InterfaceError, InterfaceResult};
pub use interface::InterfaceProperties;
