// crates/mf_physics/src/fields/geometric.rs

//! 单元场与面场
//!
//! - [`VolField`]: 每个单元一个值，另为每个边界面保存一个边界值
//! - [`SurfaceField`]: 每个面一个值（内部面在前，边界面在后）
//!
//! 逐点运算同时作用于内部值和边界值。

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use super::FieldError;
use crate::adapter::PhysicsMesh;

/// 场值类型约束
pub trait FieldValue:
    Copy
    + Default
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + 'static
{
}

impl<T> FieldValue for T where
    T: Copy
        + Default
        + Debug
        + Send
        + Sync
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f64, Output = T>
        + 'static
{
}

/// 单元标量场
pub type VolScalarField = VolField<f64>;
/// 单元向量场
pub type VolVectorField = VolField<DVec2>;
/// 面标量场
pub type SurfaceScalarField = SurfaceField<f64>;
/// 面向量场
pub type SurfaceVectorField = SurfaceField<DVec2>;

// ============================================================
// 单元场
// ============================================================

/// 单元中心场
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolField<T> {
    name: String,
    internal: Vec<T>,
    boundary: Vec<T>,
}

impl<T: FieldValue> VolField<T> {
    /// 由内部值和边界值创建
    pub fn new(name: impl Into<String>, internal: Vec<T>, boundary: Vec<T>) -> Self {
        Self {
            name: name.into(),
            internal,
            boundary,
        }
    }

    /// 均匀场
    pub fn uniform(name: impl Into<String>, mesh: &PhysicsMesh, value: T) -> Self {
        Self::new(
            name,
            vec![value; mesh.n_cells()],
            vec![value; mesh.n_boundary_faces()],
        )
    }

    /// 零场
    pub fn zeros(name: impl Into<String>, mesh: &PhysicsMesh) -> Self {
        Self::uniform(name, mesh, T::default())
    }

    /// 由内部值创建，边界值取 owner 单元值
    pub fn extrapolated(
        name: impl Into<String>,
        mesh: &PhysicsMesh,
        internal: Vec<T>,
    ) -> Result<Self, FieldError> {
        let name = name.into();
        FieldError::check_len(&name, mesh.n_cells(), internal.len())?;

        let boundary = mesh
            .boundary_faces()
            .map(|face| internal[mesh.face_owner(face)])
            .collect();

        Ok(Self {
            name,
            internal,
            boundary,
        })
    }

    /// 检查与网格的一致性
    pub fn check_size(&self, mesh: &PhysicsMesh) -> Result<(), FieldError> {
        FieldError::check_len(&self.name, mesh.n_cells(), self.internal.len())?;
        FieldError::check_len(
            &format!("{}.boundary", self.name),
            mesh.n_boundary_faces(),
            self.boundary.len(),
        )
    }

    /// 场名
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 重命名
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.internal.len()
    }

    /// 内部值
    #[inline]
    pub fn internal(&self) -> &[T] {
        &self.internal
    }

    /// 内部值（可变）
    #[inline]
    pub fn internal_mut(&mut self) -> &mut [T] {
        &mut self.internal
    }

    /// 边界值（按边界面序号）
    #[inline]
    pub fn boundary(&self) -> &[T] {
        &self.boundary
    }

    /// 边界值（可变）
    #[inline]
    pub fn boundary_mut(&mut self) -> &mut [T] {
        &mut self.boundary
    }

    /// 单元值
    #[inline]
    pub fn get(&self, cell: usize) -> T {
        self.internal[cell]
    }

    /// 原位覆盖为另一个同尺寸场的值
    pub fn assign(&mut self, other: &VolField<T>) -> Result<(), FieldError> {
        FieldError::check_len(&self.name, self.internal.len(), other.internal.len())?;
        FieldError::check_len(&self.name, self.boundary.len(), other.boundary.len())?;
        self.internal.copy_from_slice(&other.internal);
        self.boundary.copy_from_slice(&other.boundary);
        Ok(())
    }

    /// 逐点映射
    pub fn map<U: FieldValue>(&self, name: impl Into<String>, f: impl Fn(T) -> U) -> VolField<U> {
        VolField {
            name: name.into(),
            internal: self.internal.iter().map(|&v| f(v)).collect(),
            boundary: self.boundary.iter().map(|&v| f(v)).collect(),
        }
    }

    /// 两个场逐点组合
    ///
    /// 两场须定义在同一网格上。
    pub fn zip_map<U: FieldValue, V: FieldValue>(
        &self,
        other: &VolField<U>,
        name: impl Into<String>,
        f: impl Fn(T, U) -> V,
    ) -> VolField<V> {
        debug_assert_eq!(self.internal.len(), other.internal.len());
        debug_assert_eq!(self.boundary.len(), other.boundary.len());

        VolField {
            name: name.into(),
            internal: self
                .internal
                .iter()
                .zip(&other.internal)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            boundary: self
                .boundary
                .iter()
                .zip(&other.boundary)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl VolField<f64> {
    /// 内部值的最小/最大值
    pub fn min_max(&self) -> (f64, f64) {
        self.internal
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

// ============================================================
// 面场
// ============================================================

/// 面中心场
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceField<T> {
    name: String,
    values: Vec<T>,
}

impl<T: FieldValue> SurfaceField<T> {
    /// 由面值创建
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// 均匀场
    pub fn uniform(name: impl Into<String>, mesh: &PhysicsMesh, value: T) -> Self {
        Self::new(name, vec![value; mesh.n_faces()])
    }

    /// 零场
    pub fn zeros(name: impl Into<String>, mesh: &PhysicsMesh) -> Self {
        Self::uniform(name, mesh, T::default())
    }

    /// 场名
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 重命名
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 面数量
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.values.len()
    }

    /// 所有面值
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// 所有面值（可变）
    #[inline]
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// 面值
    #[inline]
    pub fn get(&self, face: usize) -> T {
        self.values[face]
    }

    /// 边界面值（按边界面序号）
    #[inline]
    pub fn boundary<'a>(&'a self, mesh: &PhysicsMesh) -> &'a [T] {
        &self.values[mesh.n_interior_faces()..]
    }

    /// 边界面值（可变）
    #[inline]
    pub fn boundary_mut<'a>(&'a mut self, mesh: &PhysicsMesh) -> &'a mut [T] {
        &mut self.values[mesh.n_interior_faces()..]
    }

    /// 原位覆盖为另一个同尺寸场的值
    pub fn assign(&mut self, other: &SurfaceField<T>) -> Result<(), FieldError> {
        FieldError::check_len(&self.name, self.values.len(), other.values.len())?;
        self.values.copy_from_slice(&other.values);
        Ok(())
    }

    /// 逐点映射
    pub fn map<U: FieldValue>(
        &self,
        name: impl Into<String>,
        f: impl Fn(T) -> U,
    ) -> SurfaceField<U> {
        SurfaceField {
            name: name.into(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// 两个场逐点组合
    pub fn zip_map<U: FieldValue, V: FieldValue>(
        &self,
        other: &SurfaceField<U>,
        name: impl Into<String>,
        f: impl Fn(T, U) -> V,
    ) -> SurfaceField<V> {
        debug_assert_eq!(self.values.len(), other.values.len());

        SurfaceField {
            name: name.into(),
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}
