// crates/mf_physics/src/boundary/patch.rs

//! 边界片几何
//!
//! 边界条件对象只通过 [`PatchGeometry`] 访问网格：
//! 面索引、边界序号、owner 单元、外法向和距离系数在构造时一次取出。

use glam::DVec2;

use crate::adapter::{BoundaryPatch, PhysicsMesh};

/// 边界片几何信息
#[derive(Debug, Clone, PartialEq)]
pub struct PatchGeometry {
    name: String,
    faces: Vec<usize>,
    boundary_ids: Vec<usize>,
    owners: Vec<usize>,
    normals: Vec<DVec2>,
    delta_coeffs: Vec<f64>,
}

impl PatchGeometry {
    /// 从网格边界片提取
    pub fn from_patch(mesh: &PhysicsMesh, patch: &BoundaryPatch) -> Self {
        let faces = patch.faces.clone();
        Self {
            name: patch.name.clone(),
            boundary_ids: faces.iter().map(|&f| mesh.boundary_index(f)).collect(),
            owners: faces.iter().map(|&f| mesh.face_owner(f)).collect(),
            normals: faces.iter().map(|&f| mesh.face_normal(f)).collect(),
            delta_coeffs: faces.iter().map(|&f| mesh.delta_coeff(f)).collect(),
            faces,
        }
    }

    /// 边界片名称
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 面数量
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// 全局面索引
    #[inline]
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    /// 边界面序号（边界数组下标）
    #[inline]
    pub fn boundary_ids(&self) -> &[usize] {
        &self.boundary_ids
    }

    /// owner 单元
    #[inline]
    pub fn owners(&self) -> &[usize] {
        &self.owners
    }

    /// 单位外法向 nf
    #[inline]
    pub fn normals(&self) -> &[DVec2] {
        &self.normals
    }

    /// 距离系数
    #[inline]
    pub fn delta_coeffs(&self) -> &[f64] {
        &self.delta_coeffs
    }

    /// 取 owner 单元上的内部值
    pub fn patch_internal<T: Copy>(&self, cells: &[T]) -> Vec<T> {
        self.owners.iter().map(|&c| cells[c]).collect()
    }

    /// 从边界数组中取本片的值
    pub fn gather<T: Copy>(&self, boundary: &[T]) -> Vec<T> {
        self.boundary_ids.iter().map(|&b| boundary[b]).collect()
    }

    /// 把本片的值写回边界数组
    pub fn scatter<T: Copy>(&self, values: &[T], boundary: &mut [T]) {
        for (&b, &v) in self.boundary_ids.iter().zip(values) {
            boundary[b] = v;
        }
    }
}
