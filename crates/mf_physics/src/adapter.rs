// crates/mf_physics/src/adapter.rs

//! 网格适配层
//!
//! 将 FrozenMesh 适配为有限体积算子所需的几何查询。
//!
//! # 约定
//!
//! 1. **面积矢量**: `Sf = n·L`，n 为由 owner 指向 neighbor 的单位法向
//! 2. **插值权重**: 内部面线性插值 `φ_f = w·φ_P + (1-w)·φ_N`
//! 3. **距离系数**: `δ = 1 / max(n·d, 0.05|d|)`，边界面 d 取 owner 中心到面心
//!
//! # 示例
//!
//! ```rust
//! use mf_mesh::RectMeshGenerator;
//! use mf_physics::adapter::PhysicsMesh;
//!
//! let frozen = RectMeshGenerator::new(4, 4, 1.0, 1.0).build().unwrap();
//! let mesh = PhysicsMesh::from_frozen(&frozen);
//!
//! assert_eq!(mesh.n_cells(), 16);
//! assert!((mesh.mean_cell_volume() - 1.0 / 16.0).abs() < 1e-14);
//! ```

use glam::DVec2;
use mf_mesh::FrozenMesh;
use std::ops::Range;
use std::sync::Arc;

/// 非正交网格下距离系数的下限比例
const DELTA_COEFF_FLOOR: f64 = 0.05;

/// 边界片
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPatch {
    /// 边界片名称
    pub name: String,
    /// 全局面索引（按网格编号升序）
    pub faces: Vec<usize>,
}

impl BoundaryPatch {
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
}

/// 有限体积网格适配器
///
/// 包装 FrozenMesh 并预计算插值权重、距离系数和边界片。
#[derive(Debug, Clone)]
pub struct PhysicsMesh {
    /// 内部 FrozenMesh 引用
    inner: Arc<FrozenMesh>,
    /// 面线性插值权重（owner 侧），边界面为 1
    weights: Vec<f64>,
    /// 面距离系数
    delta_coeffs: Vec<f64>,
    /// 边界片
    patches: Vec<BoundaryPatch>,
}

impl PhysicsMesh {
    /// 从 FrozenMesh 创建
    pub fn new(frozen: Arc<FrozenMesh>) -> Self {
        let n_faces = frozen.n_faces;
        let mut weights = vec![1.0; n_faces];
        let mut delta_coeffs = vec![0.0; n_faces];

        for face in 0..n_faces {
            let n = frozen.face_normal[face];
            let cf = frozen.face_center[face];
            let co = frozen.cell_center[frozen.face_owner[face] as usize];

            let d = match frozen.face_neighbor(face) {
                Some(neigh) => {
                    let cn = frozen.cell_center[neigh as usize];
                    let d_own = n.dot(cf - co);
                    let d_nei = n.dot(cn - cf);
                    let total = d_own + d_nei;
                    weights[face] = if total.abs() > 1e-300 { d_nei / total } else { 0.5 };
                    cn - co
                }
                None => cf - co,
            };

            let denom = n.dot(d).max(DELTA_COEFF_FLOOR * d.length());
            delta_coeffs[face] = if denom > 0.0 { 1.0 / denom } else { 0.0 };
        }

        let mut patches: Vec<BoundaryPatch> = frozen
            .boundary_names
            .iter()
            .map(|name| BoundaryPatch {
                name: name.clone(),
                faces: Vec::new(),
            })
            .collect();

        for face in frozen.boundary_faces() {
            if let Some(id) = frozen.face_boundary_id[face] {
                if let Some(patch) = patches.get_mut(id as usize) {
                    patch.faces.push(face);
                }
            }
        }

        Self {
            inner: frozen,
            weights,
            delta_coeffs,
            patches,
        }
    }

    /// 从 FrozenMesh 引用创建（会克隆）
    pub fn from_frozen(frozen: &FrozenMesh) -> Self {
        Self::new(Arc::new(frozen.clone()))
    }

    /// 获取内部 FrozenMesh
    pub fn inner(&self) -> &FrozenMesh {
        &self.inner
    }

    // =========================================================================
    // 基本统计
    // =========================================================================

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.inner.n_cells
    }

    /// 面数量
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.inner.n_faces
    }

    /// 内部面数量
    #[inline]
    pub fn n_interior_faces(&self) -> usize {
        self.inner.n_interior_faces
    }

    /// 边界面数量
    #[inline]
    pub fn n_boundary_faces(&self) -> usize {
        self.inner.n_faces - self.inner.n_interior_faces
    }

    // =========================================================================
    // 单元访问
    // =========================================================================

    /// 单元中心
    #[inline]
    pub fn cell_center(&self, cell: usize) -> DVec2 {
        self.inner.cell_center[cell]
    }

    /// 单元体积（单位厚度下即面积）
    #[inline]
    pub fn cell_volume(&self, cell: usize) -> f64 {
        self.inner.cell_area[cell]
    }

    /// 单元的所有面索引
    #[inline]
    pub fn cell_faces(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        self.inner.cell_faces(cell).iter().map(|&f| f as usize)
    }

    /// 平均单元体积
    pub fn mean_cell_volume(&self) -> f64 {
        let n = self.n_cells();
        if n == 0 {
            return 0.0;
        }
        self.inner.cell_area.iter().sum::<f64>() / n as f64
    }

    // =========================================================================
    // 面访问
    // =========================================================================

    /// 面中心
    #[inline]
    pub fn face_center(&self, face: usize) -> DVec2 {
        self.inner.face_center[face]
    }

    /// 面单位法向量
    #[inline]
    pub fn face_normal(&self, face: usize) -> DVec2 {
        self.inner.face_normal[face]
    }

    /// 面长度 |Sf|
    #[inline]
    pub fn mag_sf(&self, face: usize) -> f64 {
        self.inner.face_length[face]
    }

    /// 面积矢量 Sf
    #[inline]
    pub fn sf(&self, face: usize) -> DVec2 {
        self.inner.face_normal[face] * self.inner.face_length[face]
    }

    /// 面 owner 单元索引
    #[inline]
    pub fn face_owner(&self, face: usize) -> usize {
        self.inner.face_owner[face] as usize
    }

    /// 面 neighbor 单元索引，边界面返回 None
    #[inline]
    pub fn face_neighbor(&self, face: usize) -> Option<usize> {
        self.inner.face_neighbor(face).map(|n| n as usize)
    }

    /// 面线性插值权重（owner 侧）
    #[inline]
    pub fn weight(&self, face: usize) -> f64 {
        self.weights[face]
    }

    /// 面距离系数
    #[inline]
    pub fn delta_coeff(&self, face: usize) -> f64 {
        self.delta_coeffs[face]
    }

    /// 判断是否为边界面
    #[inline]
    pub fn is_boundary_face(&self, face: usize) -> bool {
        face >= self.inner.n_interior_faces
    }

    /// 边界面在边界数组中的序号
    #[inline]
    pub fn boundary_index(&self, face: usize) -> usize {
        face - self.inner.n_interior_faces
    }

    // =========================================================================
    // 边界片
    // =========================================================================

    /// 所有边界片
    #[inline]
    pub fn patches(&self) -> &[BoundaryPatch] {
        &self.patches
    }

    /// 按名称查找边界片
    pub fn patch(&self, name: &str) -> Option<&BoundaryPatch> {
        self.patches.iter().find(|p| p.name == name)
    }

    // =========================================================================
    // 范围迭代
    // =========================================================================

    /// 内部面索引范围
    #[inline]
    pub fn interior_faces(&self) -> Range<usize> {
        0..self.inner.n_interior_faces
    }

    /// 边界面索引范围
    #[inline]
    pub fn boundary_faces(&self) -> Range<usize> {
        self.inner.n_interior_faces..self.inner.n_faces
    }

    /// 单元索引范围
    #[inline]
    pub fn cells(&self) -> Range<usize> {
        0..self.inner.n_cells
    }

    /// 面索引范围
    #[inline]
    pub fn faces(&self) -> Range<usize> {
        0..self.inner.n_faces
    }
}

// ============================================================================
// 测试
// ============================================================================
