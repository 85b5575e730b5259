// crates/mf_mesh/src/frozen.rs

//! 冻结网格
//!
//! 有限体积计算用的只读 SoA 布局网格。
//!
//! # 约定
//!
//! 1. **面编号**: 内部面在前，边界面在后（`face >= n_interior_faces` 即边界面）
//! 2. **法向**: 单位法向由 owner 指向 neighbor，边界面指向域外
//! 3. **单元体积**: 二维深度平均模型按单位厚度处理，体积即单元面积

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// 无邻居标记
pub const NO_NEIGHBOR: u32 = u32::MAX;

/// 冻结网格
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrozenMesh {
    // ===== 单元数据 =====
    /// 单元数量
    pub n_cells: usize,
    /// 单元中心坐标
    pub cell_center: Vec<DVec2>,
    /// 单元面积
    pub cell_area: Vec<f64>,
    /// 单元面索引 (压缩格式: offsets + indices)
    pub cell_face_offsets: Vec<usize>,
    /// 单元面索引列表
    pub cell_face_indices: Vec<u32>,

    // ===== 面数据 =====
    /// 面总数
    pub n_faces: usize,
    /// 内部面数量
    pub n_interior_faces: usize,
    /// 面中心坐标
    pub face_center: Vec<DVec2>,
    /// 面单位法向量
    pub face_normal: Vec<DVec2>,
    /// 面长度
    pub face_length: Vec<f64>,
    /// 面 owner 单元索引
    pub face_owner: Vec<u32>,
    /// 面 neighbor 单元索引 (NO_NEIGHBOR 表示边界)
    pub face_neighbor: Vec<u32>,

    // ===== 边界数据 =====
    /// 边界名称（按边界 ID 排列）
    pub boundary_names: Vec<String>,
    /// 面的边界ID (None表示内部面)
    pub face_boundary_id: Vec<Option<u32>>,

    // ===== 统计 =====
    /// 最小单元尺寸
    pub min_cell_size: f64,
    /// 最大单元尺寸
    pub max_cell_size: f64,
}

impl Default for FrozenMesh {
    fn default() -> Self {
        Self::empty()
    }
}

impl FrozenMesh {
    /// 创建空的冻结网格
    pub fn empty() -> Self {
        Self {
            n_cells: 0,
            cell_center: Vec::new(),
            cell_area: Vec::new(),
            cell_face_offsets: vec![0],
            cell_face_indices: Vec::new(),
            n_faces: 0,
            n_interior_faces: 0,
            face_center: Vec::new(),
            face_normal: Vec::new(),
            face_length: Vec::new(),
            face_owner: Vec::new(),
            face_neighbor: Vec::new(),
            boundary_names: Vec::new(),
            face_boundary_id: Vec::new(),
            min_cell_size: f64::MAX,
            max_cell_size: 0.0,
        }
    }

    // =========================================================================
    // 基本统计
    // =========================================================================

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// 面数量
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.n_faces
    }

    /// 内部面数量
    #[inline]
    pub fn n_interior_faces(&self) -> usize {
        self.n_interior_faces
    }

    /// 边界面数量
    #[inline]
    pub fn n_boundary_faces(&self) -> usize {
        self.n_faces - self.n_interior_faces
    }

    // =========================================================================
    // 单元访问
    // =========================================================================

    /// 获取单元的面索引
    #[inline]
    pub fn cell_faces(&self, cell: usize) -> &[u32] {
        let start = self.cell_face_offsets[cell];
        let end = self.cell_face_offsets[cell + 1];
        &self.cell_face_indices[start..end]
    }

    // =========================================================================
    // 面访问
    // =========================================================================

    /// 获取面 neighbor
    #[inline]
    pub fn face_neighbor(&self, face: usize) -> Option<u32> {
        let n = self.face_neighbor[face];
        if n == NO_NEIGHBOR {
            None
        } else {
            Some(n)
        }
    }

    /// 判断是否为边界面
    #[inline]
    pub fn is_boundary_face(&self, face: usize) -> bool {
        face >= self.n_interior_faces
    }

    /// 边界面索引范围
    #[inline]
    pub fn boundary_faces(&self) -> std::ops::Range<usize> {
        self.n_interior_faces..self.n_faces
    }

    // =========================================================================
    // 统计信息
    // =========================================================================

    /// 计算统计信息
    pub fn statistics(&self) -> MeshStatistics {
        let mut min_area = f64::MAX;
        let mut max_area = f64::MIN;
        let mut total_area = 0.0;

        for &area in &self.cell_area {
            min_area = min_area.min(area);
            max_area = max_area.max(area);
            total_area += area;
        }

        let mut min_length = f64::MAX;
        let mut max_length = f64::MIN;

        for &len in &self.face_length {
            min_length = min_length.min(len);
            max_length = max_length.max(len);
        }

        MeshStatistics {
            n_cells: self.n_cells,
            n_faces: self.n_faces,
            n_interior_faces: self.n_interior_faces,
            n_boundary_faces: self.n_boundary_faces(),
            n_patches: self.boundary_names.len(),
            total_area,
            min_cell_area: min_area,
            max_cell_area: max_area,
            min_edge_length: min_length,
            max_edge_length: max_length,
        }
    }

    /// 验证网格完整性
    pub fn validate(&self) -> MeshResult<()> {
        check_len("cell_center", self.n_cells, self.cell_center.len())?;
        check_len("cell_area", self.n_cells, self.cell_area.len())?;
        check_len("cell_face_offsets", self.n_cells + 1, self.cell_face_offsets.len())?;
        check_len("face_center", self.n_faces, self.face_center.len())?;
        check_len("face_normal", self.n_faces, self.face_normal.len())?;
        check_len("face_length", self.n_faces, self.face_length.len())?;
        check_len("face_owner", self.n_faces, self.face_owner.len())?;
        check_len("face_neighbor", self.n_faces, self.face_neighbor.len())?;
        check_len("face_boundary_id", self.n_faces, self.face_boundary_id.len())?;

        if self.n_interior_faces > self.n_faces {
            return Err(MeshError::topology(
                "validate",
                format!(
                    "内部面数 {} 超过面总数 {}",
                    self.n_interior_faces, self.n_faces
                ),
            ));
        }

        if let Some(&last) = self.cell_face_offsets.last() {
            check_len("cell_face_indices", last, self.cell_face_indices.len())?;
        }

        // 检查 owner/neighbor
        for (i, &owner) in self.face_owner.iter().enumerate() {
            if owner as usize >= self.n_cells {
                return Err(MeshError::topology(
                    "validate",
                    format!("face {} owner {} out of range", i, owner),
                ));
            }
        }

        for (i, &neighbor) in self.face_neighbor.iter().enumerate() {
            let interior = i < self.n_interior_faces;
            if interior && (neighbor == NO_NEIGHBOR || neighbor as usize >= self.n_cells) {
                return Err(MeshError::topology(
                    "validate",
                    format!("interior face {} neighbor {} invalid", i, neighbor),
                ));
            }
            if !interior && neighbor != NO_NEIGHBOR {
                return Err(MeshError::topology(
                    "validate",
                    format!("boundary face {} has neighbor {}", i, neighbor),
                ));
            }
        }

        for face in self.boundary_faces() {
            match self.face_boundary_id[face] {
                Some(id) if (id as usize) < self.boundary_names.len() => {}
                other => {
                    return Err(MeshError::topology(
                        "validate",
                        format!("boundary face {} has invalid patch id {:?}", face, other),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn check_len(name: &'static str, expected: usize, actual: usize) -> MeshResult<()> {
    if expected != actual {
        return Err(MeshError::SizeMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}

/// 网格统计信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshStatistics {
    pub n_cells: usize,
    pub n_faces: usize,
    pub n_interior_faces: usize,
    pub n_boundary_faces: usize,
    pub n_patches: usize,
    pub total_area: f64,
    pub min_cell_area: f64,
    pub max_cell_area: f64,
    pub min_edge_length: f64,
    pub max_edge_length: f64,
}

impl std::fmt::Display for MeshStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 网格统计 ===")?;
        writeln!(f, "单元数: {}", self.n_cells)?;
        writeln!(
            f,
            "面数: {} (内部: {}, 边界: {})",
            self.n_faces, self.n_interior_faces, self.n_boundary_faces
        )?;
        writeln!(f, "边界片数: {}", self.n_patches)?;
        writeln!(f, "总面积: {:.4e} m²", self.total_area)?;
        writeln!(
            f,
            "单元面积: [{:.4e}, {:.4e}] m²",
            self.min_cell_area, self.max_cell_area
        )?;
        writeln!(
            f,
            "边长: [{:.4e}, {:.4e}] m",
            self.min_edge_length, self.max_edge_length
        )
    }
}
