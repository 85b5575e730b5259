// crates/mf_mesh/src/generation.rs

//! 网格生成模块
//!
//! 提供简单的结构化网格生成工具，用于测试和验证：
//!
//! - [`RectMeshGenerator`]: 矩形结构化四边形网格生成器
//!
//! # 使用示例
//!
//! ```rust
//! use mf_mesh::generation::RectMeshGenerator;
//!
//! // 生成 10x10 的矩形网格
//! let mesh = RectMeshGenerator::new(10, 10, 1.0, 1.0).build().unwrap();
//!
//! assert_eq!(mesh.n_cells(), 100);
//! assert_eq!(mesh.n_boundary_faces(), 40);
//! ```

use glam::DVec2;

use crate::error::{MeshError, MeshResult};
use crate::frozen::{FrozenMesh, NO_NEIGHBOR};

/// 边界名称：左
pub const PATCH_LEFT: &str = "left";
/// 边界名称：右
pub const PATCH_RIGHT: &str = "right";
/// 边界名称：下
pub const PATCH_BOTTOM: &str = "bottom";
/// 边界名称：上
pub const PATCH_TOP: &str = "top";

/// 矩形结构化网格生成器
///
/// 单元按行主序编号：`cell = j * nx + i`。
/// 边界片顺序固定为 left, right, bottom, top。
#[derive(Debug, Clone)]
pub struct RectMeshGenerator {
    /// x 方向单元数
    nx: usize,
    /// y 方向单元数
    ny: usize,
    /// x 方向域长度 [m]
    lx: f64,
    /// y 方向域长度 [m]
    ly: f64,
    /// x 方向起点
    x0: f64,
    /// y 方向起点
    y0: f64,
}

/// 面构建暂存
struct FaceDraft {
    center: DVec2,
    normal: DVec2,
    length: f64,
    owner: usize,
    neighbor: Option<usize>,
    patch: Option<u32>,
}

impl RectMeshGenerator {
    /// 创建矩形网格生成器
    ///
    /// # 参数
    ///
    /// - `nx`: x 方向单元数
    /// - `ny`: y 方向单元数
    /// - `lx`: x 方向域长度
    /// - `ly`: y 方向域长度
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Self {
        Self {
            nx,
            ny,
            lx,
            ly,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// 创建方形网格生成器
    pub fn square(n: usize, length: f64) -> Self {
        Self::new(n, n, length, length)
    }

    /// 设置原点偏移
    pub fn with_origin(mut self, x0: f64, y0: f64) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self
    }

    /// 获取 x 方向网格间距
    pub fn dx(&self) -> f64 {
        self.lx / self.nx as f64
    }

    /// 获取 y 方向网格间距
    pub fn dy(&self) -> f64 {
        self.ly / self.ny as f64
    }

    /// 单元数
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    fn cell_id(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// 生成冻结网格
    pub fn build(&self) -> MeshResult<FrozenMesh> {
        if self.nx == 0 || self.ny == 0 {
            return Err(MeshError::InvalidParameter(format!(
                "单元数必须为正: nx={}, ny={}",
                self.nx, self.ny
            )));
        }
        if !(self.lx > 0.0 && self.ly > 0.0) {
            return Err(MeshError::InvalidParameter(format!(
                "域长度必须为正: lx={}, ly={}",
                self.lx, self.ly
            )));
        }

        let (nx, ny) = (self.nx, self.ny);
        let (dx, dy) = (self.dx(), self.dy());
        let origin = DVec2::new(self.x0, self.y0);

        let n_cells = nx * ny;
        let mut cell_center = Vec::with_capacity(n_cells);
        for j in 0..ny {
            for i in 0..nx {
                cell_center.push(origin + DVec2::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy));
            }
        }

        let mut drafts: Vec<FaceDraft> = Vec::new();

        // 内部竖直面：(i, j) | (i+1, j)
        for j in 0..ny {
            for i in 0..nx.saturating_sub(1) {
                drafts.push(FaceDraft {
                    center: origin + DVec2::new((i + 1) as f64 * dx, (j as f64 + 0.5) * dy),
                    normal: DVec2::X,
                    length: dy,
                    owner: self.cell_id(i, j),
                    neighbor: Some(self.cell_id(i + 1, j)),
                    patch: None,
                });
            }
        }

        // 内部水平面：(i, j) / (i, j+1)
        for j in 0..ny.saturating_sub(1) {
            for i in 0..nx {
                drafts.push(FaceDraft {
                    center: origin + DVec2::new((i as f64 + 0.5) * dx, (j + 1) as f64 * dy),
                    normal: DVec2::Y,
                    length: dx,
                    owner: self.cell_id(i, j),
                    neighbor: Some(self.cell_id(i, j + 1)),
                    patch: None,
                });
            }
        }

        let n_interior_faces = drafts.len();

        // 边界面，按 left, right, bottom, top 顺序
        for j in 0..ny {
            drafts.push(FaceDraft {
                center: origin + DVec2::new(0.0, (j as f64 + 0.5) * dy),
                normal: DVec2::NEG_X,
                length: dy,
                owner: self.cell_id(0, j),
                neighbor: None,
                patch: Some(0),
            });
        }
        for j in 0..ny {
            drafts.push(FaceDraft {
                center: origin + DVec2::new(self.lx, (j as f64 + 0.5) * dy),
                normal: DVec2::X,
                length: dy,
                owner: self.cell_id(nx - 1, j),
                neighbor: None,
                patch: Some(1),
            });
        }
        for i in 0..nx {
            drafts.push(FaceDraft {
                center: origin + DVec2::new((i as f64 + 0.5) * dx, 0.0),
                normal: DVec2::NEG_Y,
                length: dx,
                owner: self.cell_id(i, 0),
                neighbor: None,
                patch: Some(2),
            });
        }
        for i in 0..nx {
            drafts.push(FaceDraft {
                center: origin + DVec2::new((i as f64 + 0.5) * dx, self.ly),
                normal: DVec2::Y,
                length: dx,
                owner: self.cell_id(i, ny - 1),
                neighbor: None,
                patch: Some(3),
            });
        }

        // 单元 -> 面 CSR
        let mut per_cell: Vec<Vec<u32>> = vec![Vec::with_capacity(4); n_cells];
        for (face, d) in drafts.iter().enumerate() {
            per_cell[d.owner].push(face as u32);
            if let Some(n) = d.neighbor {
                per_cell[n].push(face as u32);
            }
        }
        let mut cell_face_offsets = Vec::with_capacity(n_cells + 1);
        let mut cell_face_indices = Vec::with_capacity(4 * n_cells);
        cell_face_offsets.push(0);
        for faces in per_cell {
            cell_face_indices.extend(faces);
            cell_face_offsets.push(cell_face_indices.len());
        }

        let n_faces = drafts.len();
        let cell_size = dx.min(dy);
        let max_size = dx.max(dy);

        Ok(FrozenMesh {
            n_cells,
            cell_center,
            cell_area: vec![dx * dy; n_cells],
            cell_face_offsets,
            cell_face_indices,
            n_faces,
            n_interior_faces,
            face_center: drafts.iter().map(|d| d.center).collect(),
            face_normal: drafts.iter().map(|d| d.normal).collect(),
            face_length: drafts.iter().map(|d| d.length).collect(),
            face_owner: drafts.iter().map(|d| d.owner as u32).collect(),
            face_neighbor: drafts
                .iter()
                .map(|d| d.neighbor.map_or(NO_NEIGHBOR, |n| n as u32))
                .collect(),
            boundary_names: [PATCH_LEFT, PATCH_RIGHT, PATCH_BOTTOM, PATCH_TOP]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            face_boundary_id: drafts.iter().map(|d| d.patch).collect(),
            min_cell_size: cell_size,
            max_cell_size: max_size,
        })
    }
}
