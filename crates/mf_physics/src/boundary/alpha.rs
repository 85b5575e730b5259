// crates/mf_physics/src/boundary/alpha.rs

//! 体积分数边界条件
//!
//! 每个网格边界片对应一个 [`AlphaPatchCondition`] 对象，
//! 由 [`AlphaBoundaryConditions`] 统一管理。

use std::collections::BTreeMap;
use std::fmt::Debug;

use mf_config::AlphaPatchSpec;

use super::contact_angle::ContactAngleCondition;
use super::patch::PatchGeometry;
use super::{build_condition, BoundaryError};
use crate::adapter::PhysicsMesh;

/// 体积分数边界条件接口
pub trait AlphaPatchCondition: Debug + Send + Sync {
    /// 条件类型名
    fn type_name(&self) -> &'static str;

    /// 边界片几何
    fn geometry(&self) -> &PatchGeometry;

    /// 当前边界值
    fn values(&self) -> &[f64];

    /// 由内部单元值更新边界值
    fn update(&mut self, cells: &[f64]);

    /// 边界法向梯度
    fn sn_grad(&self, cells: &[f64]) -> Vec<f64>;

    /// 整场赋值时是否接受新的边界值（固定值边界不接受）
    fn is_assignable(&self) -> bool {
        true
    }

    /// 接触角能力查询
    fn as_contact_angle(&self) -> Option<&dyn ContactAngleCondition> {
        None
    }

    /// 接触角能力查询（可变）
    fn as_contact_angle_mut(&mut self) -> Option<&mut dyn ContactAngleCondition> {
        None
    }
}

// ============================================================
// 零梯度
// ============================================================

/// 零梯度边界：边界值等于 owner 单元值
#[derive(Debug, Clone)]
pub struct ZeroGradient {
    geometry: PatchGeometry,
    values: Vec<f64>,
}

impl ZeroGradient {
    /// 创建
    pub fn new(geometry: PatchGeometry) -> Self {
        let values = vec![0.0; geometry.len()];
        Self { geometry, values }
    }
}

impl AlphaPatchCondition for ZeroGradient {
    fn type_name(&self) -> &'static str {
        "zeroGradient"
    }

    fn geometry(&self) -> &PatchGeometry {
        &self.geometry
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn update(&mut self, cells: &[f64]) {
        self.values = self.geometry.patch_internal(cells);
    }

    fn sn_grad(&self, _cells: &[f64]) -> Vec<f64> {
        vec![0.0; self.geometry.len()]
    }
}

// ============================================================
// 固定值
// ============================================================

/// 固定值边界
#[derive(Debug, Clone)]
pub struct FixedValue {
    geometry: PatchGeometry,
    values: Vec<f64>,
}

impl FixedValue {
    /// 均匀固定值
    pub fn new(geometry: PatchGeometry, value: f64) -> Self {
        let values = vec![value; geometry.len()];
        Self { geometry, values }
    }
}

impl AlphaPatchCondition for FixedValue {
    fn type_name(&self) -> &'static str {
        "fixedValue"
    }

    fn geometry(&self) -> &PatchGeometry {
        &self.geometry
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn update(&mut self, _cells: &[f64]) {}

    fn sn_grad(&self, cells: &[f64]) -> Vec<f64> {
        let g = &self.geometry;
        self.values
            .iter()
            .zip(g.owners())
            .zip(g.delta_coeffs())
            .map(|((&vb, &owner), &delta)| (vb - cells[owner]) * delta)
            .collect()
    }

    fn is_assignable(&self) -> bool {
        false
    }
}

// ============================================================
// 边界条件集合
// ============================================================

/// 体积分数边界条件集合
///
/// 与网格边界片一一对应，顺序与网格中的边界片顺序相同。
#[derive(Debug)]
pub struct AlphaBoundaryConditions {
    n_boundary_faces: usize,
    patches: Vec<Box<dyn AlphaPatchCondition>>,
}

impl AlphaBoundaryConditions {
    /// 所有边界片均为零梯度
    pub fn zero_gradient(mesh: &PhysicsMesh) -> Self {
        let patches = mesh
            .patches()
            .iter()
            .map(|p| {
                Box::new(ZeroGradient::new(PatchGeometry::from_patch(mesh, p)))
                    as Box<dyn AlphaPatchCondition>
            })
            .collect();

        Self {
            n_boundary_faces: mesh.n_boundary_faces(),
            patches,
        }
    }

    /// 按边界片名称从配置构建
    ///
    /// 未配置的边界片按零梯度处理；配置中出现网格没有的边界片名称是错误。
    pub fn from_specs(
        mesh: &PhysicsMesh,
        specs: &BTreeMap<String, AlphaPatchSpec>,
    ) -> Result<Self, BoundaryError> {
        for (name, spec) in specs {
            if mesh.patch(name).is_none() {
                return Err(BoundaryError::UnknownPatch(name.clone()));
            }
            spec.validate(name)?;
        }

        let mut patches = Vec::with_capacity(mesh.patches().len());
        for patch in mesh.patches() {
            let geometry = PatchGeometry::from_patch(mesh, patch);
            let condition = match specs.get(&patch.name) {
                Some(spec) => build_condition(geometry, spec),
                None => {
                    log::debug!("边界片 '{}' 未配置体积分数条件，按零梯度处理", patch.name);
                    Box::new(ZeroGradient::new(geometry))
                }
            };
            patches.push(condition);
        }

        Ok(Self {
            n_boundary_faces: mesh.n_boundary_faces(),
            patches,
        })
    }

    /// 替换同名边界片的条件
    pub fn replace(&mut self, condition: Box<dyn AlphaPatchCondition>) -> Result<(), BoundaryError> {
        let name = condition.geometry().name().to_string();
        let slot = self
            .patches
            .iter_mut()
            .find(|p| p.geometry().name() == name)
            .ok_or(BoundaryError::UnknownPatch(name))?;
        *slot = condition;
        Ok(())
    }

    /// 边界面总数
    #[inline]
    pub fn n_boundary_faces(&self) -> usize {
        self.n_boundary_faces
    }

    /// 所有边界片条件
    #[inline]
    pub fn patches(&self) -> &[Box<dyn AlphaPatchCondition>] {
        &self.patches
    }

    /// 所有边界片条件（可变）
    #[inline]
    pub fn patches_mut(&mut self) -> &mut [Box<dyn AlphaPatchCondition>] {
        &mut self.patches
    }

    /// 按名称查找
    pub fn patch(&self, name: &str) -> Option<&dyn AlphaPatchCondition> {
        self.patches
            .iter()
            .find(|p| p.geometry().name() == name)
            .map(|p| p.as_ref())
    }

    /// 接触角边界片数量
    pub fn contact_angle_count(&self) -> usize {
        self.patches
            .iter()
            .filter(|p| p.as_contact_angle().is_some())
            .count()
    }

    /// 由内部单元值更新所有边界
    pub fn correct(&mut self, cells: &[f64]) {
        for patch in &mut self.patches {
            patch.update(cells);
        }
    }

    /// 收集边界值（按边界面序号）
    pub fn boundary_values(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.n_boundary_faces];
        for patch in &self.patches {
            patch.geometry().scatter(patch.values(), &mut out);
        }
        out
    }

    /// 收集边界法向梯度（按边界面序号）
    pub fn boundary_sn_grad(&self, cells: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.n_boundary_faces];
        for patch in &self.patches {
            patch.geometry().scatter(&patch.sn_grad(cells), &mut out);
        }
        out
    }

    /// 整场赋值时的边界处理：可赋值边界取 `source`，固定值边界保持 `target`
    pub fn assign_boundary(&self, target: &mut [f64], source: &[f64]) {
        for patch in self.patches.iter().filter(|p| p.is_assignable()) {
            let values = patch.geometry().gather(source);
            patch.geometry().scatter(&values, target);
        }
    }
}
