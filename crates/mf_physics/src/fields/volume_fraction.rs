// crates/mf_physics/src/fields/volume_fraction.rs

//! 体积分数场
//!
//! 单元值与边界条件对象分开保存：界面物性组件只读单元值，
//! 仅通过接触角能力修改边界条件状态。

use super::{FieldError, SurfaceScalarField, VolScalarField};
use crate::adapter::PhysicsMesh;
use crate::boundary::{AlphaBoundaryConditions, BoundaryError};

/// 体积分数场
#[derive(Debug)]
pub struct VolumeFraction {
    name: String,
    values: Vec<f64>,
    boundary: AlphaBoundaryConditions,
}

impl VolumeFraction {
    /// 创建并更新边界值
    pub fn new(
        mesh: &PhysicsMesh,
        name: impl Into<String>,
        values: Vec<f64>,
        boundary: AlphaBoundaryConditions,
    ) -> Result<Self, BoundaryError> {
        let name = name.into();
        if boundary.n_boundary_faces() != mesh.n_boundary_faces() {
            return Err(BoundaryError::SizeMismatch {
                expected: mesh.n_boundary_faces(),
                actual: boundary.n_boundary_faces(),
            });
        }
        if values.len() != mesh.n_cells() {
            return Err(BoundaryError::SizeMismatch {
                expected: mesh.n_cells(),
                actual: values.len(),
            });
        }

        let mut alpha = Self {
            name,
            values,
            boundary,
        };
        alpha.correct_boundary_conditions();
        Ok(alpha)
    }

    /// 场名
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 单元值
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.values.len()
    }

    /// 边界条件
    #[inline]
    pub fn boundary_conditions(&self) -> &AlphaBoundaryConditions {
        &self.boundary
    }

    /// 边界条件（可变）
    #[inline]
    pub fn boundary_conditions_mut(&mut self) -> &mut AlphaBoundaryConditions {
        &mut self.boundary
    }

    /// 同时取单元值（只读）与边界条件（可变）
    #[inline]
    pub fn split_mut(&mut self) -> (&[f64], &mut AlphaBoundaryConditions) {
        (&self.values, &mut self.boundary)
    }

    /// 覆盖单元值并更新边界
    pub fn set_values(&mut self, values: &[f64]) -> Result<(), FieldError> {
        FieldError::check_len(&self.name, self.values.len(), values.len())?;
        self.values.copy_from_slice(values);
        self.correct_boundary_conditions();
        Ok(())
    }

    /// 由单元值更新所有边界
    pub fn correct_boundary_conditions(&mut self) {
        self.boundary.correct(&self.values);
    }

    /// 带边界值的单元场副本
    pub fn to_field(&self) -> VolScalarField {
        VolScalarField::new(
            self.name.clone(),
            self.values.clone(),
            self.boundary.boundary_values(),
        )
    }

    /// 面法向梯度
    ///
    /// 内部面 `(α_N - α_P)·δ`，边界面由各边界条件给出。
    pub fn sn_grad(&self, mesh: &PhysicsMesh) -> SurfaceScalarField {
        let mut values = vec![0.0; mesh.n_faces()];
        for face in mesh.interior_faces() {
            if let Some(neigh) = mesh.face_neighbor(face) {
                let owner = mesh.face_owner(face);
                values[face] = (self.values[neigh] - self.values[owner]) * mesh.delta_coeff(face);
            }
        }

        let boundary = self.boundary.boundary_sn_grad(&self.values);
        values[mesh.n_interior_faces()..].copy_from_slice(&boundary);

        SurfaceScalarField::new(format!("snGrad({})", self.name), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_mesh::RectMeshGenerator;

    fn mesh() -> PhysicsMesh {
        PhysicsMesh::from_frozen(&RectMeshGenerator::new(3, 1, 3.0, 1.0).build().unwrap())
    }

    #[test]
    fn test_new_updates_boundary() {
        let mesh = mesh();
        let bcs = AlphaBoundaryConditions::zero_gradient(&mesh);
        let alpha = VolumeFraction::new(&mesh, "alpha.water", vec![1.0, 0.5, 0.0], bcs).unwrap();

        let field = alpha.to_field();
        for face in mesh.boundary_faces() {
            let b = mesh.boundary_index(face);
            assert_eq!(field.boundary()[b], alpha.values()[mesh.face_owner(face)]);
        }
    }

    #[test]
    fn test_size_mismatch() {
        let mesh = mesh();
        let bcs = AlphaBoundaryConditions::zero_gradient(&mesh);
        let result = VolumeFraction::new(&mesh, "alpha.water", vec![1.0; 2], bcs);
        assert!(matches!(result, Err(BoundaryError::SizeMismatch { expected: 3, actual: 2 })));
    }

    #[test]
    fn test_sn_grad() {
        let mesh = mesh();
        let bcs = AlphaBoundaryConditions::zero_gradient(&mesh);
        let alpha = VolumeFraction::new(&mesh, "alpha.water", vec![1.0, 0.5, 0.0], bcs).unwrap();

        let sn = alpha.sn_grad(&mesh);
        assert_eq!(sn.name(), "snGrad(alpha.water)");
        for face in mesh.interior_faces() {
            assert!((sn.get(face) + 0.5).abs() < 1e-12);
        }
        for face in mesh.boundary_faces() {
            assert_eq!(sn.get(face), 0.0);
        }
    }

    #[test]
    fn test_set_values() {
        let mesh = mesh();
        let bcs = AlphaBoundaryConditions::zero_gradient(&mesh);
        let mut alpha = VolumeFraction::new(&mesh, "alpha.water", vec![0.0; 3], bcs).unwrap();

        alpha.set_values(&[0.2, 0.4, 0.6]).unwrap();
        assert_eq!(alpha.values(), &[0.2, 0.4, 0.6]);
        assert!(alpha.set_values(&[0.0]).is_err());
    }
}
