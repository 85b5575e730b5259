// crates/mf_physics/src/numerics/operators/sn_grad.rs

//! 面法向梯度
//!
//! 内部面 `(φ_N - φ_P)·δ`，边界面 `(φ_b - φ_P)·δ_b`。
//! 带边界条件的场（如 [`crate::fields::VolumeFraction`]）由边界条件给出边界面梯度。

use crate::adapter::PhysicsMesh;
use crate::fields::{SurfaceScalarField, VolScalarField};

/// 单元场的面法向梯度
pub fn sn_grad(mesh: &PhysicsMesh, field: &VolScalarField) -> SurfaceScalarField {
    let cells = field.internal();
    let boundary = field.boundary();

    let values = mesh
        .faces()
        .map(|face| {
            let owner = mesh.face_owner(face);
            let other = match mesh.face_neighbor(face) {
                Some(neigh) => cells[neigh],
                None => boundary[mesh.boundary_index(face)],
            };
            (other - cells[owner]) * mesh.delta_coeff(face)
        })
        .collect();

    SurfaceScalarField::new(format!("snGrad({})", field.name()), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_mesh::RectMeshGenerator;

    #[test]
    fn test_linear_field() {
        let mesh =
            PhysicsMesh::from_frozen(&RectMeshGenerator::new(4, 2, 1.0, 1.0).build().unwrap());
        let phi = |p: glam::DVec2| 3.0 * p.x + 0.5 * p.y;

        let internal: Vec<f64> = mesh.cells().map(|c| phi(mesh.cell_center(c))).collect();
        let boundary: Vec<f64> = mesh.boundary_faces().map(|f| phi(mesh.face_center(f))).collect();
        let field = VolScalarField::new("phi", internal, boundary);

        let sn = sn_grad(&mesh, &field);
        for face in mesh.faces() {
            let expected = glam::DVec2::new(3.0, 0.5).dot(mesh.face_normal(face));
            assert!((sn.get(face) - expected).abs() < 1e-12);
        }
    }
}
