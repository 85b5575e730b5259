// crates/mf_physics/src/numerics/operators/divergence.rs

//! 面通量散度
//!
//! ```text
//! (∇·F)_P = (1/V_P) Σ_f ±F_f
//! ```
//!
//! owner 侧取正号，neighbor 侧取负号。结果的边界值取 owner 单元值。

use crate::adapter::PhysicsMesh;
use crate::fields::{SurfaceScalarField, VolScalarField};

/// 面通量的散度
pub fn div(mesh: &PhysicsMesh, flux: &SurfaceScalarField) -> VolScalarField {
    let mut acc = vec![0.0; mesh.n_cells()];

    for face in mesh.faces() {
        let f = flux.get(face);
        acc[mesh.face_owner(face)] += f;
        if let Some(neigh) = mesh.face_neighbor(face) {
            acc[neigh] -= f;
        }
    }

    for (cell, value) in acc.iter_mut().enumerate() {
        let volume = mesh.cell_volume(cell);
        *value = if volume > 0.0 { *value / volume } else { 0.0 };
    }

    let boundary = mesh
        .boundary_faces()
        .map(|face| acc[mesh.face_owner(face)])
        .collect();

    VolScalarField::new(format!("div({})", flux.name()), acc, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use mf_mesh::RectMeshGenerator;

    #[test]
    fn test_uniform_vector_divergence_free() {
        let mesh =
            PhysicsMesh::from_frozen(&RectMeshGenerator::new(4, 4, 1.0, 1.0).build().unwrap());
        let v = DVec2::new(0.3, -1.2);
        let values: Vec<f64> = mesh.faces().map(|f| v.dot(mesh.sf(f))).collect();

        let d = div(&mesh, &SurfaceScalarField::new("phi", values));
        assert_eq!(d.name(), "div(phi)");
        assert!(d.internal().iter().all(|&x| x.abs() < 1e-12));
    }

    #[test]
    fn test_linear_vector_divergence() {
        // F = (x, y)，∇·F = 2
        let mesh =
            PhysicsMesh::from_frozen(&RectMeshGenerator::new(5, 3, 2.0, 1.0).build().unwrap());
        let values: Vec<f64> = mesh
            .faces()
            .map(|f| mesh.face_center(f).dot(mesh.sf(f)))
            .collect();

        let d = div(&mesh, &SurfaceScalarField::new("phi", values));
        assert!(d.internal().iter().all(|&x| (x - 2.0).abs() < 1e-10));
        assert!(d.boundary().iter().all(|&x| (x - 2.0).abs() < 1e-10));
    }
}
