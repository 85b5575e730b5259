// crates/mf_physics/src/numerics/operators/average.rs

//! 面加权平均
//!
//! ```text
//! φ_P = Σ_f |Sf|·φ_f / Σ_f |Sf|
//! ```
//!
//! 结果的边界值取 owner 单元值（外推）。

use crate::adapter::PhysicsMesh;
use crate::fields::{SurfaceScalarField, VolScalarField};

/// 面场平均到单元
pub fn average(mesh: &PhysicsMesh, field: &SurfaceScalarField) -> VolScalarField {
    let n_cells = mesh.n_cells();
    let mut sum = vec![0.0; n_cells];
    let mut weight = vec![0.0; n_cells];

    for face in mesh.faces() {
        let mag_sf = mesh.mag_sf(face);
        let contrib = mag_sf * field.get(face);
        let owner = mesh.face_owner(face);

        sum[owner] += contrib;
        weight[owner] += mag_sf;

        if let Some(neigh) = mesh.face_neighbor(face) {
            sum[neigh] += contrib;
            weight[neigh] += mag_sf;
        }
    }

    let internal: Vec<f64> = sum
        .iter()
        .zip(&weight)
        .map(|(&s, &w)| if w > 0.0 { s / w } else { 0.0 })
        .collect();

    let boundary = mesh
        .boundary_faces()
        .map(|face| internal[mesh.face_owner(face)])
        .collect();

    VolScalarField::new(format!("average({})", field.name()), internal, boundary)
}
