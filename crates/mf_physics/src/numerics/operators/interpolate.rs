// crates/mf_physics/src/numerics/operators/interpolate.rs

//! 面插值
//!
//! 内部面线性插值 `φ_f = w·φ_P + (1-w)·φ_N`，边界面直接取边界值。

use crate::adapter::PhysicsMesh;
use crate::fields::{FieldValue, SurfaceField, VolField};

/// 单元场插值到面
pub fn interpolate<T: FieldValue>(mesh: &PhysicsMesh, field: &VolField<T>) -> SurfaceField<T> {
    let cells = field.internal();
    let mut values = Vec::with_capacity(mesh.n_faces());

    for face in mesh.interior_faces() {
        let owner = mesh.face_owner(face);
        let value = match mesh.face_neighbor(face) {
            Some(neigh) => {
                let w = mesh.weight(face);
                cells[owner] * w + cells[neigh] * (1.0 - w)
            }
            None => cells[owner],
        };
        values.push(value);
    }
    values.extend_from_slice(field.boundary());

    SurfaceField::new(format!("interpolate({})", field.name()), values)
}
