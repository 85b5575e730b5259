// crates/mf_physics/src/interface/contact_angle.rs

//! 壁面接触角修正
//!
//! 在具备接触角能力的边界片上，把界面单位法向 nHat 旋转到与壁面外法向 nf
//! 成规定接触角 θ 的方向：
//!
//! ```text
//! a12 = nHat·nf,  b1 = cos θ,  b2 = cos(acos(a12) - θ)
//! det = 1 - a12²
//! a = (b1 - a12·b2)/det,  b = (b2 - a12·b1)/det
//! nHat ← (a·nf + b·nHat) / (|a·nf + b·nHat| + δN)
//! ```
//!
//! 随后把边界条件的梯度设为 `(nf·nHat)·|∇α_f|` 并重算边界值。
//! 当 nHat 与 nf 接近平行时 det → 0，这里不做限制。

use glam::DVec2;

use crate::fields::{SurfaceVectorField, VolVectorField, VolumeFraction};

/// 与壁面外法向成 θ 角的界面法向（未归一化）
///
/// `theta` 为弧度。
#[inline]
pub fn contact_angle_normal(n_hat: DVec2, nf: DVec2, theta: f64) -> DVec2 {
    let a12 = n_hat.dot(nf);
    let b1 = theta.cos();
    let b2 = (a12.acos() - theta).cos();
    let det = 1.0 - a12 * a12;

    let a = (b1 - a12 * b2) / det;
    let b = (b2 - a12 * b1) / det;

    nf * a + n_hat * b
}

/// 修正接触角边界片上的界面法向，并回写边界条件梯度
///
/// # 参数
/// - `alpha1`: 体积分数场，只修改其接触角边界条件的状态
/// - `u`: 速度场（动态接触角使用）
/// - `n_hat`: 面界面单位法向，边界面被原位修正
/// - `grad_alpha_f`: 面上的体积分数梯度
/// - `delta_n`: 归一化正则项
pub fn correct_contact_angle(
    alpha1: &mut VolumeFraction,
    u: &VolVectorField,
    n_hat: &mut SurfaceVectorField,
    grad_alpha_f: &SurfaceVectorField,
    delta_n: f64,
) {
    let (cells, bcs) = alpha1.split_mut();

    for patch in bcs.patches_mut().iter_mut() {
        // 先只读地求角度与新法向，再可变借用写回梯度
        let gradient = {
            let Some(cap) = patch.as_contact_angle() else {
                continue;
            };
            let geometry = patch.geometry();
            let faces = geometry.faces();

            let n_hat_p: Vec<DVec2> = faces.iter().map(|&f| n_hat.get(f)).collect();
            let theta = cap.theta(u, &n_hat_p);

            let mut gradient = Vec::with_capacity(faces.len());
            for (i, (&face, &nf)) in faces.iter().zip(geometry.normals()).enumerate() {
                let v = contact_angle_normal(n_hat_p[i], nf, theta[i].to_radians());
                let v = v / (v.length() + delta_n);

                gradient.push(nf.dot(v) * grad_alpha_f.get(face).length());
                n_hat.values_mut()[face] = v;
            }

            log::trace!("接触角修正: 边界片 '{}' ({} 个面)", geometry.name(), faces.len());
            gradient
        };

        if let Some(cap) = patch.as_contact_angle_mut() {
            cap.gradient_mut().copy_from_slice(&gradient);
            cap.evaluate(cells);
        }
    }
}
