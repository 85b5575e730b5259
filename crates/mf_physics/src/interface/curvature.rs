// crates/mf_physics/src/interface/curvature.rs

//! 曲率计算的分步算子
//!
//! 由 [`super::InterfaceProperties::correct`] 依次调用：
//!
//! 1. [`smooth_alpha`]: 对体积分数做 `average(interpolate(·))` 平滑
//! 2. [`face_unit_normal`]: 面梯度归一化得到面界面法向
//! 3. [`raw_curvature`]: `K = -∇·nHatf - 2cos(θ)/(factor·ap)`
//! 4. [`sharpness_weight`] 与 [`smooth_curvature`]: 按界面锐度加权的曲率平滑
//!
//! 各步均作用于整场（内部值与边界值），逐点运算，不依赖线程数。

use crate::adapter::PhysicsMesh;
use crate::fields::{
    SurfaceVectorField, VolScalarField, VolumeFraction, CURVATURE_FIELD,
};
use crate::numerics::{average, interpolate};

/// 锐度权重的下限，保证平滑时分母为正
pub const SHARPNESS_FLOOR: f64 = 1e-30;

/// 平滑后的体积分数场
///
/// 每次迭代内部值替换为 `average(interpolate(α))`；边界值在可赋值边界上取
/// 平均场的外推值，固定值边界保持原值。`smooth_itr == 0` 时返回原场副本。
pub fn smooth_alpha(mesh: &PhysicsMesh, alpha1: &VolumeFraction, smooth_itr: usize) -> VolScalarField {
    let bcs = alpha1.boundary_conditions();
    let mut alpha_s = alpha1.to_field().renamed("smoothAlpha");

    for i in 0..smooth_itr {
        log::debug!("体积分数平滑 {}/{}", i + 1, smooth_itr);

        let averaged = average(mesh, &interpolate(mesh, &alpha_s));
        alpha_s.internal_mut().copy_from_slice(averaged.internal());
        bcs.assign_boundary(alpha_s.boundary_mut(), averaged.boundary());
    }

    alpha_s
}

/// 面界面法向 `∇α_f / (|∇α_f| + δN)`
pub fn face_unit_normal(grad_alpha_f: &SurfaceVectorField, delta_n: f64) -> SurfaceVectorField {
    grad_alpha_f.map("nHatfv", |g| g / (g.length() + delta_n))
}

/// 含开度修正的曲率
///
/// `div_n` 为 `∇·nHatf`，`contact_angle` 为弧度。
pub fn raw_curvature(
    div_n: &VolScalarField,
    aperture: &VolScalarField,
    contact_angle: f64,
    correction_factor: f64,
) -> VolScalarField {
    let c = 2.0 * contact_angle.cos();
    div_n.zip_map(aperture, CURVATURE_FIELD, |d, ap| {
        -d - c / (correction_factor * ap)
    })
}

/// 界面锐度权重 `w = 2·sqrt(|α(1-α)|) + 1e-30`
///
/// 界面处 (α = 0.5) 为 1，主体相中趋于 0。
pub fn sharpness_weight(alpha_s: &VolScalarField) -> VolScalarField {
    alpha_s.map("smoothFunction", |a| {
        2.0 * (a * (1.0 - a)).abs().sqrt() + SHARPNESS_FLOOR
    })
}

/// 一次锐度加权曲率平滑
///
/// ```text
/// Ks = average(interpolate(K·w)) / average(interpolate(w))
/// K  = -w·∇·nHatf + (1 - w)·Ks
/// ```
pub fn smooth_curvature(
    mesh: &PhysicsMesh,
    k: &VolScalarField,
    w: &VolScalarField,
    div_n: &VolScalarField,
) -> VolScalarField {
    let kw = k.zip_map(w, "K*w", |k, w| k * w);
    let numerator = average(mesh, &interpolate(mesh, &kw));
    let denominator = average(mesh, &interpolate(mesh, w));
    let k_s = numerator.zip_map(&denominator, "Ks", |n, d| n / d);

    let blend = |w: &[f64], d: &[f64], ks: &[f64]| -> Vec<f64> {
        w.iter()
            .zip(d)
            .zip(ks)
            .map(|((&w, &d), &ks)| -w * d + (1.0 - w) * ks)
            .collect()
    };
    VolScalarField::new(
        CURVATURE_FIELD,
        blend(w.internal(), div_n.internal(), k_s.internal()),
        blend(w.boundary(), div_n.boundary(), k_s.boundary()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::AlphaBoundaryConditions;
    use mf_mesh::RectMeshGenerator;

    fn mesh() -> PhysicsMesh {
        PhysicsMesh::from_frozen(&RectMeshGenerator::new(6, 4, 1.0, 1.0).build().unwrap())
    }

    fn step(mesh: &PhysicsMesh) -> VolumeFraction {
        let values = mesh
            .cells()
            .map(|c| if mesh.cell_center(c).x < 0.5 { 1.0 } else { 0.0 })
            .collect();
        VolumeFraction::new(mesh, "alpha.water", values, AlphaBoundaryConditions::zero_gradient(mesh))
            .unwrap()
    }

    #[test]
    fn test_smooth_zero_iterations_is_copy() {
        let mesh = mesh();
        let alpha = step(&mesh);
        let alpha_s = smooth_alpha(&mesh, &alpha, 0);

        assert_eq!(alpha_s.internal(), alpha.values());
        assert_eq!(alpha_s.name(), "smoothAlpha");
    }

    #[test]
    fn test_smooth_bounded_and_conservative_shape() {
        let mesh = mesh();
        let alpha = step(&mesh);
        let alpha_s = smooth_alpha(&mesh, &alpha, 3);

        let (lo, hi) = alpha_s.min_max();
        assert!(lo >= 0.0 && hi <= 1.0);
        // 平滑后台阶两侧出现中间值
        assert!(alpha_s.internal().iter().any(|&a| a > 0.0 && a < 1.0));
    }

    #[test]
    fn test_uniform_field_unchanged_by_smoothing() {
        let mesh = mesh();
        let alpha = VolumeFraction::new(
            &mesh,
            "alpha.water",
            vec![0.3; mesh.n_cells()],
            AlphaBoundaryConditions::zero_gradient(&mesh),
        )
        .unwrap();
        let alpha_s = smooth_alpha(&mesh, &alpha, 4);

        for &a in alpha_s.internal() {
            assert!((a - 0.3).abs() < 1e-14);
        }
    }

    #[test]
    fn test_sharpness_weight() {
        let mesh = mesh();
        let mut field = VolScalarField::zeros("a", &mesh);
        field.internal_mut()[0] = 0.5;
        field.internal_mut()[1] = 1.0;
        field.internal_mut()[2] = -0.1;

        let w = sharpness_weight(&field);
        assert!((w.get(0) - 1.0).abs() < 1e-15);
        assert_eq!(w.get(1), SHARPNESS_FLOOR);
        assert!(w.get(2) > 0.0 && w.get(2).is_finite());
        assert!(w.boundary().iter().all(|&v| v == SHARPNESS_FLOOR));
    }

    #[test]
    fn test_raw_curvature_aperture_term() {
        let mesh = mesh();
        let div_n = VolScalarField::uniform("div", &mesh, 3.0);
        let aperture = VolScalarField::uniform("aperture", &mesh, 1e-3);
        let theta = 60.0_f64.to_radians();

        let k = raw_curvature(&div_n, &aperture, theta, 2.0);
        let expected = -3.0 - 2.0 * theta.cos() / (2.0 * 1e-3);
        for &v in k.internal().iter().chain(k.boundary()) {
            assert!((v - expected).abs() < 1e-9);
        }
        assert_eq!(k.name(), CURVATURE_FIELD);
    }

    #[test]
    fn test_smoothing_in_bulk_keeps_uniform_curvature() {
        let mesh = mesh();
        let k = VolScalarField::uniform("K", &mesh, 5.0);
        let w = VolScalarField::uniform("w", &mesh, 1.0);
        let div_n = VolScalarField::uniform("div", &mesh, -5.0);

        // w = 1 时 K = -∇·nHatf
        let smoothed = smooth_curvature(&mesh, &k, &w, &div_n);
        for &v in smoothed.internal() {
            assert!((v - 5.0).abs() < 1e-12);
        }
    }
}
