// crates/mf_physics/src/boundary/contact_angle.rs

//! 接触角边界条件
//!
//! 接触角边界是固定梯度边界：`α_b = α_P + g/δ`。
//! 界面物性组件根据规定的接触角改写梯度 g，再调用 `evaluate` 重算边界值。
//!
//! 接触角模型：
//! - [`ConstantAngle`]: θ = θ0
//! - [`DynamicAngle`]: θ = θ0 + (θA - θR)·tanh(u_wall / uθ)

use glam::DVec2;
use std::fmt::Debug;

use mf_config::ContactAngleLimit;

use super::alpha::AlphaPatchCondition;
use super::patch::PatchGeometry;
use crate::fields::VolVectorField;

/// 特征速度下限，低于此值时动态接触角退化为常数
const SMALL: f64 = 1e-15;

/// 接触角能力
///
/// 只有实现此能力的边界片参与界面法向的接触角修正。
pub trait ContactAngleCondition: Debug + Send + Sync {
    /// 各面规定的接触角 [度]
    ///
    /// # 参数
    /// - `u`: 速度场（使用本片的边界值和 owner 单元值）
    /// - `n_hat`: 本片各面当前的界面单位法向
    fn theta(&self, u: &VolVectorField, n_hat: &[DVec2]) -> Vec<f64>;

    /// 当前梯度
    fn gradient(&self) -> &[f64];

    /// 梯度（可变）
    fn gradient_mut(&mut self) -> &mut [f64];

    /// 由梯度和 owner 单元值重算边界值
    fn evaluate(&mut self, cells: &[f64]);
}

/// 接触角模型
pub trait ContactAngleModel: Debug + Clone + Send + Sync + 'static {
    /// 边界条件类型名
    const TYPE_NAME: &'static str;

    /// 各面接触角 [度]
    fn theta(&self, geometry: &PatchGeometry, u: &VolVectorField, n_hat: &[DVec2]) -> Vec<f64>;
}

/// 恒定接触角
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantAngle {
    /// 平衡接触角 [度]
    pub theta0: f64,
}

impl ContactAngleModel for ConstantAngle {
    const TYPE_NAME: &'static str = "constantAlphaContactAngle";

    fn theta(&self, geometry: &PatchGeometry, _u: &VolVectorField, _n_hat: &[DVec2]) -> Vec<f64> {
        vec![self.theta0; geometry.len()]
    }
}

/// 动态接触角
///
/// 取壁面切向、沿界面方向的相对速度 u_wall，前进/后退角差按 tanh 过渡。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicAngle {
    /// 平衡接触角 [度]
    pub theta0: f64,
    /// 特征速度 [m/s]
    pub u_theta: f64,
    /// 前进角 [度]
    pub theta_a: f64,
    /// 后退角 [度]
    pub theta_r: f64,
}

impl ContactAngleModel for DynamicAngle {
    const TYPE_NAME: &'static str = "dynamicAlphaContactAngle";

    fn theta(&self, geometry: &PatchGeometry, u: &VolVectorField, n_hat: &[DVec2]) -> Vec<f64> {
        if self.u_theta < SMALL {
            return vec![self.theta0; geometry.len()];
        }

        let u_internal = geometry.patch_internal(u.internal());
        let u_patch = geometry.gather(u.boundary());

        geometry
            .normals()
            .iter()
            .enumerate()
            .map(|(i, &nf)| {
                // 壁面相对速度的切向分量
                let mut u_wall = u_internal[i] - u_patch[i];
                u_wall -= nf * nf.dot(u_wall);

                // 界面在壁面内的方向
                let mut n_wall = n_hat[i] - nf * nf.dot(n_hat[i]);
                n_wall /= n_wall.length() + SMALL;

                let uwall = n_wall.dot(u_wall);
                self.theta0 + (self.theta_a - self.theta_r) * (uwall / self.u_theta).tanh()
            })
            .collect()
    }
}

/// 接触角边界片
#[derive(Debug, Clone)]
pub struct ContactAnglePatch<M> {
    geometry: PatchGeometry,
    values: Vec<f64>,
    gradient: Vec<f64>,
    limit: ContactAngleLimit,
    model: M,
}

/// 恒定接触角边界
pub type ConstantContactAngle = ContactAnglePatch<ConstantAngle>;

/// 动态接触角边界
pub type DynamicContactAngle = ContactAnglePatch<DynamicAngle>;

impl<M: ContactAngleModel> ContactAnglePatch<M> {
    /// 创建，初始梯度为零
    pub fn new(geometry: PatchGeometry, model: M, limit: ContactAngleLimit) -> Self {
        let n = geometry.len();
        Self {
            geometry,
            values: vec![0.0; n],
            gradient: vec![0.0; n],
            limit,
            model,
        }
    }

    /// 接触角模型
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// 梯度限制方式
    #[inline]
    pub fn limit(&self) -> ContactAngleLimit {
        self.limit
    }
}

impl<M: ContactAngleModel> ContactAngleCondition for ContactAnglePatch<M> {
    fn theta(&self, u: &VolVectorField, n_hat: &[DVec2]) -> Vec<f64> {
        self.model.theta(&self.geometry, u, n_hat)
    }

    fn gradient(&self) -> &[f64] {
        &self.gradient
    }

    fn gradient_mut(&mut self) -> &mut [f64] {
        &mut self.gradient
    }

    fn evaluate(&mut self, cells: &[f64]) {
        let deltas = self.geometry.delta_coeffs();

        match self.limit {
            ContactAngleLimit::Gradient => {
                // 以当前边界值为基准，使 α_b 落在 [0, 1]
                for ((g, &v), &delta) in self.gradient.iter_mut().zip(&self.values).zip(deltas) {
                    *g = delta * ((v + *g / delta).clamp(0.0, 1.0) - v);
                }
            }
            ContactAngleLimit::ZeroGradient => self.gradient.fill(0.0),
            ContactAngleLimit::None | ContactAngleLimit::Alpha => {}
        }

        for (i, &owner) in self.geometry.owners().iter().enumerate() {
            self.values[i] = cells[owner] + self.gradient[i] / deltas[i];
        }

        if self.limit == ContactAngleLimit::Alpha {
            for v in &mut self.values {
                *v = v.clamp(0.0, 1.0);
            }
        }
    }
}

impl<M: ContactAngleModel> AlphaPatchCondition for ContactAnglePatch<M> {
    fn type_name(&self) -> &'static str {
        M::TYPE_NAME
    }

    fn geometry(&self) -> &PatchGeometry {
        &self.geometry
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn update(&mut self, cells: &[f64]) {
        self.evaluate(cells);
    }

    fn sn_grad(&self, _cells: &[f64]) -> Vec<f64> {
        self.gradient.clone()
    }

    fn as_contact_angle(&self) -> Option<&dyn ContactAngleCondition> {
        Some(self)
    }

    fn as_contact_angle_mut(&mut self) -> Option<&mut dyn ContactAngleCondition> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::PhysicsMesh;
    use mf_mesh::RectMeshGenerator;

    fn setup() -> (PhysicsMesh, PatchGeometry) {
        let mesh =
            PhysicsMesh::from_frozen(&RectMeshGenerator::new(2, 2, 1.0, 1.0).build().unwrap());
        let geom = PatchGeometry::from_patch(&mesh, mesh.patch("bottom").unwrap());
        (mesh, geom)
    }

    #[test]
    fn test_constant_theta() {
        let (mesh, geom) = setup();
        let patch = ConstantContactAngle::new(geom, ConstantAngle { theta0: 70.0 }, ContactAngleLimit::None);
        let u = VolVectorField::zeros("U", &mesh);

        let theta = patch.theta(&u, &[DVec2::X, DVec2::Y]);
        assert_eq!(theta, vec![70.0, 70.0]);
        assert_eq!(patch.type_name(), "constantAlphaContactAngle");
    }

    #[test]
    fn test_dynamic_theta_static_fluid() {
        let (mesh, geom) = setup();
        let model = DynamicAngle { theta0: 90.0, u_theta: 1.0, theta_a: 100.0, theta_r: 80.0 };
        let patch = DynamicContactAngle::new(geom, model, ContactAngleLimit::Gradient);
        let u = VolVectorField::zeros("U", &mesh);

        let theta = patch.theta(&u, &[DVec2::X, DVec2::X]);
        assert!(theta.iter().all(|&t| (t - 90.0).abs() < 1e-12));
    }

    #[test]
    fn test_dynamic_theta_moving_wall() {
        let (mesh, geom) = setup();
        let model = DynamicAngle { theta0: 90.0, u_theta: 0.5, theta_a: 100.0, theta_r: 80.0 };
        let patch = DynamicContactAngle::new(geom, model, ContactAngleLimit::None);

        // 单元内流速 +x，壁面静止
        let mut u = VolVectorField::uniform("U", &mesh, DVec2::new(0.5, 0.0));
        u.boundary_mut().fill(DVec2::ZERO);

        // 界面法向与流向一致，u_wall = 0.5
        let n_hat = [DVec2::new(1.0, 0.0); 2];
        let theta = patch.theta(&u, &n_hat);
        let expected = 90.0 + 20.0 * 1.0_f64.tanh();
        assert!(theta.iter().all(|&t| (t - expected).abs() < 1e-10));
    }

    #[test]
    fn test_dynamic_theta_small_u_theta() {
        let (mesh, geom) = setup();
        let model = DynamicAngle { theta0: 60.0, u_theta: 0.0, theta_a: 100.0, theta_r: 80.0 };
        let patch = DynamicContactAngle::new(geom, model, ContactAngleLimit::None);
        let u = VolVectorField::uniform("U", &mesh, DVec2::new(3.0, 0.0));

        assert_eq!(patch.theta(&u, &[DVec2::X, DVec2::X]), vec![60.0, 60.0]);
    }

    #[test]
    fn test_evaluate_fixed_gradient() {
        let (_, geom) = setup();
        let mut patch = ConstantContactAngle::new(geom, ConstantAngle { theta0: 90.0 }, ContactAngleLimit::None);
        let cells = [0.5, 0.2, 0.0, 0.0];

        patch.gradient_mut().copy_from_slice(&[0.4, -0.4]);
        patch.evaluate(&cells);

        // δ = 4
        assert!((patch.values()[0] - 0.6).abs() < 1e-12);
        assert!((patch.values()[1] - 0.1).abs() < 1e-12);
        assert_eq!(patch.sn_grad(&cells), vec![0.4, -0.4]);
    }

    #[test]
    fn test_evaluate_gradient_limit() {
        let (_, geom) = setup();
        let mut patch = ConstantContactAngle::new(geom, ConstantAngle { theta0: 90.0 }, ContactAngleLimit::Gradient);
        let cells = [0.9, 0.1, 0.0, 0.0];

        patch.update(&cells);
        assert_eq!(patch.values(), &[0.9, 0.1]);

        // 隐含边界值 0.9 + 4/4 = 1.9 超出上限
        patch.gradient_mut().copy_from_slice(&[4.0, -4.0]);
        patch.evaluate(&cells);

        assert!((patch.gradient()[0] - 0.4).abs() < 1e-12);
        assert!((patch.gradient()[1] + 0.4).abs() < 1e-12);
        assert!((patch.values()[0] - 1.0).abs() < 1e-12);
        assert!(patch.values()[1].abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_zero_gradient_and_alpha_limits() {
        let (_, geom) = setup();
        let cells = [0.9, 0.1, 0.0, 0.0];

        let mut zg = ConstantContactAngle::new(geom.clone(), ConstantAngle { theta0: 30.0 }, ContactAngleLimit::ZeroGradient);
        zg.gradient_mut().fill(2.0);
        zg.evaluate(&cells);
        assert_eq!(zg.gradient(), &[0.0, 0.0]);
        assert_eq!(zg.values(), &[0.9, 0.1]);

        let mut al = ConstantContactAngle::new(geom, ConstantAngle { theta0: 30.0 }, ContactAngleLimit::Alpha);
        al.gradient_mut().copy_from_slice(&[4.0, -4.0]);
        al.evaluate(&cells);
        assert_eq!(al.values(), &[1.0, 0.0]);
        assert_eq!(al.gradient(), &[4.0, -4.0]);
    }

    #[test]
    fn test_capability_query() {
        let (_, geom) = setup();
        let mut patch: Box<dyn AlphaPatchCondition> = Box::new(ConstantContactAngle::new(
            geom,
            ConstantAngle { theta0: 90.0 },
            ContactAngleLimit::None,
        ));

        assert!(patch.as_contact_angle().is_some());
        let cap = patch.as_contact_angle_mut().unwrap();
        cap.gradient_mut()[0] = 1.0;
        assert_eq!(patch.sn_grad(&[0.0; 4])[0], 1.0);
    }
}
