// crates/mf_physics/src/interface/properties.rs

//! 界面物性组件
//!
//! 持有界面法向通量 nHatf 与曲率 K，由体积分数与速度场重新计算。

use mf_config::{AlphaControls, TransportProperties};

use super::contact_angle::correct_contact_angle;
use super::curvature::{
    face_unit_normal, raw_curvature, sharpness_weight, smooth_alpha, smooth_curvature,
};
use crate::adapter::PhysicsMesh;
use crate::error::{InterfaceError, InterfaceResult};
use crate::fields::{
    FieldError, FieldRegistry, SurfaceScalarField, VolScalarField, VolVectorField,
    VolumeFraction, CURVATURE_FIELD, N_HATF_FIELD,
};
use crate::numerics::{div, interpolate, GreenGaussGradient};
use crate::surface_tension::{new_surface_tension_model, SurfaceTensionModel};

/// δN 的分子，按网格尺度缩放
const DELTA_N_SCALE: f64 = 1e-8;

/// 界面附近指示器的下阈值
const NEAR_INTERFACE_LOWER: f64 = 0.01;

/// 界面附近指示器的上阈值
const NEAR_INTERFACE_UPPER: f64 = 0.99;

/// `x >= 0` 时为 1，否则为 0
#[inline]
fn pos0(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// 界面物性
///
/// 每个求解对象一个实例。构造时读取配置并立即计算一次 nHatf 与 K，
/// 之后由 [`correct`](Self::correct) 在每个时间步刷新。
///
/// 体积分数与速度场不被持有，每次调用时传入；体积分数只会修改其接触角
/// 边界条件的内部状态。
#[derive(Debug)]
pub struct InterfaceProperties {
    mesh: PhysicsMesh,

    // 缓存的配置
    c_alpha: f64,
    smooth_itr: usize,
    k_smooth_itr: usize,
    contact_angle: f64,
    aperture_correction_factor: f64,
    sigma: Box<dyn SurfaceTensionModel>,

    aperture: VolScalarField,
    delta_n: f64,
    gradient: GreenGaussGradient,

    n_hatf: SurfaceScalarField,
    k: VolScalarField,
    registry: FieldRegistry,
}

impl InterfaceProperties {
    /// 创建界面物性并计算初始 nHatf 与 K
    ///
    /// # 参数
    /// - `alpha1`: 体积分数场
    /// - `u`: 速度场
    /// - `transport`: 输运物性（接触角、开度修正系数、表面张力）
    /// - `controls`: 体积分数求解控制（cAlpha、平滑次数）
    /// - `aperture`: 单元开度场
    ///
    /// # 错误
    /// 配置无效、表面张力模型无法构造、场尺寸与网格不符时返回错误。
    pub fn new(
        mesh: &PhysicsMesh,
        alpha1: &mut VolumeFraction,
        u: &VolVectorField,
        transport: &TransportProperties,
        controls: &AlphaControls,
        aperture: VolScalarField,
    ) -> InterfaceResult<Self> {
        transport.validate()?;
        controls.validate()?;
        mesh.inner().validate()?;

        if mesh.n_cells() == 0 {
            return Err(InterfaceError::EmptyMesh);
        }
        aperture.check_size(mesh)?;
        warn_non_positive_aperture(&aperture);

        let mean_volume = mesh.mean_cell_volume();
        if !(mean_volume > 0.0) {
            return Err(InterfaceError::EmptyMesh);
        }
        let delta_n = DELTA_N_SCALE / mean_volume.cbrt();

        let sigma = new_surface_tension_model(transport)?;

        log::info!(
            "界面物性: cAlpha = {}, 平滑 {}/{} 次, 接触角 = {}°, 表面张力模型 '{}', deltaN = {:.3e}",
            controls.c_alpha,
            controls.smooth_itr,
            controls.k_smooth_itr,
            transport.contact_angle,
            sigma.name(),
            delta_n
        );

        let mut props = Self {
            mesh: mesh.clone(),
            c_alpha: controls.c_alpha,
            smooth_itr: controls.smooth_itr,
            k_smooth_itr: controls.k_smooth_itr,
            contact_angle: transport.contact_angle_radians(),
            aperture_correction_factor: transport.aperture_correction_factor,
            sigma,
            aperture,
            delta_n,
            gradient: GreenGaussGradient::new(),
            n_hatf: SurfaceScalarField::zeros(N_HATF_FIELD, mesh),
            k: VolScalarField::zeros(CURVATURE_FIELD, mesh),
            registry: FieldRegistry::interface_properties(),
        };

        props.correct(alpha1, u)?;
        Ok(props)
    }

    // =========================================================================
    // 计算
    // =========================================================================

    /// 由当前体积分数与速度场重新计算 nHatf 与 K
    ///
    /// 尺寸检查在修改任何场之前完成。
    pub fn correct(&mut self, alpha1: &mut VolumeFraction, u: &VolVectorField) -> InterfaceResult<()> {
        self.check_alpha(alpha1)?;
        u.check_size(&self.mesh)?;

        self.calculate_k(alpha1, u)
    }

    /// 体积分数的单元数与边界面数须与组件网格一致
    fn check_alpha(&self, alpha1: &VolumeFraction) -> InterfaceResult<()> {
        FieldError::check_len(alpha1.name(), self.mesh.n_cells(), alpha1.n_cells())?;
        FieldError::check_len(
            alpha1.name(),
            self.mesh.n_boundary_faces(),
            alpha1.boundary_conditions().n_boundary_faces(),
        )?;
        Ok(())
    }

    fn calculate_k(&mut self, alpha1: &mut VolumeFraction, u: &VolVectorField) -> InterfaceResult<()> {
        let mesh = &self.mesh;

        let alpha_s = smooth_alpha(mesh, alpha1, self.smooth_itr);

        // 边界法向梯度取自体积分数自身的边界条件
        let boundary_sn_grad = alpha1
            .boundary_conditions()
            .boundary_sn_grad(alpha_s.internal());
        let grad_alpha = self.gradient.compute(mesh, &alpha_s, Some(&boundary_sn_grad));
        let grad_alpha_f = interpolate(mesh, &grad_alpha);

        let mut n_hatfv = face_unit_normal(&grad_alpha_f, self.delta_n);
        correct_contact_angle(alpha1, u, &mut n_hatfv, &grad_alpha_f, self.delta_n);

        for (face, value) in self.n_hatf.values_mut().iter_mut().enumerate() {
            *value = n_hatfv.get(face).dot(mesh.sf(face));
        }

        let div_n = div(mesh, &self.n_hatf);
        let mut k = raw_curvature(
            &div_n,
            &self.aperture,
            self.contact_angle,
            self.aperture_correction_factor,
        );

        let w = sharpness_weight(&alpha_s);
        for i in 0..self.k_smooth_itr {
            log::debug!("曲率平滑 {}/{}", i + 1, self.k_smooth_itr);
            k = smooth_curvature(mesh, &k, &w, &div_n);
        }

        self.k.assign(&k)?;

        if log::log_enabled!(log::Level::Trace) {
            let (lo, hi) = self.k.min_max();
            log::trace!("曲率范围: [{:.6e}, {:.6e}]", lo, hi);
        }
        Ok(())
    }

    /// σK 单元场
    pub fn sigma_k(&self) -> VolScalarField {
        self.sigma
            .sigma(&self.mesh)
            .zip_map(&self.k, "sigmaK", |s, k| s * k)
    }

    /// 面表面张力 `interpolate(σK)·snGrad(α)`
    pub fn surface_tension_force(&self, alpha1: &VolumeFraction) -> InterfaceResult<SurfaceScalarField> {
        self.check_alpha(alpha1)?;

        let sigma_k_f = interpolate(&self.mesh, &self.sigma_k());
        let sn_grad = alpha1.sn_grad(&self.mesh);
        Ok(sigma_k_f.zip_map(&sn_grad, "surfaceTensionForce", |s, g| s * g))
    }

    /// 界面附近指示器
    ///
    /// `0.01 <= α <= 0.99` 处为 1，其余为 0；边界值按边界上的 α 计算。
    pub fn near_interface(&self, alpha1: &VolumeFraction) -> VolScalarField {
        alpha1.to_field().map("nearInterface", |a| {
            pos0(a - NEAR_INTERFACE_LOWER) * pos0(NEAR_INTERFACE_UPPER - a)
        })
    }

    /// 重新读取 cAlpha、接触角、开度修正系数与表面张力系数
    ///
    /// 平滑次数只在构造时读取。出错时已缓存的值保持不变。
    pub fn read(
        &mut self,
        transport: &TransportProperties,
        controls: &AlphaControls,
    ) -> InterfaceResult<()> {
        transport.validate()?;
        controls.validate()?;

        self.sigma.read_dict(transport)?;
        self.c_alpha = controls.c_alpha;
        self.contact_angle = transport.contact_angle_radians();
        self.aperture_correction_factor = transport.aperture_correction_factor;

        log::debug!(
            "重新读取界面物性: cAlpha = {}, 接触角 = {}°",
            self.c_alpha,
            transport.contact_angle
        );
        Ok(())
    }

    /// 替换开度场，下次 [`correct`](Self::correct) 生效
    pub fn set_aperture(&mut self, aperture: VolScalarField) -> InterfaceResult<()> {
        aperture.check_size(&self.mesh)?;
        warn_non_positive_aperture(&aperture);
        self.aperture = aperture;
        Ok(())
    }

    // =========================================================================
    // 访问器
    // =========================================================================

    /// 界面压缩系数
    #[inline]
    pub fn c_alpha(&self) -> f64 {
        self.c_alpha
    }

    /// 体积分数平滑次数
    #[inline]
    pub fn smooth_itr(&self) -> usize {
        self.smooth_itr
    }

    /// 曲率平滑次数
    #[inline]
    pub fn k_smooth_itr(&self) -> usize {
        self.k_smooth_itr
    }

    /// 全局接触角 [rad]
    #[inline]
    pub fn contact_angle(&self) -> f64 {
        self.contact_angle
    }

    /// 开度修正系数
    #[inline]
    pub fn aperture_correction_factor(&self) -> f64 {
        self.aperture_correction_factor
    }

    /// 归一化正则项
    #[inline]
    pub fn delta_n(&self) -> f64 {
        self.delta_n
    }

    /// 界面法向通量
    #[inline]
    pub fn n_hatf(&self) -> &SurfaceScalarField {
        &self.n_hatf
    }

    /// 曲率
    #[inline]
    pub fn k(&self) -> &VolScalarField {
        &self.k
    }

    /// 开度场
    #[inline]
    pub fn aperture(&self) -> &VolScalarField {
        &self.aperture
    }

    /// 表面张力模型
    pub fn surface_tension_model(&self) -> &dyn SurfaceTensionModel {
        self.sigma.as_ref()
    }

    /// 持久化字段元数据
    pub fn field_registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// 网格
    pub fn mesh(&self) -> &PhysicsMesh {
        &self.mesh
    }
}

fn warn_non_positive_aperture(aperture: &VolScalarField) {
    let count = aperture.internal().iter().filter(|&&ap| !(ap > 0.0)).count();
    if count > 0 {
        log::warn!("开度场 '{}' 有 {} 个单元不为正，曲率修正项将发散", aperture.name(), count);
    }
}
