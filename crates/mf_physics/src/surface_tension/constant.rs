// crates/mf_physics/src/surface_tension/constant.rs

//! 常数表面张力

use mf_config::TransportProperties;

use super::{check_model_name, finite, SurfaceTensionError, SurfaceTensionModel};
use crate::adapter::PhysicsMesh;
use crate::fields::VolScalarField;

/// 常数表面张力系数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSurfaceTension {
    sigma: f64,
}

impl ConstantSurfaceTension {
    /// 模型名称
    pub const NAME: &'static str = "constant";

    /// 直接指定系数
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// 从输运物性读取
    pub fn from_transport(transport: &TransportProperties) -> Result<Self, SurfaceTensionError> {
        let dict = transport.sigma.to_dict();
        Ok(Self::new(finite("sigma", dict.get("sigma")?)?))
    }

    /// 系数 [N/m]
    #[inline]
    pub fn value(&self) -> f64 {
        self.sigma
    }
}

impl SurfaceTensionModel for ConstantSurfaceTension {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sigma(&self, mesh: &PhysicsMesh) -> VolScalarField {
        VolScalarField::uniform("sigma", mesh, self.sigma)
    }

    fn read_dict(&mut self, transport: &TransportProperties) -> Result<(), SurfaceTensionError> {
        check_model_name(Self::NAME, transport)?;
        *self = Self::from_transport(transport)?;
        Ok(())
    }
}
