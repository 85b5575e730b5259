// crates/mf_physics/src/surface_tension/temperature_linear.rs

//! 温度线性表面张力
//!
//! σ = sigma0 + dSigmaDT·(T - Tref)
//!
//! 温度取配置中的均匀值 T。结果截断到非负。

use mf_config::TransportProperties;

use super::{check_model_name, finite, SurfaceTensionError, SurfaceTensionModel};
use crate::adapter::PhysicsMesh;
use crate::fields::VolScalarField;

/// 温度线性表面张力模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureLinearSurfaceTension {
    /// 参考温度下的表面张力 [N/m]
    pub sigma0: f64,
    /// 温度系数 [N/(m·K)]
    pub d_sigma_dt: f64,
    /// 温度 [K]
    pub temperature: f64,
    /// 参考温度 [K]
    pub t_ref: f64,
}

impl TemperatureLinearSurfaceTension {
    /// 模型名称
    pub const NAME: &'static str = "temperatureLinear";

    /// 从输运物性读取
    pub fn from_transport(transport: &TransportProperties) -> Result<Self, SurfaceTensionError> {
        let dict = transport.sigma.to_dict();
        Ok(Self {
            sigma0: finite("sigma0", dict.get("sigma0")?)?,
            d_sigma_dt: finite("dSigmaDT", dict.get("dSigmaDT")?)?,
            temperature: finite("T", dict.get("T")?)?,
            t_ref: finite("Tref", dict.get("Tref")?)?,
        })
    }

    /// 当前温度下的系数 [N/m]
    pub fn value(&self) -> f64 {
        (self.sigma0 + self.d_sigma_dt * (self.temperature - self.t_ref)).max(0.0)
    }
}

impl SurfaceTensionModel for TemperatureLinearSurfaceTension {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sigma(&self, mesh: &PhysicsMesh) -> VolScalarField {
        VolScalarField::uniform("sigma", mesh, self.value())
    }

    fn read_dict(&mut self, transport: &TransportProperties) -> Result<(), SurfaceTensionError> {
        check_model_name(Self::NAME, transport)?;
        *self = Self::from_transport(transport)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_config::{SigmaEntry, SurfaceTensionDict};

    fn transport(t: f64) -> TransportProperties {
        let mut tp = TransportProperties::default();
        tp.sigma = SigmaEntry::Model(
            SurfaceTensionDict::new("temperatureLinear")
                .with_coeff("sigma0", 0.072)
                .with_coeff("dSigmaDT", -1.5e-4)
                .with_coeff("T", t)
                .with_coeff("Tref", 293.15),
        );
        tp
    }

    #[test]
    fn test_value() {
        let model = TemperatureLinearSurfaceTension::from_transport(&transport(303.15)).unwrap();
        assert!((model.value() - (0.072 - 1.5e-3)).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_non_negative() {
        let model = TemperatureLinearSurfaceTension::from_transport(&transport(1000.0)).unwrap();
        assert_eq!(model.value(), 0.0);
    }

    #[test]
    fn test_read_dict_model_change() {
        let mut model = TemperatureLinearSurfaceTension::from_transport(&transport(293.15)).unwrap();
        let result = model.read_dict(&TransportProperties::default());
        assert!(matches!(result, Err(SurfaceTensionError::ModelChanged { .. })));
        assert_eq!(model.temperature, 293.15);
    }
}
