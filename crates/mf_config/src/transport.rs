// crates/mf_config/src/transport.rs

//! transportProperties - 输运物性配置
//!
//! 包含全局接触角、开度修正系数和表面张力模型定义。
//!
//! `sigma` 支持两种写法：
//!
//! ```json
//! { "sigma": 0.07 }
//! { "sigma": { "type": "temperatureLinear", "sigma0": 0.072, "dSigmaDT": -1.5e-4, "T": 300.0, "Tref": 293.15 } }
//! ```
//!
//! 纯数值等价于 `constant` 模型。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// 输运物性配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportProperties {
    /// 全局接触角 [度]，用于深度平均曲率修正
    pub contact_angle: f64,

    /// 开度修正系数 [-]
    pub aperture_correction_factor: f64,

    /// 表面张力定义
    pub sigma: SigmaEntry,
}

/// 表面张力条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SigmaEntry {
    /// 常数表面张力系数 [N/m]
    Uniform(f64),
    /// 按名称选择的模型
    Model(SurfaceTensionDict),
}

/// 表面张力模型字典
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTensionDict {
    /// 模型名称
    #[serde(rename = "type")]
    pub model: String,

    /// 模型系数
    #[serde(flatten)]
    pub coeffs: BTreeMap<String, f64>,
}

impl SurfaceTensionDict {
    /// 创建模型字典
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            coeffs: BTreeMap::new(),
        }
    }

    /// 添加系数
    pub fn with_coeff(mut self, key: impl Into<String>, value: f64) -> Self {
        self.coeffs.insert(key.into(), value);
        self
    }

    /// 读取必需系数
    pub fn get(&self, key: &str) -> Result<f64, ConfigError> {
        self.coeffs
            .get(key)
            .copied()
            .ok_or_else(|| ConfigError::Missing(format!("sigma.{}", key)))
    }
}

impl SigmaEntry {
    /// 模型名称（纯数值视为 constant）
    pub fn model_name(&self) -> &str {
        match self {
            Self::Uniform(_) => "constant",
            Self::Model(dict) => &dict.model,
        }
    }

    /// 转换为统一的字典形式
    pub fn to_dict(&self) -> SurfaceTensionDict {
        match self {
            Self::Uniform(sigma) => SurfaceTensionDict::new("constant").with_coeff("sigma", *sigma),
            Self::Model(dict) => dict.clone(),
        }
    }
}

impl TransportProperties {
    /// 使用常数表面张力创建
    pub fn new(contact_angle_deg: f64, aperture_correction_factor: f64, sigma: f64) -> Self {
        Self {
            contact_angle: contact_angle_deg,
            aperture_correction_factor,
            sigma: SigmaEntry::Uniform(sigma),
        }
    }

    /// 接触角 [弧度]
    #[inline]
    pub fn contact_angle_radians(&self) -> f64 {
        self.contact_angle.to_radians()
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contact_angle.is_finite() {
            return Err(ConfigError::invalid(
                "contactAngle",
                self.contact_angle,
                "接触角必须为有限值",
            ));
        }

        if !self.aperture_correction_factor.is_finite() || self.aperture_correction_factor == 0.0 {
            return Err(ConfigError::invalid(
                "apertureCorrectionFactor",
                self.aperture_correction_factor,
                "开度修正系数必须为非零有限值",
            ));
        }

        if let SigmaEntry::Uniform(sigma) = self.sigma {
            if !sigma.is_finite() {
                return Err(ConfigError::invalid("sigma", sigma, "表面张力系数必须为有限值"));
            }
        }

        Ok(())
    }
}

impl Default for TransportProperties {
    fn default() -> Self {
        Self::new(90.0, 1.0, 0.07)
    }
}
