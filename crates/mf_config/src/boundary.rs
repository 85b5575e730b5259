// crates/mf_config/src/boundary.rs

//! 体积分数边界条件配置
//!
//! 每个边界片按名称给出一个条件，未列出的边界片按 `zeroGradient` 处理。
//! 角度单位均为度。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 接触角边界的梯度限制方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactAngleLimit {
    /// 不限制
    None,
    /// 限制梯度，使边界值落在 [0, 1]
    #[default]
    Gradient,
    /// 梯度置零
    ZeroGradient,
    /// 边界值截断到 [0, 1]
    Alpha,
}

/// 单个边界片的体积分数条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlphaPatchSpec {
    /// 零梯度
    #[serde(rename = "zeroGradient")]
    ZeroGradient,

    /// 固定值
    #[serde(rename = "fixedValue")]
    FixedValue {
        /// 边界值
        value: f64,
    },

    /// 恒定接触角
    #[serde(rename = "constantAlphaContactAngle")]
    ConstantContactAngle {
        /// 平衡接触角 [度]
        theta0: f64,
        /// 梯度限制
        #[serde(default)]
        limit: ContactAngleLimit,
    },

    /// 动态接触角：θ = θ0 + (θA - θR)·tanh(u_wall / uθ)
    #[serde(rename = "dynamicAlphaContactAngle")]
    DynamicContactAngle {
        /// 平衡接触角 [度]
        theta0: f64,
        /// 特征速度 [m/s]
        #[serde(rename = "uTheta")]
        u_theta: f64,
        /// 前进角 [度]
        #[serde(rename = "thetaA")]
        theta_a: f64,
        /// 后退角 [度]
        #[serde(rename = "thetaR")]
        theta_r: f64,
        /// 梯度限制
        #[serde(default)]
        limit: ContactAngleLimit,
    },
}

impl AlphaPatchSpec {
    /// 是否为接触角类型
    pub fn is_contact_angle(&self) -> bool {
        matches!(
            self,
            Self::ConstantContactAngle { .. } | Self::DynamicContactAngle { .. }
        )
    }

    /// 验证参数
    pub fn validate(&self, patch: &str) -> Result<(), ConfigError> {
        match *self {
            Self::ZeroGradient => Ok(()),
            Self::FixedValue { value } => {
                if !value.is_finite() {
                    return Err(ConfigError::invalid(
                        format!("boundary.{}.value", patch),
                        value,
                        "必须为有限值",
                    ));
                }
                Ok(())
            }
            Self::ConstantContactAngle { theta0, .. } => check_angle(patch, "theta0", theta0),
            Self::DynamicContactAngle {
                theta0,
                u_theta,
                theta_a,
                theta_r,
                ..
            } => {
                check_angle(patch, "theta0", theta0)?;
                check_angle(patch, "thetaA", theta_a)?;
                check_angle(patch, "thetaR", theta_r)?;
                if !u_theta.is_finite() || u_theta < 0.0 {
                    return Err(ConfigError::invalid(
                        format!("boundary.{}.uTheta", patch),
                        u_theta,
                        "必须为非负有限值",
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_angle(patch: &str, key: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=180.0).contains(&value) {
        return Err(ConfigError::invalid(
            format!("boundary.{}.{}", patch, key),
            value,
            "角度必须在 [0, 180] 度范围内",
        ));
    }
    Ok(())
}
