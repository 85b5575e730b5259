// crates/mf_config/src/solution.rs

//! fvSolution - 求解器控制参数
//!
//! 每个体积分数场在 `solvers` 下有一个同名条目：
//!
//! ```json
//! { "solvers": { "alpha.water": { "cAlpha": 1.0, "smoothItr": 2, "kSmoothItr": 1 } } }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// 求解器控制字典
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FvSolution {
    /// 场名 -> 控制参数
    #[serde(default)]
    pub solvers: BTreeMap<String, AlphaControls>,
}

impl FvSolution {
    /// 创建只含一个场的控制字典
    pub fn single(field: impl Into<String>, controls: AlphaControls) -> Self {
        let mut solvers = BTreeMap::new();
        solvers.insert(field.into(), controls);
        Self { solvers }
    }

    /// 查找场对应的控制参数
    pub fn solver_dict(&self, field: &str) -> Result<&AlphaControls, ConfigError> {
        self.solvers
            .get(field)
            .ok_or_else(|| ConfigError::Missing(format!("solvers.{}", field)))
    }
}

/// 体积分数场的界面控制参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaControls {
    /// 界面压缩系数
    #[serde(rename = "cAlpha")]
    pub c_alpha: f64,

    /// 体积分数平滑次数
    #[serde(rename = "smoothItr", deserialize_with = "deserialize_iterations")]
    pub smooth_itr: usize,

    /// 曲率平滑次数
    #[serde(rename = "kSmoothItr", deserialize_with = "deserialize_iterations")]
    pub k_smooth_itr: usize,
}

impl AlphaControls {
    /// 创建控制参数
    pub fn new(c_alpha: f64, smooth_itr: usize, k_smooth_itr: usize) -> Self {
        Self {
            c_alpha,
            smooth_itr,
            k_smooth_itr,
        }
    }

    /// 验证参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.c_alpha.is_finite() || self.c_alpha < 0.0 {
            return Err(ConfigError::invalid("cAlpha", self.c_alpha, "必须为非负有限值"));
        }
        Ok(())
    }
}

impl Default for AlphaControls {
    fn default() -> Self {
        Self::new(1.0, 0, 0)
    }
}

/// 迭代次数允许写成 `2` 或 `2.0`，但必须是非负整数
fn deserialize_iterations<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "迭代次数必须为非负整数, 实际 {}",
            value
        )));
    }
    Ok(value as usize)
}
