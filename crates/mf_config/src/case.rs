// crates/mf_config/src/case.rs

//! CaseConfig - 算例配置
//!
//! 汇总一个算例的全部输入：输运物性、求解器控制、体积分数边界条件，
//! 以及命令行演示算例使用的网格、初始场和开度。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::boundary::{AlphaPatchSpec, ContactAngleLimit};
use crate::error::ConfigError;
use crate::solution::{AlphaControls, FvSolution};
use crate::transport::TransportProperties;

/// 默认体积分数场名
pub const DEFAULT_ALPHA_NAME: &str = "alpha.water";

/// 算例配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// 输运物性
    #[serde(rename = "transportProperties")]
    pub transport: TransportProperties,

    /// 求解器控制
    #[serde(rename = "fvSolution")]
    pub solution: FvSolution,

    /// 体积分数场定义
    #[serde(default)]
    pub alpha: AlphaFieldConfig,

    /// 网格配置
    #[serde(default)]
    pub mesh: MeshConfig,

    /// 初始体积分数
    #[serde(default)]
    pub initial: InitialCondition,

    /// 开度场
    #[serde(default)]
    pub aperture: ApertureConfig,

    /// 速度场
    #[serde(default)]
    pub velocity: VelocityConfig,

    /// 运行控制
    #[serde(default)]
    pub run: RunConfig,
}

/// 体积分数场定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaFieldConfig {
    /// 场名（用于查找 fvSolution 条目）
    #[serde(default = "default_alpha_name")]
    pub name: String,

    /// 边界片名 -> 条件
    #[serde(default)]
    pub boundary: BTreeMap<String, AlphaPatchSpec>,
}

fn default_alpha_name() -> String {
    DEFAULT_ALPHA_NAME.to_string()
}

impl Default for AlphaFieldConfig {
    fn default() -> Self {
        Self {
            name: default_alpha_name(),
            boundary: BTreeMap::new(),
        }
    }
}

/// 结构化网格配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// x 方向单元数
    #[serde(default = "default_n")]
    pub nx: usize,
    /// y 方向单元数
    #[serde(default = "default_n")]
    pub ny: usize,
    /// x 方向长度 [m]
    #[serde(default = "default_length")]
    pub lx: f64,
    /// y 方向长度 [m]
    #[serde(default = "default_length")]
    pub ly: f64,
}

fn default_n() -> usize { 40 }
fn default_length() -> f64 { 0.01 }

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            nx: default_n(),
            ny: default_n(),
            lx: default_length(),
            ly: default_length(),
        }
    }
}

/// 初始体积分数分布
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InitialCondition {
    /// 圆形液滴（内部 α=1）
    Droplet {
        /// 圆心 [m]
        center: [f64; 2],
        /// 半径 [m]
        radius: f64,
    },
    /// 竖直平面界面（x < position 处 α=1）
    Planar {
        /// 界面位置 [m]
        position: f64,
    },
}

impl Default for InitialCondition {
    fn default() -> Self {
        Self::Droplet {
            center: [0.005, 0.005],
            radius: 0.0025,
        }
    }
}

/// 开度场配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApertureConfig {
    /// 均匀开度 [m]
    #[serde(default = "default_aperture")]
    pub value: f64,
}

fn default_aperture() -> f64 { 1e-4 }

impl Default for ApertureConfig {
    fn default() -> Self {
        Self {
            value: default_aperture(),
        }
    }
}

/// 速度场配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityConfig {
    /// 内部均匀速度 [m/s]（壁面速度为零）
    #[serde(default)]
    pub uniform: [f64; 2],
}

/// 运行控制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// correct() 调用次数
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_steps() -> usize { 1 }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

impl Default for CaseConfig {
    fn default() -> Self {
        let mut alpha = AlphaFieldConfig::default();
        for wall in ["bottom", "top"] {
            alpha.boundary.insert(
                wall.to_string(),
                AlphaPatchSpec::ConstantContactAngle {
                    theta0: 60.0,
                    limit: ContactAngleLimit::Gradient,
                },
            );
        }

        Self {
            transport: TransportProperties::default(),
            solution: FvSolution::single(DEFAULT_ALPHA_NAME, AlphaControls::new(1.0, 2, 2)),
            alpha,
            mesh: MeshConfig::default(),
            initial: InitialCondition::default(),
            aperture: ApertureConfig::default(),
            velocity: VelocityConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl CaseConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::debug!("已加载算例配置: {}", path.as_ref().display());
        Ok(config)
    }

    /// 从 JSON 字符串解析并验证
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: CaseConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为格式化 JSON
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 体积分数场的控制参数
    pub fn alpha_controls(&self) -> Result<&AlphaControls, ConfigError> {
        self.solution.solver_dict(&self.alpha.name)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.transport.validate()?;
        self.alpha_controls()?.validate()?;

        for (patch, spec) in &self.alpha.boundary {
            spec.validate(patch)?;
        }

        if self.mesh.nx == 0 || self.mesh.ny == 0 {
            return Err(ConfigError::invalid(
                "mesh",
                format!("{}x{}", self.mesh.nx, self.mesh.ny),
                "单元数必须为正",
            ));
        }
        if !(self.mesh.lx > 0.0 && self.mesh.ly > 0.0) {
            return Err(ConfigError::invalid(
                "mesh",
                format!("{}x{}", self.mesh.lx, self.mesh.ly),
                "域长度必须为正",
            ));
        }

        if !(self.aperture.value > 0.0) {
            return Err(ConfigError::invalid(
                "aperture.value",
                self.aperture.value,
                "开度必须为正",
            ));
        }

        if let InitialCondition::Droplet { radius, .. } = self.initial {
            if !(radius > 0.0) {
                return Err(ConfigError::invalid("initial.radius", radius, "半径必须为正"));
            }
        }

        Ok(())
    }
}
