// crates/mf_physics/src/fields/mod.rs

//! 场与字段注册系统
//!
//! # 子模块
//!
//! - [`geometric`]: 单元场 [`VolField`] 与面场 [`SurfaceField`]
//! - [`store`]: 按名称存放单元场的 [`FieldStore`]
//! - [`volume_fraction`]: 带边界条件的体积分数场 [`VolumeFraction`]
//!
//! 本文件提供持久化字段的元数据管理：名称、存储位置、单位与描述。
//! 注册表本身不存储数据，只记录外部 I/O 层写出字段时所需的语义信息。
//!
//! # 示例
//!
//! ```rust
//! use mf_physics::fields::{FieldMeta, FieldRegistry};
//!
//! let mut registry = FieldRegistry::interface_properties();
//! registry.register(FieldMeta::cell_scalar("alpha.water", "-")).unwrap();
//! assert!(registry.contains("interfaceProperties:K"));
//! ```

mod geometric;
mod store;
mod volume_fraction;

pub use geometric::{
    FieldValue, SurfaceField, SurfaceScalarField, SurfaceVectorField, VolField, VolScalarField,
    VolVectorField,
};
pub use store::{FieldStore, APERTURE_FIELD};
pub use volume_fraction::VolumeFraction;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 界面法向通量场名
pub const N_HATF_FIELD: &str = "nHatf";

/// 曲率场名
pub const CURVATURE_FIELD: &str = "interfaceProperties:K";

/// 字段类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// 标量场
    Scalar,
    /// 二维向量场
    Vector2D,
}

/// 字段存储位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldLocation {
    /// 单元中心
    #[default]
    Cell,
    /// 面中心
    Face,
}

/// 字段错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// 无效字段名
    #[error("无效字段名 '{0}': 须以字母开头，仅含字母、数字及 '_' '.' ':'")]
    InvalidName(String),

    /// 试图覆盖保留字段
    #[error("不能覆盖保留字段 '{0}'")]
    ReservedField(String),

    /// 字段不存在
    #[error("字段 '{0}' 不存在")]
    NotFound(String),

    /// 场长度与网格不匹配
    #[error("场 '{name}' 长度不匹配: 期望 {expected}, 实际 {actual}")]
    SizeMismatch {
        /// 场名
        name: String,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },
}

impl FieldError {
    /// 长度检查
    pub fn check_len(name: &str, expected: usize, actual: usize) -> Result<(), FieldError> {
        if expected != actual {
            return Err(FieldError::SizeMismatch {
                name: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// 保留字段（由界面物性组件独占写入）
const RESERVED_FIELDS: &[&str] = &[N_HATF_FIELD, CURVATURE_FIELD];

/// 字段名规则
///
/// - 以字母开头
/// - 仅允许字母、数字和分隔符 `_` `.` `:`
/// - 分隔符不能连续出现，也不能结尾
fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    let mut prev_sep = false;
    for ch in chars {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' => prev_sep = false,
            '_' | '.' | ':' => {
                if prev_sep {
                    return false;
                }
                prev_sep = true;
            }
            _ => return false,
        }
    }

    !prev_sep
}

/// 字段元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// 字段名称（唯一标识符）
    pub name: String,
    /// 数据类型
    pub field_type: FieldType,
    /// 存储位置
    #[serde(default)]
    pub location: FieldLocation,
    /// 物理单位（如 m², 1/m）
    pub unit: String,
    /// 描述文本
    #[serde(default)]
    pub description: String,
}

impl FieldMeta {
    fn with_kind(
        name: impl Into<String>,
        field_type: FieldType,
        location: FieldLocation,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            location,
            unit: unit.into(),
            description: String::new(),
        }
    }

    /// 单元标量场元数据
    #[inline]
    pub fn cell_scalar(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::with_kind(name, FieldType::Scalar, FieldLocation::Cell, unit)
    }

    /// 面标量场元数据
    #[inline]
    pub fn face_scalar(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::with_kind(name, FieldType::Scalar, FieldLocation::Face, unit)
    }

    /// 添加描述文本
    #[inline]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// 字段注册表
///
/// 按注册顺序保存字段元数据。保留字段一经注册不可被覆盖。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldRegistry {
    /// 名称 -> 元数据
    fields: HashMap<String, FieldMeta>,
    /// 注册顺序
    order: Vec<String>,
}

impl FieldRegistry {
    /// 创建空注册表
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 界面物性组件持久化的字段
    ///
    /// - `nHatf`: 界面单位法向与面积矢量的点积 [m²]
    /// - `interfaceProperties:K`: 界面曲率 [1/m]
    pub fn interface_properties() -> Self {
        let mut registry = Self::new();
        let metas = [
            FieldMeta::face_scalar(N_HATF_FIELD, "m²").with_desc("界面法向通量 nHat·Sf"),
            FieldMeta::cell_scalar(CURVATURE_FIELD, "1/m").with_desc("界面曲率 K"),
        ];
        for meta in metas {
            registry.insert(meta);
        }
        registry
    }

    fn insert(&mut self, meta: FieldMeta) {
        if !self.fields.contains_key(&meta.name) {
            self.order.push(meta.name.clone());
        }
        self.fields.insert(meta.name.clone(), meta);
    }

    /// 注册字段
    ///
    /// 重复注册时更新元数据并保留原顺序。
    pub fn register(&mut self, meta: FieldMeta) -> Result<(), FieldError> {
        if !is_valid_field_name(&meta.name) {
            return Err(FieldError::InvalidName(meta.name));
        }

        if RESERVED_FIELDS.contains(&meta.name.as_str()) && self.fields.contains_key(&meta.name) {
            return Err(FieldError::ReservedField(meta.name));
        }

        self.insert(meta);
        Ok(())
    }

    /// 获取字段元数据
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }

    /// 检查字段是否存在
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// 所有字段名（按注册顺序）
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// 按注册顺序迭代元数据
    pub fn iter(&self) -> impl Iterator<Item = &FieldMeta> {
        self.order.iter().filter_map(|name| self.fields.get(name))
    }

    /// 字段数量
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// 测试模块
// ============================================================================
