// crates/mf_physics/src/fields/store.rs

//! 命名单元场存储
//!
//! 驱动程序在构造界面物性组件之前按名称取出外部场（如开度），
//! 组件本身只接收已解析的场。

use std::collections::BTreeMap;

use super::{FieldError, VolScalarField};

/// 开度场名
pub const APERTURE_FIELD: &str = "aperture";

/// 单元标量场存储
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: BTreeMap<String, VolScalarField>,
}

impl FieldStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 以场名为键插入，返回被替换的旧场
    pub fn insert(&mut self, field: VolScalarField) -> Option<VolScalarField> {
        self.fields.insert(field.name().to_string(), field)
    }

    /// 按名称查找
    pub fn get(&self, name: &str) -> Result<&VolScalarField, FieldError> {
        self.fields
            .get(name)
            .ok_or_else(|| FieldError::NotFound(name.to_string()))
    }

    /// 取出开度场
    pub fn aperture(&self) -> Result<&VolScalarField, FieldError> {
        self.get(APERTURE_FIELD)
    }

    /// 是否包含
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// 所有场名（字典序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// 场数量
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
