// apps/mf_cli/src/commands/mod.rs

//! 子命令

pub mod info;
pub mod run;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use mf_config::CaseConfig;

/// 读取算例配置，未给出路径时使用默认算例
pub fn load_case(path: Option<&Path>) -> Result<CaseConfig> {
    match path {
        Some(path) => CaseConfig::from_file(path)
            .with_context(|| format!("无法加载算例配置: {}", path.display())),
        None => Ok(CaseConfig::default()),
    }
}
