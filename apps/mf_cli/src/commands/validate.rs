// apps/mf_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 检查算例配置能否解析、参数是否有效、边界片名称是否与网格一致。

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use mf_config::{AlphaPatchSpec, CaseConfig};
use mf_mesh::RectMeshGenerator;
use mf_physics::boundary::AlphaBoundaryConditions;
use mf_physics::surface_tension::new_surface_tension_model;
use mf_physics::PhysicsMesh;
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 算例配置文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== MariFilm 配置验证 ===");

    let mut result = ValidationResult::default();
    if let Some(case) = load(&args.config, &mut result) {
        check_case(&case, &mut result);
    }

    print_validation_result(&result, args.strict)
}

fn load(path: &Path, result: &mut ValidationResult) -> Option<CaseConfig> {
    println!("\n检查配置文件: {}", path.display());

    match CaseConfig::from_file(path) {
        Ok(case) => {
            println!("  ✓ 配置文件格式有效");
            Some(case)
        }
        Err(e) => {
            result.add_error(e.to_string());
            None
        }
    }
}

fn check_case(case: &CaseConfig, result: &mut ValidationResult) {
    if let Err(e) = new_surface_tension_model(&case.transport) {
        result.add_error(e.to_string());
    }

    let theta = case.transport.contact_angle;
    if theta <= 0.0 || theta >= 180.0 {
        result.add_warning(format!("全局接触角 {}° 超出 (0, 180)", theta));
    }

    if let Ok(controls) = case.alpha_controls() {
        if controls.smooth_itr > 10 || controls.k_smooth_itr > 10 {
            result.add_warning(format!(
                "平滑次数较大 ({}/{})，界面可能被过度抹平",
                controls.smooth_itr, controls.k_smooth_itr
            ));
        }
    }

    for (patch, spec) in &case.alpha.boundary {
        if let AlphaPatchSpec::DynamicContactAngle { theta_a, theta_r, .. } = spec {
            if theta_a < theta_r {
                result.add_warning(format!(
                    "边界片 '{}' 前进角 {}° 小于后退角 {}°",
                    patch, theta_a, theta_r
                ));
            }
        }
    }

    let frozen = match RectMeshGenerator::new(case.mesh.nx, case.mesh.ny, case.mesh.lx, case.mesh.ly)
        .build()
    {
        Ok(frozen) => frozen,
        Err(e) => {
            result.add_error(format!("网格生成失败: {}", e));
            return;
        }
    };
    let mesh = PhysicsMesh::from_frozen(&frozen);

    match AlphaBoundaryConditions::from_specs(&mesh, &case.alpha.boundary) {
        Ok(bcs) => {
            println!("  ✓ 边界条件有效 ({} 个接触角边界片)", bcs.contact_angle_count());
        }
        Err(e) => result.add_error(e.to_string()),
    }
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
        }
    }

    if result.is_ok(strict) {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
