// apps/mf_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示默认算例、可用模型与网格统计。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mf_mesh::RectMeshGenerator;
use mf_physics::fields::FieldRegistry;
use mf_physics::surface_tension::available_models;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 算例配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出默认算例配置
    #[arg(long)]
    pub defaults: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== MariFilm 信息 ===");

    if args.defaults {
        let json = mf_config::CaseConfig::default().to_json_pretty()?;
        println!("{}", json);
        return Ok(());
    }

    println!("MariFilm CLI 版本: {}", env!("CARGO_PKG_VERSION"));

    println!("\n表面张力模型:");
    for name in available_models() {
        println!("  - {}", name);
    }

    println!("\n持久化字段:");
    for meta in FieldRegistry::interface_properties().iter() {
        println!("  - {} [{}] {}", meta.name, meta.unit, meta.description);
    }

    let case = super::load_case(args.config.as_deref())?;
    let controls = case.alpha_controls()?;

    println!("\n=== 算例 ===");
    println!("体积分数场: {}", case.alpha.name);
    println!(
        "接触角: {}°, 开度修正系数: {}, 表面张力模型: {}",
        case.transport.contact_angle,
        case.transport.aperture_correction_factor,
        case.transport.sigma.model_name()
    );
    println!(
        "cAlpha: {}, 体积分数平滑: {} 次, 曲率平滑: {} 次",
        controls.c_alpha, controls.smooth_itr, controls.k_smooth_itr
    );
    for (patch, spec) in &case.alpha.boundary {
        println!("边界片 {}: {:?}", patch, spec);
    }

    let mesh = RectMeshGenerator::new(case.mesh.nx, case.mesh.ny, case.mesh.lx, case.mesh.ly)
        .build()
        .context("网格生成失败")?;
    println!("\n{}", mesh.statistics());

    Ok(())
}
