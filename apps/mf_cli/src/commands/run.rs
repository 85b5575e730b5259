// apps/mf_cli/src/commands/run.rs

//! 计算界面物性
//!
//! 按算例配置生成矩形网格与初始体积分数，构造界面物性并逐步刷新，
//! 可选地把最终的 nHatf、K、σK 与界面指示器写成 JSON 快照。

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use glam::DVec2;
use mf_config::{CaseConfig, InitialCondition};
use mf_mesh::RectMeshGenerator;
use mf_physics::boundary::AlphaBoundaryConditions;
use mf_physics::fields::{
    FieldMeta, FieldStore, VolScalarField, VolVectorField, VolumeFraction, APERTURE_FIELD,
};
use mf_physics::{InterfaceProperties, PhysicsMesh};
use serde::Serialize;
use tracing::{debug, info};

/// 运行参数
#[derive(Args)]
pub struct RunArgs {
    /// 算例配置文件路径（JSON），省略时使用默认液滴算例
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 覆盖配置中的步数
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// 结果快照输出路径（JSON）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 结果快照
#[derive(Serialize)]
struct Snapshot<'a> {
    alpha_name: &'a str,
    n_cells: usize,
    n_faces: usize,
    delta_n: f64,
    fields: Vec<FieldMeta>,
    alpha: &'a [f64],
    n_hatf: &'a [f64],
    curvature: &'a [f64],
    sigma_k: Vec<f64>,
    near_interface: Vec<f64>,
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    info!("=== MariFilm 界面物性 ===");

    let case = super::load_case(args.config.as_deref())?;
    let steps = args.steps.unwrap_or(case.run.steps);

    let frozen = RectMeshGenerator::new(case.mesh.nx, case.mesh.ny, case.mesh.lx, case.mesh.ly)
        .build()
        .context("网格生成失败")?;
    let mesh = PhysicsMesh::new(Arc::new(frozen));
    info!(
        "网格: {}x{} 单元, {} 面, 平均单元面积 {:.3e} m²",
        case.mesh.nx,
        case.mesh.ny,
        mesh.n_faces(),
        mesh.mean_cell_volume()
    );

    let bcs = AlphaBoundaryConditions::from_specs(&mesh, &case.alpha.boundary)
        .context("体积分数边界条件无效")?;
    info!("接触角边界片: {} 个", bcs.contact_angle_count());

    let mut alpha = VolumeFraction::new(&mesh, &case.alpha.name, initial_alpha(&mesh, &case), bcs)
        .context("体积分数场构造失败")?;

    let [ux, uy] = case.velocity.uniform;
    let u = VolVectorField::uniform("U", &mesh, DVec2::new(ux, uy));

    let mut store = FieldStore::new();
    store.insert(VolScalarField::uniform(APERTURE_FIELD, &mesh, case.aperture.value));
    let aperture = store.aperture()?.clone();

    let start = Instant::now();
    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &case.transport,
        case.alpha_controls()?,
        aperture,
    )
    .context("界面物性构造失败")?;
    report(&props, &alpha, 0);

    for step in 1..=steps {
        props.correct(&mut alpha, &u)?;
        report(&props, &alpha, step);
    }
    info!("完成 {} 步, 用时 {:.3} s", steps, start.elapsed().as_secs_f64());

    if let Some(path) = &args.output {
        write_snapshot(path, &mesh, &props, &alpha)?;
        info!("快照已写出: {}", path.display());
    }

    Ok(())
}

/// 初始体积分数（按单元中心判定）
fn initial_alpha(mesh: &PhysicsMesh, case: &CaseConfig) -> Vec<f64> {
    mesh.cells()
        .map(|c| {
            let p = mesh.cell_center(c);
            let inside = match case.initial {
                InitialCondition::Droplet { center, radius } => {
                    (p - DVec2::from_array(center)).length() <= radius
                }
                InitialCondition::Planar { position } => p.x < position,
            };
            if inside {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

fn report(props: &InterfaceProperties, alpha: &VolumeFraction, step: usize) {
    let near = props.near_interface(alpha);
    let band: Vec<f64> = near
        .internal()
        .iter()
        .zip(props.k().internal())
        .filter(|(&n, _)| n > 0.0)
        .map(|(_, &k)| k)
        .collect();

    if band.is_empty() {
        info!("步 {}: 无界面单元", step);
        return;
    }

    let mean = band.iter().sum::<f64>() / band.len() as f64;
    let (lo, hi) = band
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &k| (lo.min(k), hi.max(k)));
    info!(
        "步 {}: 界面单元 {} 个, K 平均 {:.4e} 1/m, 范围 [{:.4e}, {:.4e}]",
        step,
        band.len(),
        mean,
        lo,
        hi
    );

    let (k_lo, k_hi) = props.k().min_max();
    debug!("全场 K 范围 [{:.4e}, {:.4e}]", k_lo, k_hi);
}

fn write_snapshot(
    path: &Path,
    mesh: &PhysicsMesh,
    props: &InterfaceProperties,
    alpha: &VolumeFraction,
) -> Result<()> {
    let snapshot = Snapshot {
        alpha_name: alpha.name(),
        n_cells: mesh.n_cells(),
        n_faces: mesh.n_faces(),
        delta_n: props.delta_n(),
        fields: props.field_registry().iter().cloned().collect(),
        alpha: alpha.values(),
        n_hatf: props.n_hatf().values(),
        curvature: props.k().internal(),
        sigma_k: props.sigma_k().internal().to_vec(),
        near_interface: props.near_interface(alpha).internal().to_vec(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json).with_context(|| format!("无法写出快照: {}", path.display()))?;
    Ok(())
}
