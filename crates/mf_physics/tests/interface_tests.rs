// crates/mf_physics/tests/interface_tests.rs

//! 界面物性集成测试

use std::collections::BTreeMap;

use glam::DVec2;
use mf_config::{
    AlphaControls, AlphaPatchSpec, ContactAngleLimit, SigmaEntry, SurfaceTensionDict,
    TransportProperties,
};
use mf_mesh::RectMeshGenerator;
use mf_physics::boundary::{AlphaBoundaryConditions, AlphaPatchCondition, ContactAngleCondition};
use mf_physics::fields::{
    FieldError, FieldStore, VolScalarField, VolVectorField, VolumeFraction, APERTURE_FIELD,
    CURVATURE_FIELD, N_HATF_FIELD,
};
use mf_physics::numerics::div;
use mf_physics::{InterfaceError, InterfaceProperties, PhysicsMesh};

// ============================================================
// 测试工具
// ============================================================

fn rect(nx: usize, ny: usize, lx: f64, ly: f64) -> PhysicsMesh {
    PhysicsMesh::from_frozen(&RectMeshGenerator::new(nx, ny, lx, ly).build().unwrap())
}

fn step_values(mesh: &PhysicsMesh, x0: f64) -> Vec<f64> {
    mesh.cells()
        .map(|c| if mesh.cell_center(c).x < x0 { 1.0 } else { 0.0 })
        .collect()
}

fn zero_gradient_alpha(mesh: &PhysicsMesh, values: Vec<f64>) -> VolumeFraction {
    VolumeFraction::new(
        mesh,
        "alpha.water",
        values,
        AlphaBoundaryConditions::zero_gradient(mesh),
    )
    .unwrap()
}

fn still(mesh: &PhysicsMesh) -> VolVectorField {
    VolVectorField::uniform("U", mesh, DVec2::ZERO)
}

fn unit_aperture(mesh: &PhysicsMesh) -> VolScalarField {
    VolScalarField::uniform(APERTURE_FIELD, mesh, 1.0)
}

// ============================================================
// 曲率
// ============================================================

#[test]
fn test_curvature_without_smoothing_matches_formula() {
    let mesh = rect(8, 6, 1.0, 0.75);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.4));
    let u = still(&mesh);

    let ap: Vec<f64> = mesh.cells().map(|c| 1e-3 * (1.0 + 0.01 * c as f64)).collect();
    let aperture = VolScalarField::extrapolated(APERTURE_FIELD, &mesh, ap).unwrap();

    let transport = TransportProperties::new(60.0, 2.0, 0.07);
    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &transport,
        &AlphaControls::new(1.0, 0, 0),
        aperture.clone(),
    )
    .unwrap();

    let div_n = div(&mesh, props.n_hatf());
    let c = 2.0 * 60.0_f64.to_radians().cos();

    for cell in mesh.cells() {
        let expected = -div_n.get(cell) - c / (2.0 * aperture.get(cell));
        let k = props.k().get(cell);
        assert!(
            (k - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "cell {}: K = {}, expected {}",
            cell,
            k,
            expected
        );
    }
    assert_eq!(props.k().name(), CURVATURE_FIELD);
    assert_eq!(props.n_hatf().name(), N_HATF_FIELD);
}

#[test]
fn test_planar_interface_has_no_curvature_away_from_step() {
    let nx = 10;
    let mesh = rect(nx, 10, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(90.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    for cell in mesh.cells() {
        let i = cell % nx;
        if i <= 2 || i >= 7 {
            assert!(props.k().get(cell).abs() < 1e-9, "cell {}: K = {}", cell, props.k().get(cell));
        }
    }

    // 沿界面方向各行一致
    for j in 1..10 {
        for i in 0..nx {
            assert_eq!(props.k().get(j * nx + i), props.k().get(i));
        }
    }
}

#[test]
fn test_droplet_curvature_close_to_inverse_radius() {
    let n = 40;
    let mesh = rect(n, n, 1.0, 1.0);
    let h = 1.0 / n as f64;
    let radius = 0.25;
    let center = DVec2::splat(0.5);

    let values = mesh
        .cells()
        .map(|c| {
            let r = (mesh.cell_center(c) - center).length();
            0.5 * (1.0 - ((r - radius) / (2.0 * h)).tanh())
        })
        .collect();
    let mut alpha = zero_gradient_alpha(&mesh, values);
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(90.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 2, 2),
        VolScalarField::uniform(APERTURE_FIELD, &mesh, 1e30),
    )
    .unwrap();

    let band: Vec<f64> = mesh
        .cells()
        .filter(|&c| (0.3..=0.7).contains(&alpha.values()[c]))
        .map(|c| props.k().get(c))
        .collect();
    assert!(!band.is_empty());

    let mean = band.iter().sum::<f64>() / band.len() as f64;
    let exact = 1.0 / radius;
    assert!(
        (mean - exact).abs() / exact < 0.3,
        "界面带平均曲率 {} 与 1/R = {} 偏差过大",
        mean,
        exact
    );
}

#[test]
fn test_correct_is_repeatable() {
    let mesh = rect(12, 12, 1.0, 1.0);
    let values = mesh
        .cells()
        .map(|c| {
            let r = (mesh.cell_center(c) - DVec2::new(0.4, 0.5)).length();
            if r < 0.3 {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    let mut specs = BTreeMap::new();
    specs.insert("top".to_string(), AlphaPatchSpec::FixedValue { value: 0.0 });
    let bcs = AlphaBoundaryConditions::from_specs(&mesh, &specs).unwrap();
    let mut alpha = VolumeFraction::new(&mesh, "alpha.water", values, bcs).unwrap();
    let u = still(&mesh);

    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(70.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 2, 2),
        VolScalarField::uniform(APERTURE_FIELD, &mesh, 5e-4),
    )
    .unwrap();

    let n_hatf = props.n_hatf().values().to_vec();
    let k = props.k().clone();

    props.correct(&mut alpha, &u).unwrap();
    assert_eq!(props.n_hatf().values(), n_hatf.as_slice());
    assert_eq!(props.k(), &k);
}

// ============================================================
// 接触角
// ============================================================

#[test]
fn test_wall_normal_follows_contact_angle() {
    let nx = 10;
    let mesh = rect(nx, 10, 1.0, 1.0);

    let mut specs = BTreeMap::new();
    specs.insert(
        "bottom".to_string(),
        AlphaPatchSpec::ConstantContactAngle {
            theta0: 60.0,
            limit: ContactAngleLimit::None,
        },
    );
    let bcs = AlphaBoundaryConditions::from_specs(&mesh, &specs).unwrap();
    let mut alpha = VolumeFraction::new(&mesh, "alpha.water", step_values(&mesh, 0.5), bcs).unwrap();
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(90.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    let bottom = mesh.patch("bottom").unwrap();
    let patch = alpha.boundary_conditions().patch("bottom").unwrap();
    let gradient = patch.as_contact_angle().unwrap().gradient();
    let cos_theta = 60.0_f64.to_radians().cos();

    let mut checked = 0;
    for (i, &face) in bottom.faces.iter().enumerate() {
        let x = mesh.cell_center(mesh.face_owner(face)).x;
        if (0.4..0.6).contains(&x) {
            // nHatf_b = nHat·nf·|Sf|
            let n_dot_nf = props.n_hatf().get(face) / mesh.mag_sf(face);
            assert!((n_dot_nf - cos_theta).abs() < 1e-6, "face {}: {}", face, n_dot_nf);

            // |∇α_f| = 0.5/dx
            assert!((gradient[i] - cos_theta * 5.0).abs() < 1e-5);
            checked += 1;
        }
    }
    assert_eq!(checked, 2);
}

#[test]
fn test_contact_angle_updates_wall_values() {
    let mesh = rect(10, 10, 1.0, 1.0);

    let mut specs = BTreeMap::new();
    specs.insert(
        "bottom".to_string(),
        AlphaPatchSpec::ConstantContactAngle {
            theta0: 30.0,
            limit: ContactAngleLimit::Alpha,
        },
    );
    let bcs = AlphaBoundaryConditions::from_specs(&mesh, &specs).unwrap();
    let mut alpha = VolumeFraction::new(&mesh, "alpha.water", step_values(&mesh, 0.5), bcs).unwrap();
    let before = alpha.boundary_conditions().boundary_values();

    InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &still(&mesh),
        &TransportProperties::new(90.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    let after = alpha.boundary_conditions().boundary_values();
    assert_ne!(before, after);
    assert!(after.iter().all(|&v| (0.0..=1.0).contains(&v)));

    // 单元值不变
    assert_eq!(alpha.values(), step_values(&mesh, 0.5).as_slice());
}

#[test]
fn test_contact_angle_curvature_settles_over_corrections() {
    let mesh = rect(10, 10, 1.0, 1.0);
    let values = mesh
        .cells()
        .map(|c| {
            let r = (mesh.cell_center(c) - DVec2::new(0.5, 0.0)).length();
            if r < 0.35 {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    let mut specs = BTreeMap::new();
    specs.insert(
        "bottom".to_string(),
        AlphaPatchSpec::ConstantContactAngle {
            theta0: 60.0,
            limit: ContactAngleLimit::None,
        },
    );
    let bcs = AlphaBoundaryConditions::from_specs(&mesh, &specs).unwrap();
    let mut alpha = VolumeFraction::new(&mesh, "alpha.water", values, bcs).unwrap();
    let u = still(&mesh);

    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(90.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 1, 1),
        unit_aperture(&mesh),
    )
    .unwrap();

    let max_change = |a: &VolScalarField, b: &VolScalarField| {
        a.internal()
            .iter()
            .zip(b.internal())
            .fold(0.0_f64, |m, (x, y)| m.max((x - y).abs()))
    };

    // 壁面梯度写回边界条件后参与下一次梯度计算
    let first = props.k().clone();
    props.correct(&mut alpha, &u).unwrap();
    let scale = first.internal().iter().fold(0.0_f64, |m, k| m.max(k.abs()));
    assert!(max_change(&first, props.k()) > 1e-6 * scale);

    let mut change = f64::INFINITY;
    for _ in 0..200 {
        let previous = props.k().clone();
        props.correct(&mut alpha, &u).unwrap();
        change = max_change(&previous, props.k());
        if change <= 1e-12 * scale {
            break;
        }
    }
    assert!(change <= 1e-12 * scale, "K still changing by {}", change);
}

// ============================================================
// 派生量
// ============================================================

#[test]
fn test_near_interface_thresholds() {
    let mesh = rect(7, 1, 7.0, 1.0);
    let values = vec![0.0, 0.005, 0.01, 0.5, 0.99, 0.995, 1.0];
    let mut alpha = zero_gradient_alpha(&mesh, values);
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::default(),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    let near = props.near_interface(&alpha);
    assert_eq!(near.internal(), &[0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(near.name(), "nearInterface");

    // 零梯度边界上的 α 等于相邻单元
    for face in mesh.boundary_faces() {
        let owner = mesh.face_owner(face);
        assert_eq!(near.boundary()[mesh.boundary_index(face)], near.get(owner));
    }
}

#[test]
fn test_sigma_k_scales_curvature() {
    let mesh = rect(10, 10, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.35));
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(75.0, 1.0, 0.0725),
        &AlphaControls::new(1.0, 1, 1),
        VolScalarField::uniform(APERTURE_FIELD, &mesh, 2e-4),
    )
    .unwrap();

    let sigma_k = props.sigma_k();
    for cell in mesh.cells() {
        assert_eq!(sigma_k.get(cell), 0.0725 * props.k().get(cell));
    }
    for (s, k) in sigma_k.boundary().iter().zip(props.k().boundary()) {
        assert_eq!(*s, 0.0725 * k);
    }
}

#[test]
fn test_surface_tension_force() {
    let mesh = rect(6, 4, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let u = still(&mesh);

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(60.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 0, 0),
        VolScalarField::uniform(APERTURE_FIELD, &mesh, 1e-3),
    )
    .unwrap();

    let force = props.surface_tension_force(&alpha).unwrap();
    let sigma_k = props.sigma_k();

    for face in mesh.interior_faces() {
        let owner = mesh.face_owner(face);
        let neigh = mesh.face_neighbor(face).unwrap();
        let w = mesh.weight(face);
        let sk_f = w * sigma_k.get(owner) + (1.0 - w) * sigma_k.get(neigh);
        let sn = (alpha.values()[neigh] - alpha.values()[owner]) * mesh.delta_coeff(face);
        assert!((force.get(face) - sk_f * sn).abs() <= 1e-12 * (sk_f * sn).abs().max(1.0));
    }

    // 零梯度边界无表面张力
    for face in mesh.boundary_faces() {
        assert_eq!(force.get(face), 0.0);
    }
}

// ============================================================
// 重新读取与错误
// ============================================================

#[test]
fn test_read_refreshes_cached_configuration() {
    let mesh = rect(6, 6, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let u = still(&mesh);
    let transport = TransportProperties::new(60.0, 1.0, 0.07);
    let controls = AlphaControls::new(1.0, 1, 1);

    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &transport,
        &controls,
        unit_aperture(&mesh),
    )
    .unwrap();

    let c_alpha = props.c_alpha();
    let sigma_before = props.sigma_k();
    props.read(&transport, &controls).unwrap();
    assert_eq!(props.c_alpha().to_bits(), c_alpha.to_bits());
    assert_eq!(props.sigma_k(), sigma_before);

    props
        .read(&TransportProperties::new(45.0, 1.5, 0.05), &AlphaControls::new(0.5, 3, 3))
        .unwrap();
    assert_eq!(props.c_alpha(), 0.5);
    assert!((props.contact_angle() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    assert_eq!(props.aperture_correction_factor(), 1.5);
    // 平滑次数只在构造时读取
    assert_eq!(props.smooth_itr(), 1);
    assert_eq!(props.k_smooth_itr(), 1);

    let sigma_k = props.sigma_k();
    for cell in mesh.cells() {
        assert_eq!(sigma_k.get(cell), 0.05 * props.k().get(cell));
    }
}

#[test]
fn test_read_rejects_model_change() {
    let mesh = rect(4, 4, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let u = still(&mesh);
    let controls = AlphaControls::new(1.0, 0, 0);

    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::default(),
        &controls,
        unit_aperture(&mesh),
    )
    .unwrap();

    let mut transport = TransportProperties::default();
    transport.sigma = SigmaEntry::Model(
        SurfaceTensionDict::new("temperatureLinear")
            .with_coeff("sigma0", 0.072)
            .with_coeff("dSigmaDT", -1.5e-4)
            .with_coeff("T", 300.0)
            .with_coeff("Tref", 293.15),
    );

    let result = props.read(&transport, &AlphaControls::new(0.2, 0, 0));
    assert!(matches!(result, Err(InterfaceError::SurfaceTension(_))));
    assert_eq!(props.c_alpha(), 1.0);
}

#[test]
fn test_missing_aperture_in_store() {
    let mesh = rect(4, 4, 1.0, 1.0);
    let mut store = FieldStore::new();
    store.insert(VolScalarField::uniform("h", &mesh, 1.0));

    let result: Result<_, InterfaceError> = store.aperture().map_err(InterfaceError::from);
    assert!(matches!(
        result,
        Err(InterfaceError::Field(FieldError::NotFound(ref name))) if name == APERTURE_FIELD
    ));
}

#[test]
fn test_size_mismatch_leaves_state_untouched() {
    let mesh = rect(6, 6, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let u = still(&mesh);

    let mut props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &u,
        &TransportProperties::new(60.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 1, 1),
        unit_aperture(&mesh),
    )
    .unwrap();
    let k = props.k().clone();

    let other = rect(5, 6, 1.0, 1.0);
    let mut wrong = zero_gradient_alpha(&other, step_values(&other, 0.5));
    let result = props.correct(&mut wrong, &u);
    assert!(matches!(
        result,
        Err(InterfaceError::Field(FieldError::SizeMismatch { .. }))
    ));
    assert_eq!(props.k(), &k);

    let bad_aperture = VolScalarField::uniform(APERTURE_FIELD, &other, 1.0);
    assert!(props.set_aperture(bad_aperture).is_err());
}

#[test]
fn test_surface_tension_force_rejects_mismatched_boundary() {
    let mesh = rect(2, 3, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));
    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &still(&mesh),
        &TransportProperties::new(60.0, 1.0, 0.07),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    // 单元数相同，边界面数不同
    let other = rect(1, 6, 1.0, 1.0);
    let wrong = zero_gradient_alpha(&other, step_values(&other, 0.5));
    assert_eq!(wrong.n_cells(), mesh.n_cells());

    let result = props.surface_tension_force(&wrong);
    assert!(matches!(
        result,
        Err(InterfaceError::Field(FieldError::SizeMismatch { .. }))
    ));
}

#[test]
fn test_invalid_controls_rejected() {
    let mesh = rect(4, 4, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));

    let result = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &still(&mesh),
        &TransportProperties::default(),
        &AlphaControls::new(-1.0, 0, 0),
        unit_aperture(&mesh),
    );
    assert!(matches!(result, Err(InterfaceError::Config(_))));
}

#[test]
fn test_delta_n_scales_with_cell_size() {
    let mesh = rect(10, 10, 1.0, 1.0);
    let mut alpha = zero_gradient_alpha(&mesh, step_values(&mesh, 0.5));

    let props = InterfaceProperties::new(
        &mesh,
        &mut alpha,
        &still(&mesh),
        &TransportProperties::default(),
        &AlphaControls::new(1.0, 0, 0),
        unit_aperture(&mesh),
    )
    .unwrap();

    let expected = 1e-8 / 0.01_f64.cbrt();
    assert!((props.delta_n() - expected).abs() < 1e-20);
    assert!(props.field_registry().contains(N_HATF_FIELD));
    assert_eq!(props.surface_tension_model().name(), "constant");
}
