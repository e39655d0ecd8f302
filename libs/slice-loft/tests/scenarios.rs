//! # Loft Scenarios
//!
//! End-to-end sweeps of the built-in families: slice counts, closure,
//! winding, caps and the error paths.

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use slice_loft::{build_loft, build_loft_with, loft_mesh, LoftError, LoftOptions, Profile};
use sweep_transforms::{
    CustomFamily, DoubleMobius, Family, FamilyKind, FigureEight, Mobius, Placement, SliceSample,
    SweepFamily, Topology, Trefoil, TwistColumn,
};

fn strip() -> Profile {
    Profile::rectangle(15.0, 2.0).unwrap()
}

fn star() -> Profile {
    Profile::star(22.0, 12.0, 5).unwrap()
}

// =============================================================================
// OPEN LOFTS
// =============================================================================

#[test]
fn test_open_wall_has_two_triangles_per_edge_per_segment() {
    let segments = 80;
    let options = LoftOptions {
        cap_ends: false,
        ..LoftOptions::default()
    };
    let loft = build_loft_with(&star(), segments + 1, &TwistColumn::default(), &options).unwrap();
    let mesh = loft.to_mesh().unwrap();

    assert_eq!(loft.topology(), Topology::Open);
    assert_eq!(mesh.triangle_count(), 2 * 10 * segments);
    assert_eq!(mesh.vertex_count(), 10 * (segments + 1));
    assert_eq!(mesh.edge_census().boundary, 20);
}

#[test]
fn test_capped_column_is_closed_and_outward() {
    let mesh = loft_mesh(&star(), 81, &TwistColumn::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 10 * 80 + 2 * 8);
    assert!(mesh.is_closed_manifold());
    assert!(mesh.is_consistently_oriented());
    assert!(mesh.signed_volume() > 0.0);
    assert_eq!(mesh.connected_components(), 1);
    assert!(mesh.validate());
}

#[test]
fn test_straight_prism_volume() {
    let profile = Profile::rectangle(3.0, 2.0).unwrap();
    let mesh = loft_mesh(&profile, 2, &TwistColumn::linear(10.0, 0.0)).unwrap();
    assert_relative_eq!(mesh.signed_volume(), 60.0, epsilon = 1e-9);
    assert_relative_eq!(mesh.surface_area(), 2.0 * 6.0 + 10.0 * 10.0, epsilon = 1e-9);
}

#[test]
fn test_two_slices_open_triangle_profile() {
    let profile = Profile::polyline(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
    ])
    .unwrap();
    let identity = CustomFamily::new("identity", Topology::Open, |_| Placement::IDENTITY);
    let mesh = loft_mesh(&profile, 2, &identity).unwrap();

    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.vertex_count(), 6);
    assert!(mesh.vertices().iter().all(|v| v.z == 0.0));
}

#[test]
fn test_reversed_profile_reverses_winding_and_keeps_area() {
    let column = TwistColumn::default();
    let forward = loft_mesh(&star(), 41, &column).unwrap();
    let reversed = loft_mesh(&star().reversed(), 41, &column).unwrap();

    assert_relative_eq!(forward.surface_area(), reversed.surface_area(), max_relative = 1e-9);
    assert_relative_eq!(forward.signed_volume(), -reversed.signed_volume(), max_relative = 1e-9);
    assert!(forward.signed_volume() > 0.0);
    assert!(reversed.is_consistently_oriented());
}

#[test]
fn test_reversal_keeps_the_solid_when_diagonals_tie() {
    // edges on lines through the twist axis give wall quads with equal diagonals
    let triangle = Profile::closed(vec![
        DVec2::new(1.0, 0.0),
        DVec2::new(3.0, 0.0),
        DVec2::new(2.0, 2.0),
    ])
    .unwrap();
    let square = Profile::closed(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(0.0, 2.0),
    ])
    .unwrap();
    let cases = [
        (triangle, TwistColumn::linear(1.0, 90.0)),
        (square, TwistColumn::linear(10.0, 30.0)),
    ];
    for (profile, column) in cases {
        let forward = loft_mesh(&profile, 2, &column).unwrap();
        let reversed = loft_mesh(&profile.reversed(), 2, &column).unwrap();

        assert!(forward.is_closed_manifold());
        assert!(reversed.is_consistently_oriented());
        assert!(forward.signed_volume() > 0.0);
        assert_relative_eq!(forward.signed_volume(), -reversed.signed_volume(), max_relative = 1e-12);
        assert_relative_eq!(forward.surface_area(), reversed.surface_area(), max_relative = 1e-12);
    }
}

#[test]
fn test_open_profile_sweeps_two_sided_surface() {
    let arc = Profile::arc(10.0, 0.0, 180.0, 8).unwrap();
    let loft = build_loft(&arc, 11, &TwistColumn::default()).unwrap();
    assert!(!loft.has_caps());
    let mesh = loft.to_mesh().unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 8 * 10);
    assert!(!mesh.is_closed_manifold());
}

// =============================================================================
// CLOSED LOFTS
// =============================================================================

#[test]
fn test_trefoil_closes_into_single_component() {
    let loft = build_loft(&strip(), 121, &Trefoil::new(30.0)).unwrap();
    assert_eq!(loft.topology(), Topology::ClosedSingle);
    assert_eq!(loft.slices().len(), 121);
    assert!(loft.closure_deviation() < 1e-6);

    let mesh = loft.to_mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 120 * 4);
    assert_eq!(mesh.triangle_count(), 120 * 4 * 2);
    assert_eq!(mesh.connected_components(), 1);
    assert!(mesh.is_closed_manifold());
    let census = mesh.edge_census();
    assert_eq!(census.boundary, 0);
    assert_eq!(census.non_manifold, 0);
    assert!(mesh.validate());
}

#[test]
fn test_mobius_single_twist_needs_two_traversals() {
    let loft = build_loft(&strip(), 121, &Mobius::new(40.0, 15.0, 1)).unwrap();
    assert_eq!(loft.topology(), Topology::ClosedDouble);
    assert_eq!(loft.slices().len(), 241);
    assert!(loft.closure_deviation() < 1e-6);

    let start = &loft.slices()[0];
    let seam = &loft.slices()[120];
    assert_eq!(seam.progress(), 1.0);

    for (j, local) in strip().points().iter().enumerate() {
        let from_start = start.point(j) - start.placement().origin();
        let from_seam = seam.point(j) - seam.placement().origin();
        assert!((from_start - DVec3::new(local.x, local.y, 0.0)).length() < 1e-9);
        assert!((from_seam - DVec3::new(local.x, -local.y, 0.0)).length() < 1e-9);
    }

    let mesh = loft.to_mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 240 * 4);
    assert!(mesh.is_closed_manifold());
}

#[test]
fn test_mobius_parity_for_one_to_five_twists() {
    for twists in 1..=5 {
        let loft = build_loft(&strip(), 121, &Mobius::new(40.0, 15.0, twists)).unwrap();
        let (topology, slices) = if twists % 2 == 1 {
            (Topology::ClosedDouble, 241)
        } else {
            (Topology::ClosedSingle, 121)
        };
        assert_eq!(loft.topology(), topology, "k = {twists}");
        assert_eq!(loft.slices().len(), slices, "k = {twists}");
        assert!(loft.closure_deviation() < 1e-6, "k = {twists}");
    }
}

#[test]
fn test_every_loop_family_meshes_closed() {
    let families: Vec<Family> = vec![
        DoubleMobius::default().into(),
        FigureEight::new(30.0).into(),
        Mobius::new(40.0, 15.0, 4).into(),
    ];
    for family in &families {
        let mesh = loft_mesh(&strip(), 61, family).unwrap();
        assert!(mesh.is_closed_manifold(), "{}", family.name());
        assert!(mesh.validate(), "{}", family.name());
        assert_eq!(mesh.connected_components(), 1, "{}", family.name());
    }
}

#[test]
fn test_family_selected_by_name() {
    let kind: FamilyKind = "figure8".parse().unwrap();
    let family = Family::with_defaults(kind);
    let loft = build_loft(&strip(), 121, &family).unwrap();
    assert_eq!(loft.family_name(), "figure8");
    assert_eq!(loft.slices().len(), 121);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_zero_radius_is_degenerate() {
    let families: Vec<Box<dyn SweepFamily>> = vec![
        Box::new(Mobius::new(0.0, 15.0, 1)),
        Box::new(DoubleMobius::new(0.0, 15.0)),
        Box::new(Trefoil::new(0.0)),
        Box::new(FigureEight::new(0.0)),
    ];
    for family in &families {
        let err = build_loft(&strip(), 121, family).unwrap_err();
        assert!(
            matches!(err, LoftError::DegenerateGeometry { ref parameter, .. } if parameter == "radius"),
            "{}: {err}",
            family.name()
        );
    }
}

#[test]
fn test_twist_count_below_one_is_configuration_error() {
    let err = build_loft(&strip(), 121, &Mobius::new(40.0, 15.0, 0)).unwrap_err();
    assert!(matches!(err, LoftError::Configuration { ref parameter, .. } if parameter == "twists"));
}

#[test]
fn test_declared_loop_that_drifts_is_rejected() {
    let spiral = CustomFamily::new("spiral", Topology::ClosedSingle, |s: SliceSample| {
        Placement::translation(DVec3::new(0.0, 0.0, s.progress * 10.0))
    });
    match build_loft(&strip(), 50, &spiral) {
        Err(LoftError::ClosureMismatch {
            family,
            deviation,
            tolerance,
        }) => {
            assert_eq!(family, "spiral");
            assert_relative_eq!(deviation, 10.0, epsilon = 1e-12);
            assert!(tolerance < 1e-3);
        }
        other => panic!("expected closure mismatch, got {other:?}"),
    }
}

#[test]
fn test_loose_tolerance_accepts_small_drift() {
    let wobble = CustomFamily::new("wobble", Topology::ClosedSingle, |s: SliceSample| {
        let t = s.progress * std::f64::consts::TAU;
        Placement::translation(DVec3::new(20.0 * t.cos(), 20.0 * t.sin(), s.progress * 1e-3))
    });
    assert!(build_loft(&strip(), 50, &wobble).is_err());

    let options = LoftOptions {
        closure_tolerance: 1e-4,
        ..LoftOptions::default()
    };
    assert!(build_loft_with(&strip(), 50, &wobble, &options).is_ok());
}

#[test]
fn test_invalid_profiles_fail_before_sweeping() {
    let too_short = Profile::closed(vec![DVec2::ZERO, DVec2::X]);
    assert!(matches!(too_short, Err(LoftError::InvalidProfile { .. })));

    let flat = Profile::closed(vec![DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)]);
    assert!(matches!(flat, Err(LoftError::InvalidProfile { .. })));
}

#[test]
fn test_single_slice_is_rejected() {
    let err = build_loft(&strip(), 1, &Trefoil::new(30.0)).unwrap_err();
    assert!(matches!(err, LoftError::Configuration { ref parameter, .. } if parameter == "slices"));
}
