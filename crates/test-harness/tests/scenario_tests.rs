//! End-to-end scenarios: every solvable configuration, every rejection
//! path, and the layout integration.

use test_harness::helpers::{aas, asa, sas, ssa, sss};
use triangle_layout::layout;
use triangle_solver::{has_enough_information, solve, SolveError};
use triangle_types::{Classification, SolveCase, TriangleSpec, Vertex};

// ── Solvable Configurations ─────────────────────────────────────────────────

#[test]
fn sss_3_4_5_is_a_right_scalene_triangle() {
    let solved = solve(sss(3.0, 4.0, 5.0)).unwrap();
    assert_eq!(solved.case, SolveCase::Sss);
    assert_eq!(solved.angles, [36.8699, 53.1301, 90.0]);
    assert_eq!(solved.area, 6.0);
    assert_eq!(solved.perimeter, 12.0);
    assert_eq!(solved.classification, Classification::Scalene);
}

#[test]
fn sss_5_5_5_is_equilateral() {
    let solved = solve(sss(5.0, 5.0, 5.0)).unwrap();
    assert_eq!(solved.classification, Classification::Equilateral);
    assert_eq!(solved.angles, [60.0, 60.0, 60.0]);
    // 25·√3/4
    assert_eq!(solved.area, 10.8253);
}

#[test]
fn sas_recovers_the_3_4_5_triangle() {
    let solved = solve(sas(3.0, 4.0, 90.0)).unwrap();
    assert_eq!(solved.case.name(), "SAS");
    assert_eq!(solved.side(Vertex::C), 5.0);
    assert_eq!(solved.angle(Vertex::A), 36.8699);
    assert_eq!(solved.angle(Vertex::B), 53.1301);
}

#[test]
fn asa_solves_the_remaining_sides() {
    let solved = solve(asa(60.0, 60.0, 5.0)).unwrap();
    assert_eq!(solved.case.name(), "ASA");
    assert_eq!(solved.angle(Vertex::C), 60.0);
    assert_eq!(solved.side(Vertex::A), 5.0);
    assert_eq!(solved.side(Vertex::B), 5.0);
    assert_eq!(solved.classification, Classification::Equilateral);
}

#[test]
fn aas_solves_via_the_law_of_sines() {
    // α = 30°, β = 60°, a = 1: the 30-60-90 triangle.
    let solved = solve(aas(30.0, 60.0, 1.0)).unwrap();
    assert_eq!(solved.case.name(), "AAS");
    assert_eq!(solved.angle(Vertex::C), 90.0);
    assert_eq!(solved.side(Vertex::B), 1.7321);
    assert_eq!(solved.side(Vertex::C), 2.0);
}

#[test]
fn ssa_takes_the_first_solution_branch() {
    // a = 10, b = 3, α = 30°: height 1.5 < 10, unambiguous here.
    let solved = solve(ssa(10.0, 3.0, 30.0)).unwrap();
    assert_eq!(solved.case.name(), "SSA");
    assert_eq!(solved.angle(Vertex::A), 30.0);
    let sum: f64 = solved.angles.iter().sum();
    assert!((sum - 180.0).abs() <= 0.01, "angle sum {}", sum);
}

#[test]
fn ssa_tangent_case_yields_a_right_triangle() {
    // height = 10·sin 30° = 5 = a.
    let solved = solve(ssa(5.0, 10.0, 30.0)).unwrap();
    assert_eq!(solved.angle(Vertex::B), 90.0);
    assert_eq!(solved.angle(Vertex::C), 60.0);
}

// ── Rejection Paths ─────────────────────────────────────────────────────────

#[test]
fn ssa_with_height_above_opposite_side_has_no_solution() {
    // a = 2, b = 10, α = 30°: height 5 > 2.
    assert_eq!(solve(ssa(2.0, 10.0, 30.0)), Err(SolveError::NoSsaSolution));
}

#[test]
fn two_sides_alone_are_insufficient() {
    let spec = TriangleSpec::new()
        .with_side(Vertex::A, 3.0)
        .with_side(Vertex::B, 4.0);
    assert!(!has_enough_information(&spec));
    assert_eq!(solve(spec), Err(SolveError::Insufficient));
}

#[test]
fn three_angles_without_a_side_are_insufficient() {
    let spec = TriangleSpec::new()
        .with_angle(Vertex::A, 60.0)
        .with_angle(Vertex::B, 60.0)
        .with_angle(Vertex::C, 60.0);
    assert!(!has_enough_information(&spec));
    assert_eq!(solve(spec), Err(SolveError::Insufficient));
}

#[test]
fn degenerate_sides_fail_the_triangle_inequality() {
    assert_eq!(
        solve(sss(1.0, 2.0, 3.0)),
        Err(SolveError::TriangleInequality)
    );
    assert_eq!(
        solve(sss(1.0, 1.0, 10.0)),
        Err(SolveError::TriangleInequality)
    );
}

#[test]
fn two_angles_summing_past_180_fail() {
    assert_eq!(solve(asa(100.0, 80.0, 5.0)), Err(SolveError::AngleSum));
    assert_eq!(solve(aas(120.0, 61.0, 5.0)), Err(SolveError::AngleSum));
}

// ── Purity ──────────────────────────────────────────────────────────────────

#[test]
fn repeated_solves_are_bit_identical() {
    let specs = [
        sss(3.0, 4.0, 5.0),
        sas(7.3, 4.1, 71.0),
        asa(42.0, 77.0, 12.5),
        ssa(10.0, 3.0, 30.0),
    ];
    for spec in specs {
        assert_eq!(solve(spec), solve(spec));
    }
}

// ── Layout Integration ──────────────────────────────────────────────────────

#[test]
fn solved_triangle_lays_out_with_consistent_geometry() {
    let solved = solve(sss(3.0, 4.0, 5.0)).unwrap();
    let diagram = layout(&solved);

    let [a, b, c] = diagram.vertices;
    assert!((a.distance_to(&b) - solved.side(Vertex::C)).abs() < 1e-3);
    assert!((a.distance_to(&c) - solved.side(Vertex::B)).abs() < 1e-3);
    assert!((b.distance_to(&c) - solved.side(Vertex::A)).abs() < 1e-3);

    assert!(diagram.view_box.width > 0.0);
    assert!(diagram.view_box.height > 0.0);
}
