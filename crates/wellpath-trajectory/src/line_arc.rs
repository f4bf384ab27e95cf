//! Sequencing of targets into a chain of line and arc segments.

use std::f64::consts::PI;

use log::debug;
use wellpath_curves::{CurveStatus, JCurve, SCurve, SCurveSolverOptions, SolveStatus};
use wellpath_math::{OffshoreSphericalCoords, Point3, Vec3};

use crate::target::{TangentAngles, WellTarget, WellTargetStatus};

/// Adjacent targets closer than this are skipped without emitting geometry.
const COINCIDENT_DISTANCE: f64 = 1e-6;

/// A target with its tangent fully resolved, in absolute coordinates.
#[derive(Debug, Clone, Copy)]
struct ResolvedTarget {
    point: Point3,
    azimuth: f64,
    inclination: f64,
    has_tangent: bool,
    radius1: f64,
    radius2: f64,
}

/// The line/arc boundary chain built from an ordered target list.
///
/// `endpoints` holds the boundary vertices between straight and arc
/// segments, not a resampled polyline; feed it to
/// [`sample_polyline`](crate::sample_polyline) for display geometry or to
/// [`well_plan`](crate::well_plan) for a survey table.
#[derive(Debug, Clone)]
pub struct LineArcWellPath {
    /// Unit tangent at the first endpoint.
    pub start_tangent: Vec3,
    /// Ordered line/arc boundary vertices, absolute coordinates.
    pub endpoints: Vec<Point3>,
    /// One status per input target, in input order.
    pub target_statuses: Vec<WellTargetStatus>,
}

impl LineArcWellPath {
    /// Build the chain from targets stored relative to `reference`.
    ///
    /// Unconstrained interior targets receive a smoothing tangent from
    /// their neighbors; an unconstrained first or last target is reached
    /// through a J-curve; consecutive constrained targets are joined by
    /// S-curves. Infeasible radii are substituted with feasible ones and
    /// recorded in the per-target statuses.
    pub fn from_targets(targets: &[WellTarget], reference: &Point3) -> Self {
        let n = targets.len();
        let mut statuses = vec![WellTargetStatus::default(); n];
        let down = OffshoreSphericalCoords::unit_vector(0.0, 0.0);

        if n == 0 {
            return Self {
                start_tangent: down,
                endpoints: Vec::new(),
                target_statuses: statuses,
            };
        }

        let mut resolved: Vec<ResolvedTarget> = targets
            .iter()
            .map(|t| ResolvedTarget {
                point: reference + t.point.coords,
                azimuth: t.azimuth,
                inclination: t.inclination,
                has_tangent: t.tangent_constrained,
                radius1: t.radius1,
                radius2: t.radius2,
            })
            .collect();

        if n == 1 {
            let start_tangent = if resolved[0].has_tangent {
                OffshoreSphericalCoords::unit_vector(resolved[0].azimuth, resolved[0].inclination)
            } else {
                down
            };
            return Self {
                start_tangent,
                endpoints: vec![resolved[0].point],
                target_statuses: statuses,
            };
        }

        derive_smoothing_tangents(&mut resolved, &mut statuses);

        let mut endpoints = vec![resolved[0].point];
        let mut start_tangent = down;
        let mut first_pair = 0;

        if resolved[0].has_tangent {
            start_tangent =
                OffshoreSphericalCoords::unit_vector(resolved[0].azimuth, resolved[0].inclination);
        } else {
            first_pair = 1;
            let p0 = resolved[0].point;
            let p1 = resolved[1].point;
            if (p1 - p0).norm() < COINCIDENT_DISTANCE {
                set_derived_tangent(&mut resolved[0], &mut statuses[0], 0.0, 0.0);
            } else if resolved[1].has_tangent {
                // Reverse J-curve: solve from target 1 back to target 0
                // with target 1's tangent reversed, then flip the result
                let j = JCurve::new(
                    &p1,
                    resolved[1].azimuth + PI,
                    PI - resolved[1].inclination,
                    resolved[1].radius1,
                    &p0,
                );
                match j.status {
                    CurveStatus::Ok => {
                        endpoints.push(j.first_arc_endpoint);
                        endpoints.push(p1);
                    }
                    CurveStatus::FailedRadiusTooLarge => {
                        debug!(
                            "target 1: entry radius {} infeasible, using {}",
                            resolved[1].radius1, j.radius
                        );
                        statuses[1].overridden_radius1 = Some(j.radius);
                        endpoints.push(p1);
                    }
                    _ => {
                        endpoints.push(p1);
                    }
                }
                let (azimuth, inclination) = (j.end_azimuth + PI, PI - j.end_inclination);
                set_derived_tangent(&mut resolved[0], &mut statuses[0], azimuth, inclination);
                start_tangent = OffshoreSphericalCoords::unit_vector(azimuth, inclination);
            } else {
                // Neither end constrained: a plain chord line
                let chord = OffshoreSphericalCoords::from_vector(&(p1 - p0));
                set_derived_tangent(&mut resolved[0], &mut statuses[0], chord.azimuth, chord.inclination);
                set_derived_tangent(&mut resolved[1], &mut statuses[1], chord.azimuth, chord.inclination);
                start_tangent = OffshoreSphericalCoords::unit_vector(chord.azimuth, chord.inclination);
                endpoints.push(p1);
            }
        }

        for i in first_pair..n - 1 {
            let pa = resolved[i].point;
            let pb = resolved[i + 1].point;
            if (pb - pa).norm() < COINCIDENT_DISTANCE {
                continue;
            }

            if i + 1 == n - 1 && !resolved[i + 1].has_tangent {
                // Unconstrained tail: ordinary J-curve
                let j = JCurve::new(
                    &pa,
                    resolved[i].azimuth,
                    resolved[i].inclination,
                    resolved[i].radius2,
                    &pb,
                );
                match j.status {
                    CurveStatus::Ok => {
                        endpoints.push(j.first_arc_endpoint);
                        endpoints.push(pb);
                    }
                    CurveStatus::FailedRadiusTooLarge => {
                        debug!(
                            "target {}: exit radius {} infeasible, using {}",
                            i, resolved[i].radius2, j.radius
                        );
                        statuses[i].overridden_radius2 = Some(j.radius);
                        endpoints.push(pb);
                    }
                    _ => {
                        endpoints.push(pb);
                    }
                }
                set_derived_tangent(
                    &mut resolved[i + 1],
                    &mut statuses[i + 1],
                    j.end_azimuth,
                    j.end_inclination,
                );
            } else {
                let requested1 = resolved[i].radius2;
                let requested2 = resolved[i + 1].radius1;
                let mut s = SCurve::solve(
                    &pa,
                    resolved[i].azimuth,
                    resolved[i].inclination,
                    requested1,
                    &pb,
                    resolved[i + 1].azimuth,
                    resolved[i + 1].inclination,
                    requested2,
                );
                if s.solve_status != SolveStatus::Converged {
                    // Guaranteed-shape fallback: fixed chord lengths at
                    // 20% of the distance, accepting whatever radii result
                    let fallback_length = 0.2 * (pb - pa).norm();
                    s = SCurve::from_tangents_and_lengths(
                        &pa,
                        resolved[i].azimuth,
                        resolved[i].inclination,
                        fallback_length,
                        &pb,
                        resolved[i + 1].azimuth,
                        resolved[i + 1].inclination,
                        fallback_length,
                    );
                }
                endpoints.push(s.first_arc_endpoint);
                endpoints.push(s.second_arc_startpoint);
                endpoints.push(pb);

                if radius_overridden(requested1, s.first_radius) {
                    debug!(
                        "target {}: exit radius {} infeasible, using {}",
                        i, requested1, s.first_radius
                    );
                    statuses[i].overridden_radius2 = Some(s.first_radius);
                }
                if radius_overridden(requested2, s.second_radius) {
                    debug!(
                        "target {}: entry radius {} infeasible, using {}",
                        i + 1,
                        requested2,
                        s.second_radius
                    );
                    statuses[i + 1].overridden_radius1 = Some(s.second_radius);
                }
            }
        }

        Self {
            start_tangent,
            endpoints,
            target_statuses: statuses,
        }
    }
}

/// Smoothing tangent for unconstrained interior targets: adjacent chords
/// normalized, each weighted by its horizontal fraction so that flat
/// segments dominate the blend.
fn derive_smoothing_tangents(resolved: &mut [ResolvedTarget], statuses: &mut [WellTargetStatus]) {
    let n = resolved.len();
    for i in 1..n.saturating_sub(1) {
        if resolved[i].has_tangent {
            continue;
        }
        let before = resolved[i].point - resolved[i - 1].point;
        let after = resolved[i + 1].point - resolved[i].point;

        let mut blended = Vec3::zeros();
        for chord in [before, after] {
            let length = chord.norm();
            if length < COINCIDENT_DISTANCE {
                continue;
            }
            let horizontal = (chord.x * chord.x + chord.y * chord.y).sqrt();
            blended += (horizontal / length) * (chord / length);
        }
        // Vertical chords carry zero weight; fall back to the raw chords
        if blended.norm() < COINCIDENT_DISTANCE {
            blended = before + after;
        }

        let angles = OffshoreSphericalCoords::from_vector(&blended);
        set_derived_tangent(&mut resolved[i], &mut statuses[i], angles.azimuth, angles.inclination);
    }
}

fn set_derived_tangent(
    target: &mut ResolvedTarget,
    status: &mut WellTargetStatus,
    azimuth: f64,
    inclination: f64,
) {
    target.azimuth = azimuth;
    target.inclination = inclination;
    target.has_tangent = true;
    status.derived_tangent = Some(TangentAngles {
        azimuth,
        inclination,
    });
}

/// Whether an achieved radius counts as an override of the requested one.
fn radius_overridden(requested: f64, achieved: f64) -> bool {
    if requested.is_infinite() && achieved.is_infinite() {
        return false;
    }
    if requested.is_infinite() || achieved.is_infinite() {
        return true;
    }
    (achieved - requested).abs() > SCurveSolverOptions::default().max_radius_error
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn down_target(x: f64, y: f64, z: f64, radius1: f64, radius2: f64) -> WellTarget {
        WellTarget::constrained(Point3::new(x, y, z), 0.0, 0.0, radius1, radius2)
    }

    #[test]
    fn test_empty_and_single_target() {
        let none = LineArcWellPath::from_targets(&[], &Point3::origin());
        assert!(none.endpoints.is_empty());
        assert!(none.target_statuses.is_empty());

        let single = LineArcWellPath::from_targets(
            &[WellTarget::free(Point3::new(0.0, 0.0, -100.0))],
            &Point3::origin(),
        );
        assert_eq!(single.endpoints.len(), 1);
        // Default spud direction is straight down
        assert_relative_eq!(
            (single.start_tangent - Vec3::new(0.0, 0.0, -1.0)).norm(),
            0.0
        );
    }

    #[test]
    fn test_reference_point_offsets_targets() {
        let reference = Point3::new(1000.0, 2000.0, -50.0);
        let path = LineArcWellPath::from_targets(
            &[
                WellTarget::free(Point3::origin()),
                WellTarget::free(Point3::new(0.0, 0.0, -100.0)),
            ],
            &reference,
        );
        assert_relative_eq!((path.endpoints[0] - reference).norm(), 0.0);
    }

    #[test]
    fn test_two_free_targets_make_a_chord_line() {
        let path = LineArcWellPath::from_targets(
            &[
                WellTarget::free(Point3::origin()),
                WellTarget::free(Point3::new(0.0, 30.0, -40.0)),
            ],
            &Point3::origin(),
        );
        assert_eq!(path.endpoints.len(), 2);
        assert_relative_eq!(
            (path.start_tangent - Vec3::new(0.0, 0.6, -0.8)).norm(),
            0.0,
            epsilon = 1e-12
        );
        // Both targets report a derived tangent along the chord
        for status in &path.target_statuses {
            let tangent = status.derived_tangent.expect("derived");
            assert_relative_eq!(
                (OffshoreSphericalCoords::unit_vector(tangent.azimuth, tangent.inclination)
                    - Vec3::new(0.0, 0.6, -0.8))
                .norm(),
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_constrained_pair_builds_s_curve() {
        // The symmetric two-quarter-arc S: radii 100, junctions at z = -100
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, 100.0),
                down_target(0.0, 300.0, -200.0, 100.0, f64::INFINITY),
            ],
            &Point3::origin(),
        );
        // p0, two junctions, p1
        assert_eq!(path.endpoints.len(), 4);
        assert_relative_eq!(
            (path.start_tangent - Vec3::new(0.0, 0.0, -1.0)).norm(),
            0.0
        );
        assert!((path.endpoints[1].z - -100.0).abs() < 0.5);
        assert!((path.endpoints[2].z - -100.0).abs() < 0.5);
        // Converged within tolerance: no overrides, no derived tangents
        assert_eq!(path.target_statuses[0], WellTargetStatus::default());
        assert_eq!(path.target_statuses[1], WellTargetStatus::default());
    }

    #[test]
    fn test_unconstrained_tail_builds_j_curve() {
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, 50.0),
                WellTarget::free(Point3::new(0.0, 100.0, -100.0)),
            ],
            &Point3::origin(),
        );
        // p0, arc/line junction, p1
        assert_eq!(path.endpoints.len(), 3);
        assert_relative_eq!(
            (path.endpoints[1] - Point3::new(0.0, 20.0, -40.0)).norm(),
            0.0,
            epsilon = 1e-9
        );
        let tail = path.target_statuses[1].derived_tangent.expect("derived");
        let tangent = OffshoreSphericalCoords::unit_vector(tail.azimuth, tail.inclination);
        assert_relative_eq!((tangent - Vec3::new(0.0, 0.8, -0.6)).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unconstrained_head_builds_reverse_j_curve() {
        // Mirror image of the tail case: the first target is free and the
        // second prescribes drilling straight down with entry radius 50
        let path = LineArcWellPath::from_targets(
            &[
                WellTarget::free(Point3::origin()),
                down_target(0.0, 100.0, -100.0, 50.0, f64::INFINITY),
            ],
            &Point3::origin(),
        );
        assert_eq!(path.endpoints.len(), 3);
        // Forward geometry: straight leg from p0, then an arc into p1.
        // The junction sits on the entry arc circle of radius 50
        let junction = path.endpoints[1];
        let head = path.target_statuses[0].derived_tangent.expect("derived");
        let start = OffshoreSphericalCoords::unit_vector(head.azimuth, head.inclination);
        assert_relative_eq!((path.start_tangent - start).norm(), 0.0, epsilon = 1e-12);
        // Start tangent carries p0 to the junction
        let leg = junction - path.endpoints[0];
        assert_relative_eq!(start.dot(&leg.normalize()), 1.0, epsilon = 1e-9);
        assert!(path.target_statuses[1].overridden_radius1.is_none());
    }

    #[test]
    fn test_interior_target_receives_smoothing_tangent() {
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, 150.0),
                WellTarget::free(Point3::new(0.0, 200.0, -300.0)),
                down_target(0.0, 400.0, -600.0, 150.0, f64::INFINITY),
            ],
            &Point3::origin(),
        );
        let middle = path.target_statuses[1].derived_tangent.expect("derived");
        // Symmetric neighbors: the blended tangent is the common chord
        let chord = OffshoreSphericalCoords::from_vector(&Vec3::new(0.0, 200.0, -300.0));
        assert_relative_eq!(middle.azimuth, chord.azimuth, epsilon = 1e-9);
        assert_relative_eq!(middle.inclination, chord.inclination, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_pair_is_skipped() {
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, 100.0),
                down_target(0.0, 0.0, -1e-9, 100.0, 100.0),
                down_target(0.0, 300.0, -200.0, 100.0, f64::INFINITY),
            ],
            &Point3::origin(),
        );
        // Pair (0,1) emits nothing; pair (1,2) is a normal S-curve
        assert_eq!(path.endpoints.len(), 4);
    }

    #[test]
    fn test_all_free_targets_build_finite_geometry() {
        // Free targets carry infinite radii; both the reverse J-curve at
        // the head and the J-curve at the tail must degrade to feasible
        // arcs instead of propagating the infinity into the geometry
        let path = LineArcWellPath::from_targets(
            &[
                WellTarget::free(Point3::origin()),
                WellTarget::free(Point3::new(0.0, 100.0, -100.0)),
                WellTarget::free(Point3::new(0.0, 200.0, -150.0)),
            ],
            &Point3::origin(),
        );
        assert_eq!(path.endpoints.len(), 3);
        assert!(path.start_tangent.iter().all(|c| c.is_finite()));
        assert_relative_eq!(path.start_tangent.norm(), 1.0, epsilon = 1e-9);
        for p in &path.endpoints {
            assert!(p.coords.iter().all(|c| c.is_finite()), "endpoint {p:?}");
        }
        for status in &path.target_statuses {
            assert!(status.derived_tangent.is_some());
        }
        // The achieved arc radii replace the unconstrained requests
        let r1 = path.target_statuses[1].overridden_radius1.expect("entry");
        let r2 = path.target_statuses[1].overridden_radius2.expect("exit");
        assert!(r1.is_finite() && r1 > 0.0);
        assert!(r2.is_finite() && r2 > 0.0);
    }

    #[test]
    fn test_unconstrained_exit_radius_before_free_tail() {
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, f64::INFINITY),
                WellTarget::free(Point3::new(0.0, 100.0, -100.0)),
            ],
            &Point3::origin(),
        );
        assert_eq!(path.endpoints.len(), 2);
        for p in &path.endpoints {
            assert!(p.coords.iter().all(|c| c.is_finite()), "endpoint {p:?}");
        }
        // Down tangent to (0, 100, -100) is the radius-100 arc
        let achieved = path.target_statuses[0].overridden_radius2.expect("exit");
        assert_relative_eq!(achieved, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_infeasible_s_curve_radius_is_overridden() {
        // Radii far too large for targets this close together: the solve
        // cannot match them and the fixed-length fallback is recorded
        let path = LineArcWellPath::from_targets(
            &[
                down_target(0.0, 0.0, 0.0, f64::INFINITY, 1.0e5),
                WellTarget::constrained(
                    Point3::new(0.0, 40.0, -30.0),
                    std::f64::consts::FRAC_PI_2,
                    std::f64::consts::FRAC_PI_2,
                    1.0e5,
                    f64::INFINITY,
                ),
            ],
            &Point3::origin(),
        );
        let status = &path.target_statuses;
        assert!(
            status[0].overridden_radius2.is_some() || status[1].overridden_radius1.is_some(),
            "an unreachable radius must be reported as overridden"
        );
        // The path itself still exists
        assert_eq!(path.endpoints.len(), 4);
    }
}
