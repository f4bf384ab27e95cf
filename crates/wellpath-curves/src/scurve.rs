//! S-curve: two circular arcs joined by a straight tangent segment.

use log::trace;
use wellpath_math::{OffshoreSphericalCoords, Point3, Vec3};

use crate::{CurveStatus, SolveStatus};

/// Bounds for the S-curve radius-matching iteration.
///
/// The defaults reproduce the planner's production behavior; tests can
/// tighten or loosen them without touching the solver.
#[derive(Debug, Clone, Copy)]
pub struct SCurveSolverOptions {
    /// Newton iteration budget.
    pub max_iterations: usize,
    /// Accepted absolute deviation from a prescribed radius.
    pub max_radius_error: f64,
    /// Largest allowed magnitude of a single Newton step.
    pub max_step: f64,
    /// Largest allowed chord length along either tangent.
    pub max_chord_length: f64,
}

impl Default for SCurveSolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 40,
            max_radius_error: 0.01,
            max_step: 1.0e9,
            max_chord_length: 1.0e10,
        }
    }
}

/// Two circular arcs of possibly different radius joined by a straight
/// segment, the classic S-shaped drill plan between two fully
/// constrained points.
///
/// Built either closed-form from two explicit control points, or by a
/// decoupled Newton-Raphson iteration over the two chord lengths so that
/// both arcs match prescribed radii.
#[derive(Debug, Clone)]
pub struct SCurve {
    /// Geometric classification of the result.
    pub curve_status: CurveStatus,
    /// Outcome of the radius-matching iteration, if one was run.
    pub solve_status: SolveStatus,
    /// Point where the first arc hands over to the straight segment.
    pub first_arc_endpoint: Point3,
    /// Point where the straight segment hands over to the second arc.
    pub second_arc_startpoint: Point3,
    /// Center of the first arc; meaningless when its radius is infinite.
    pub first_center: Point3,
    /// Unit normal of the first arc plane; meaningless when its radius is infinite.
    pub first_normal: Vec3,
    /// Achieved radius of the first arc.
    pub first_radius: f64,
    /// Center of the second arc; meaningless when its radius is infinite.
    pub second_center: Point3,
    /// Unit normal of the second arc plane; meaningless when its radius is infinite.
    pub second_normal: Vec3,
    /// Achieved radius of the second arc.
    pub second_radius: f64,
}

impl SCurve {
    /// Closed-form construction from explicit control points.
    ///
    /// `q1` and `q2` are the intersections of each end's tangent line
    /// with the straight middle segment; the construction inscribes a
    /// circle into each tangent-line pair. No iteration is performed.
    pub fn from_control_points(p1: &Point3, q1: &Point3, p2: &Point3, q2: &Point3) -> Self {
        let mut result = Self::not_computed(p1, q1, p2, q2);

        let t1 = match try_normalize(&(q1 - p1)) {
            Some(t) => t,
            None => return result,
        };
        let t2 = match try_normalize(&(p2 - q2)) {
            Some(t) => t,
            None => return result,
        };
        let line_length = (q2 - q1).norm();
        let t_line = match try_normalize(&(q2 - q1)) {
            Some(t) => t,
            None => return result,
        };

        // Each side independently: either the tangent is parallel to the
        // middle line (infinite radius, the arc vanishes into the line)
        // or an inscribed circle exists
        let mut infinite1 = false;
        let chord1 = (q1 - p1).norm();
        let cross1 = t1.cross(&t_line);
        if cross1.norm() < 1e-12 {
            infinite1 = true;
            result.first_arc_endpoint = *q1;
            result.first_radius = f64::INFINITY;
        } else {
            let normal1 = cross1.normalize();
            let turn1 = angle_between(&t1, &t_line);
            let radius1 = chord1 / (turn1 / 2.0).tan();
            result.first_normal = normal1;
            result.first_radius = radius1;
            result.first_center = p1 + radius1 * normal1.cross(&t1);
            result.first_arc_endpoint = q1 + chord1 * t_line;
        }

        let mut infinite2 = false;
        let chord2 = (p2 - q2).norm();
        let cross2 = t2.cross(&t_line);
        if cross2.norm() < 1e-12 {
            infinite2 = true;
            result.second_arc_startpoint = *q2;
            result.second_radius = f64::INFINITY;
        } else {
            let normal2 = cross2.normalize();
            let turn2 = angle_between(&t_line, &t2);
            let radius2 = chord2 / (turn2 / 2.0).tan();
            result.second_normal = normal2;
            result.second_radius = radius2;
            result.second_center = p2 - radius2 * normal2.cross(&t2);
            result.second_arc_startpoint = q2 - chord2 * t_line;
        }

        result.curve_status = match (infinite1, infinite2) {
            (false, false) => CurveStatus::Ok,
            (true, false) => CurveStatus::OkInfiniteRadius1,
            (false, true) => CurveStatus::OkInfiniteRadius2,
            (true, true) => CurveStatus::OkInfiniteRadius12,
        };

        // The arcs claim [q1, q1+chord1] and [q2-chord2, q2] of the middle
        // line; if those intervals cross, the shape self-intersects
        let claimed1 = if infinite1 { 0.0 } else { chord1 };
        let claimed2 = if infinite2 { 0.0 } else { chord2 };
        if claimed1 + claimed2 > line_length {
            result.curve_status = CurveStatus::FailedArcOverlap;
        }

        result
    }

    /// Construction from two point/tangent pairs and explicit chord
    /// lengths along each tangent.
    #[allow(clippy::too_many_arguments)]
    pub fn from_tangents_and_lengths(
        p1: &Point3,
        azimuth1: f64,
        inclination1: f64,
        length1: f64,
        p2: &Point3,
        azimuth2: f64,
        inclination2: f64,
        length2: f64,
    ) -> Self {
        let t1 = OffshoreSphericalCoords::unit_vector(azimuth1, inclination1);
        let t2 = OffshoreSphericalCoords::unit_vector(azimuth2, inclination2);
        let q1 = p1 + length1 * t1;
        let q2 = p2 - length2 * t2;
        Self::from_control_points(p1, &q1, p2, &q2)
    }

    /// Solve for chord lengths such that both arcs match the prescribed
    /// radii, with default bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        p1: &Point3,
        azimuth1: f64,
        inclination1: f64,
        radius1: f64,
        p2: &Point3,
        azimuth2: f64,
        inclination2: f64,
        radius2: f64,
    ) -> Self {
        Self::solve_with_options(
            p1,
            azimuth1,
            inclination1,
            radius1,
            p2,
            azimuth2,
            inclination2,
            radius2,
            &SCurveSolverOptions::default(),
        )
    }

    /// Solve for chord lengths such that both arcs match the prescribed
    /// radii.
    ///
    /// Decoupled Newton-Raphson over the two chord lengths: each length
    /// is updated from its own side's radius residual only, with
    /// finite-difference derivatives. A side whose prescribed radius is
    /// infinite, or whose achieved radius collapses to infinite, counts
    /// as satisfied. Steps that would drive a chord negative pull back
    /// 90% of the way to zero instead of crossing it.
    #[allow(clippy::too_many_arguments)]
    pub fn solve_with_options(
        p1: &Point3,
        azimuth1: f64,
        inclination1: f64,
        radius1: f64,
        p2: &Point3,
        azimuth2: f64,
        inclination2: f64,
        radius2: f64,
        options: &SCurveSolverOptions,
    ) -> Self {
        let p1p2_length = (p2 - p1).norm();
        let mut q1 = 0.2 * p1p2_length;
        let mut q2 = 0.2 * p1p2_length;
        let delta = 0.01 * p1p2_length;

        let eval = |q1: f64, q2: f64| {
            Self::from_tangents_and_lengths(
                p1,
                azimuth1,
                inclination1,
                q1,
                p2,
                azimuth2,
                inclination2,
                q2,
            )
        };

        let mut current = eval(q1, q2);
        if current.curve_status == CurveStatus::FailedInputOverlap {
            return current;
        }
        if current.curve_status == CurveStatus::OkInfiniteRadius12 {
            // Both sides already straight: the pure straight-line case
            current.solve_status = SolveStatus::Converged;
            return current;
        }

        for iteration in 0..options.max_iterations {
            let done1 = side_satisfied(radius1, current.first_radius, options.max_radius_error);
            let done2 = side_satisfied(radius2, current.second_radius, options.max_radius_error);
            trace!(
                "s-curve solve: it={} q1={:.4} q2={:.4} r1={:.4} r2={:.4}",
                iteration,
                q1,
                q2,
                current.first_radius,
                current.second_radius
            );
            if done1 && done2 {
                current.solve_status = SolveStatus::Converged;
                return current;
            }

            let mut next_q1 = q1;
            let mut next_q2 = q2;

            if !done1 {
                let probe = eval(q1 + delta, q2);
                let derivative = (probe.first_radius - current.first_radius) / delta;
                let mut step = (radius1 - current.first_radius) / derivative;
                if !step.is_finite() || step.abs() > options.max_step {
                    current.solve_status = SolveStatus::FailedMaxTangentStepReached;
                    return current;
                }
                if q1 + step < 0.0 {
                    step = -0.9 * q1;
                }
                next_q1 = q1 + step;
            }

            if !done2 {
                let probe = eval(q1, q2 + delta);
                let derivative = (probe.second_radius - current.second_radius) / delta;
                let mut step = (radius2 - current.second_radius) / derivative;
                if !step.is_finite() || step.abs() > options.max_step {
                    current.solve_status = SolveStatus::FailedMaxTangentStepReached;
                    return current;
                }
                if q2 + step < 0.0 {
                    step = -0.9 * q2;
                }
                next_q2 = q2 + step;
            }

            if next_q1.abs() > options.max_chord_length || next_q2.abs() > options.max_chord_length {
                current.solve_status = SolveStatus::FailedMaxLengthAlongTangentReached;
                return current;
            }

            q1 = next_q1;
            q2 = next_q2;
            current = eval(q1, q2);
        }

        current.solve_status = SolveStatus::FailedMaxIterationsReached;
        current
    }

    fn not_computed(p1: &Point3, q1: &Point3, p2: &Point3, q2: &Point3) -> Self {
        Self {
            curve_status: CurveStatus::FailedInputOverlap,
            solve_status: SolveStatus::NotSolved,
            first_arc_endpoint: *q1,
            second_arc_startpoint: *q2,
            first_center: *p1,
            first_normal: Vec3::zeros(),
            first_radius: f64::INFINITY,
            second_center: *p2,
            second_normal: Vec3::zeros(),
            second_radius: f64::INFINITY,
        }
    }
}

/// A side is satisfied when it matches its prescribed radius, when the
/// prescription itself is "no constraint" (infinite), or when the side
/// has collapsed to the straight-line limit.
fn side_satisfied(prescribed: f64, achieved: f64, max_error: f64) -> bool {
    if prescribed.is_infinite() || achieved.is_infinite() {
        return true;
    }
    (achieved - prescribed).abs() < max_error
}

fn try_normalize(v: &Vec3) -> Option<Vec3> {
    let len = v.norm();
    if len == 0.0 {
        None
    } else {
        Some(v / len)
    }
}

fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}
