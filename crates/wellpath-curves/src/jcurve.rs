//! J-curve: an arc of prescribed radius followed by a straight run-in.

use wellpath_math::{Dir3, OffshoreSphericalCoords, Point3, Transform, Vec3};

use crate::{ArcCurve, CurveStatus};

/// An arc leaving `p1` along a prescribed tangent, tangent to the straight
/// line that reaches `p2`, the classic J-shaped drill plan.
///
/// When the requested radius is infinite or too large for any arc to reach `p2`,
/// the result degrades to the unconstrained [`ArcCurve`] through both
/// points and reports the (generally different) radius it achieved.
#[derive(Debug, Clone)]
pub struct JCurve {
    /// Geometric classification of the result.
    pub status: CurveStatus,
    /// Point where the arc hands over to the straight run-in.
    pub first_arc_endpoint: Point3,
    /// Arc circle center; meaningless for the straight-line degeneration.
    pub center: Point3,
    /// Unit normal of the arc plane; meaningless for the straight-line degeneration.
    pub normal: Vec3,
    /// Achieved arc radius (the requested one unless overridden).
    pub radius: f64,
    /// Azimuth of the tangent at the arc/line junction, radians.
    pub end_azimuth: f64,
    /// Inclination of the tangent at the arc/line junction, radians.
    pub end_inclination: f64,
}

impl JCurve {
    /// Compute the J-curve from `p1` (tangent given as azimuth and
    /// inclination) with arc radius `radius`, ending at `p2`.
    pub fn new(p1: &Point3, azimuth: f64, inclination: f64, radius: f64, p2: &Point3) -> Self {
        let t1 = OffshoreSphericalCoords::unit_vector(azimuth, inclination);

        let p1p2 = p2 - p1;
        // Component of the chord orthogonal to the start tangent
        let tr1_raw = p1p2 - p1p2.dot(&t1) * t1;
        let tr1_length = tr1_raw.norm();
        if tr1_length < 1e-9 {
            // Target along the tangent: straight hole, no arc
            return Self {
                status: CurveStatus::OkStraightLine,
                first_arc_endpoint: *p1,
                center: *p1,
                normal: Vec3::zeros(),
                radius: f64::INFINITY,
                end_azimuth: azimuth,
                end_inclination: inclination,
            };
        }
        let tr1 = tr1_raw / tr1_length;

        // An unconstrained radius cannot anchor an arc circle
        if !radius.is_finite() {
            return Self::fallback_arc(p1, &t1, p2);
        }

        let c1 = p1 + radius * tr1;
        let p2c1 = c1 - p2;
        let dist_p2c1 = p2c1.norm();

        if dist_p2c1 < radius {
            // No tangent line from p2 to a circle of this radius
            return Self::fallback_arc(p1, &t1, p2);
        }

        // Right-triangle geometry of the tangent line from p2
        let run_in_length = (dist_p2c1 * dist_p2c1 - radius * radius).sqrt();
        let beta = (radius / dist_p2c1).asin();
        let plane_normal = Dir3::new_normalize(t1.cross(&tr1));
        let run_in_dir = Transform::rotation_about_axis(&plane_normal, beta)
            .apply_vec(&(-p2c1 / dist_p2c1));
        let first_arc_endpoint = p2 - run_in_length * run_in_dir;

        let junction = OffshoreSphericalCoords::from_vector(&run_in_dir);
        Self {
            status: CurveStatus::Ok,
            first_arc_endpoint,
            center: c1,
            normal: *plane_normal.as_ref(),
            radius,
            end_azimuth: junction.azimuth,
            end_inclination: junction.inclination,
        }
    }

    /// Unconstrained arc through both points, reporting the radius it
    /// achieved instead of the requested one.
    fn fallback_arc(p1: &Point3, t1: &Vec3, p2: &Point3) -> Self {
        let arc = ArcCurve::from_point_tangent_point(p1, t1, p2);
        Self {
            status: CurveStatus::FailedRadiusTooLarge,
            first_arc_endpoint: *p2,
            center: arc.center,
            normal: arc.normal,
            radius: arc.radius,
            end_azimuth: arc.end_azimuth(),
            end_inclination: arc.end_inclination(),
        }
    }
}
