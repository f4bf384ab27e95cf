//! Circular arc from a point with a prescribed tangent to a second point.

use wellpath_math::{signed_angle, OffshoreSphericalCoords, Point3, Transform, Vec3};

use crate::CurveStatus;

/// The unique circular arc (or degenerate straight line) defined by a
/// start point, start tangent, and end point.
///
/// The arc lies in the plane spanned by the tangent and the chord. Its
/// coordinate frame has X from the center toward the start point, Y along
/// the start tangent, and Z along the plane normal, translated to the
/// center; samplers generate arc points by rotating the radius-scaled
/// local X axis about local Z.
#[derive(Debug, Clone)]
pub struct ArcCurve {
    /// Geometric classification of the result.
    pub status: CurveStatus,
    /// Arc radius; `+inf` for the straight-line degeneration.
    pub radius: f64,
    /// Circle center; meaningless when the radius is infinite.
    pub center: Point3,
    /// Unit normal of the arc plane; meaningless when the radius is infinite.
    pub normal: Vec3,
    /// Swept angle in `[0, 2π)`.
    pub arc_angle: f64,
    /// Arc length, or chord length for the straight-line degeneration.
    pub arc_length: f64,
    /// Unit tangent at the end point.
    pub end_tangent: Vec3,
    /// Arc coordinate frame (identity when no arc was computed).
    pub frame: Transform,
}

impl ArcCurve {
    /// Compute the arc from `p1` with tangent `t1` ending at `p2`.
    ///
    /// `t1` need not be normalized. Coincident points or a zero-length
    /// tangent yield `FailedInputOverlap`; a tangent parallel to the
    /// chord yields `OkStraightLine` with infinite radius.
    pub fn from_point_tangent_point(p1: &Point3, t1: &Vec3, p2: &Point3) -> Self {
        let t1_len = t1.norm();
        if t1_len == 0.0 {
            return Self::degenerate(CurveStatus::FailedInputOverlap, p1, Vec3::zeros(), 0.0);
        }
        let t1 = t1 / t1_len;

        let p1p2 = p2 - p1;
        let chord_length = p1p2.norm();
        if chord_length == 0.0 {
            return Self::degenerate(CurveStatus::FailedInputOverlap, p1, t1, 0.0);
        }
        let t12 = p1p2 / chord_length;

        let cross = t1.cross(&t12);
        let cross_len = cross.norm();
        if cross_len < 1e-12 {
            // Tangent along the chord: straight line of infinite radius
            return Self::degenerate(CurveStatus::OkStraightLine, p1, t1, chord_length);
        }
        let normal = cross / cross_len;

        let tr1 = normal.cross(&t1).normalize();
        let radius = 0.5 * chord_length / tr1.dot(&t12);
        debug_assert!(radius.is_finite() && radius > 0.0);

        let center = p1 + radius * tr1;
        let frame = Transform::from_frame(&center, &-tr1, &t1, &normal);
        let arc_angle = signed_angle(&normal, &(p1 - center), &(p2 - center));
        let end_tangent = normal.cross(&(p2 - center).normalize());

        Self {
            status: CurveStatus::Ok,
            radius,
            center,
            normal,
            arc_angle,
            arc_length: radius * arc_angle,
            end_tangent,
            frame,
        }
    }

    /// Azimuth of the end tangent, radians.
    pub fn end_azimuth(&self) -> f64 {
        OffshoreSphericalCoords::from_vector(&self.end_tangent).azimuth
    }

    /// Inclination of the end tangent, radians.
    pub fn end_inclination(&self) -> f64 {
        OffshoreSphericalCoords::from_vector(&self.end_tangent).inclination
    }

    fn degenerate(status: CurveStatus, p1: &Point3, end_tangent: Vec3, length: f64) -> Self {
        Self {
            status,
            radius: f64::INFINITY,
            center: *p1,
            normal: Vec3::zeros(),
            arc_angle: 0.0,
            arc_length: length,
            end_tangent,
            frame: Transform::identity(),
        }
    }
}
