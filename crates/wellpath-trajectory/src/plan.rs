//! Drilling plan tables derived from a line/arc boundary chain.

use serde::{Deserialize, Serialize};
use wellpath_math::OffshoreSphericalCoords;

use crate::line_arc::LineArcWellPath;
use crate::sampler::{classify_segments, dedup_endpoints, SegmentGeometry};

/// Length basis for dogleg, build, and turn rates.
const RATE_INTERVAL: f64 = 30.0;

/// One row of a drilling plan: the state of the path at the end of a
/// line or arc segment. Angles and rates are in degrees; rates are per
/// 30 length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellPlanSegment {
    /// Cumulative measured depth at the end of the segment.
    pub measured_depth: f64,
    /// Length of this segment along the path.
    pub course_length: f64,
    /// Tangent azimuth at the end of the segment, degrees from North.
    pub azimuth: f64,
    /// Tangent inclination at the end of the segment, degrees from vertical.
    pub inclination: f64,
    /// True vertical depth, positive downward.
    pub tvd: f64,
    /// Northing of the segment end point.
    pub northing: f64,
    /// Easting of the segment end point.
    pub easting: f64,
    /// Curvature expressed as degrees of turn per 30 length units.
    pub dogleg: f64,
    /// Inclination change rate, degrees per 30 length units.
    pub build_rate: f64,
    /// Azimuth change rate, degrees per 30 length units.
    pub turn_rate: f64,
}

/// Tabulate the path as a drilling plan.
///
/// The first row describes the start of the path with zero measured
/// depth and zero rates; every following row covers one line or arc
/// segment. Straight segments have zero rates by construction.
pub fn well_plan(path: &LineArcWellPath) -> Vec<WellPlanSegment> {
    let deduped = dedup_endpoints(&path.endpoints);
    let Some(first) = deduped.first() else {
        return Vec::new();
    };

    let start = OffshoreSphericalCoords::from_vector(&path.start_tangent);
    let mut rows = vec![WellPlanSegment {
        measured_depth: 0.0,
        course_length: 0.0,
        azimuth: start.azimuth.to_degrees(),
        inclination: start.inclination.to_degrees(),
        tvd: -first.z,
        northing: first.y,
        easting: first.x,
        dogleg: 0.0,
        build_rate: 0.0,
        turn_rate: 0.0,
    }];

    let mut md = 0.0;
    let mut azimuth = start.azimuth;
    let mut inclination = start.inclination;

    for segment in classify_segments(&path.start_tangent, &path.endpoints) {
        match &segment.geometry {
            SegmentGeometry::Line => {
                let chord = segment.end - segment.start;
                let length = chord.norm();
                let angles = OffshoreSphericalCoords::from_vector(&chord);
                md += length;
                rows.push(WellPlanSegment {
                    measured_depth: md,
                    course_length: length,
                    azimuth: angles.azimuth.to_degrees(),
                    inclination: angles.inclination.to_degrees(),
                    tvd: -segment.end.z,
                    northing: segment.end.y,
                    easting: segment.end.x,
                    dogleg: 0.0,
                    build_rate: 0.0,
                    turn_rate: 0.0,
                });
                azimuth = angles.azimuth;
                inclination = angles.inclination;
            }
            SegmentGeometry::Arc(arc) => {
                let end_azimuth = arc.end_azimuth();
                let end_inclination = arc.end_inclination();
                md += arc.arc_length;
                rows.push(WellPlanSegment {
                    measured_depth: md,
                    course_length: arc.arc_length,
                    azimuth: end_azimuth.to_degrees(),
                    inclination: end_inclination.to_degrees(),
                    tvd: -segment.end.z,
                    northing: segment.end.y,
                    easting: segment.end.x,
                    dogleg: (RATE_INTERVAL / arc.radius).to_degrees(),
                    build_rate: (RATE_INTERVAL * (end_inclination - inclination)
                        / arc.arc_length)
                        .to_degrees(),
                    turn_rate: (RATE_INTERVAL * (end_azimuth - azimuth) / arc.arc_length)
                        .to_degrees(),
                });
                azimuth = end_azimuth;
                inclination = end_inclination;
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wellpath_math::{Point3, Vec3};

    fn build_to_horizontal() -> LineArcWellPath {
        // Straight down 10, then a quarter arc of radius 10 ending
        // horizontal towards North
        LineArcWellPath {
            start_tangent: Vec3::new(0.0, 0.0, -1.0),
            endpoints: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, -10.0),
                Point3::new(0.0, 10.0, -20.0),
            ],
            target_statuses: Vec::new(),
        }
    }

    #[test]
    fn test_starting_row() {
        let rows = well_plan(&build_to_horizontal());
        assert_eq!(rows.len(), 3);
        let start = rows[0];
        assert_relative_eq!(start.measured_depth, 0.0);
        assert_relative_eq!(start.course_length, 0.0);
        assert_relative_eq!(start.inclination, 0.0);
        assert_relative_eq!(start.tvd, 0.0);
        assert_relative_eq!(start.dogleg, 0.0);
    }

    #[test]
    fn test_line_row_has_zero_rates() {
        let rows = well_plan(&build_to_horizontal());
        let line = rows[1];
        assert_relative_eq!(line.measured_depth, 10.0);
        assert_relative_eq!(line.course_length, 10.0);
        assert_relative_eq!(line.inclination, 0.0);
        assert_relative_eq!(line.tvd, 10.0);
        assert_relative_eq!(line.dogleg, 0.0);
        assert_relative_eq!(line.build_rate, 0.0);
        assert_relative_eq!(line.turn_rate, 0.0);
    }

    #[test]
    fn test_arc_row_rates() {
        let rows = well_plan(&build_to_horizontal());
        let arc = rows[2];
        let arc_length = 5.0 * std::f64::consts::PI;
        assert_relative_eq!(arc.measured_depth, 10.0 + arc_length, epsilon = 1e-9);
        assert_relative_eq!(arc.course_length, arc_length, epsilon = 1e-9);
        assert_relative_eq!(arc.inclination, 90.0, epsilon = 1e-9);
        assert_relative_eq!(arc.azimuth, 0.0, epsilon = 1e-9);
        assert_relative_eq!(arc.tvd, 20.0, epsilon = 1e-9);
        assert_relative_eq!(arc.northing, 10.0, epsilon = 1e-9);
        // A radius-10 arc turns 3 radians over 30 length units
        assert_relative_eq!(arc.dogleg, 3.0_f64.to_degrees(), epsilon = 1e-9);
        // Pure build section: build rate equals the dogleg, no turn
        assert_relative_eq!(arc.build_rate, arc.dogleg, epsilon = 1e-9);
        assert_relative_eq!(arc.turn_rate, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_path_has_no_rows() {
        let path = LineArcWellPath {
            start_tangent: Vec3::new(0.0, 0.0, -1.0),
            endpoints: Vec::new(),
            target_statuses: Vec::new(),
        };
        assert!(well_plan(&path).is_empty());
    }

    #[test]
    fn test_rows_serialize_as_json() {
        let rows = well_plan(&build_to_horizontal());
        let json = serde_json::to_string(&rows).unwrap();
        let back: Vec<WellPlanSegment> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
