//! Resampling of a line/arc boundary chain into a dense polyline.

use wellpath_curves::{ArcCurve, CurveStatus};
use wellpath_math::{Point3, Vec3};

use crate::error::{Result, TrajectoryError};
use crate::line_arc::LineArcWellPath;

/// Squared distance below which consecutive boundary points are merged.
const DUPLICATE_POINT_THRESHOLD_SQ: f64 = 1e-6;

/// Tangent-to-chord angle below which a segment is treated as straight.
const LINE_ANGLE_THRESHOLD: f64 = 1e-5;

/// Cap on intermediate points emitted along a single arc.
const MAX_ARC_SUBDIVISIONS: f64 = 5000.0;

pub(crate) enum SegmentGeometry {
    Line,
    Arc(ArcCurve),
}

/// One classified piece of the boundary chain.
pub(crate) struct PathSegment {
    pub start: Point3,
    pub end: Point3,
    pub geometry: SegmentGeometry,
}

pub(crate) fn dedup_endpoints(endpoints: &[Point3]) -> Vec<Point3> {
    let mut out: Vec<Point3> = Vec::with_capacity(endpoints.len());
    for p in endpoints {
        match out.last() {
            Some(prev) if (p - prev).norm_squared() <= DUPLICATE_POINT_THRESHOLD_SQ => {}
            _ => out.push(*p),
        }
    }
    out
}

/// Classify each consecutive pair of deduplicated boundary points as a
/// straight line or an arc, threading the running tangent through.
pub(crate) fn classify_segments(start_tangent: &Vec3, endpoints: &[Point3]) -> Vec<PathSegment> {
    let points = dedup_endpoints(endpoints);
    let mut tangent = *start_tangent;
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let chord = end - start;
        let chord_dir = chord / chord.norm();

        if tangent.angle(&chord_dir) < LINE_ANGLE_THRESHOLD {
            segments.push(PathSegment {
                start,
                end,
                geometry: SegmentGeometry::Line,
            });
            tangent = chord_dir;
            continue;
        }

        let arc = ArcCurve::from_point_tangent_point(&start, &tangent, &end);
        match arc.status {
            CurveStatus::Ok => {
                tangent = arc.end_tangent;
                segments.push(PathSegment {
                    start,
                    end,
                    geometry: SegmentGeometry::Arc(arc),
                });
            }
            // Anti-parallel tangent degenerates the arc plane; fall back
            // to a straight segment like the coplanar case above
            _ => {
                segments.push(PathSegment {
                    start,
                    end,
                    geometry: SegmentGeometry::Line,
                });
                tangent = chord_dir;
            }
        }
    }
    segments
}

/// A densely sampled well path with cumulative measured depth per point.
#[derive(Debug, Clone, Default)]
pub struct WellPathPolyline {
    /// Sampled positions, ordered from the start of the path.
    pub points: Vec<Point3>,
    /// Measured depth of each point, starting at zero.
    pub measured_depths: Vec<f64>,
}

impl WellPathPolyline {
    /// Position at the given measured depth, interpolated linearly
    /// between samples and clamped to the ends of the path.
    ///
    /// Returns `None` for an empty polyline.
    pub fn point_at_md(&self, md: f64) -> Option<Point3> {
        let first = *self.points.first()?;
        let last_md = *self.measured_depths.last()?;
        if md <= self.measured_depths[0] {
            return Some(first);
        }
        if md >= last_md {
            return self.points.last().copied();
        }
        let upper = self.measured_depths.partition_point(|&d| d < md);
        let (md0, md1) = (self.measured_depths[upper - 1], self.measured_depths[upper]);
        let (p0, p1) = (self.points[upper - 1], self.points[upper]);
        let span = md1 - md0;
        if span <= 0.0 {
            return Some(p1);
        }
        let t = (md - md0) / span;
        Some(p0 + t * (p1 - p0))
    }
}

/// Sample the boundary chain at roughly `sample_interval` spacing.
///
/// Arcs are always subdivided; straight segments are subdivided only
/// when `resample_lines` is set. Segment endpoints are always emitted,
/// so spacing is exact only in the interior of a segment.
pub fn sample_polyline(
    path: &LineArcWellPath,
    sample_interval: f64,
    resample_lines: bool,
) -> Result<WellPathPolyline> {
    if !(sample_interval > 0.0) {
        return Err(TrajectoryError::InvalidSampleInterval(sample_interval));
    }

    let segments = classify_segments(&path.start_tangent, &path.endpoints);
    let mut polyline = WellPathPolyline::default();

    let deduped = dedup_endpoints(&path.endpoints);
    let Some(first) = deduped.first() else {
        return Ok(polyline);
    };
    polyline.points.push(*first);
    polyline.measured_depths.push(0.0);

    let mut md = 0.0;
    for segment in &segments {
        match &segment.geometry {
            SegmentGeometry::Line => {
                let chord = segment.end - segment.start;
                let chord_length = chord.norm();
                if resample_lines && chord_length > sample_interval {
                    let dir = chord / chord_length;
                    let mut distance = sample_interval;
                    while distance < chord_length {
                        polyline.points.push(segment.start + distance * dir);
                        polyline.measured_depths.push(md + distance);
                        distance += sample_interval;
                    }
                }
                md += chord_length;
                polyline.points.push(segment.end);
                polyline.measured_depths.push(md);
            }
            SegmentGeometry::Arc(arc) => {
                let mut increment = sample_interval / arc.radius;
                if arc.arc_angle / increment > MAX_ARC_SUBDIVISIONS {
                    increment = arc.arc_angle / MAX_ARC_SUBDIVISIONS;
                }
                let mut angle = increment;
                while angle < arc.arc_angle {
                    let local = Point3::new(
                        arc.radius * angle.cos(),
                        arc.radius * angle.sin(),
                        0.0,
                    );
                    polyline.points.push(arc.frame.apply_point(&local));
                    polyline.measured_depths.push(md + angle * arc.radius);
                    angle += increment;
                }
                md += arc.arc_length;
                polyline.points.push(segment.end);
                polyline.measured_depths.push(md);
            }
        }
    }

    Ok(polyline)
}
