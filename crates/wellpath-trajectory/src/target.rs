//! Drilling targets and their per-build result statuses.

use serde::{Deserialize, Serialize};
use wellpath_math::Point3;

/// A user-specified waypoint on the planned well path.
///
/// Ordering in a sequence is significant: target *i* connects to target
/// *i+1*. The point is stored relative to the caller's reference origin.
#[derive(Debug, Clone, Copy)]
pub struct WellTarget {
    /// Target position, relative to the reference origin.
    pub point: Point3,
    /// Whether the tangent through this target is prescribed.
    pub tangent_constrained: bool,
    /// Prescribed azimuth, radians; meaningful only when constrained.
    pub azimuth: f64,
    /// Prescribed inclination, radians; meaningful only when constrained.
    pub inclination: f64,
    /// Allowed curvature radius of the arc entering this target;
    /// `+inf` means no curvature constraint.
    pub radius1: f64,
    /// Allowed curvature radius of the arc leaving this target;
    /// `+inf` means no curvature constraint.
    pub radius2: f64,
}

impl WellTarget {
    /// A target with no tangent or curvature constraints.
    pub fn free(point: Point3) -> Self {
        Self {
            point,
            tangent_constrained: false,
            azimuth: 0.0,
            inclination: 0.0,
            radius1: f64::INFINITY,
            radius2: f64::INFINITY,
        }
    }

    /// A target with a prescribed tangent and entry/exit radii.
    pub fn constrained(
        point: Point3,
        azimuth: f64,
        inclination: f64,
        radius1: f64,
        radius2: f64,
    ) -> Self {
        Self {
            point,
            tangent_constrained: true,
            azimuth,
            inclination,
            radius1,
            radius2,
        }
    }
}

/// A tangent direction as offshore spherical angles, radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentAngles {
    /// Compass heading clockwise from North.
    pub azimuth: f64,
    /// Angle from vertical-down.
    pub inclination: f64,
}

/// Per-target outcome of a path build. Purely informational output,
/// never an input to subsequent builds.
///
/// Presence of a value answers the "was this overridden?" question; the
/// value itself is the result the build actually used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WellTargetStatus {
    /// The tangent derived for an unconstrained target, if any.
    pub derived_tangent: Option<TangentAngles>,
    /// The feasible entry radius used when the requested one was not.
    pub overridden_radius1: Option<f64>,
    /// The feasible exit radius used when the requested one was not.
    pub overridden_radius2: Option<f64>,
}
