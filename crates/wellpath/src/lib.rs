#![warn(missing_docs)]

//! wellpath — well trajectory planning in Rust
//!
//! Line/arc path construction from ordered drilling targets, with
//! resampling and survey tables.
//!
//! # Example
//!
//! ```rust
//! use wellpath::{sample_polyline, well_plan, LineArcWellPath, Point3, WellTarget};
//!
//! // Spud straight down, kick off with a 100 m radius, hold through a
//! // straight section, then land vertically at the target.
//! let targets = [
//!     WellTarget::constrained(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0, f64::INFINITY, 100.0),
//!     WellTarget::constrained(Point3::new(0.0, 300.0, -200.0), 0.0, 0.0, 100.0, f64::INFINITY),
//! ];
//! let path = LineArcWellPath::from_targets(&targets, &Point3::origin());
//!
//! let polyline = sample_polyline(&path, 10.0, true).unwrap();
//! let plan = well_plan(&path);
//! assert_eq!(plan.len(), 4);
//! assert!(*polyline.measured_depths.last().unwrap() > 400.0);
//! ```

pub use wellpath_curves::{
    ArcCurve, CurveStatus, JCurve, SCurve, SCurveSolverOptions, SolveStatus,
};
pub use wellpath_math::{signed_angle, Dir3, OffshoreSphericalCoords, Point3, Transform, Vec3};
pub use wellpath_trajectory::{
    sample_polyline, well_plan, LineArcWellPath, Result, TangentAngles, TrajectoryError,
    WellPathPolyline, WellPlanSegment, WellTarget, WellTargetStatus,
};
