#![warn(missing_docs)]

//! Target sequencing, resampling and survey tables for well trajectories.
//!
//! Sits on top of the curve solvers in `wellpath-curves`:
//! - [`LineArcWellPath`] turns an ordered list of drilling targets into a
//!   chain of line/arc boundary vertices plus a start tangent
//! - [`sample_polyline`] resamples that chain into a dense polyline with
//!   measured-depth annotation for display
//! - [`well_plan`] walks the same chain into one survey-station row per
//!   segment for reporting
//!
//! Infeasible inputs never fail the build: the path degrades to the
//! nearest feasible curve and the per-target statuses report which
//! requested radius or tangent was overridden and to what value.

mod error;
mod line_arc;
mod plan;
mod sampler;
mod target;

pub use error::{Result, TrajectoryError};
pub use line_arc::LineArcWellPath;
pub use plan::{well_plan, WellPlanSegment};
pub use sampler::{sample_polyline, WellPathPolyline};
pub use target::{TangentAngles, WellTarget, WellTargetStatus};
