#![warn(missing_docs)]

//! Curve solvers for well-trajectory planning.
//!
//! Three closed-form and iterative constructions used by directional
//! drilling planners:
//! - **Arc**: the unique circular arc through a point with a prescribed
//!   tangent, ending at a second point
//! - **J-curve**: an arc of prescribed radius followed by a straight
//!   run-in to the target point
//! - **S-curve**: two arcs of prescribed radii joined by a straight
//!   segment, matched by a bounded Newton iteration
//!
//! Geometric degeneracy and infeasibility are reported as statuses
//! carried inside the result structs, never as errors or panics: every
//! solver returns its best achievable geometry alongside the status.

mod arc;
mod jcurve;
mod scurve;

pub use arc::ArcCurve;
pub use jcurve::JCurve;
pub use scurve::{SCurve, SCurveSolverOptions};

/// Geometric classification of a computed curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStatus {
    /// Nothing computed yet.
    NotCalculated,
    /// Regular curve.
    Ok,
    /// The geometry degenerated to a straight line (infinite radius).
    OkStraightLine,
    /// First arc of an S-curve degenerated to a straight line.
    OkInfiniteRadius1,
    /// Second arc of an S-curve degenerated to a straight line.
    OkInfiniteRadius2,
    /// Both arcs of an S-curve degenerated to straight lines.
    OkInfiniteRadius12,
    /// Input points coincide or a tangent has zero length.
    FailedInputOverlap,
    /// The requested radius cannot reach the target point.
    FailedRadiusTooLarge,
    /// The two arcs of an S-curve would overlap along the middle line.
    FailedArcOverlap,
}

impl CurveStatus {
    /// Whether the status describes usable geometry.
    pub fn is_ok(self) -> bool {
        matches!(
            self,
            CurveStatus::Ok
                | CurveStatus::OkStraightLine
                | CurveStatus::OkInfiniteRadius1
                | CurveStatus::OkInfiniteRadius2
                | CurveStatus::OkInfiniteRadius12
        )
    }
}

/// Outcome of the S-curve radius-matching iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// No iteration was performed (closed-form construction).
    NotSolved,
    /// Both prescribed radii were matched within tolerance.
    Converged,
    /// A chord length grew beyond the allowed maximum.
    FailedMaxLengthAlongTangentReached,
    /// A Newton step exceeded the allowed maximum magnitude.
    FailedMaxTangentStepReached,
    /// The iteration budget ran out before convergence.
    FailedMaxIterationsReached,
}
