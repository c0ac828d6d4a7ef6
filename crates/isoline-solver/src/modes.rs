//! One-call entry points for the three problem shapes.
//!
//! Coefficients are passed as `[a, b, c]` per constraint, `[g, h]` for the
//! objective and `[x_max, y_max]` for the plotting box. `Ok(None)` means no
//! vertex satisfies the constraints.

use crate::problem::{Goal, Problem, ProblemError};
use crate::solution::Extremum;
use crate::solver::CornerPointSolver;

/// An optimal vertex and its objective value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimum {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Both extrema over the same vertex set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrema {
    pub maximum: Optimum,
    pub minimum: Optimum,
}

impl From<Extremum> for Optimum {
    fn from(e: Extremum) -> Self {
        Self {
            x: e.point.x,
            y: e.point.y,
            z: e.objective_value,
        }
    }
}

/// Maximize `g·x + h·y` subject to two `<=` constraints
pub fn maximize(
    first: [f64; 3],
    second: [f64; 3],
    objective: [f64; 2],
    bounds: [f64; 2],
) -> Result<Option<Optimum>, ProblemError> {
    let problem = Problem::maximize(first, second, objective, bounds)?;
    let solution = CornerPointSolver::new().solve(&problem, Goal::Maximize);
    Ok(solution.maximum.map(Optimum::from))
}

/// Minimize `g·x + h·y` subject to two `>=` constraints
pub fn minimize(
    first: [f64; 3],
    second: [f64; 3],
    objective: [f64; 2],
    bounds: [f64; 2],
) -> Result<Option<Optimum>, ProblemError> {
    let problem = Problem::minimize(first, second, objective, bounds)?;
    let solution = CornerPointSolver::new().solve(&problem, Goal::Minimize);
    Ok(solution.minimum.map(Optimum::from))
}

/// Find both extrema of `g·x + h·y` subject to `first <=` and `second >=`
pub fn optimize(
    first: [f64; 3],
    second: [f64; 3],
    objective: [f64; 2],
    bounds: [f64; 2],
) -> Result<Option<Extrema>, ProblemError> {
    let problem = Problem::optimize(first, second, objective, bounds)?;
    let solution = CornerPointSolver::new().solve(&problem, Goal::Both);
    Ok(solution.maximum.zip(solution.minimum).map(|(max, min)| Extrema {
        maximum: max.into(),
        minimum: min.into(),
    }))
}
