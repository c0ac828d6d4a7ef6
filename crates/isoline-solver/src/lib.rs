mod geometry;
mod isoline;
mod modes;
mod plot;
mod problem;
mod solution;
mod solver;
mod vertex;

pub use geometry::{Line, LineShape, Point};
pub use isoline::isoline_levels;
pub use modes::{maximize, minimize, optimize, Extrema, Optimum};
pub use plot::{BandSample, Isoline, PlotData, Polyline, DEFAULT_SAMPLES};
pub use problem::{Axis, Bounds, Constraint, Direction, Goal, Objective, Problem, ProblemError};
pub use solution::{Extremum, Limit, Provenance, Solution, SolutionStatus, Vertex};
pub use solver::CornerPointSolver;
pub use vertex::{candidates, Candidate};
