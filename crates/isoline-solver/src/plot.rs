//! Data for drawing a solved problem.
//!
//! Everything is sampled on an even grid of x values across the plotting box.
//! No drawing happens here; a renderer takes these polylines and points as-is.

use crate::geometry::{Line, LineShape, Point};
use crate::isoline::isoline_levels;
use crate::problem::{Bounds, Constraint, Direction, Goal, Problem};
use crate::solution::{Extremum, Solution};

pub const DEFAULT_SAMPLES: usize = 1000;

/// A sampled line, one point per grid x
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// Vertical extent of the feasible region at one grid x
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandSample {
    pub x: f64,
    pub lower: f64,
    pub upper: f64,
}

/// A line of constant objective value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Isoline {
    pub level: f64,
    pub line: Polyline,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotData {
    pub bounds: Bounds,
    /// One boundary line per constraint
    pub constraint_lines: Vec<Polyline>,
    /// Grid samples where the feasible region is non-empty
    pub feasible_band: Vec<BandSample>,
    /// Isolines leading up to the optimum
    pub isolines: Vec<Isoline>,
    /// The isoline through each selected extremum
    pub optimal_lines: Vec<Isoline>,
    pub vertices: Vec<Point>,
    pub maximum: Option<Point>,
    pub minimum: Option<Point>,
}

impl PlotData {
    pub fn build(problem: &Problem, solution: &Solution, goal: Goal, samples: usize) -> Self {
        let bounds = *problem.bounds();
        let grid = grid(bounds.x_max, samples);
        let band: Vec<Option<(f64, f64)>> = grid
            .iter()
            .map(|&x| band_at(problem.constraints(), &bounds, x))
            .collect();

        let constraint_lines = problem
            .constraints()
            .iter()
            .map(|c| sample(&c.line(), &grid))
            .collect();

        // Minimization draws only the part of each isoline inside the region
        let clip = goal == Goal::Minimize;
        let objective = problem.objective();
        let isoline = |level: f64, clip: bool| {
            let mut line = sample(&objective.isoline(level), &grid);
            if clip {
                line.points = line
                    .points
                    .iter()
                    .zip(&band)
                    .filter(|(p, b)| matches!(b, Some((lo, hi)) if p.y >= *lo && p.y <= *hi))
                    .map(|(p, _)| *p)
                    .collect();
            }
            Isoline { level, line }
        };

        let target = match goal {
            Goal::Minimize => solution.minimum,
            Goal::Maximize | Goal::Both => solution.maximum,
        };
        let isolines = target
            .map(|t| {
                isoline_levels(goal, objective, &bounds, t.objective_value)
                    .into_iter()
                    .map(|level| isoline(level, clip))
                    .collect()
            })
            .unwrap_or_default();

        let optimal_lines = [solution.maximum, solution.minimum]
            .into_iter()
            .flatten()
            .map(|e: Extremum| isoline(e.objective_value, false))
            .collect();

        let feasible_band = grid
            .iter()
            .zip(&band)
            .filter_map(|(&x, b)| b.map(|(lower, upper)| BandSample { x, lower, upper }))
            .collect();

        Self {
            bounds,
            constraint_lines,
            feasible_band,
            isolines,
            optimal_lines,
            vertices: solution.vertices.iter().map(|v| v.point).collect(),
            maximum: solution.maximum.map(|e| e.point),
            minimum: solution.minimum.map(|e| e.point),
        }
    }
}

fn grid(x_max: f64, samples: usize) -> Vec<f64> {
    let n = samples.max(2);
    let step = x_max / (n - 1) as f64;
    (0..n).map(|i| step * i as f64).collect()
}

fn sample(line: &Line, grid: &[f64]) -> Polyline {
    Polyline {
        points: grid.iter().map(|&x| Point::new(x, line.y_at(x))).collect(),
    }
}

/// The feasible y-range at `x`, clipped to the plotting box
fn band_at(constraints: &[Constraint], bounds: &Bounds, x: f64) -> Option<(f64, f64)> {
    let mut lower: f64 = 0.0;
    let mut upper = bounds.y_max;

    for c in constraints {
        match c.line().shape() {
            LineShape::Graph { intercept, slope } => {
                let y = intercept + slope * x;
                // Dividing by a negative b flips the inequality
                let caps_y = (c.direction == Direction::Le) == (c.b > 0.0);
                if caps_y {
                    upper = upper.min(y);
                } else {
                    lower = lower.max(y);
                }
            }
            // No dependence on y: the constraint holds for the whole column or not at all
            LineShape::Vertical { .. } | LineShape::Empty => {
                if c.slack_at(Point::new(x, 0.0)) < 0.0 {
                    return None;
                }
            }
        }
    }

    (lower <= upper).then_some((lower, upper))
}
