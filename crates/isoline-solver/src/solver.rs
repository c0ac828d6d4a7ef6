use tracing::debug;

use crate::problem::{Goal, Problem};
use crate::solution::{Extremum, Solution, SolutionStatus, Vertex};
use crate::vertex::candidates;

/// Corner-point solver for two-variable linear programs
pub struct CornerPointSolver {
    /// Tolerance for constraint and bound checks
    tolerance: f64,
}

impl Default for CornerPointSolver {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

impl CornerPointSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Feasible, deduplicated vertices with their objective values, in discovery order
    pub fn feasible_vertices(&self, problem: &Problem) -> Vec<Vertex> {
        let bounds = problem.bounds();
        let tol = self.tolerance();
        let mut vertices: Vec<Vertex> = Vec::new();

        for candidate in candidates(problem.constraints(), bounds) {
            if !problem.is_feasible(candidate.point, tol) {
                debug!(point = %candidate.point, provenance = %candidate.provenance, "rejected infeasible candidate");
                continue;
            }

            // Clamping moves each constraint by a·dx, which steep constraints amplify
            let point = bounds.clamp(candidate.point);
            if !problem.is_feasible(point, tol) {
                debug!(%point, provenance = %candidate.provenance, "rejected candidate after clamping");
                continue;
            }

            if vertices.iter().any(|v| v.point.coincides(&point)) {
                debug!(%point, provenance = %candidate.provenance, "skipped duplicate vertex");
                continue;
            }

            let objective_value = problem.objective().value_at(point);
            debug!(%point, provenance = %candidate.provenance, objective_value, "accepted vertex");
            vertices.push(Vertex {
                point,
                objective_value,
                provenance: candidate.provenance,
            });
        }

        vertices
    }

    /// Solve the problem by evaluating the objective at every feasible vertex
    pub fn solve(&self, problem: &Problem, goal: Goal) -> Solution {
        let vertices = self.feasible_vertices(problem);
        if vertices.is_empty() {
            debug!("no feasible vertex");
            return Solution::infeasible();
        }

        let maximum = matches!(goal, Goal::Maximize | Goal::Both)
            .then(|| select(&vertices, |candidate, best| candidate > best));
        let minimum = matches!(goal, Goal::Minimize | Goal::Both)
            .then(|| select(&vertices, |candidate, best| candidate < best));

        if let Some(max) = &maximum {
            debug!(point = %max.point, z = max.objective_value, "maximum");
        }
        if let Some(min) = &minimum {
            debug!(point = %min.point, z = min.objective_value, "minimum");
        }

        Solution {
            status: SolutionStatus::Optimal,
            vertices,
            maximum,
            minimum,
        }
    }
}

/// Stable selection: a later vertex replaces the best only when strictly better
fn select(vertices: &[Vertex], better: impl Fn(f64, f64) -> bool) -> Extremum {
    let mut best = 0;
    for (i, v) in vertices.iter().enumerate().skip(1) {
        if better(v.objective_value, vertices[best].objective_value) {
            best = i;
        }
    }
    Extremum::from_vertex(best, &vertices[best])
}
