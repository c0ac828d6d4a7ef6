use std::fmt;

use crate::geometry::Point;

/// A boundary that limits a variable along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Limit {
    /// Constraint at this index
    Constraint(usize),
    /// The plotting bound
    Bound,
}

/// Which pair of boundary lines produced a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Provenance {
    /// Limit crossing the x-axis (y = 0)
    XAxis(Limit),
    /// Limit crossing the y-axis (x = 0)
    YAxis(Limit),
    /// Two constraints crossing each other
    Intersection(usize, usize),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Constraint(i) => write!(f, "constraint {}", i + 1),
            Limit::Bound => write!(f, "plot bound"),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::XAxis(limit) => write!(f, "{} x-axis intercept", limit),
            Provenance::YAxis(limit) => write!(f, "{} y-axis intercept", limit),
            Provenance::Intersection(i, j) => {
                write!(f, "constraint {} / constraint {} intersection", i + 1, j + 1)
            }
        }
    }
}

/// A feasible corner point with its objective value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub point: Point,
    pub objective_value: f64,
    pub provenance: Provenance,
}

/// The selected optimum
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremum {
    /// Position in `Solution::vertices`
    pub index: usize,
    pub point: Point,
    pub objective_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolutionStatus {
    /// At least one feasible vertex exists and the extrema were selected
    Optimal,
    /// No vertex satisfies all constraints
    Infeasible,
}

/// The result of solving a problem
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub status: SolutionStatus,
    /// Feasible vertices in discovery order
    pub vertices: Vec<Vertex>,
    /// Populated when maximizing
    pub maximum: Option<Extremum>,
    /// Populated when minimizing
    pub minimum: Option<Extremum>,
}

impl Solution {
    pub fn infeasible() -> Self {
        Self {
            status: SolutionStatus::Infeasible,
            vertices: Vec::new(),
            maximum: None,
            minimum: None,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

impl Extremum {
    pub(crate) fn from_vertex(index: usize, vertex: &Vertex) -> Self {
        Self {
            index,
            point: vertex.point,
            objective_value: vertex.objective_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_labels() {
        assert_eq!(
            Provenance::XAxis(Limit::Constraint(0)).to_string(),
            "constraint 1 x-axis intercept"
        );
        assert_eq!(Provenance::YAxis(Limit::Bound).to_string(), "plot bound y-axis intercept");
        assert_eq!(
            Provenance::Intersection(0, 1).to_string(),
            "constraint 1 / constraint 2 intersection"
        );
    }

    #[test]
    fn test_infeasible_has_no_extrema() {
        let solution = Solution::infeasible();
        assert!(!solution.is_optimal());
        assert!(solution.vertices.is_empty());
        assert_eq!(solution.maximum, None);
        assert_eq!(solution.minimum, None);
    }
}
