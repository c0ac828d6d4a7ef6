use std::fmt;

use thiserror::Error;

use crate::geometry::{Line, Point};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("{axis} bound must be a positive finite number, got {value}")]
    InvalidBound { axis: Axis, value: f64 },
    #[error("Coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
}

impl Direction {
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::Le => "<=",
            Direction::Ge => ">=",
        }
    }
}

/// `a·x + b·y <= c` or `a·x + b·y >= c`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub direction: Direction,
}

impl Constraint {
    pub fn new(a: f64, b: f64, c: f64, direction: Direction) -> Self {
        Self { a, b, c, direction }
    }

    pub fn le(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, c, Direction::Le)
    }

    pub fn ge(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, c, Direction::Ge)
    }

    /// The boundary line `a·x + b·y = c`
    pub fn line(&self) -> Line {
        Line::new(self.a, self.b, self.c)
    }

    /// How far the point is inside the constraint (negative when violated)
    pub fn slack_at(&self, p: Point) -> f64 {
        let lhs = self.a * p.x + self.b * p.y;
        match self.direction {
            Direction::Le => self.c - lhs,
            Direction::Ge => lhs - self.c,
        }
    }

    pub fn is_satisfied_by(&self, p: Point, tolerance: f64) -> bool {
        self.slack_at(p) >= -tolerance
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y {} {}", self.a, self.b, self.direction.symbol(), self.c)
    }
}

/// `Z = g·x + h·y`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub g: f64,
    pub h: f64,
}

impl Objective {
    pub fn new(g: f64, h: f64) -> Self {
        Self { g, h }
    }

    pub fn value_at(&self, p: Point) -> f64 {
        self.g * p.x + self.h * p.y
    }

    /// The line of constant objective value `g·x + h·y = z`
    pub fn isoline(&self, z: f64) -> Line {
        Line::new(self.g, self.h, z)
    }
}

/// Search box `[0, x_max] × [0, y_max]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_max: f64, y_max: f64) -> Result<Self, ProblemError> {
        let bounds = Self { x_max, y_max };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(&self) -> Result<(), ProblemError> {
        for (axis, value) in [(Axis::X, self.x_max), (Axis::Y, self.y_max)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProblemError::InvalidBound { axis, value });
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= -tolerance
            && p.x <= self.x_max + tolerance
            && p.y >= -tolerance
            && p.y <= self.y_max + tolerance
    }

    /// Snap a point that is inside up to tolerance onto the box
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.x_max), p.y.clamp(0.0, self.y_max))
    }
}

/// What to look for among the feasible vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    Maximize,
    Minimize,
    /// Both extrema over the same vertex set
    Both,
}

/// A two-variable linear program
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Problem {
    constraints: [Constraint; 2],
    objective: Objective,
    bounds: Bounds,
}

impl Problem {
    pub fn new(
        constraints: [Constraint; 2],
        objective: Objective,
        bounds: Bounds,
    ) -> Result<Self, ProblemError> {
        const NAMES: [[&str; 3]; 2] = [["a1", "b1", "c1"], ["a2", "b2", "c2"]];
        for (constraint, names) in constraints.iter().zip(NAMES) {
            check_finite(names[0], constraint.a)?;
            check_finite(names[1], constraint.b)?;
            check_finite(names[2], constraint.c)?;
        }
        check_finite("g", objective.g)?;
        check_finite("h", objective.h)?;
        bounds.validate()?;

        Ok(Self {
            constraints,
            objective,
            bounds,
        })
    }

    /// Both constraints are upper bounds
    pub fn maximize(
        first: [f64; 3],
        second: [f64; 3],
        objective: [f64; 2],
        bounds: [f64; 2],
    ) -> Result<Self, ProblemError> {
        Self::from_coefficients(first, second, Direction::Le, Direction::Le, objective, bounds)
    }

    /// Both constraints are lower bounds
    pub fn minimize(
        first: [f64; 3],
        second: [f64; 3],
        objective: [f64; 2],
        bounds: [f64; 2],
    ) -> Result<Self, ProblemError> {
        Self::from_coefficients(first, second, Direction::Ge, Direction::Ge, objective, bounds)
    }

    /// First constraint is an upper bound, second a lower bound
    pub fn optimize(
        first: [f64; 3],
        second: [f64; 3],
        objective: [f64; 2],
        bounds: [f64; 2],
    ) -> Result<Self, ProblemError> {
        Self::from_coefficients(first, second, Direction::Le, Direction::Ge, objective, bounds)
    }

    fn from_coefficients(
        [a1, b1, c1]: [f64; 3],
        [a2, b2, c2]: [f64; 3],
        first: Direction,
        second: Direction,
        [g, h]: [f64; 2],
        [x_max, y_max]: [f64; 2],
    ) -> Result<Self, ProblemError> {
        Self::new(
            [Constraint::new(a1, b1, c1, first), Constraint::new(a2, b2, c2, second)],
            Objective::new(g, h),
            Bounds { x_max, y_max },
        )
    }

    pub fn constraints(&self) -> &[Constraint; 2] {
        &self.constraints
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Whether a point satisfies every constraint and lies in the box
    pub fn is_feasible(&self, p: Point, tolerance: f64) -> bool {
        self.bounds.contains(p, tolerance)
            && self.constraints.iter().all(|c| c.is_satisfied_by(p, tolerance))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ProblemError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProblemError::NonFiniteCoefficient { name, value })
    }
}
