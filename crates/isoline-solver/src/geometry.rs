use std::fmt;

use tracing::trace;

/// Determinant magnitude below which two lines are treated as parallel
const SINGULAR_EPS: f64 = 1e-12;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates rounded to two decimals, used as the identity of a vertex
    pub fn rounded(&self) -> (f64, f64) {
        (round2(self.x), round2(self.y))
    }

    /// Whether two points are the same vertex once floating-point noise is rounded away
    pub fn coincides(&self, other: &Point) -> bool {
        self.rounded() == other.rounded()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn round2(v: f64) -> f64 {
    // Adding 0.0 folds -0.0 into 0.0 so both compare equal after rounding
    (v * 100.0).round() / 100.0 + 0.0
}

/// How a line `a·x + b·y = c` can be read as a function of x
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineShape {
    /// `y = intercept + slope·x`
    Graph { intercept: f64, slope: f64 },
    /// `b = 0`: the line is `x = c / a`
    Vertical { x: f64 },
    /// `a = b = 0`: no line at all
    Empty,
}

/// The line `a·x + b·y = c`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn shape(&self) -> LineShape {
        if self.b != 0.0 {
            LineShape::Graph {
                intercept: self.c / self.b,
                slope: -self.a / self.b,
            }
        } else if self.a != 0.0 {
            LineShape::Vertical { x: self.c / self.a }
        } else {
            LineShape::Empty
        }
    }

    /// Evaluate the line as `y(x)`.
    ///
    /// Lines with no dependence on y cannot be written as a function of x and
    /// evaluate to the zero function instead.
    pub fn y_at(&self, x: f64) -> f64 {
        match self.shape() {
            LineShape::Graph { intercept, slope } => intercept + slope * x,
            LineShape::Vertical { .. } | LineShape::Empty => {
                trace!(a = self.a, b = self.b, "degenerate line, using zero function");
                0.0
            }
        }
    }

    /// Where the line crosses `y = 0`, if it does at a single point
    pub fn x_intercept(&self) -> Option<f64> {
        (self.a != 0.0).then(|| self.c / self.a)
    }

    /// Where the line crosses `x = 0`, if it does at a single point
    pub fn y_intercept(&self) -> Option<f64> {
        (self.b != 0.0).then(|| self.c / self.b)
    }

    /// Unique intersection with another line, `None` when the system is singular
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        let scale = self.a.abs().max(self.b.abs()) * other.a.abs().max(other.b.abs());
        if scale == 0.0 || det.abs() <= SINGULAR_EPS * scale {
            return None;
        }

        // Cramer's rule
        let x = (self.c * other.b - other.c * self.b) / det;
        let y = (self.a * other.c - other.a * self.c) / det;
        Some(Point::new(x, y))
    }
}
