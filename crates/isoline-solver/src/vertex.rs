//! Candidate corner points of the feasible region.
//!
//! Candidates come from the constraint boundaries crossing the axes and from
//! the constraint boundaries crossing each other. Nothing here checks
//! feasibility; that is the solver's job.

use tracing::trace;

use crate::geometry::Point;
use crate::problem::{Bounds, Constraint, Direction};
use crate::solution::{Limit, Provenance};

/// A possible vertex before feasibility filtering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub point: Point,
    pub provenance: Provenance,
}

impl Candidate {
    fn new(x: f64, y: f64, provenance: Provenance) -> Self {
        Self {
            point: Point::new(x, y),
            provenance,
        }
    }
}

/// Enumerate candidate vertices in discovery order: axis crossings first,
/// then pairwise constraint intersections.
///
/// When every constraint points the same way only the tightest crossing on
/// each axis can be a vertex, so one candidate per axis is produced. Mixed
/// directions produce every crossing of every constraint.
pub fn candidates(constraints: &[Constraint], bounds: &Bounds) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(constraints.len() * 2 + 1);

    match shared_direction(constraints) {
        Some(direction) => {
            let x_limit = tightest(constraints, direction, Some(bounds.x_max), |c| {
                (c.a, c.line().x_intercept())
            });
            if let Some((x, limit)) = x_limit {
                out.push(Candidate::new(x, 0.0, Provenance::XAxis(limit)));
            }

            let y_limit = tightest(constraints, direction, Some(bounds.y_max), |c| {
                (c.b, c.line().y_intercept())
            });
            if let Some((y, limit)) = y_limit {
                out.push(Candidate::new(0.0, y, Provenance::YAxis(limit)));
            }
        }
        None => {
            for (i, constraint) in constraints.iter().enumerate() {
                let line = constraint.line();
                match line.x_intercept() {
                    Some(x) => out.push(Candidate::new(x, 0.0, Provenance::XAxis(Limit::Constraint(i)))),
                    None => trace!(constraint = i, "no x-axis crossing"),
                }
                match line.y_intercept() {
                    Some(y) => out.push(Candidate::new(0.0, y, Provenance::YAxis(Limit::Constraint(i)))),
                    None => trace!(constraint = i, "no y-axis crossing"),
                }
            }
        }
    }

    for i in 0..constraints.len() {
        for j in (i + 1)..constraints.len() {
            match constraints[i].line().intersect(&constraints[j].line()) {
                Some(p) => out.push(Candidate::new(p.x, p.y, Provenance::Intersection(i, j))),
                None => trace!(i, j, "constraints are parallel, skipping intersection"),
            }
        }
    }

    out
}

fn shared_direction(constraints: &[Constraint]) -> Option<Direction> {
    let first = constraints.first()?.direction;
    constraints
        .iter()
        .all(|c| c.direction == first)
        .then_some(first)
}

/// The tightest axis crossing among the constraints.
///
/// Upper bounds take the smallest crossing, with the plotting bound joining
/// in; lower bounds take the largest. A crossing only counts when the
/// constraint limits the axis in that direction, i.e. its coefficient for the
/// axis is positive: `-x + y <= 2` meets the x-axis at -2 but only bounds x
/// from below. Ties keep the earliest limit.
///
/// `axis` returns the constraint's coefficient for the axis and its crossing.
fn tightest(
    constraints: &[Constraint],
    direction: Direction,
    bound: Option<f64>,
    axis: impl Fn(&Constraint) -> (f64, Option<f64>),
) -> Option<(f64, Limit)> {
    let crossings = constraints.iter().enumerate().filter_map(|(i, c)| {
        let (coefficient, crossing) = axis(c);
        if coefficient <= 0.0 {
            trace!(constraint = i, coefficient, "constraint does not limit this axis");
            return None;
        }
        crossing.map(|v| (v, Limit::Constraint(i)))
    });

    match direction {
        Direction::Le => crossings
            .chain(bound.map(|v| (v, Limit::Bound)))
            .fold(None, |best, (v, limit)| match best {
                Some((b, _)) if b <= v => best,
                _ => Some((v, limit)),
            }),
        Direction::Ge => crossings.fold(None, |best, (v, limit)| match best {
            Some((b, _)) if b >= v => best,
            _ => Some((v, limit)),
        }),
    }
}
