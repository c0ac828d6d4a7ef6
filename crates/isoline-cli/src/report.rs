use std::fmt;

use isoline_solver::{Extremum, Point, Problem, Solution, SolutionStatus};

/// Human-readable summary of a solved problem
pub struct Report<'a> {
    pub problem: &'a Problem,
    pub solution: &'a Solution,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.problem.constraints().iter().enumerate() {
            writeln!(
                f,
                "Constraint {}: {}x + {}y {} {}",
                i + 1,
                format_number(c.a),
                format_number(c.b),
                c.direction.symbol(),
                format_number(c.c)
            )?;
        }
        let objective = self.problem.objective();
        writeln!(f, "Objective: Z = {}x + {}y", format_number(objective.g), format_number(objective.h))?;
        writeln!(f)?;

        if self.solution.status == SolutionStatus::Infeasible {
            writeln!(f, "Status: INFEASIBLE")?;
            return writeln!(f, "No point satisfies all constraints.");
        }

        writeln!(f, "Status: OPTIMAL")?;
        writeln!(f)?;
        writeln!(f, "{:<45} {:<25} {:>15}", "Vertex", "Coordinates", "Z")?;
        writeln!(f, "{}", "-".repeat(87))?;
        for v in &self.solution.vertices {
            writeln!(
                f,
                "{:<45} {:<25} {:>15}",
                v.provenance.to_string(),
                format_point(v.point),
                format_number(v.objective_value)
            )?;
        }
        writeln!(f)?;

        if let Some(max) = &self.solution.maximum {
            write_extremum(f, "Maximum", max)?;
        }
        if let Some(min) = &self.solution.minimum {
            write_extremum(f, "Minimum", min)?;
        }
        Ok(())
    }
}

fn write_extremum(f: &mut fmt::Formatter<'_>, label: &str, e: &Extremum) -> fmt::Result {
    writeln!(f, "{}: {}  Z = {}", label, format_point(e.point), format_number(e.objective_value))
}

pub fn format_point(p: Point) -> String {
    format!("({}, {})", format_number(p.x), format_number(p.y))
}

/// Thousands-grouped number with at most two decimals, e.g. `25,000` or `4.29`
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let digits = format!("{:.2}", rounded.abs());
    let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + int.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
