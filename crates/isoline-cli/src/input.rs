use std::path::{Path, PathBuf};

use isoline_solver::{Bounds, Constraint, Goal, Objective, Problem, ProblemError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error reading {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Invalid problem file {0}: {1}")]
    Json(PathBuf, serde_json::Error),
    #[error("Invalid problem: {0}")]
    Problem(#[from] ProblemError),
}

/// A problem description as stored on disk
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    pub goal: Goal,
    pub constraints: [Constraint; 2],
    pub objective: Objective,
    pub bounds: Bounds,
}

impl ProblemFile {
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn into_problem(self) -> Result<(Goal, Problem), ProblemError> {
        let problem = Problem::new(self.constraints, self.objective, self.bounds)?;
        Ok((self.goal, problem))
    }
}

/// Read and validate a JSON problem file
pub fn load(path: &Path) -> Result<(Goal, Problem), InputError> {
    let source = std::fs::read_to_string(path).map_err(|e| InputError::Io(path.to_path_buf(), e))?;
    let file = ProblemFile::parse(&source).map_err(|e| InputError::Json(path.to_path_buf(), e))?;
    Ok(file.into_problem()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoline_solver::Direction;

    #[test]
    fn test_parse_problem_file() {
        let source = r#"{
  "goal": "both",
  "constraints": [
    { "a": 4, "b": 3, "c": 24, "direction": "le" },
    { "a": 2, "b": 5, "c": 20, "direction": "ge" }
  ],
  "objective": { "g": 7, "h": 5 },
  "bounds": { "x_max": 10, "y_max": 8 }
}"#;
        let (goal, problem) = ProblemFile::parse(source).unwrap().into_problem().unwrap();
        assert_eq!(goal, Goal::Both);
        assert_eq!(problem.constraints()[1].direction, Direction::Ge);
        assert_eq!(problem.bounds().y_max, 8.0);
    }

    #[test]
    fn test_invalid_bounds_in_file() {
        let source = r#"{
  "goal": "maximize",
  "constraints": [
    { "a": 1, "b": 1, "c": 4, "direction": "le" },
    { "a": 1, "b": 2, "c": 6, "direction": "le" }
  ],
  "objective": { "g": 1, "h": 1 },
  "bounds": { "x_max": -1, "y_max": 8 }
}"#;
        let err = ProblemFile::parse(source).unwrap().into_problem().unwrap_err();
        assert!(matches!(err, ProblemError::InvalidBound { .. }));
    }

    #[test]
    fn test_rejects_three_constraints() {
        let source = r#"{
  "goal": "minimize",
  "constraints": [
    { "a": 1, "b": 1, "c": 4, "direction": "ge" },
    { "a": 1, "b": 2, "c": 6, "direction": "ge" },
    { "a": 2, "b": 1, "c": 6, "direction": "ge" }
  ],
  "objective": { "g": 1, "h": 1 },
  "bounds": { "x_max": 10, "y_max": 10 }
}"#;
        assert!(ProblemFile::parse(source).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/nonexistent/problem.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(..)));
    }
}
