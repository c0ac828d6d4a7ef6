use crate::problem::{Bounds, Goal, Objective};

// Number of isolines drawn toward the optimum, per goal
const MAXIMIZE_STEPS: usize = 30;
const MINIMIZE_STEPS: usize = 40;
const BOTH_STEPS: usize = 20;

/// Objective levels for the isolines drawn before the optimal line.
///
/// The sequence starts at a baseline and walks toward `target` in equal
/// steps, excluding `target` itself:
/// - maximize: from 10% of the maximum up to the maximum
/// - minimize: from the minimum up to the largest value the objective takes
///   on the corners of the plotting box
/// - both: from zero up to the maximum
///
/// A zero-length or non-finite step gives no levels.
pub fn isoline_levels(goal: Goal, objective: &Objective, bounds: &Bounds, target: f64) -> Vec<f64> {
    let (start, stop, steps) = match goal {
        Goal::Maximize => (target * 0.1, target, MAXIMIZE_STEPS),
        Goal::Minimize => {
            let ceiling = (objective.g * bounds.x_max)
                .max(objective.h * bounds.y_max)
                .max(objective.g * bounds.x_max + objective.h * bounds.y_max);
            (target, ceiling, MINIMIZE_STEPS)
        }
        Goal::Both => (0.0, target, BOTH_STEPS),
    };

    let step = (stop - start) / steps as f64;
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    (0..steps).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_levels() {
        let objective = Objective::new(150.0, 100.0);
        let bounds = Bounds::new(300.0, 300.0).unwrap();
        let levels = isoline_levels(Goal::Maximize, &objective, &bounds, 25000.0);

        assert_eq!(levels.len(), 30);
        assert!((levels[0] - 2500.0).abs() < 1e-9);
        assert!((levels[1] - 3250.0).abs() < 1e-9);
        assert!(levels.iter().all(|&z| z < 25000.0));
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_minimize_levels_reach_toward_box_corner() {
        let objective = Objective::new(20000.0, 16000.0);
        let bounds = Bounds::new(15.0, 15.0).unwrap();
        let levels = isoline_levels(Goal::Minimize, &objective, &bounds, 120000.0);

        // Largest objective on the box is 20000*15 + 16000*15 = 540000
        assert_eq!(levels.len(), 40);
        assert_eq!(levels[0], 120000.0);
        assert!((levels[1] - 130500.0).abs() < 1e-9);
        assert!(levels.iter().all(|&z| z < 540000.0));
    }

    #[test]
    fn test_both_levels_start_at_zero() {
        let objective = Objective::new(7.0, 5.0);
        let bounds = Bounds::new(10.0, 8.0).unwrap();
        let levels = isoline_levels(Goal::Both, &objective, &bounds, 40.0);

        assert_eq!(levels.len(), 20);
        assert_eq!(levels[0], 0.0);
        assert!((levels[19] - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_optimum_has_no_levels() {
        let objective = Objective::new(0.0, 0.0);
        let bounds = Bounds::new(10.0, 10.0).unwrap();
        assert!(isoline_levels(Goal::Maximize, &objective, &bounds, 0.0).is_empty());
        assert!(isoline_levels(Goal::Minimize, &objective, &bounds, 0.0).is_empty());
        assert!(isoline_levels(Goal::Both, &objective, &bounds, 0.0).is_empty());
    }
}
