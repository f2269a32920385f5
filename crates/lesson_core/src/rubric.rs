//! Grading rubric: component weights and the weighted total.

/// Fixed weighting scheme used by the prompt and for consistency checks.
pub struct Rubric;

impl Rubric {
    pub const CONTENT: f64 = 0.80;
    pub const ORGANIZATION: f64 = 0.15;
    pub const MECHANICS: f64 = 0.05;
    /// Largest move mechanics may cause in the final grade, in points
    pub const MECHANICS_MAX_SWING: u32 = 7;
    /// Upper bound of every component score
    pub const SCALE_MAX: u32 = 100;
    /// Expected minimum of conceptual improvement suggestions
    pub const MIN_SUGGESTIONS: usize = 3;
    /// Maximum number of reported mechanics issues
    pub const MAX_MECHANICS_ISSUES: usize = 5;

    /// `round(0.80*content + 0.15*organization + 0.05*mechanics)`, halves away from zero.
    pub fn weighted_grade(content: i64, organization: i64, mechanics: i64) -> i64 {
        let total = Self::CONTENT * content as f64
            + Self::ORGANIZATION * organization as f64
            + Self::MECHANICS * mechanics as f64;
        total.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = Rubric::CONTENT + Rubric::ORGANIZATION + Rubric::MECHANICS;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_grade_matches_prompt_example() {
        // 0.8*86 + 0.15*78 + 0.05*92 = 85.1
        assert_eq!(Rubric::weighted_grade(86, 78, 92), 85);
    }

    #[test]
    fn test_weighted_grade_bounds() {
        assert_eq!(Rubric::weighted_grade(0, 0, 0), 0);
        assert_eq!(Rubric::weighted_grade(100, 100, 100), 100);
    }
}
