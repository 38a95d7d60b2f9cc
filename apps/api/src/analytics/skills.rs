use serde::Serialize;

/// Share of the average normalized score covered vs. missing, for the
/// match/gap doughnut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillsSplit {
    pub match_percentage: u32,
    pub gap_percentage: u32,
    pub has_data: bool,
}

pub fn compute_skills_split(normalized: &[f64]) -> SkillsSplit {
    if normalized.is_empty() {
        return SkillsSplit {
            match_percentage: 0,
            gap_percentage: 0,
            has_data: false,
        };
    }
    let average = normalized.iter().sum::<f64>() / normalized.len() as f64;
    // scores above 100 only come from out-of-range percentage input
    let match_percentage = (average.round() as u32).min(100);
    SkillsSplit {
        match_percentage,
        gap_percentage: 100 - match_percentage,
        has_data: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sums_to_hundred() {
        let split = compute_skills_split(&[85.0, 95.0, 30.0]);
        assert_eq!(split.match_percentage, 70);
        assert_eq!(split.gap_percentage, 30);
        assert!(split.has_data);
    }

    #[test]
    fn test_average_rounds_to_whole_percent() {
        let split = compute_skills_split(&[72.0, 73.0]);
        assert_eq!(split.match_percentage, 73);
        assert_eq!(split.gap_percentage, 27);
    }

    #[test]
    fn test_out_of_range_average_is_capped() {
        let split = compute_skills_split(&[150.0]);
        assert_eq!(split.match_percentage, 100);
        assert_eq!(split.gap_percentage, 0);
    }

    #[test]
    fn test_empty_input_has_no_data() {
        let split = compute_skills_split(&[]);
        assert!(!split.has_data);
        assert_eq!(split.match_percentage + split.gap_percentage, 0);
    }
}
