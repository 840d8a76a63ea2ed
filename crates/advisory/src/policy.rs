//! Advisory-level score policy.
//!
//! Maps feed advisory levels (1..4) to score deltas for callers that weigh
//! travel advisories into an applicant's geo picture. Level 1-2 and unknown
//! levels are neutral.

/// Residence-country delta for an advisory level.
pub fn advisory_residence_delta(level: Option<u8>) -> i32 {
    match level {
        Some(4) => -15, // Do Not Travel
        Some(3) => -10, // Reconsider Travel
        _ => 0,
    }
}

/// Nationality delta for an advisory level.
pub fn advisory_nationality_delta(level: Option<u8>) -> i32 {
    match level {
        Some(4) => -10,
        Some(3) => -5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residence_policy() {
        assert_eq!(advisory_residence_delta(Some(4)), -15);
        assert_eq!(advisory_residence_delta(Some(3)), -10);
        assert_eq!(advisory_residence_delta(Some(2)), 0);
        assert_eq!(advisory_residence_delta(Some(1)), 0);
        assert_eq!(advisory_residence_delta(None), 0);
    }

    #[test]
    fn test_nationality_policy() {
        assert_eq!(advisory_nationality_delta(Some(4)), -10);
        assert_eq!(advisory_nationality_delta(Some(3)), -5);
        assert_eq!(advisory_nationality_delta(None), 0);
    }
}
