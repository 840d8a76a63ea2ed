//! Age bracket scoring.
//!
//! Maps a birth date to a whole-year age, a bracket, and a score delta.
//! Age is counted in full birthday anniversaries passed, not day counts.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket of an applicant.
///
/// Brackets are evaluated youngest-first with `<=` comparisons, so the
/// boundary ages 24 and 65 land in the lower bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// 18-24 years
    Young,
    /// 25-65 years
    Adult,
    /// Over 65 years
    Senior,
}

impl AgeBracket {
    /// Human-readable bracket label.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Young => "18–24",
            AgeBracket::Adult => "25–65",
            AgeBracket::Senior => ">65",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of scoring a birth date. Produced fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeScore {
    /// Whole years since the birth date, never negative.
    pub age_years: u32,
    /// Signed risk contribution of the bracket.
    pub delta: i32,
    /// Reserved policy signal meaning "reject outright". The current bracket
    /// table never sets it, but callers must honor it when it appears.
    pub hard_stop: bool,
    /// Bracket the age fell into.
    pub bracket: AgeBracket,
}

impl AgeScore {
    /// Bracket label, e.g. `"18–24"`.
    pub fn label(&self) -> &'static str {
        self.bracket.label()
    }
}

/// Pure age scorer. Total over all inputs: a birth date in the future simply
/// clamps to age 0.
pub struct AgeScorer;

impl AgeScorer {
    /// Whole elapsed years from `birth_date` to `today`, counting full
    /// birthday anniversaries. Clamped to 0 for future birth dates.
    pub fn age_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
        let mut years = today.year() - birth_date.year();
        if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Score a birth date: `<=24 -> -8`, `<=65 -> 0`, `>65 -> -5`.
    pub fn score(birth_date: NaiveDate, today: NaiveDate) -> AgeScore {
        let years = Self::age_years(birth_date, today);
        if years <= 24 {
            return AgeScore {
                age_years: years,
                delta: -8,
                hard_stop: false,
                bracket: AgeBracket::Young,
            };
        }
        if years <= 65 {
            return AgeScore {
                age_years: years,
                delta: 0,
                hard_stop: false,
                bracket: AgeBracket::Adult,
            };
        }
        AgeScore {
            age_years: years,
            delta: -5,
            hard_stop: false,
            bracket: AgeBracket::Senior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_years_counts_anniversaries() {
        let today = date(2026, 6, 15);
        // Birthday already passed this year
        assert_eq!(AgeScorer::age_years(date(2000, 6, 15), today), 26);
        // Birthday not yet reached this year
        assert_eq!(AgeScorer::age_years(date(2000, 6, 16), today), 25);
        assert_eq!(AgeScorer::age_years(date(2000, 12, 1), today), 25);
    }

    #[test]
    fn test_age_years_clamps_future_birth_date() {
        let today = date(2026, 1, 1);
        assert_eq!(AgeScorer::age_years(date(2030, 1, 1), today), 0);
    }

    #[test]
    fn test_bracket_boundaries() {
        let today = date(2026, 1, 1);

        let s24 = AgeScorer::score(date(2002, 1, 1), today);
        assert_eq!(s24.age_years, 24);
        assert_eq!(s24.delta, -8);
        assert_eq!(s24.bracket, AgeBracket::Young);

        let s25 = AgeScorer::score(date(2001, 1, 1), today);
        assert_eq!(s25.age_years, 25);
        assert_eq!(s25.delta, 0);
        assert_eq!(s25.bracket, AgeBracket::Adult);

        let s65 = AgeScorer::score(date(1961, 1, 1), today);
        assert_eq!(s65.age_years, 65);
        assert_eq!(s65.delta, 0);
        assert_eq!(s65.bracket, AgeBracket::Adult);

        let s66 = AgeScorer::score(date(1960, 1, 1), today);
        assert_eq!(s66.age_years, 66);
        assert_eq!(s66.delta, -5);
        assert_eq!(s66.bracket, AgeBracket::Senior);
    }

    #[test]
    fn test_exactly_eighteen() {
        let today = date(2026, 3, 10);
        let s = AgeScorer::score(date(2008, 3, 10), today);
        assert_eq!(s.age_years, 18);
        assert_eq!(s.bracket, AgeBracket::Young);
        assert_eq!(s.delta, -8);
        assert_eq!(s.label(), "18–24");
    }

    #[test]
    fn test_hard_stop_never_set_by_current_table() {
        let today = date(2026, 1, 1);
        for birth_year in [2020, 2005, 1990, 1950] {
            let s = AgeScorer::score(date(birth_year, 6, 1), today);
            assert!(!s.hard_stop);
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let birth = date(1999, 8, 21);
        let today = date(2026, 2, 2);
        assert_eq!(AgeScorer::score(birth, today), AgeScorer::score(birth, today));
    }
}
