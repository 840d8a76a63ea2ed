//! Geo risk scoring.
//!
//! Scores a (nationality, residence-country) pair against a static 4-tier
//! country classification, plus a mismatch factor driven by the free-text
//! justification. Country inputs are normalized through an injected ISO-2
//! resolver; anything the resolver cannot place falls back to the raw
//! uppercased token and classifies at the default tier.

use crate::keywords;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit tier membership. Codes not listed classify at level 2.
const LEVEL_4_VERY_HIGH: &[&str] = &["SY", "IQ", "AF", "YE", "LY"];
const LEVEL_3_HIGH: &[&str] = &["TR", "IN", "EG", "TH", "MX"];
const LEVEL_1_LOW: &[&str] = &["US", "DE", "FR", "NL", "SE"];

/// Country risk level for an ISO-2 code, 1 = lowest, 4 = highest.
///
/// Pure function of the uppercased code; unknown codes default to level 2.
pub fn level_for_country(iso2: &str) -> u8 {
    let code = iso2.to_uppercase();
    let code = code.as_str();
    if LEVEL_4_VERY_HIGH.contains(&code) {
        4
    } else if LEVEL_3_HIGH.contains(&code) {
        3
    } else if LEVEL_1_LOW.contains(&code) {
        1
    } else {
        2
    }
}

/// Which factor a country level is being scored as. Residence carries more
/// weight than nationality at the top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactor {
    Nationality,
    Residence,
}

/// Level -> delta policy table.
pub fn delta_for_level(level: u8, factor: RiskFactor) -> i32 {
    match level {
        4 => match factor {
            RiskFactor::Nationality => -12,
            RiskFactor::Residence => -15,
        },
        3 => match factor {
            RiskFactor::Nationality => -8,
            RiskFactor::Residence => -6,
        },
        2 => -2,
        _ => 1,
    }
}

/// One contributing factor in a geo risk breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRiskDelta {
    pub title: String,
    pub delta: i32,
}

/// Qualitative color band for a geo total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Red,
    Yellow,
    Green,
    Neutral,
}

impl RiskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskColor::Red => "red",
            RiskColor::Yellow => "yellow",
            RiskColor::Green => "green",
            RiskColor::Neutral => "neutral",
        }
    }

    /// Band for a total. Checks run red, yellow, green, then neutral; the
    /// (-2, 5) range deliberately has no explicit band and falls to neutral.
    pub fn for_total(total: i32) -> Self {
        if total <= -10 {
            return RiskColor::Red;
        }
        if total <= -2 {
            return RiskColor::Yellow;
        }
        if total >= 5 {
            return RiskColor::Green;
        }
        RiskColor::Neutral
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full geo scoring result. Derived, never stored; recompute when inputs
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRiskResult {
    /// Factors in fixed order: nationality, residence, mismatch.
    pub deltas: Vec<GeoRiskDelta>,
    /// Exact sum of `deltas`.
    pub total: i32,
    pub color: RiskColor,
    pub nationality_level: Option<u8>,
    pub residence_level: Option<u8>,
}

/// Geo risk scorer over an injected ISO-2 resolver.
///
/// The resolver contract: ISO-2 in, same ISO-2 out; ISO-3, country name or
/// demonym in, corresponding ISO-2 out; unknown input, `None`. The scorer is
/// correct for any resolver satisfying that, and it never fails - unresolved
/// input degrades to the raw uppercased token.
pub struct GeoRiskScorer<R> {
    resolver: R,
}

impl<R> GeoRiskScorer<R>
where
    R: Fn(&str) -> Option<String>,
{
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    fn normalize_iso2(&self, input: &str) -> String {
        let trimmed = input.trim();
        (self.resolver)(trimmed)
            .unwrap_or_else(|| trimmed.to_string())
            .to_uppercase()
    }

    /// Mismatch factor on its own, for live form previews.
    ///
    /// 0 when the codes match or either side is empty; -10 when the
    /// justification contains a risk keyword; +2 otherwise.
    pub fn mismatch_delta(
        &self,
        nationality: &str,
        residence: &str,
        justification: Option<&str>,
    ) -> i32 {
        let nat = self.normalize_iso2(nationality);
        let res = self.normalize_iso2(residence);
        Self::mismatch_for_codes(&nat, &res, justification)
    }

    fn mismatch_for_codes(nat_iso: &str, res_iso: &str, justification: Option<&str>) -> i32 {
        if nat_iso.is_empty() || res_iso.is_empty() || nat_iso == res_iso {
            return 0;
        }
        if keywords::is_risky_text(justification.unwrap_or("")) {
            -10
        } else {
            2
        }
    }

    /// Score a nationality/residence pair.
    pub fn score(
        &self,
        nationality: &str,
        residence: &str,
        justification: Option<&str>,
    ) -> GeoRiskResult {
        let nat_iso = self.normalize_iso2(nationality);
        let res_iso = self.normalize_iso2(residence);

        let nat_level = level_for_country(&nat_iso);
        let res_level = level_for_country(&res_iso);

        let mismatch = Self::mismatch_for_codes(&nat_iso, &res_iso, justification);
        let mismatch_title = if nat_iso == res_iso {
            "Uyruk = İkamet"
        } else {
            "Uyruk ≠ İkamet"
        };

        let deltas = vec![
            GeoRiskDelta {
                title: format!("Uyruk riski (Level {})", nat_level),
                delta: delta_for_level(nat_level, RiskFactor::Nationality),
            },
            GeoRiskDelta {
                title: format!("İkamet riski (Level {})", res_level),
                delta: delta_for_level(res_level, RiskFactor::Residence),
            },
            GeoRiskDelta {
                title: mismatch_title.to_string(),
                delta: mismatch,
            },
        ];

        let total: i32 = deltas.iter().map(|d| d.delta).sum();

        GeoRiskResult {
            deltas,
            total,
            color: RiskColor::for_total(total),
            nationality_level: Some(nat_level),
            residence_level: Some(res_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal resolver stub covering the fixtures used below.
    fn stub_resolver(input: &str) -> Option<String> {
        let key = input.trim().to_uppercase();
        if key.chars().count() == 2 {
            return Some(key);
        }
        let iso = match key.as_str() {
            "TURKISH" | "TURKEY" => "TR",
            "GERMAN" | "GERMANY" => "DE",
            "SYRIAN" | "SYRIA" => "SY",
            "DUTCH" | "NETHERLANDS" => "NL",
            _ => return None,
        };
        Some(iso.to_string())
    }

    fn scorer() -> GeoRiskScorer<fn(&str) -> Option<String>> {
        GeoRiskScorer::new(stub_resolver)
    }

    #[test]
    fn test_level_table() {
        assert_eq!(level_for_country("SY"), 4);
        assert_eq!(level_for_country("tr"), 3);
        assert_eq!(level_for_country("DE"), 1);
        assert_eq!(level_for_country("BR"), 2);
        assert_eq!(level_for_country(""), 2);
    }

    #[test]
    fn test_delta_policy() {
        assert_eq!(delta_for_level(4, RiskFactor::Nationality), -12);
        assert_eq!(delta_for_level(4, RiskFactor::Residence), -15);
        assert_eq!(delta_for_level(3, RiskFactor::Nationality), -8);
        assert_eq!(delta_for_level(3, RiskFactor::Residence), -6);
        assert_eq!(delta_for_level(2, RiskFactor::Nationality), -2);
        assert_eq!(delta_for_level(2, RiskFactor::Residence), -2);
        assert_eq!(delta_for_level(1, RiskFactor::Nationality), 1);
        assert_eq!(delta_for_level(1, RiskFactor::Residence), 1);
    }

    #[test]
    fn test_color_bands() {
        assert_eq!(RiskColor::for_total(-15), RiskColor::Red);
        assert_eq!(RiskColor::for_total(-10), RiskColor::Red);
        assert_eq!(RiskColor::for_total(-5), RiskColor::Yellow);
        assert_eq!(RiskColor::for_total(-2), RiskColor::Yellow);
        assert_eq!(RiskColor::for_total(0), RiskColor::Neutral);
        assert_eq!(RiskColor::for_total(4), RiskColor::Neutral);
        assert_eq!(RiskColor::for_total(5), RiskColor::Green);
        assert_eq!(RiskColor::for_total(6), RiskColor::Green);
    }

    #[test]
    fn test_turkish_in_germany_education() {
        // TR level 3 nationality (-8), DE level 1 residence (+1),
        // explained mismatch (+2) -> total -5 -> yellow
        let result = scorer().score("Turkish", "Germany", Some("Eğitim için"));
        assert_eq!(result.deltas.len(), 3);
        assert_eq!(result.deltas[0].delta, -8);
        assert_eq!(result.deltas[1].delta, 1);
        assert_eq!(result.deltas[2].delta, 2);
        assert_eq!(result.total, -5);
        assert_eq!(result.color, RiskColor::Yellow);
        assert_eq!(result.nationality_level, Some(3));
        assert_eq!(result.residence_level, Some(1));
    }

    #[test]
    fn test_same_country_mismatch_is_zero() {
        // Same resolved code: justification text is irrelevant
        let result = scorer().score("Syrian", "Syrian", Some("uyuşturucu"));
        assert_eq!(result.deltas[2].delta, 0);
        // SY nationality -12, SY residence -15
        assert_eq!(result.total, -27);
        assert_eq!(result.color, RiskColor::Red);
    }

    #[test]
    fn test_mismatch_with_risky_justification() {
        let result = scorer().score("Syrian", "Germany", Some("sabıka kaydım var"));
        assert_eq!(result.deltas[2].delta, -10);
        // -12 + 1 - 10
        assert_eq!(result.total, -21);
        assert_eq!(result.color, RiskColor::Red);
    }

    #[test]
    fn test_mismatch_without_justification_text() {
        // Absent justification reads as empty text: no keyword, so +2
        let result = scorer().score("Turkish", "Netherlands", None);
        assert_eq!(result.deltas[2].delta, 2);
    }

    #[test]
    fn test_empty_side_has_no_mismatch() {
        let s = scorer();
        assert_eq!(s.mismatch_delta("", "DE", Some("sabıka")), 0);
        assert_eq!(s.mismatch_delta("TR", "", None), 0);
    }

    #[test]
    fn test_unresolvable_input_degrades_to_level_2() {
        let result = scorer().score("Atlantis", "Atlantis", None);
        // Both fall back to "ATLANTIS", level 2: -2 and -2, equal so no mismatch
        assert_eq!(result.deltas[0].delta, -2);
        assert_eq!(result.deltas[1].delta, -2);
        assert_eq!(result.deltas[2].delta, 0);
        assert_eq!(result.total, -4);
        assert_eq!(result.color, RiskColor::Yellow);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let result = scorer().score("Turkish", "Germany", None);
        let sum: i32 = result.deltas.iter().map(|d| d.delta).sum();
        assert_eq!(result.total, sum);
    }

    #[test]
    fn test_green_band_reachable() {
        // Two level-1 countries with an explained mismatch: +1 +1 +2 = +4 is
        // still neutral; same-country level 1 pair stays at +2 -> neutral.
        // Green needs total >= 5, which the current tables only reach via
        // callers combining scores, so verify the band function directly.
        let result = scorer().score("German", "Netherlands", None);
        assert_eq!(result.total, 4);
        assert_eq!(result.color, RiskColor::Neutral);
    }
}
