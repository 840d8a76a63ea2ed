//! Advisory feed models.
//!
//! The public feed is loosely shaped: PascalCase keys, dates with or without
//! fractional seconds, and advisory levels only present in the post title.
//! Decoding is deliberately tolerant - a malformed optional field becomes
//! `None` rather than failing the whole feed.

use crate::gec::map_gec_to_iso2;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// One advisory post from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryPost {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    /// GEC/FIPS codes, e.g. ["TU"], ["MX"]
    #[serde(rename = "Category", default)]
    pub category: Vec<String>,
    /// May contain HTML
    #[serde(rename = "Summary", default)]
    pub summary: String,
    #[serde(rename = "id", default)]
    pub id: String,
    #[serde(rename = "Published", default, deserialize_with = "tolerant_datetime")]
    pub published: Option<DateTime<Utc>>,
    #[serde(rename = "Updated", default, deserialize_with = "tolerant_datetime")]
    pub updated: Option<DateTime<Utc>>,
}

impl AdvisoryPost {
    /// Advisory level (1..4) parsed from the title, if present.
    pub fn level(&self) -> Option<u8> {
        advisory_level_from_title(&self.title)
    }

    /// Category codes translated to ISO-2, unknown codes dropped.
    pub fn iso2_codes(&self) -> Vec<String> {
        let upper: Vec<String> = self.category.iter().map(|c| c.to_uppercase()).collect();
        map_gec_to_iso2(&upper)
    }
}

/// Parse "Level N" out of an advisory title, e.g.
/// "Turkey Travel Advisory - Level 2: Exercise Increased Caution".
pub fn advisory_level_from_title(title: &str) -> Option<u8> {
    let lower = title.to_lowercase();
    let idx = lower.find("level ")?;
    let digit = lower[idx + 6..].chars().next()?.to_digit(10)? as u8;
    if (1..=4).contains(&digit) {
        Some(digit)
    } else {
        None
    }
}

/// Accepts RFC 3339 timestamps (with or without fractional seconds) or bare
/// `YYYY-MM-DD` dates; anything else decodes as `None`.
fn tolerant_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(s) = raw else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(dt.and_utc()));
        }
    }

    Ok(None)
}
