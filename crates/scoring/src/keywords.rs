//! Risk keyword classifier.
//!
//! Shared by the geo scorer and any live form preview so both sides agree on
//! what counts as a suspicious justification.

/// Canonical risk keyword list for mismatch justifications (Turkish).
pub const RISK_KEYWORDS: [&str; 12] = [
    "suç",
    "ihlal",
    "gasp",
    "illegal",
    "kaçak",
    "yasal değil",
    "sabıka",
    "aranıyorum",
    "kaçıyorum",
    "kaçakçılık",
    "uyuşturucu",
    "hırsızlık",
];

/// True iff the case-folded text contains any risk keyword.
///
/// Containment is plain substring matching, not word-boundary matching: a
/// keyword fragment inside a longer word still counts. The mismatch policy
/// depends on that, so do not "fix" it to tokenized matching.
pub fn is_risky_text(text: &str) -> bool {
    let folded = text.to_lowercase();
    RISK_KEYWORDS.iter().any(|keyword| folded.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert!(!is_risky_text(""));
        assert!(!is_risky_text("Eğitim için taşındım"));
        assert!(!is_risky_text("İş sebebiyle yurt dışındayım"));
    }

    #[test]
    fn test_keyword_hit() {
        assert!(is_risky_text("sabıka kaydım var"));
        assert!(is_risky_text("uyuşturucu davası"));
    }

    #[test]
    fn test_case_folding() {
        assert!(is_risky_text("GASP olayına karıştım"));
        assert!(is_risky_text("Illegal yollarla geldim"));
    }

    #[test]
    fn test_substring_inside_longer_word() {
        // "kaçak" is contained in "kaçakçılıktan"; fragment matches are intended
        assert!(is_risky_text("kaçakçılıktan hüküm giydim"));
        // "suç" inside a longer word still matches
        assert!(is_risky_text("suçlamalar asılsız"));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert!(is_risky_text("bu yasal değil demişlerdi"));
    }
}
