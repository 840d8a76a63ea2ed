//! GEC/FIPS -> ISO-2 translation.
//!
//! The advisory feed tags posts with legacy two-letter GEC codes, which
//! overlap with but do not equal ISO 3166-1 alpha-2 (TU -> TR, GM -> DE,
//! SP -> ES, ...). Entries that map to an empty string have no ISO
//! counterpart and are dropped at lookup.

const GEC_TO_ISO2: &[(&str, &str)] = &[
    ("A1", "BQ"), ("A2", "GF"), ("A3", ""),
    ("AA", "AW"), ("AC", "AG"), ("AF", "AF"), ("AG", "DZ"), ("AL", "AL"), ("AM", "AM"),
    ("AN", "AD"), ("AO", "AO"), ("AR", "AR"), ("AS", "AU"), ("AU", "AT"), ("AV", "AI"),
    ("AY", "AQ"),
    ("BA", "BH"), ("BB", "BB"), ("BD", "BM"), ("BE", "BE"), ("BF", "BS"), ("BG", "BD"),
    ("BH", "BZ"), ("BK", "BA"), ("BL", "BO"), ("BM", "MM"), ("BN", "BJ"), ("BO", "BY"),
    ("BP", "SB"), ("BR", "BR"), ("BT", "BT"), ("BU", "BG"), ("BX", "BN"), ("BY", "BI"),
    ("CA", "CA"), ("CB", "KH"), ("CD", "TD"), ("CE", "LK"), ("CF", "CG"), ("CG", "CD"),
    ("CH", "CN"), ("CI", "CL"), ("CJ", "KY"), ("CM", "CM"), ("CN", "KM"), ("CO", "CO"),
    ("CT", "CF"), ("CU", "CU"), ("CV", "CV"), ("CY", "CY"),
    ("DA", "DK"), ("DJ", "DJ"), ("DO", "DM"), ("DR", "DO"),
    ("EC", "EC"), ("EG", "EG"), ("EI", "IE"), ("EN", "EE"), ("ER", "ER"), ("ES", "SV"),
    ("ET", "ET"),
    ("FI", "FI"), ("FJ", "FJ"), ("FP", "PF"), ("FR", "FR"),
    ("GA", "GM"), ("GB", "GA"), ("GG", "GE"), ("GH", "GH"), ("GJ", "GD"), ("GM", "DE"),
    ("GR", "GR"), ("GT", "GT"), ("GV", "GN"), ("GW", "GW"), ("GY", "GY"),
    ("HK", "HK"), ("HO", "HN"), ("HR", "HR"), ("HU", "HU"),
    ("IC", "IS"), ("ID", "ID"), ("IN", "IN"), ("IR", "IR"), ("IS", ""), ("IT", "IT"),
    ("IZ", "IQ"),
    ("JA", "JP"), ("JM", "JM"), ("JO", "JO"),
    ("KE", "KE"), ("KG", "KG"), ("KN", "KP"), ("KR", "KI"), ("KS", "KR"), ("KU", "KW"),
    ("KV", "XK"),
    ("LA", "LA"), ("LE", "LB"), ("LG", "LV"), ("LH", "LT"), ("LI", "LR"), ("LO", "SK"),
    ("LS", "LI"), ("LT", "LS"), ("LU", "LU"), ("LY", "LY"),
    ("MA", "MG"), ("MD", "MD"), ("MG", "MN"), ("MH", "MS"), ("MI", "MW"), ("MK", "MK"),
    ("ML", "ML"), ("MO", "MA"), ("MP", "MU"), ("MR", "MR"), ("MT", "MT"), ("MU", "OM"),
    ("MV", "MV"), ("MX", "MX"), ("MY", "MY"), ("MZ", "MZ"),
    ("NC", "NC"), ("NG", "NE"), ("NI", "NG"), ("NL", "NL"), ("NN", "SX"), ("NO", "NO"),
    ("NP", "NP"), ("NR", "NR"), ("NS", "SR"), ("NZ", "NZ"),
    ("OD", "SS"), ("PA", "PY"), ("PE", "PE"), ("PK", "PK"), ("PL", "PL"), ("PM", "PA"),
    ("PO", "PT"), ("PP", "PG"), ("PS", "PW"),
    ("QA", "QA"),
    ("RI", "RS"), ("RM", "MH"), ("RO", "RO"), ("RP", "PH"), ("RS", "RU"), ("RW", "RW"),
    ("SA", "SA"), ("SC", "KN"), ("SE", "SC"), ("SG", "SN"), ("SI", "SI"), ("SL", "SL"),
    ("SO", "SO"), ("SP", "ES"), ("SR", "CH"), ("ST", "LC"), ("SU", "SD"), ("SW", "SE"),
    ("SY", "SY"),
    ("TD", "TT"), ("TH", "TH"), ("TI", "TJ"), ("TK", "TC"), ("TN", "TO"), ("TO", "TG"),
    ("TP", "ST"), ("TS", "TN"), ("TT", "TL"), ("TU", "TR"), ("TZ", "TZ"),
    ("UG", "UG"), ("UK", "GB"), ("UP", "UA"), ("UY", "UY"), ("UZ", "UZ"),
    ("VC", "VC"), ("VE", "VE"), ("VI", "VG"), ("VM", "VN"),
    ("WA", "NA"), ("WS", "WS"), ("WZ", "SZ"),
    ("YM", "YE"),
    ("ZA", "ZM"), ("ZI", "ZW"),
];

/// Single GEC code -> ISO-2, if a non-empty mapping exists.
pub fn gec_to_iso2(gec: &str) -> Option<&'static str> {
    let key = gec.trim().to_uppercase();
    GEC_TO_ISO2
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, iso)| *iso)
        .filter(|iso| !iso.is_empty())
}

/// Split a comma-joined category string ("HK, MC, CH") into upper-cased
/// codes.
pub fn split_category_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_uppercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Map a list of GEC codes to ISO-2, dropping unknown/empty mappings.
pub fn map_gec_to_iso2(gec_codes: &[String]) -> Vec<String> {
    gec_codes
        .iter()
        .filter_map(|code| gec_to_iso2(code))
        .map(|iso| iso.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergent_codes() {
        assert_eq!(gec_to_iso2("TU"), Some("TR"));
        assert_eq!(gec_to_iso2("GM"), Some("DE"));
        assert_eq!(gec_to_iso2("SP"), Some("ES"));
        assert_eq!(gec_to_iso2("YM"), Some("YE"));
        assert_eq!(gec_to_iso2("IZ"), Some("IQ"));
        assert_eq!(gec_to_iso2("UK"), Some("GB"));
    }

    #[test]
    fn test_empty_mapping_dropped() {
        assert_eq!(gec_to_iso2("IS"), None);
        assert_eq!(gec_to_iso2("A3"), None);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(gec_to_iso2("ZZ"), None);
        assert_eq!(gec_to_iso2(""), None);
    }

    #[test]
    fn test_split_category_codes() {
        assert_eq!(
            split_category_codes("HK, mc ,CH"),
            vec!["HK".to_string(), "MC".to_string(), "CH".to_string()]
        );
        assert!(split_category_codes("  ,").is_empty());
    }

    #[test]
    fn test_map_list() {
        let codes = vec!["TU".to_string(), "ZZ".to_string(), "IS".to_string()];
        assert_eq!(map_gec_to_iso2(&codes), vec!["TR".to_string()]);
    }
}
