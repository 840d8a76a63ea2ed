//! # Country Module
//!
//! Ülke adı / uyruk / ISO-3 / ISO-2 -> ISO-2 normalizasyonu.
//! Tablo süreç ömrü boyunca sabittir; eşzamanlı okuma serbesttir.

/// Bir satır: ISO-2, ISO-3, ülke adı, uyruk.
struct CountryRow {
    iso2: &'static str,
    iso3: &'static str,
    name: &'static str,
    demonym: &'static str,
}

const COUNTRIES: &[CountryRow] = &[
    CountryRow { iso2: "TR", iso3: "TUR", name: "Turkey", demonym: "Turkish" },
    CountryRow { iso2: "SY", iso3: "SYR", name: "Syria", demonym: "Syrian" },
    CountryRow { iso2: "IQ", iso3: "IRQ", name: "Iraq", demonym: "Iraqi" },
    CountryRow { iso2: "AF", iso3: "AFG", name: "Afghanistan", demonym: "Afghan" },
    CountryRow { iso2: "YE", iso3: "YEM", name: "Yemen", demonym: "Yemeni" },
    CountryRow { iso2: "LY", iso3: "LBY", name: "Libya", demonym: "Libyan" },
    CountryRow { iso2: "IN", iso3: "IND", name: "India", demonym: "Indian" },
    CountryRow { iso2: "EG", iso3: "EGY", name: "Egypt", demonym: "Egyptian" },
    CountryRow { iso2: "TH", iso3: "THA", name: "Thailand", demonym: "Thai" },
    CountryRow { iso2: "MX", iso3: "MEX", name: "Mexico", demonym: "Mexican" },
    CountryRow { iso2: "US", iso3: "USA", name: "United States", demonym: "American" },
    CountryRow { iso2: "DE", iso3: "DEU", name: "Germany", demonym: "German" },
    CountryRow { iso2: "FR", iso3: "FRA", name: "France", demonym: "French" },
    CountryRow { iso2: "NL", iso3: "NLD", name: "Netherlands", demonym: "Dutch" },
    CountryRow { iso2: "SE", iso3: "SWE", name: "Sweden", demonym: "Swedish" },
    CountryRow { iso2: "AE", iso3: "ARE", name: "United Arab Emirates", demonym: "Emirati" },
    CountryRow { iso2: "ES", iso3: "ESP", name: "Spain", demonym: "Spanish" },
    CountryRow { iso2: "GB", iso3: "GBR", name: "United Kingdom", demonym: "British" },
    CountryRow { iso2: "IT", iso3: "ITA", name: "Italy", demonym: "Italian" },
    CountryRow { iso2: "GR", iso3: "GRC", name: "Greece", demonym: "Greek" },
    CountryRow { iso2: "BG", iso3: "BGR", name: "Bulgaria", demonym: "Bulgarian" },
    CountryRow { iso2: "AZ", iso3: "AZE", name: "Azerbaijan", demonym: "Azerbaijani" },
    CountryRow { iso2: "GE", iso3: "GEO", name: "Georgia", demonym: "Georgian" },
    CountryRow { iso2: "RU", iso3: "RUS", name: "Russia", demonym: "Russian" },
    CountryRow { iso2: "UA", iso3: "UKR", name: "Ukraine", demonym: "Ukrainian" },
    CountryRow { iso2: "IR", iso3: "IRN", name: "Iran", demonym: "Iranian" },
    CountryRow { iso2: "PK", iso3: "PAK", name: "Pakistan", demonym: "Pakistani" },
    CountryRow { iso2: "SA", iso3: "SAU", name: "Saudi Arabia", demonym: "Saudi" },
    CountryRow { iso2: "QA", iso3: "QAT", name: "Qatar", demonym: "Qatari" },
    CountryRow { iso2: "KW", iso3: "KWT", name: "Kuwait", demonym: "Kuwaiti" },
    CountryRow { iso2: "JO", iso3: "JOR", name: "Jordan", demonym: "Jordanian" },
    CountryRow { iso2: "LB", iso3: "LBN", name: "Lebanon", demonym: "Lebanese" },
    CountryRow { iso2: "MA", iso3: "MAR", name: "Morocco", demonym: "Moroccan" },
    CountryRow { iso2: "DZ", iso3: "DZA", name: "Algeria", demonym: "Algerian" },
    CountryRow { iso2: "TN", iso3: "TUN", name: "Tunisia", demonym: "Tunisian" },
    CountryRow { iso2: "SD", iso3: "SDN", name: "Sudan", demonym: "Sudanese" },
    CountryRow { iso2: "SO", iso3: "SOM", name: "Somalia", demonym: "Somali" },
    CountryRow { iso2: "NO", iso3: "NOR", name: "Norway", demonym: "Norwegian" },
    CountryRow { iso2: "DK", iso3: "DNK", name: "Denmark", demonym: "Danish" },
    CountryRow { iso2: "CH", iso3: "CHE", name: "Switzerland", demonym: "Swiss" },
    CountryRow { iso2: "AT", iso3: "AUT", name: "Austria", demonym: "Austrian" },
    CountryRow { iso2: "BE", iso3: "BEL", name: "Belgium", demonym: "Belgian" },
    CountryRow { iso2: "CA", iso3: "CAN", name: "Canada", demonym: "Canadian" },
    CountryRow { iso2: "AU", iso3: "AUS", name: "Australia", demonym: "Australian" },
    CountryRow { iso2: "JP", iso3: "JPN", name: "Japan", demonym: "Japanese" },
    CountryRow { iso2: "CN", iso3: "CHN", name: "China", demonym: "Chinese" },
    CountryRow { iso2: "KR", iso3: "KOR", name: "South Korea", demonym: "Korean" },
    CountryRow { iso2: "BR", iso3: "BRA", name: "Brazil", demonym: "Brazilian" },
];

/// Ülke çözümleyici.
pub struct CountryResolver;

impl CountryResolver {
    /// Girdiyi ISO-2 koduna çözer.
    ///
    /// - 2 karakterlik girdi zaten ISO-2 kabul edilir ve aynen döner
    /// - ISO-3, ülke adı veya uyruk tabloda aranır
    /// - Eşleşme yoksa `None`
    pub fn iso2(input: &str) -> Option<String> {
        let key = Self::normalize(input);
        if key.is_empty() {
            return None;
        }

        // zaten ISO-2 geldiyse
        if key.chars().count() == 2 {
            return Some(key);
        }

        // ISO-3
        if let Some(row) = COUNTRIES.iter().find(|row| row.iso3 == key) {
            return Some(row.iso2.to_string());
        }

        // ülke adı veya uyruk
        COUNTRIES
            .iter()
            .find(|row| {
                row.name.to_uppercase() == key || row.demonym.to_uppercase() == key
            })
            .map(|row| row.iso2.to_string())
    }

    /// Boşlukları kırp, Türkçe İ/ı -> I, büyük harfe çevir.
    fn normalize(input: &str) -> String {
        input
            .trim()
            .replace(['İ', 'ı'], "I")
            .to_uppercase()
    }
}
