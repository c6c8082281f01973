//! Locale table and resolution.
//!
//! Title pages advertise their sibling markets as href-lang hints such as
//! `en-GB`. Each hint maps to exactly one catalog locale. A hint outside the
//! table is an error: substituting another market would misreport availability.

use std::sync::Arc;

use crate::error_handling::CatalogError;
use crate::models::Locale;

/// `(hint, full locale, country code, country name)`
const LOCALES: &[(&str, &str, &str, &str)] = &[
    ("ar-AE", "ar_AE", "AE", "United Arab Emirates"),
    ("ar-EG", "ar_EG", "EG", "Egypt"),
    ("ar-SA", "ar_SA", "SA", "Saudi Arabia"),
    ("bg-BG", "bg_BG", "BG", "Bulgaria"),
    ("cs-CZ", "cs_CZ", "CZ", "Czech Republic"),
    ("da-DK", "da_DK", "DK", "Denmark"),
    ("de-AT", "de_AT", "AT", "Austria"),
    ("de-CH", "de_CH", "CH", "Switzerland"),
    ("de-DE", "de_DE", "DE", "Germany"),
    ("el-GR", "el_GR", "GR", "Greece"),
    ("en-AU", "en_AU", "AU", "Australia"),
    ("en-CA", "en_CA", "CA", "Canada"),
    ("en-GB", "en_GB", "GB", "United Kingdom"),
    ("en-IE", "en_IE", "IE", "Ireland"),
    ("en-IN", "en_IN", "IN", "India"),
    ("en-NZ", "en_NZ", "NZ", "New Zealand"),
    ("en-PH", "en_PH", "PH", "Philippines"),
    ("en-SG", "en_SG", "SG", "Singapore"),
    ("en-US", "en_US", "US", "United States"),
    ("en-ZA", "en_ZA", "ZA", "South Africa"),
    ("es-AR", "es_AR", "AR", "Argentina"),
    ("es-CL", "es_CL", "CL", "Chile"),
    ("es-CO", "es_CO", "CO", "Colombia"),
    ("es-EC", "es_EC", "EC", "Ecuador"),
    ("es-ES", "es_ES", "ES", "Spain"),
    ("es-MX", "es_MX", "MX", "Mexico"),
    ("es-PE", "es_PE", "PE", "Peru"),
    ("es-VE", "es_VE", "VE", "Venezuela"),
    ("et-EE", "et_EE", "EE", "Estonia"),
    ("fi-FI", "fi_FI", "FI", "Finland"),
    ("fr-BE", "fr_BE", "BE", "Belgium"),
    ("fr-CA", "fr_CA", "CA", "Canada"),
    ("fr-FR", "fr_FR", "FR", "France"),
    ("he-IL", "he_IL", "IL", "Israel"),
    ("hr-HR", "hr_HR", "HR", "Croatia"),
    ("hu-HU", "hu_HU", "HU", "Hungary"),
    ("id-ID", "id_ID", "ID", "Indonesia"),
    ("is-IS", "is_IS", "IS", "Iceland"),
    ("it-IT", "it_IT", "IT", "Italy"),
    ("ja-JP", "ja_JP", "JP", "Japan"),
    ("ko-KR", "ko_KR", "KR", "South Korea"),
    ("lt-LT", "lt_LT", "LT", "Lithuania"),
    ("lv-LV", "lv_LV", "LV", "Latvia"),
    ("ms-MY", "ms_MY", "MY", "Malaysia"),
    ("nl-NL", "nl_NL", "NL", "Netherlands"),
    ("no-NO", "no_NO", "NO", "Norway"),
    ("pl-PL", "pl_PL", "PL", "Poland"),
    ("pt-BR", "pt_BR", "BR", "Brazil"),
    ("pt-PT", "pt_PT", "PT", "Portugal"),
    ("ro-RO", "ro_RO", "RO", "Romania"),
    ("ru-RU", "ru_RU", "RU", "Russia"),
    ("sk-SK", "sk_SK", "SK", "Slovakia"),
    ("sl-SI", "sl_SI", "SI", "Slovenia"),
    ("sr-RS", "sr_RS", "RS", "Serbia"),
    ("sv-SE", "sv_SE", "SE", "Sweden"),
    ("th-TH", "th_TH", "TH", "Thailand"),
    ("tr-TR", "tr_TR", "TR", "Turkey"),
    ("uk-UA", "uk_UA", "UA", "Ukraine"),
    ("vi-VN", "vi_VN", "VN", "Vietnam"),
    ("zh-HK", "zh_HK", "HK", "Hong Kong"),
    ("zh-TW", "zh_TW", "TW", "Taiwan"),
];

/// Resolves an href-lang hint to its locale.
///
/// # Errors
///
/// `CatalogError::UnknownLocale` when the hint is not in the table.
pub fn resolve_locale(hint: &str) -> Result<Arc<Locale>, CatalogError> {
    LOCALES
        .iter()
        .find(|(h, ..)| *h == hint)
        .map(|(_, full_locale, country, country_name)| {
            Arc::new(Locale {
                full_locale: full_locale.to_string(),
                country: country.to_string(),
                country_name: country_name.to_string(),
            })
        })
        .ok_or_else(|| CatalogError::UnknownLocale(hint.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_known_hint() {
        let locale = resolve_locale("en-GB").unwrap();
        assert_eq!(locale.full_locale, "en_GB");
        assert_eq!(locale.country, "GB");
        assert_eq!(locale.country_name, "United Kingdom");
        assert_eq!(locale.language(), "en");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(matches!(
            resolve_locale("en-gb"),
            Err(CatalogError::UnknownLocale(hint)) if hint == "en-gb"
        ));
    }

    #[test]
    fn test_unknown_hint_is_error() {
        assert!(resolve_locale("x-default").is_err());
        assert!(resolve_locale("").is_err());
    }

    #[test]
    fn test_table_hints_and_full_locales_unique() {
        let hints: HashSet<_> = LOCALES.iter().map(|(h, ..)| h).collect();
        let full: HashSet<_> = LOCALES.iter().map(|(_, f, ..)| f).collect();
        assert_eq!(hints.len(), LOCALES.len());
        assert_eq!(full.len(), LOCALES.len());
    }

    #[test]
    fn test_table_entries_consistent() {
        for (hint, full_locale, country, _) in LOCALES {
            assert_eq!(hint.replace('-', "_"), *full_locale);
            assert!(full_locale.ends_with(country));
        }
    }

    #[test]
    fn test_shared_country_distinct_locales() {
        let en = resolve_locale("en-CA").unwrap();
        let fr = resolve_locale("fr-CA").unwrap();
        assert_eq!(en.country, fr.country);
        assert_ne!(en.full_locale, fr.full_locale);
    }
}
