//! Plain-text report rendering.
//!
//! Each group starts with a `## <canonical-url>` line followed by one block
//! per offer:
//!
//! ```text
//! ## https://www.netflix.com/title/80013997
//!
//! country = US
//! name = United States
//! monetization = FLATRATE
//! count = 2
//! ```
//!
//! `count` is written only when non-zero. Groups are separated by a blank line.

use std::fmt::Write;

use crate::aggregate::ReportGroup;

/// Renders ordered groups into the report text.
pub fn render_report(groups: &[ReportGroup]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        if index >= 1 {
            out.push('\n');
        }
        // Writing into a String cannot fail
        let _ = writeln!(out, "## {}", group.key);
        for record in &group.offers {
            let _ = writeln!(out, "\ncountry = {}", record.locale.country);
            let _ = writeln!(out, "name = {}", record.locale.country_name);
            let _ = writeln!(out, "monetization = {}", record.offer.monetization_type);
            if record.offer.element_count >= 1 {
                let _ = writeln!(out, "count = {}", record.offer.element_count);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::resolve_locale;
    use crate::models::{EnrichedOffer, Offer};

    fn record(url: &str, kind: &str, count: u32, hint: &str) -> EnrichedOffer {
        EnrichedOffer::new(
            Offer {
                standard_web_url: url.into(),
                monetization_type: kind.into(),
                element_count: count,
            },
            resolve_locale(hint).unwrap(),
        )
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_render_single_group() {
        let groups = vec![ReportGroup {
            key: "https://tv.apple.com/movie/heat".into(),
            offers: vec![
                record("https://tv.apple.com/movie/heat", "BUY", 0, "en-US"),
                record("https://tv.apple.com/movie/heat", "RENT", 0, "en-GB"),
            ],
        }];
        assert_eq!(
            render_report(&groups),
            "## https://tv.apple.com/movie/heat\n\
             \ncountry = US\nname = United States\nmonetization = BUY\n\
             \ncountry = GB\nname = United Kingdom\nmonetization = RENT\n"
        );
    }

    #[test]
    fn test_render_count_and_separator() {
        let groups = vec![
            ReportGroup {
                key: "https://a.test/show".into(),
                offers: vec![record("https://a.test/show", "BUY", 3, "de-DE")],
            },
            ReportGroup {
                key: "https://b.test/show".into(),
                offers: vec![record("https://b.test/show", "FAST", 0, "fr-FR")],
            },
        ];
        assert_eq!(
            render_report(&groups),
            "## https://a.test/show\n\
             \ncountry = DE\nname = Germany\nmonetization = BUY\ncount = 3\n\
             \n## https://b.test/show\n\
             \ncountry = FR\nname = France\nmonetization = FAST\n"
        );
    }
}
