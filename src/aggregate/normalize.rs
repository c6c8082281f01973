//! Canonical grouping keys for offer URLs.
//!
//! Providers append traffic-source parameters to their deep links. Stripping
//! the known ones collapses links that point at the same catalog entry while
//! keeping every other query parameter.

use std::collections::BTreeMap;

use url::Url;

/// A tracking parameter removed when its first value matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRule {
    /// Day the rule was added. Informational only.
    pub date: &'static str,
    /// Query parameter name
    pub key: &'static str,
    /// Value that triggers removal
    pub value: &'static str,
}

const fn rule(date: &'static str, key: &'static str, value: &'static str) -> RemovalRule {
    RemovalRule { date, key, value }
}

/// Parameters stripped from offer URLs, applied in order.
///
/// An empty `value` also matches a missing parameter, which is harmless since
/// there is then nothing to remove.
pub const REMOVAL_RULES: &[RemovalRule] = &[
    rule("2026-02-26", "autoplay", "1"),
    rule("2026-02-26", "searchReferral", "publisher"),
    rule("2026-02-26", "source", "bing"),
    rule("2026-02-26", "source", "search-feeds"),
    rule("2026-02-26", "utm_campaign", "vod_feed"),
    rule("2026-02-26", "utm_content", ""),
    rule("2026-02-26", "utm_medium", "deeplink"),
    rule("2026-02-26", "utm_medium", "partner"),
    rule("2026-02-26", "utm_source", "justWatch-v2-catalog"),
    rule("2026-02-26", "utm_source", "justwatch"),
    rule("2026-02-26", "utm_source", "universal_search"),
    rule("2026-02-26", "utm_term", ""),
];

/// Returns the grouping key for `raw`.
///
/// Unparsable input is its own key.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = strip_newline(raw);
    try_normalize_url(trimmed).unwrap_or_else(|_| trimmed.to_string())
}

/// Returns the grouping key for `raw`, or the parse error.
pub fn try_normalize_url(raw: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(strip_newline(raw))?;
    let Some(query) = parsed.query().filter(|q| !q.is_empty()) else {
        return Ok(parsed.into());
    };

    // Keys in canonical order; values of one key keep their relative order.
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    for rule in REMOVAL_RULES {
        let first = params
            .get(rule.key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("");
        if first == rule.value {
            params.remove(rule.key);
        }
    }

    if params.is_empty() {
        parsed.set_query(None);
    } else {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        parsed.set_query(Some(&serializer.finish()));
    }
    Ok(parsed.into())
}

fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}
