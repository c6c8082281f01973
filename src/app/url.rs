//! Title address resolution.

use crate::config::MAX_ADDRESS_LENGTH;
use crate::error_handling::CatalogError;

/// Resolves a user supplied title address to a site path.
///
/// Accepts a full `http(s)` URL (only its path is kept), an absolute site
/// path, or a bare relative path such as `us/movie/heat`.
///
/// # Errors
///
/// `CatalogError::InvalidAddress` if the address is empty, longer than
/// `MAX_ADDRESS_LENGTH`, unparsable, or points at the site root.
pub fn resolve_address(address: &str) -> Result<String, CatalogError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(invalid(trimmed, "empty address"));
    }
    if trimmed.chars().count() > MAX_ADDRESS_LENGTH {
        return Err(invalid(
            &trimmed.chars().take(50).collect::<String>(),
            format!("longer than {MAX_ADDRESS_LENGTH} characters"),
        ));
    }

    let path = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        url::Url::parse(trimmed)
            .map_err(|e| invalid(trimmed, e.to_string()))?
            .path()
            .to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if path.trim_matches('/').is_empty() {
        return Err(invalid(trimmed, "address has no title path"));
    }
    Ok(path)
}

/// Report file name for a title path: its last segment plus `.md`.
pub fn report_file_name(path: &str) -> String {
    let slug = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or("report");
    format!("{slug}.md")
}

fn invalid(address: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidAddress {
        address: address.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_url() {
        assert_eq!(
            resolve_address("https://www.justwatch.com/us/movie/heat").unwrap(),
            "/us/movie/heat"
        );
    }

    #[test]
    fn test_resolve_full_url_drops_query_and_fragment() {
        assert_eq!(
            resolve_address("http://www.justwatch.com/de/film/heat?ref=x#offers").unwrap(),
            "/de/film/heat"
        );
    }

    #[test]
    fn test_resolve_site_path() {
        assert_eq!(resolve_address("/us/tv-show/severance").unwrap(), "/us/tv-show/severance");
    }

    #[test]
    fn test_resolve_relative_path_and_whitespace() {
        assert_eq!(resolve_address("  us/movie/heat\n").unwrap(), "/us/movie/heat");
    }

    #[test]
    fn test_resolve_rejects_empty() {
        assert!(matches!(
            resolve_address("   "),
            Err(CatalogError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_root() {
        assert!(resolve_address("/").is_err());
        assert!(resolve_address("https://www.justwatch.com/").is_err());
    }

    #[test]
    fn test_resolve_rejects_too_long() {
        let long = format!("/us/movie/{}", "a".repeat(MAX_ADDRESS_LENGTH));
        assert!(resolve_address(&long).is_err());
    }

    #[test]
    fn test_resolve_accepts_at_limit() {
        let path = format!("/{}", "a".repeat(MAX_ADDRESS_LENGTH - 1));
        assert_eq!(path.len(), MAX_ADDRESS_LENGTH);
        assert!(resolve_address(&path).is_ok());
    }

    #[test]
    fn test_resolve_limit_counts_characters() {
        let path = format!("/{}", "é".repeat(MAX_ADDRESS_LENGTH - 1));
        assert!(path.len() > MAX_ADDRESS_LENGTH);
        assert_eq!(resolve_address(&path).unwrap(), path);

        let too_long = format!("/{}", "é".repeat(MAX_ADDRESS_LENGTH));
        assert!(resolve_address(&too_long).is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_url() {
        assert!(resolve_address("https://").is_err());
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("/us/movie/heat"), "heat.md");
        assert_eq!(report_file_name("/us/movie/heat/"), "heat.md");
        assert_eq!(report_file_name("/"), "report.md");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_resolve_is_idempotent(segments in prop::collection::vec("[a-z0-9-]{1,12}", 1..5)) {
            let once = resolve_address(&segments.join("/")).unwrap();
            let twice = resolve_address(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_report_file_name_uses_last_segment(segments in prop::collection::vec("[a-z0-9-]{1,12}", 1..5)) {
            let path = format!("/{}", segments.join("/"));
            let expected = format!("{}.md", segments.last().unwrap());
            prop_assert_eq!(report_file_name(&path), expected);
        }
    }
}
