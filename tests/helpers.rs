// Shared helpers for the catalog mock server.
//
// Every test spins up one wiremock server acting as both the catalog site and
// its GraphQL endpoint (`/graphql`).

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use offer_report::HttpConfig;

/// Wraps a state object the way catalog pages embed it.
pub fn page_with_state(state: Value) -> String {
    format!(
        "<html><head><script>window.__DATA__={}</script></head><body></body></html>",
        json!({ "state": state })
    )
}

/// Request settings pointing at the mock server.
pub fn http_config(server: &MockServer) -> HttpConfig {
    HttpConfig {
        timeout_seconds: 5,
        user_agent: "offer_report_test/1.0".to_string(),
        site_url: server.uri(),
        api_url: format!("{}/graphql", server.uri()),
    }
}

/// Serves a title page advertising `(href, hrefLang)` pairs.
#[allow(dead_code)] // Used by the title tests only
pub async fn mount_title_page(server: &MockServer, page_path: &str, tags: &[(&str, &str)]) {
    let tags: Vec<Value> = tags
        .iter()
        .map(|(href, lang)| json!({ "href": href, "hrefLang": lang }))
        .collect();
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page_with_state(json!({ "meta": { "hrefLangTags": tags } }))),
        )
        .mount(server)
        .await;
}

/// Answers GraphQL offer queries for one country with `(url, type, count)` offers.
#[allow(dead_code)] // Used by the title tests only
pub async fn mount_offers(server: &MockServer, country: &str, offers: &[(&str, &str, u32)]) {
    let offers: Vec<Value> = offers
        .iter()
        .map(|(url, kind, count)| {
            json!({ "standardWebURL": url, "monetizationType": kind, "elementCount": count })
        })
        .collect();
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "country": country } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "data": { "urlV2": { "node": { "offers": offers } } } }),
        ))
        .mount(server)
        .await;
}

/// Serves a country page listing `(slug, hasTitles)` providers.
#[allow(dead_code)] // Used by the provider tests only
pub async fn mount_country_page(server: &MockServer, code: &str, providers: &[(&str, bool)]) {
    let providers: Vec<Value> = providers
        .iter()
        .map(|(slug, has_titles)| json!({ "slug": slug, "hasTitles": has_titles }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/{code}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_state(
            json!({ "constant": { "providers": providers } }),
        )))
        .mount(server)
        .await;
}
