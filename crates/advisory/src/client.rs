//! Advisory feed client.
//!
//! Thin reqwest wrapper: download the full advisories JSON and match a
//! single country against it. A non-200 response yields an empty list
//! rather than an error - advisories are advisory.

use crate::error::AdvisoryResult;
use crate::models::AdvisoryPost;
use tracing::debug;
use zbank_core::CountryResolver;

/// Public advisories feed.
pub const DEFAULT_FEED_URL: &str = "https://cadataapi.state.gov/api/TravelAdvisories.json";

/// HTTP client for the advisory feed.
pub struct AdvisoryClient {
    http: reqwest::Client,
    feed_url: String,
}

impl AdvisoryClient {
    pub fn new() -> Self {
        Self::with_feed_url(DEFAULT_FEED_URL)
    }

    /// Point the client at a different feed (tests, mirrors).
    pub fn with_feed_url(feed_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            feed_url: feed_url.to_string(),
        }
    }

    /// Download and decode all advisories.
    pub async fn fetch_all(&self) -> AdvisoryResult<Vec<AdvisoryPost>> {
        let response = self.http.get(&self.feed_url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "advisory feed returned non-success");
            return Ok(Vec::new());
        }
        let posts = response.json::<Vec<AdvisoryPost>>().await?;
        debug!(count = posts.len(), "advisory feed decoded");
        Ok(posts)
    }
}

impl Default for AdvisoryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the advisory for a country input using an injected resolver:
/// input (name/demonym/code) -> ISO-2 -> GEC-translated category match.
pub fn find_advisory<'a, R>(
    resolver: R,
    input: &str,
    posts: &'a [AdvisoryPost],
) -> Option<&'a AdvisoryPost>
where
    R: Fn(&str) -> Option<String>,
{
    let target = resolver(input)?.to_uppercase();
    posts
        .iter()
        .find(|post| post.iso2_codes().contains(&target))
}

/// `find_advisory` with the built-in country resolver.
pub fn find_advisory_for<'a>(input: &str, posts: &'a [AdvisoryPost]) -> Option<&'a AdvisoryPost> {
    find_advisory(CountryResolver::iso2, input, posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, gec: &str) -> AdvisoryPost {
        serde_json::from_str(&format!(
            r#"{{"Title": "{}", "Category": ["{}"]}}"#,
            title, gec
        ))
        .unwrap()
    }

    #[test]
    fn test_find_advisory_by_name() {
        let posts = vec![
            post("Turkey Travel Advisory - Level 2", "TU"),
            post("Syria Travel Advisory - Level 4", "SY"),
        ];

        let hit = find_advisory_for("Turkey", &posts).unwrap();
        assert!(hit.title.starts_with("Turkey"));
        assert_eq!(hit.level(), Some(2));

        // Demonym resolves to the same post
        let hit = find_advisory_for("Turkish", &posts).unwrap();
        assert_eq!(hit.level(), Some(2));
    }

    #[test]
    fn test_find_advisory_unknown_country() {
        let posts = vec![post("Turkey Travel Advisory - Level 2", "TU")];
        assert!(find_advisory_for("Atlantis", &posts).is_none());
        assert!(find_advisory_for("Germany", &posts).is_none());
    }

    #[test]
    fn test_find_advisory_with_custom_resolver() {
        let posts = vec![post("Germany Travel Advisory - Level 1", "GM")];
        let hit = find_advisory(|_: &str| Some("DE".to_string()), "whatever", &posts);
        assert!(hit.is_some());
    }
}
