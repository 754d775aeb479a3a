//! Resource URIs of one merchant.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in a path segment built from caller-supplied ids.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds every resource URI for one merchant.
///
/// # Examples
///
/// ```
/// use contentstack_core::uri::ResourceUris;
///
/// let uris = ResourceUris::new("https://content.googleapis.com/content/v1/", "1234");
/// assert_eq!(
///     uris.product_uri("SKU123", "US", "en"),
///     "https://content.googleapis.com/content/v1/1234/items/products/schema/online:en:US:SKU123"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUris {
    base: String,
    merchant_id: String,
}

impl ResourceUris {
    /// URIs under `base` for `merchant_id`. A missing trailing slash is added.
    pub fn new(base: impl Into<String>, merchant_id: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            base,
            merchant_id: merchant_id.into(),
        }
    }

    /// The merchant id.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// The product feed, `{base}{merchant}/items/products/schema/`.
    #[must_use]
    pub fn feed_uri(&self) -> String {
        format!("{}{}/items/products/schema/", self.base, self.merchant_id)
    }

    /// One product, `{feed}online:{language}:{country}:{id}`.
    #[must_use]
    pub fn product_uri(&self, id: &str, country: &str, language: &str) -> String {
        format!(
            "{}online:{}:{}:{}",
            self.feed_uri(),
            language,
            country,
            utf8_percent_encode(id, SEGMENT)
        )
    }

    /// The product batch endpoint, `{feed}batch`.
    #[must_use]
    pub fn batch_uri(&self) -> String {
        format!("{}batch", self.feed_uri())
    }

    /// The managed-accounts feed, or one account of it.
    #[must_use]
    pub fn managed_accounts_uri(&self, account_id: Option<&str>) -> String {
        self.collection_uri("managedaccounts", account_id)
    }

    /// The datafeeds feed, or one datafeed of it.
    #[must_use]
    pub fn datafeeds_uri(&self, datafeed_id: Option<&str>) -> String {
        self.collection_uri("datafeeds/products", datafeed_id)
    }

    fn collection_uri(&self, path: &str, id: Option<&str>) -> String {
        let mut uri = format!("{}{}/{}", self.base, self.merchant_id, path);
        if let Some(id) = id {
            let _ = write!(uri, "/{}", utf8_percent_encode(id, SEGMENT));
        }
        uri
    }
}

/// Query parameters of one request.
///
/// Valued parameters are form-encoded; flags are appended bare
/// (`?warnings&dry-run`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
    flags: Vec<&'static str>,
}

impl Query {
    /// An empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name=value` when `value` is present.
    #[must_use]
    pub fn param(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.params.push((name.to_owned(), value.to_string()));
        }
        self
    }

    /// Add a bare flag when `enabled`.
    #[must_use]
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.flags.push(name);
        }
        self
    }

    /// Whether nothing would be appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.flags.is_empty()
    }

    /// Append this query to `uri`, respecting an existing query string.
    #[must_use]
    pub fn apply(&self, uri: &str) -> String {
        if self.is_empty() {
            return uri.to_owned();
        }
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if !self.params.is_empty() {
            parts.push(encode_pairs(&self.params));
        }
        parts.extend(self.flags.iter().map(|f| (*f).to_owned()));
        let separator = if uri.contains('?') { '&' } else { '?' };
        format!("{uri}{separator}{}", parts.join("&"))
    }
}

fn encode_pairs(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY),
                utf8_percent_encode(v, QUERY)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Characters escaped in query keys and values.
const QUERY: &AsciiSet = &SEGMENT.add(b'&').add(b'=').add(b'+');

#[cfg(test)]
mod tests {
    use super::*;

    fn uris() -> ResourceUris {
        ResourceUris::new("https://content.googleapis.com/content/v1", "7842698")
    }

    #[test]
    fn test_should_build_product_uris() {
        let uris = uris();
        assert_eq!(
            uris.feed_uri(),
            "https://content.googleapis.com/content/v1/7842698/items/products/schema/"
        );
        assert_eq!(
            uris.product_uri("SKU123", "US", "en"),
            "https://content.googleapis.com/content/v1/7842698/items/products/schema/online:en:US:SKU123"
        );
        assert_eq!(
            uris.batch_uri(),
            "https://content.googleapis.com/content/v1/7842698/items/products/schema/batch"
        );
    }

    #[test]
    fn test_should_escape_ids_in_paths() {
        assert!(uris().product_uri("a/b c", "US", "en").ends_with("online:en:US:a%2Fb%20c"));
    }

    #[test]
    fn test_should_build_account_and_datafeed_uris() {
        let uris = uris();
        assert_eq!(
            uris.managed_accounts_uri(None),
            "https://content.googleapis.com/content/v1/7842698/managedaccounts"
        );
        assert_eq!(
            uris.managed_accounts_uri(Some("42")),
            "https://content.googleapis.com/content/v1/7842698/managedaccounts/42"
        );
        assert_eq!(
            uris.datafeeds_uri(Some("9")),
            "https://content.googleapis.com/content/v1/7842698/datafeeds/products/9"
        );
    }

    #[test]
    fn test_should_append_params_then_flags() {
        let query = Query::new()
            .param("max-results", Some(25))
            .param("start-token", Some("a+b"))
            .param("start-index", None::<u32>)
            .flag("warnings", true)
            .flag("dry-run", true);

        assert_eq!(
            query.apply("http://x/feed"),
            "http://x/feed?max-results=25&start-token=a%2Bb&warnings&dry-run"
        );
    }

    #[test]
    fn test_should_extend_existing_query() {
        let query = Query::new().flag("dry-run", true);
        assert_eq!(query.apply("http://x/feed?a=1"), "http://x/feed?a=1&dry-run");
        assert_eq!(Query::new().apply("http://x/feed"), "http://x/feed");
        assert!(Query::new().flag("warnings", false).is_empty());
    }
}
