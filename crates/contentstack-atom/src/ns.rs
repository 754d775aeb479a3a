//! XML namespaces spoken by the Content API.

use std::fmt;

/// The namespace bound to the reserved `xml` prefix. It is never declared.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// The closed set of namespaces used on the wire.
///
/// Each namespace has a fixed URI and a conventional prefix. Prefixes are only a
/// serialization detail: element identity is always the namespace URI plus the
/// local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Atom 1.0.
    Atom,
    /// Atom Publishing Protocol.
    App,
    /// GData batch processing.
    Batch,
    /// Structured content.
    Sc,
    /// Structured content, products.
    Scp,
    /// GData common elements (errors, account metadata).
    Gd,
    /// OpenSearch paging metadata.
    OpenSearch,
}

impl Namespace {
    /// Every namespace in the registry.
    pub const ALL: [Self; 7] = [
        Self::Atom,
        Self::App,
        Self::Batch,
        Self::Sc,
        Self::Scp,
        Self::Gd,
        Self::OpenSearch,
    ];

    /// The namespace URI.
    #[must_use]
    pub fn uri(self) -> &'static str {
        match self {
            Self::Atom => "http://www.w3.org/2005/Atom",
            Self::App => "http://www.w3.org/2007/app",
            Self::Batch => "http://schemas.google.com/gdata/batch",
            Self::Sc => "http://schemas.google.com/structuredcontent/2009",
            Self::Scp => "http://schemas.google.com/structuredcontent/2009/products",
            Self::Gd => "http://schemas.google.com/g/2005",
            Self::OpenSearch => "http://a9.com/-/spec/opensearch/1.1/",
        }
    }

    /// The conventional prefix used when the namespace is not the default one.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::App => "app",
            Self::Batch => "batch",
            Self::Sc => "sc",
            Self::Scp => "scp",
            Self::Gd => "gd",
            Self::OpenSearch => "openSearch",
        }
    }

    /// Look up a namespace by URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.uri() == uri)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_every_uri() {
        for ns in Namespace::ALL {
            assert_eq!(Namespace::from_uri(ns.uri()), Some(ns));
        }
    }

    #[test]
    fn test_should_reject_unknown_uri() {
        assert_eq!(Namespace::from_uri("http://example.com/ns"), None);
    }

    #[test]
    fn test_should_use_distinct_prefixes() {
        let mut prefixes: Vec<_> = Namespace::ALL.iter().map(|ns| ns.prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), Namespace::ALL.len());
    }
}
