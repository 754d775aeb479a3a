//! The qualified-tag registry.
//!
//! Every element the typed views read or write is named here once as a
//! [`Tag`] variant bound to its `(namespace, local name)` pair. The registry is
//! closed: unknown names are a compile error for static use, and
//! [`Tag::from_name`] returns `None` for dynamic lookups.

use std::fmt;

use crate::ns::Namespace;

/// An immutable `(namespace URI, local name)` pair.
///
/// Two tags are equal iff both components match; the prefix used on the wire
/// plays no part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedTag {
    /// Namespace the element belongs to.
    pub namespace: Namespace,
    /// Local (unprefixed) element name.
    pub local_name: &'static str,
}

impl QualifiedTag {
    /// The namespace URI.
    #[must_use]
    pub fn uri(&self) -> &'static str {
        self.namespace.uri()
    }
}

impl fmt::Display for QualifiedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.uri(), self.local_name)
    }
}

macro_rules! define_tags {
    ($($(#[$meta:meta])* $variant:ident => ($ns:ident, $local:literal, $name:literal);)+) => {
        /// Symbolic names for every element the API binding touches.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Tag {
            $($(#[$meta])* $variant,)+
        }

        impl Tag {
            /// Every tag in the registry.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)+];

            /// The namespace this tag lives in.
            #[must_use]
            pub fn namespace(self) -> Namespace {
                match self {
                    $(Tag::$variant => Namespace::$ns,)+
                }
            }

            /// The local element name.
            #[must_use]
            pub fn local_name(self) -> &'static str {
                match self {
                    $(Tag::$variant => $local,)+
                }
            }

            /// The symbolic field name.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)+
                }
            }

            /// Look up a tag by its symbolic field name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Tag> {
                match name {
                    $($name => Some(Tag::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

define_tags! {
    // Atom
    /// `<atom:entry>`
    Entry => (Atom, "entry", "entry");
    /// `<atom:feed>`
    Feed => (Atom, "feed", "feed");
    /// `<atom:id>`, the resource URI.
    AtomId => (Atom, "id", "atom_id");
    /// `<atom:title>`
    Title => (Atom, "title", "title");
    /// `<atom:content>`, carries descriptions and embedded batch errors.
    Content => (Atom, "content", "content");
    /// `<atom:link>`
    Link => (Atom, "link", "link");
    /// `<atom:updated>`
    Updated => (Atom, "updated", "updated");
    /// `<atom:published>`
    Published => (Atom, "published", "published");

    // Atom Publishing Protocol
    /// `<app:control>`, container for destinations and warnings.
    Control => (App, "control", "control");
    /// `<app:edited>`
    Edited => (App, "edited", "edited");

    // Batch
    /// `<batch:operation type="..."/>`
    Operation => (Batch, "operation", "operation");
    /// `<batch:status code="..." reason="..."/>`
    Status => (Batch, "status", "status");
    /// `<batch:id>`, correlates batch requests and responses.
    BatchId => (Batch, "id", "batch_id");

    // Structured content
    /// `<sc:id>`, the merchant SKU.
    Id => (Sc, "id", "id");
    /// `<sc:adult>`
    Adult => (Sc, "adult", "adult");
    /// `<sc:target_country>`
    TargetCountry => (Sc, "target_country", "target_country");
    /// `<sc:content_language>`
    ContentLanguage => (Sc, "content_language", "content_language");
    /// `<sc:image_link>`
    ImageLink => (Sc, "image_link", "image_link");
    /// `<sc:additional_image_link>`
    AdditionalImageLink => (Sc, "additional_image_link", "additional_image_link");
    /// `<sc:expiration_date>`
    ExpirationDate => (Sc, "expiration_date", "expiration_date");
    /// `<sc:required_destination dest="..."/>`
    RequiredDestination => (Sc, "required_destination", "required_destination");
    /// `<sc:excluded_destination dest="..."/>`
    ExcludedDestination => (Sc, "excluded_destination", "excluded_destination");
    /// `<sc:validate_destination dest="..."/>`
    ValidateDestination => (Sc, "validate_destination", "validate_destination");
    /// `<sc:attribute name="..." type="..." unit="...">`, generic attribute.
    Attribute => (Sc, "attribute", "attribute");
    /// `<sc:group name="...">`, named set of generic attributes.
    Group => (Sc, "group", "group");
    /// `<sc:warnings>`
    Warnings => (Sc, "warnings", "warnings");
    /// `<sc:warning>`
    Warning => (Sc, "warning", "warning");
    /// `<sc:code>` inside a warning.
    WarningCode => (Sc, "code", "warning_code");
    /// `<sc:domain>` inside a warning.
    WarningDomain => (Sc, "domain", "warning_domain");
    /// `<sc:location>` inside a warning.
    WarningLocation => (Sc, "location", "warning_location");
    /// `<sc:message>` inside a warning.
    WarningMessage => (Sc, "message", "warning_message");
    /// `<sc:internal_id>`
    InternalId => (Sc, "internal_id", "internal_id");
    /// `<sc:adult_content>`
    AdultContent => (Sc, "adult_content", "adult_content");
    /// `<sc:reviews_url>`
    ReviewsUrl => (Sc, "reviews_url", "reviews_url");
    /// `<sc:adwords_accounts>`
    AdwordsAccounts => (Sc, "adwords_accounts", "adwords_accounts");
    /// `<sc:adwords_account status="...">`
    AdwordsAccount => (Sc, "adwords_account", "adwords_account");
    /// `<sc:feed_file_name>`
    FeedFileName => (Sc, "feed_file_name", "feed_file_name");
    /// `<sc:attribute_language>`
    AttributeLanguage => (Sc, "attribute_language", "attribute_language");
    /// `<sc:feed_type>`
    FeedType => (Sc, "feed_type", "feed_type");
    /// `<sc:file_format format="...">`
    FileFormat => (Sc, "file_format", "file_format");
    /// `<sc:delimiter>`
    Delimiter => (Sc, "delimiter", "delimiter");
    /// `<sc:encoding>`
    Encoding => (Sc, "encoding", "encoding");
    /// `<sc:use_quoted_fields>`
    UseQuotedFields => (Sc, "use_quoted_fields", "use_quoted_fields");
    /// `<sc:feed_destination dest="..." enabled="...">`
    FeedDestination => (Sc, "feed_destination", "feed_destination");
    /// `<sc:processing_status>`
    ProcessingStatus => (Sc, "processing_status", "processing_status");

    // Structured content, products
    /// `<scp:price unit="...">`
    Price => (Scp, "price", "price");
    /// `<scp:sale_price unit="...">`
    SalePrice => (Scp, "sale_price", "sale_price");
    /// `<scp:sale_price_effective_date>`
    SalePriceEffectiveDate => (Scp, "sale_price_effective_date", "sale_price_effective_date");
    /// `<scp:condition>`
    Condition => (Scp, "condition", "condition");
    /// `<scp:shipping>`, one shipping rule.
    Shipping => (Scp, "shipping", "shipping");
    /// `<scp:shipping_country>`
    ShippingCountry => (Scp, "shipping_country", "shipping_country");
    /// `<scp:shipping_region>`
    ShippingRegion => (Scp, "shipping_region", "shipping_region");
    /// `<scp:shipping_price unit="...">`
    ShippingPrice => (Scp, "shipping_price", "shipping_price");
    /// `<scp:shipping_service>`
    ShippingService => (Scp, "shipping_service", "shipping_service");
    /// `<scp:tax>`, one tax rule.
    Tax => (Scp, "tax", "tax");
    /// `<scp:tax_country>`
    TaxCountry => (Scp, "tax_country", "tax_country");
    /// `<scp:tax_region>`
    TaxRegion => (Scp, "tax_region", "tax_region");
    /// `<scp:tax_rate>`
    TaxRate => (Scp, "tax_rate", "tax_rate");
    /// `<scp:tax_ship>`
    TaxShip => (Scp, "tax_ship", "tax_ship");
    /// `<scp:author>`
    Author => (Scp, "author", "author");
    /// `<scp:availability>`
    Availability => (Scp, "availability", "availability");
    /// `<scp:brand>`
    Brand => (Scp, "brand", "brand");
    /// `<scp:color>`
    Color => (Scp, "color", "color");
    /// `<scp:edition>`
    Edition => (Scp, "edition", "edition");
    /// `<scp:feature>`
    Feature => (Scp, "feature", "feature");
    /// `<scp:featured_product>`
    FeaturedProduct => (Scp, "featured_product", "featured_product");
    /// `<scp:genre>`
    Genre => (Scp, "genre", "genre");
    /// `<scp:manufacturer>`
    Manufacturer => (Scp, "manufacturer", "manufacturer");
    /// `<scp:mpn>`
    Mpn => (Scp, "mpn", "mpn");
    /// `<scp:online_only>`
    OnlineOnly => (Scp, "online_only", "online_only");
    /// `<scp:gtin>`
    Gtin => (Scp, "gtin", "gtin");
    /// `<scp:product_type>`
    ProductType => (Scp, "product_type", "product_type");
    /// `<scp:product_review_average>`
    ProductReviewAverage => (Scp, "product_review_average", "product_review_average");
    /// `<scp:product_review_count>`
    ProductReviewCount => (Scp, "product_review_count", "product_review_count");
    /// `<scp:quantity>`
    Quantity => (Scp, "quantity", "quantity");
    /// `<scp:shipping_weight unit="...">`
    ShippingWeight => (Scp, "shipping_weight", "shipping_weight");
    /// `<scp:size>`
    Size => (Scp, "size", "size");
    /// `<scp:year>`
    Year => (Scp, "year", "year");
    /// `<scp:channel>`
    Channel => (Scp, "channel", "channel");
    /// `<scp:gender>`
    Gender => (Scp, "gender", "gender");
    /// `<scp:age_group>`
    AgeGroup => (Scp, "age_group", "age_group");
    /// `<scp:item_group_id>`
    ItemGroupId => (Scp, "item_group_id", "item_group_id");
    /// `<scp:google_product_category>`
    GoogleProductCategory => (Scp, "google_product_category", "google_product_category");
    /// `<scp:material>`
    Material => (Scp, "material", "material");
    /// `<scp:pattern>`
    Pattern => (Scp, "pattern", "pattern");
    /// `<scp:adwords_grouping>`
    AdwordsGrouping => (Scp, "adwords_grouping", "adwords_grouping");
    /// `<scp:adwords_labels>`
    AdwordsLabels => (Scp, "adwords_labels", "adwords_labels");
    /// `<scp:adwords_redirect>`
    AdwordsRedirect => (Scp, "adwords_redirect", "adwords_redirect");
    /// `<scp:adwords_queryparam>`
    AdwordsQueryparam => (Scp, "adwords_queryparam", "adwords_queryparam");

    // GData common
    /// `<gd:errors>`
    Errors => (Gd, "errors", "errors");
    /// `<gd:error>`
    Error => (Gd, "error", "error");
    /// `<gd:domain>`
    ErrorDomain => (Gd, "domain", "error_domain");
    /// `<gd:code>`
    ErrorCode => (Gd, "code", "error_code");
    /// `<gd:location type="...">`
    ErrorLocation => (Gd, "location", "error_location");
    /// `<gd:internalReason>`
    InternalReason => (Gd, "internalReason", "internal_reason");
    /// `<gd:debugInfo>`
    DebugInfo => (Gd, "debugInfo", "debug_info");

    // OpenSearch
    /// `<openSearch:totalResults>`
    TotalResults => (OpenSearch, "totalResults", "total_results");
    /// `<openSearch:startIndex>`
    StartIndex => (OpenSearch, "startIndex", "start_index");
    /// `<openSearch:itemsPerPage>`
    ItemsPerPage => (OpenSearch, "itemsPerPage", "items_per_page");
}

impl Tag {
    /// The `(namespace, local name)` identity of this tag.
    #[must_use]
    pub fn qualified(self) -> QualifiedTag {
        QualifiedTag {
            namespace: self.namespace(),
            local_name: self.local_name(),
        }
    }

    /// The namespace URI of this tag.
    #[must_use]
    pub fn uri(self) -> &'static str {
        self.namespace().uri()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace().prefix(), self.local_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_should_resolve_tag_to_namespace_and_local_name() {
        let price = Tag::Price.qualified();
        assert_eq!(price.namespace, Namespace::Scp);
        assert_eq!(price.local_name, "price");
        assert_eq!(price.uri(), "http://schemas.google.com/structuredcontent/2009/products");
    }

    #[test]
    fn test_should_distinguish_same_local_name_in_different_namespaces() {
        assert_eq!(Tag::AtomId.local_name(), Tag::Id.local_name());
        assert_ne!(Tag::AtomId.qualified(), Tag::Id.qualified());
        assert_ne!(Tag::BatchId.qualified(), Tag::Id.qualified());
    }

    #[test]
    fn test_should_keep_qualified_identities_unique() {
        let unique: HashSet<_> = Tag::ALL.iter().map(|t| t.qualified()).collect();
        assert_eq!(unique.len(), Tag::ALL.len());
    }

    #[test]
    fn test_should_look_up_tags_by_symbolic_name() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_name(tag.name()), Some(*tag));
        }
        assert_eq!(Tag::from_name("no_such_field"), None);
    }

    #[test]
    fn test_should_display_with_conventional_prefix() {
        assert_eq!(Tag::Operation.to_string(), "batch:operation");
        assert_eq!(Tag::Shipping.qualified().to_string(), format!("{{{}}}shipping", Namespace::Scp.uri()));
    }
}
