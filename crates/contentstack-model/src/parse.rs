//! Payload dispatch.
//!
//! The root element says whether a payload is a single entry, a feed or an
//! error document, but not which resource family it belongs to. Callers pick
//! the dispatcher matching the endpoint they queried.

use contentstack_atom::{AtomElement, Document};

use crate::account::{ManagedAccount, ManagedAccountList};
use crate::datafeed::{Datafeed, DatafeedList};
use crate::error::{ModelError, ModelResult};
use crate::errors::ErrorList;
use crate::model::AtomModel;
use crate::product::Product;
use crate::product_list::ProductList;

/// A parsed payload from a product endpoint.
#[derive(Debug, Clone)]
pub enum ProductDocument {
    /// An `entry` root.
    Product(Product),
    /// A `feed` root.
    List(ProductList),
    /// An `errors` root.
    Errors(ErrorList),
}

/// A parsed payload from a managed-accounts endpoint.
#[derive(Debug, Clone)]
pub enum AccountDocument {
    /// An `entry` root.
    Account(ManagedAccount),
    /// A `feed` root.
    List(ManagedAccountList),
    /// An `errors` root.
    Errors(ErrorList),
}

/// A parsed payload from a datafeeds endpoint.
#[derive(Debug, Clone)]
pub enum DatafeedDocument {
    /// An `entry` root.
    Datafeed(Datafeed),
    /// A `feed` root.
    List(DatafeedList),
    /// An `errors` root.
    Errors(ErrorList),
}

/// Root kinds understood by the dispatchers.
enum Root {
    Entry,
    Feed,
    Errors,
}

/// Parse `xml` and classify its root by local name.
fn load(xml: &str) -> ModelResult<(Root, AtomElement)> {
    let doc = Document::parse(xml)?;
    let root = doc.local_name(doc.root()).to_owned();
    let kind = match root.as_str() {
        "entry" => Root::Entry,
        "feed" => Root::Feed,
        "errors" => Root::Errors,
        _ => {
            tracing::warn!(root = %root, "unrecognized document root");
            return Err(ModelError::UnrecognizedDocument { root });
        }
    };
    Ok((kind, AtomElement::from_document(doc)))
}

/// Parse a payload returned by a product endpoint.
///
/// # Errors
///
/// Returns `ModelError::Xml` for malformed XML and
/// `ModelError::UnrecognizedDocument` when the root is not `entry`, `feed` or
/// `errors`.
///
/// # Examples
///
/// ```
/// use contentstack_model::{EntryModel, ProductDocument, parse};
///
/// let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"><title>Camera</title></entry>"#;
/// match parse(xml).unwrap() {
///     ProductDocument::Product(product) => assert_eq!(product.title(), "Camera"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn parse(xml: &str) -> ModelResult<ProductDocument> {
    let (kind, element) = load(xml)?;
    Ok(match kind {
        Root::Entry => ProductDocument::Product(Product::from_element(element)),
        Root::Feed => ProductDocument::List(ProductList::from_element(element)),
        Root::Errors => ProductDocument::Errors(ErrorList::from_element(element)),
    })
}

/// Parse a payload returned by a managed-accounts endpoint.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_managed_accounts(xml: &str) -> ModelResult<AccountDocument> {
    let (kind, element) = load(xml)?;
    Ok(match kind {
        Root::Entry => AccountDocument::Account(ManagedAccount::from_element(element)),
        Root::Feed => AccountDocument::List(ManagedAccountList::from_element(element)),
        Root::Errors => AccountDocument::Errors(ErrorList::from_element(element)),
    })
}

/// Parse a payload returned by a datafeeds endpoint.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_datafeeds(xml: &str) -> ModelResult<DatafeedDocument> {
    let (kind, element) = load(xml)?;
    Ok(match kind {
        Root::Entry => DatafeedDocument::Datafeed(Datafeed::from_element(element)),
        Root::Feed => DatafeedDocument::List(DatafeedList::from_element(element)),
        Root::Errors => DatafeedDocument::Errors(ErrorList::from_element(element)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryModel;

    const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>a</title></entry>
  <entry><title>b</title></entry>
</feed>"#;

    const ERRORS: &str = r#"<errors xmlns="http://schemas.google.com/g/2005">
  <error><domain>GData</domain><code>ResourceNotFoundException</code></error>
</errors>"#;

    #[test]
    fn test_should_dispatch_product_payloads() {
        assert!(matches!(
            parse(r#"<entry xmlns="http://www.w3.org/2005/Atom"/>"#),
            Ok(ProductDocument::Product(_))
        ));
        let Ok(ProductDocument::List(list)) = parse(FEED) else {
            panic!("expected a product list");
        };
        assert_eq!(list.products().len(), 2);
        let Ok(ProductDocument::Errors(errors)) = parse(ERRORS) else {
            panic!("expected errors");
        };
        assert_eq!(errors.errors()[0].code(), "ResourceNotFoundException");
    }

    #[test]
    fn test_should_dispatch_account_payloads() {
        let Ok(AccountDocument::List(list)) = parse_managed_accounts(FEED) else {
            panic!("expected an account list");
        };
        assert_eq!(list.accounts()[1].title(), "b");
        assert!(matches!(
            parse_managed_accounts(ERRORS),
            Ok(AccountDocument::Errors(_))
        ));
    }

    #[test]
    fn test_should_dispatch_datafeed_payloads() {
        assert!(matches!(
            parse_datafeeds(r#"<entry xmlns="http://www.w3.org/2005/Atom"/>"#),
            Ok(DatafeedDocument::Datafeed(_))
        ));
        assert!(matches!(parse_datafeeds(FEED), Ok(DatafeedDocument::List(_))));
    }

    #[test]
    fn test_should_reject_unrecognized_root() {
        let err = parse("<html><body/></html>").unwrap_err();
        assert!(matches!(err, ModelError::UnrecognizedDocument { root } if root == "html"));
    }

    #[test]
    fn test_should_reject_malformed_xml() {
        assert!(matches!(parse("").unwrap_err(), ModelError::Xml(_)));
    }
}
