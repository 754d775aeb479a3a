//! Typed entity views for `ContentStack`.
//!
//! Every view is a thin facade over an [`AtomElement`]: it holds a document
//! handle and a root element and nothing else. Fields are computed by searching
//! the tree on every call, so a view never goes stale.
//!
//! # Key components
//!
//! - [`AtomModel`], [`EntryModel`] and [`FeedModel`]: the capabilities shared
//!   by all views
//! - [`Product`] / [`ProductList`], [`ManagedAccount`] /
//!   [`ManagedAccountList`], [`Datafeed`] / [`DatafeedList`]
//! - [`ErrorElement`] / [`ErrorList`]: server-reported errors as data
//! - [`parse`], [`parse_managed_accounts`] and [`parse_datafeeds`]: payload
//!   dispatch on the root element
//!
//! # Examples
//!
//! ```
//! use contentstack_model::{AtomModel, EntryModel, Product};
//!
//! let mut product = Product::create();
//! product.set_title("Dijji Digital Camera");
//! product.set_price("199.99", "usd");
//!
//! let xml = product.to_xml().unwrap();
//! assert!(xml.contains("<title>Dijji Digital Camera</title>"));
//! assert!(xml.contains("<scp:price unit=\"usd\">199.99</scp:price>"));
//! ```
//!
//! [`AtomElement`]: contentstack_atom::AtomElement

/// Generate getter/setter pairs for plain text fields bound to one tag each.
macro_rules! text_fields {
    ($($tag:ident => $get:ident, $set:ident;)+) => {
        $(
            #[doc = concat!("Text of the first `", stringify!($tag), "` element, or `\"\"`.")]
            #[must_use]
            pub fn $get(&self) -> String {
                self.element.first_value(::contentstack_atom::Tag::$tag)
            }

            #[doc = concat!("Overwrite the first `", stringify!($tag), "` element, creating it if absent.")]
            pub fn $set(&mut self, value: &str) {
                self.element
                    .set_first_value(::contentstack_atom::Tag::$tag, value);
            }
        )+
    };
}

/// Implement [`AtomModel`] for a view struct with a single `element` field.
macro_rules! impl_atom_model {
    ($ty:ty, $root:ident, [$($ns:ident),+ $(,)?]) => {
        impl $crate::model::AtomModel for $ty {
            const ROOT: ::contentstack_atom::Tag = ::contentstack_atom::Tag::$root;
            const NAMESPACES: &'static [::contentstack_atom::Namespace] =
                &[$(::contentstack_atom::Namespace::$ns),+];

            fn from_element(element: ::contentstack_atom::AtomElement) -> Self {
                Self { element }
            }

            fn element(&self) -> &::contentstack_atom::AtomElement {
                &self.element
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <Self as $crate::model::AtomModel>::create()
            }
        }
    };
}

pub mod account;
mod common;
pub mod datafeed;
pub mod error;
pub mod errors;
pub mod model;
pub mod parse;
pub mod product;
pub mod product_list;

pub use account::{AdwordsAccount, ManagedAccount, ManagedAccountList};
pub use datafeed::{Datafeed, DatafeedList, FeedDestination, FileFormat};
pub use error::{ModelError, ModelResult};
pub use errors::{ERROR_CONTENT_TYPE, ErrorElement, ErrorList};
pub use model::{AtomModel, BatchOperation, BatchStatus, EntryModel, FeedModel, Warning};
pub use parse::{
    AccountDocument, DatafeedDocument, ProductDocument, parse, parse_datafeeds,
    parse_managed_accounts,
};
pub use product::{GenericAttribute, Group, Product, Shipping, Tax};
pub use product_list::ProductList;
