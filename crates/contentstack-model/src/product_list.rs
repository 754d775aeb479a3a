//! The product feed.

use contentstack_atom::AtomElement;

use crate::model::FeedModel;
use crate::product::Product;

/// An `atom:feed` of products, used for listing and for batch requests.
#[derive(Debug, Clone)]
pub struct ProductList {
    element: AtomElement,
}

impl_atom_model!(ProductList, Feed, [Atom, App, Sc, Scp, Batch, OpenSearch]);

impl FeedModel for ProductList {
    type Entry = Product;
}

impl ProductList {
    /// Deep-copy `product` into the feed.
    pub fn add_product(&mut self, product: &Product) -> Product {
        self.add_entry(product)
    }

    /// Every product of the feed, sharing this feed's document.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.entries()
    }
}

impl FromIterator<Product> for ProductList {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut list = Self::default();
        for product in iter {
            list.add_product(&product);
        }
        list
    }
}
