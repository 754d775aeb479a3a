//! Managed (sub-)accounts of a multi-client account.

use contentstack_atom::{AtomElement, NodeId, Tag};

use crate::common;
use crate::model::{AtomModel, EntryModel, FeedModel};

/// An AdWords account linked to a managed account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdwordsAccount {
    /// AdWords customer id.
    pub id: String,
    /// Link status, e.g. `active` or `pending`.
    pub status: String,
}

/// A managed account entry.
#[derive(Debug, Clone)]
pub struct ManagedAccount {
    element: AtomElement,
}

impl_atom_model!(ManagedAccount, Entry, [Atom, App, Sc, Gd, Batch]);

impl EntryModel for ManagedAccount {}

impl ManagedAccount {
    text_fields! {
        AdultContent => adult_content, set_adult_content;
        InternalId => internal_id, set_internal_id;
        ReviewsUrl => reviews_url, set_reviews_url;
    }

    /// Numeric account id, the last path segment of the `atom:id`.
    #[must_use]
    pub fn account_id(&self) -> String {
        common::last_segment(&self.atom_id())
    }

    /// The plain-text description.
    #[must_use]
    pub fn description(&self) -> String {
        common::description(&self.element)
    }

    /// Set the description as `atom:content` of type `text`.
    pub fn set_description(&mut self, description: &str) {
        common::set_description(&self.element, description);
    }

    /// The account's storefront, from the alternate link.
    #[must_use]
    pub fn link(&self) -> String {
        common::alternate_link(&self.element)
    }

    /// Set the account's storefront.
    pub fn set_link(&mut self, link: &str) {
        common::set_alternate_link(&self.element, link);
    }

    /// Link an AdWords account.
    pub fn add_adwords_account(&mut self, id: &str, status: &str) -> NodeId {
        let el = &self.element;
        let container = el.ensure_first(Tag::AdwordsAccounts);
        let node = el.create(Tag::AdwordsAccount, Some(id));
        el.set_attribute(node, "status", status);
        el.append(container, node);
        node
    }

    /// Every linked AdWords account.
    #[must_use]
    pub fn adwords_accounts(&self) -> Vec<AdwordsAccount> {
        let el = &self.element;
        el.all(Tag::AdwordsAccount)
            .into_iter()
            .map(|node| AdwordsAccount {
                id: el.text(node),
                status: el.attribute(node, "status"),
            })
            .collect()
    }

    /// Unlink every AdWords account.
    pub fn clear_all_adwords_accounts(&mut self) {
        self.element.delete_all(Tag::AdwordsAccounts);
    }
}

/// A feed of managed accounts.
#[derive(Debug, Clone)]
pub struct ManagedAccountList {
    element: AtomElement,
}

impl_atom_model!(ManagedAccountList, Feed, [Atom, App, Sc, Gd, Batch, OpenSearch]);

impl FeedModel for ManagedAccountList {
    type Entry = ManagedAccount;
}

impl ManagedAccountList {
    /// Deep-copy `account` into the feed.
    pub fn add_account(&mut self, account: &ManagedAccount) -> ManagedAccount {
        self.add_entry(account)
    }

    /// Every account of the feed, sharing this feed's document.
    #[must_use]
    pub fn accounts(&self) -> Vec<ManagedAccount> {
        self.entries()
    }
}
