//! Capabilities shared by every entity view.
//!
//! Views differ only in which root element and namespace declarations they
//! synthesize when created empty. Everything else is a provided method over
//! the view's [`AtomElement`].

use std::fmt;
use std::str::FromStr;

use contentstack_atom::{AtomElement, Document, Namespace, NodeId, Tag, XmlResult};

use crate::errors::{ERROR_CONTENT_TYPE, ErrorList};

/// A typed view over an Atom element.
pub trait AtomModel: Sized {
    /// Root element synthesized by [`create`](Self::create).
    const ROOT: Tag;

    /// Namespaces declared on a synthesized root.
    const NAMESPACES: &'static [Namespace];

    /// Wrap an existing element.
    fn from_element(element: AtomElement) -> Self;

    /// The underlying element.
    fn element(&self) -> &AtomElement;

    /// Create an empty view backed by a fresh document.
    #[must_use]
    fn create() -> Self {
        Self::from_element(AtomElement::create_model(Self::ROOT, Self::NAMESPACES))
    }

    /// Wrap the root of a standalone document.
    #[must_use]
    fn from_document(doc: Document) -> Self {
        Self::from_element(AtomElement::from_document(doc))
    }

    /// Serialize the view's element and its subtree.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the writer fails.
    fn to_xml(&self) -> XmlResult<String> {
        self.element().to_xml()
    }

    /// Text of the first `tag` element, or `""` when absent.
    #[must_use]
    fn first_value(&self, tag: Tag) -> String {
        self.element().first_value(tag)
    }

    /// Overwrite the first `tag` element, creating it if absent.
    fn set_first_value(&mut self, tag: Tag, value: &str) -> NodeId {
        self.element().set_first_value(tag, value)
    }
}

// ---------------------------------------------------------------------------
// Batch protocol values
// ---------------------------------------------------------------------------

/// The action requested for one entry of a batch feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchOperation {
    /// Create the resource.
    Insert,
    /// Replace the resource.
    Update,
    /// Remove the resource.
    Delete,
}

impl BatchOperation {
    /// Wire value of the `type` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insert" => Ok(Self::Insert),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(format!("unknown batch operation: {other}")),
        }
    }
}

/// The outcome of one entry of a batch response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchStatus {
    /// HTTP-style status code, e.g. `200` or `201`.
    pub code: String,
    /// Human-readable reason, e.g. `Created`.
    pub reason: String,
}

impl BatchStatus {
    /// Whether the code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code.len() == 3 && self.code.starts_with('2')
    }
}

/// A non-fatal warning attached to an entry by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Warning {
    /// Machine-readable code.
    pub code: String,
    /// Warning domain.
    pub domain: String,
    /// Field the warning refers to.
    pub location: String,
    /// Human-readable message.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Fields shared by every `atom:entry` view.
pub trait EntryModel: AtomModel {
    /// The entry title.
    #[must_use]
    fn title(&self) -> String {
        self.first_value(Tag::Title)
    }

    /// Set the entry title.
    fn set_title(&mut self, title: &str) {
        self.set_first_value(Tag::Title, title);
    }

    /// The `atom:id`, the canonical resource URI.
    #[must_use]
    fn atom_id(&self) -> String {
        self.first_value(Tag::AtomId)
    }

    /// Set the `atom:id`.
    fn set_atom_id(&mut self, id: &str) {
        self.set_first_value(Tag::AtomId, id);
    }

    /// When the resource was last updated, as sent by the server.
    #[must_use]
    fn updated(&self) -> String {
        self.first_value(Tag::Updated)
    }

    /// When the resource was first published, as sent by the server.
    #[must_use]
    fn published(&self) -> String {
        self.first_value(Tag::Published)
    }

    /// Href of the `rel="edit"` link, or `""`.
    #[must_use]
    fn edit_link(&self) -> String {
        let el = self.element();
        el.link("edit")
            .map(|link| el.attribute(link, "href"))
            .unwrap_or_default()
    }

    /// Set the edit link, creating it with `rel="edit"` if absent.
    fn set_edit_link(&mut self, href: &str, content_type: &str) {
        let el = self.element();
        let link = el.link("edit").unwrap_or_else(|| {
            let link = el.create(Tag::Link, None);
            el.set_attribute(link, "rel", "edit");
            el.append_to_model(link);
            link
        });
        el.set_attribute(link, "href", href);
        el.set_attribute(link, "type", content_type);
    }

    /// The requested batch operation, if any.
    #[must_use]
    fn batch_operation(&self) -> Option<BatchOperation> {
        let el = self.element();
        let node = el.first(Tag::Operation)?;
        el.attribute(node, "type").parse().ok()
    }

    /// Request `operation` for this entry within a batch feed.
    fn set_batch_operation(&mut self, operation: BatchOperation) {
        let node = self.set_first_value(Tag::Operation, "");
        self.element().set_attribute(node, "type", operation.as_str());
    }

    /// The `batch:id` correlating request and response entries.
    #[must_use]
    fn batch_id(&self) -> String {
        self.first_value(Tag::BatchId)
    }

    /// Set the `batch:id`.
    fn set_batch_id(&mut self, id: &str) {
        self.set_first_value(Tag::BatchId, id);
    }

    /// The status of this entry in a batch response.
    #[must_use]
    fn batch_status(&self) -> Option<BatchStatus> {
        let el = self.element();
        let node = el.first(Tag::Status)?;
        Some(BatchStatus {
            code: el.attribute(node, "code"),
            reason: el.attribute(node, "reason"),
        })
    }

    /// Errors embedded in a batch response entry.
    ///
    /// They live in an `atom:content` element of type
    /// `application/vnd.google.gdata.error+xml`, either as child elements or
    /// as escaped text. Returns `None` when the entry carries no such content.
    #[must_use]
    fn errors_from_batch(&self) -> Option<ErrorList> {
        let el = self.element();
        let content = el
            .all(Tag::Content)
            .into_iter()
            .find(|&c| el.attribute(c, "type") == ERROR_CONTENT_TYPE)?;
        if let Some(errors) = el.first_in(content, Tag::Errors) {
            return Some(ErrorList::from_element(el.at(errors)));
        }
        let text = el.text(content);
        if text.trim().is_empty() {
            return None;
        }
        match Document::parse(&text) {
            Ok(doc) => Some(ErrorList::from_document(doc)),
            Err(err) => {
                tracing::warn!(error = %err, "unreadable batch error content");
                None
            }
        }
    }

    /// Warnings the server attached to this entry.
    #[must_use]
    fn warnings(&self) -> Vec<Warning> {
        let el = self.element();
        el.all(Tag::Warning)
            .into_iter()
            .map(|w| Warning {
                code: el.first_value_in(w, Tag::WarningCode),
                domain: el.first_value_in(w, Tag::WarningDomain),
                location: el.first_value_in(w, Tag::WarningLocation),
                message: el.first_value_in(w, Tag::WarningMessage),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Feeds
// ---------------------------------------------------------------------------

/// A collection view over an `atom:feed`.
pub trait FeedModel: AtomModel {
    /// The view wrapping each entry.
    type Entry: AtomModel;

    /// Every entry of the feed, sharing this feed's document.
    ///
    /// Mutating a returned entry mutates the feed in place.
    #[must_use]
    fn entries(&self) -> Vec<Self::Entry> {
        let el = self.element();
        el.all(Tag::Entry)
            .into_iter()
            .map(|node| Self::Entry::from_element(el.at(node)))
            .collect()
    }

    /// Deep-copy `entry` into this feed and return a view of the copy.
    ///
    /// Later changes to `entry` do not reach the feed.
    fn add_entry(&mut self, entry: &Self::Entry) -> Self::Entry {
        let el = self.element();
        let copy = el.import(entry.element());
        el.append_to_model(copy);
        Self::Entry::from_element(el.at(copy))
    }

    /// Href of the `rel="next"` link, if the feed has more pages.
    #[must_use]
    fn next_link(&self) -> Option<String> {
        let el = self.element();
        el.link("next").map(|link| el.attribute(link, "href"))
    }

    /// The `start-token` query parameter of the next link, or `""`.
    ///
    /// Malformed hrefs yield `""` rather than an error.
    #[must_use]
    fn start_token(&self) -> String {
        self.next_link()
            .and_then(|href| query_param(&href, "start-token"))
            .unwrap_or_default()
    }

    /// `openSearch:totalResults`, or `""`.
    #[must_use]
    fn total_results(&self) -> String {
        self.first_value(Tag::TotalResults)
    }

    /// `openSearch:startIndex`, or `""`.
    #[must_use]
    fn start_index(&self) -> String {
        self.first_value(Tag::StartIndex)
    }

    /// `openSearch:itemsPerPage`, or `""`.
    #[must_use]
    fn items_per_page(&self) -> String {
        self.first_value(Tag::ItemsPerPage)
    }
}

/// Value of query parameter `name` in `href`.
///
/// `None` when the href has no query, more than one `?`, or lacks the key.
fn query_param(href: &str, name: &str) -> Option<String> {
    let href = href.split_once('#').map_or(href, |(before, _)| before);
    let mut parts = href.split('?');
    parts.next();
    let query = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
