//! The accessor engine.
//!
//! An [`AtomElement`] pairs a shared [`Document`] with one of its elements (the
//! *model*). Every typed field of the entity views is a one-line call into this
//! engine with a fixed [`Tag`]. Operations search the descendants of a scope
//! element, which defaults to the model; the `*_in` variants take an explicit
//! scope.
//!
//! Reads never mutate the tree. The single exception is
//! [`ensure_first`](AtomElement::ensure_first), which creates the element when
//! it is missing and is named accordingly.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::document::{Document, NodeId};
use crate::error::XmlResult;
use crate::ns::Namespace;
use crate::tag::Tag;

/// A document shared between an entity view and the views derived from it.
pub type SharedDocument = Rc<RefCell<Document>>;

/// A `(document, element)` pair with get / ensure / set / delete accessors.
///
/// Cloning an `AtomElement` clones the handle, not the tree: both copies see
/// the same document.
#[derive(Debug, Clone)]
pub struct AtomElement {
    doc: SharedDocument,
    model: NodeId,
}

impl AtomElement {
    /// Wrap an element of an existing shared document.
    #[must_use]
    pub fn new(doc: SharedDocument, model: NodeId) -> Self {
        Self { doc, model }
    }

    /// Wrap the root of a freshly parsed or built document.
    #[must_use]
    pub fn from_document(doc: Document) -> Self {
        let model = doc.root();
        Self::new(Rc::new(RefCell::new(doc)), model)
    }

    /// Synthesize a new document whose root is `root`.
    ///
    /// The root tag's namespace becomes the default namespace; every other
    /// namespace in `namespaces` is declared under its conventional prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use contentstack_atom::{AtomElement, Namespace, Tag};
    ///
    /// let entry = AtomElement::create_model(Tag::Entry, &[Namespace::Atom, Namespace::Sc]);
    /// let xml = entry.to_xml().unwrap();
    /// assert!(xml.starts_with("<entry xmlns=\"http://www.w3.org/2005/Atom\""));
    /// assert!(xml.contains("xmlns:sc=\"http://schemas.google.com/structuredcontent/2009\""));
    /// ```
    #[must_use]
    pub fn create_model(root: Tag, namespaces: &[Namespace]) -> Self {
        let mut doc = Document::with_root(root);
        let model = doc.root();
        doc.declare_namespace(model, None, root.uri());
        for &ns in namespaces {
            if ns != root.namespace() {
                doc.declare(model, ns);
            }
        }
        Self::from_document(doc)
    }

    /// The shared document.
    #[must_use]
    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }

    /// The model element this view is rooted at.
    #[must_use]
    pub fn model(&self) -> NodeId {
        self.model
    }

    /// A view of another element of the same document.
    #[must_use]
    pub fn at(&self, node: NodeId) -> Self {
        Self::new(Rc::clone(&self.doc), node)
    }

    /// Whether two elements share one document.
    #[must_use]
    pub fn same_document(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.doc, &other.doc)
    }

    /// Borrow the document for read-only inspection.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Document> {
        self.doc.borrow()
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// First descendant of the model matching `tag`, in document order.
    #[must_use]
    pub fn first(&self, tag: Tag) -> Option<NodeId> {
        self.first_in(self.model, tag)
    }

    /// First descendant of `scope` matching `tag`, in document order.
    #[must_use]
    pub fn first_in(&self, scope: NodeId, tag: Tag) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.descendants(scope).find(|&n| doc.matches(n, tag))
    }

    /// All descendants of the model matching `tag`, as a snapshot.
    #[must_use]
    pub fn all(&self, tag: Tag) -> Vec<NodeId> {
        self.all_in(self.model, tag)
    }

    /// All descendants of `scope` matching `tag`, as a snapshot.
    ///
    /// The returned list does not track later mutation of the tree.
    #[must_use]
    pub fn all_in(&self, scope: NodeId, tag: Tag) -> Vec<NodeId> {
        let doc = self.doc.borrow();
        doc.descendants(scope).filter(|&n| doc.matches(n, tag)).collect()
    }

    /// Direct children of `scope` matching `tag`.
    #[must_use]
    pub fn children_in(&self, scope: NodeId, tag: Tag) -> Vec<NodeId> {
        let doc = self.doc.borrow();
        doc.children(scope)
            .iter()
            .copied()
            .filter(|&n| doc.matches(n, tag))
            .collect()
    }

    /// First atom `link` under the model whose `rel` attribute equals `rel`.
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.descendants(self.model)
            .filter(|&n| doc.matches(n, Tag::Link))
            .find(|&n| doc.attribute(n, "rel") == Some(rel))
    }

    /// Text of the first `tag` under the model, or `""` when absent.
    #[must_use]
    pub fn first_value(&self, tag: Tag) -> String {
        self.first_value_in(self.model, tag)
    }

    /// Text of the first `tag` under `scope`, or `""` when absent.
    #[must_use]
    pub fn first_value_in(&self, scope: NodeId, tag: Tag) -> String {
        self.first_in(scope, tag)
            .map(|n| self.text(n))
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// First `tag` under the model, created and appended to the model if absent.
    pub fn ensure_first(&self, tag: Tag) -> NodeId {
        self.ensure_first_in(self.model, tag)
    }

    /// First `tag` under `scope`, created and appended as the last child of
    /// `scope` if absent.
    pub fn ensure_first_in(&self, scope: NodeId, tag: Tag) -> NodeId {
        if let Some(found) = self.first_in(scope, tag) {
            return found;
        }
        let mut doc = self.doc.borrow_mut();
        let created = doc.create_tag(tag);
        doc.append_child(scope, created);
        created
    }

    /// Overwrite the text of the first `tag` under the model, creating it if
    /// needed. Returns the element so attributes can be set on it.
    pub fn set_first_value(&self, tag: Tag, value: &str) -> NodeId {
        self.set_first_value_in(self.model, tag, value)
    }

    /// Overwrite the text of the first `tag` under `scope`, creating it if
    /// needed.
    pub fn set_first_value_in(&self, scope: NodeId, tag: Tag, value: &str) -> NodeId {
        let node = self.ensure_first_in(scope, tag);
        self.doc.borrow_mut().set_text(node, value);
        node
    }

    /// Remove every `tag` under the model.
    pub fn delete_all(&self, tag: Tag) {
        self.delete_all_in(self.model, tag);
    }

    /// Remove every `tag` under `scope` from its own parent.
    pub fn delete_all_in(&self, scope: NodeId, tag: Tag) {
        let matches = self.all_in(scope, tag);
        let mut doc = self.doc.borrow_mut();
        for node in matches {
            doc.detach(node);
        }
    }

    /// Create a detached `tag` element, optionally with text content.
    pub fn create(&self, tag: Tag, content: Option<&str>) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let node = doc.create_tag(tag);
        if let Some(text) = content {
            doc.set_text(node, text);
        }
        node
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&self, parent: NodeId, child: NodeId) {
        self.doc.borrow_mut().append_child(parent, child);
    }

    /// Append `child` as the last child of the model.
    pub fn append_to_model(&self, child: NodeId) {
        self.append(self.model, child);
    }

    /// Remove `node` from its parent.
    pub fn detach(&self, node: NodeId) {
        self.doc.borrow_mut().detach(node);
    }

    /// Deep-copy the model subtree of `other` into this document.
    ///
    /// The copy is detached; append it where it belongs. Later changes to
    /// `other` never reach the copy.
    pub fn import(&self, other: &AtomElement) -> NodeId {
        if self.same_document(other) {
            return self.doc.borrow_mut().duplicate_subtree(other.model);
        }
        let source = other.doc.borrow();
        self.doc.borrow_mut().import_subtree(&source, other.model)
    }

    // -----------------------------------------------------------------------
    // Element helpers
    // -----------------------------------------------------------------------

    /// Text content of `node`.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.doc.borrow().text(node)
    }

    /// Replace the text content of `node`.
    pub fn set_text(&self, node: NodeId, text: &str) {
        self.doc.borrow_mut().set_text(node, text);
    }

    /// Attribute `name` of `node`, or `""` when absent.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> String {
        self.doc
            .borrow()
            .attribute(node, name)
            .map(ToOwned::to_owned)
            .unwrap_or_default()
    }

    /// Whether `node` carries attribute `name`.
    #[must_use]
    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.doc.borrow().attribute(node, name).is_some()
    }

    /// Set attribute `name` on `node`.
    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.doc.borrow_mut().set_attribute(node, name, value);
    }

    /// Remove attribute `name` from `node`, if present.
    pub fn remove_attribute(&self, node: NodeId, name: &str) {
        self.doc.borrow_mut().remove_attribute(node, name);
    }

    /// Attribute `name` of the first `tag` under the model, or `""`.
    #[must_use]
    pub fn first_attribute(&self, tag: Tag, name: &str) -> String {
        self.first(tag)
            .map(|n| self.attribute(n, name))
            .unwrap_or_default()
    }

    /// Serialize the model subtree.
    pub fn to_xml(&self) -> XmlResult<String> {
        self.doc.borrow().to_xml(self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AtomElement {
        AtomElement::create_model(
            Tag::Entry,
            &[Namespace::Atom, Namespace::Sc, Namespace::Scp, Namespace::Batch],
        )
    }

    fn count(el: &AtomElement, tag: Tag) -> usize {
        el.all(tag).len()
    }

    #[test]
    fn test_should_return_empty_value_without_creating() {
        let el = entry();
        let before = el.to_xml().expect("serializable");

        assert_eq!(el.first_value(Tag::Title), "");
        assert!(el.first(Tag::Title).is_none());
        assert_eq!(el.to_xml().expect("serializable"), before);
    }

    #[test]
    fn test_should_create_once_on_ensure() {
        let el = entry();
        let a = el.ensure_first(Tag::Title);
        let b = el.ensure_first(Tag::Title);

        assert_eq!(a, b);
        assert_eq!(count(&el, Tag::Title), 1);
        assert_eq!(el.borrow().parent(a), Some(el.model()));
    }

    #[test]
    fn test_should_set_value_idempotently() {
        let el = entry();
        el.set_first_value(Tag::Title, "z");
        el.set_first_value(Tag::Title, "z");

        assert_eq!(count(&el, Tag::Title), 1);
        assert_eq!(el.first_value(Tag::Title), "z");
    }

    #[test]
    fn test_should_return_element_for_attribute_chaining() {
        let el = entry();
        let price = el.set_first_value(Tag::Price, "199.99");
        el.set_attribute(price, "unit", "usd");

        assert_eq!(el.first_attribute(Tag::Price, "unit"), "usd");
        assert_eq!(el.attribute(price, "missing"), "");
        assert!(!el.has_attribute(price, "missing"));
    }

    #[test]
    fn test_should_search_descendants_not_only_children() {
        let el = entry();
        let shipping = el.create(Tag::Shipping, None);
        el.set_first_value_in(shipping, Tag::ShippingCountry, "US");
        el.append_to_model(shipping);

        assert_eq!(el.first_value(Tag::ShippingCountry), "US");
        assert!(el.children_in(el.model(), Tag::ShippingCountry).is_empty());
    }

    #[test]
    fn test_should_scope_ensure_to_given_element() {
        let el = entry();
        let first = el.create(Tag::Shipping, None);
        el.set_first_value_in(first, Tag::ShippingCountry, "US");
        el.append_to_model(first);
        let second = el.create(Tag::Shipping, None);
        el.append_to_model(second);

        let created = el.ensure_first_in(second, Tag::ShippingCountry);
        assert_eq!(el.borrow().parent(created), Some(second));
        assert_eq!(count(&el, Tag::ShippingCountry), 2);
    }

    #[test]
    fn test_should_delete_zero_one_or_many() {
        let el = entry();
        el.delete_all(Tag::Feature);
        assert_eq!(count(&el, Tag::Feature), 0);

        el.append_to_model(el.create(Tag::Feature, Some("a")));
        el.set_first_value(Tag::Title, "keep");
        el.delete_all(Tag::Feature);
        assert_eq!(count(&el, Tag::Feature), 0);

        for text in ["a", "b", "c"] {
            el.append_to_model(el.create(Tag::Feature, Some(text)));
        }
        el.delete_all(Tag::Feature);
        assert_eq!(count(&el, Tag::Feature), 0);
        assert_eq!(el.first_value(Tag::Title), "keep");
    }

    #[test]
    fn test_should_delete_nested_matches_from_their_own_parent() {
        let el = entry();
        for country in ["US", "CA"] {
            let shipping = el.create(Tag::Shipping, None);
            el.set_first_value_in(shipping, Tag::ShippingCountry, country);
            el.append_to_model(shipping);
        }

        el.delete_all(Tag::ShippingCountry);
        assert_eq!(count(&el, Tag::ShippingCountry), 0);
        assert_eq!(count(&el, Tag::Shipping), 2);
    }

    #[test]
    fn test_should_find_link_by_rel() {
        let el = entry();
        for (rel, href) in [("self", "http://a"), ("next", "http://b"), ("next", "http://c")] {
            let link = el.create(Tag::Link, None);
            el.set_attribute(link, "rel", rel);
            el.set_attribute(link, "href", href);
            el.append_to_model(link);
        }

        let next = el.link("next").expect("next link");
        assert_eq!(el.attribute(next, "href"), "http://b");
        assert!(el.link("edit").is_none());
    }

    #[test]
    fn test_should_keep_created_elements_detached() {
        let el = entry();
        let feature = el.create(Tag::Feature, Some("x"));

        assert!(el.borrow().parent(feature).is_none());
        assert!(el.first(Tag::Feature).is_none());
        assert_eq!(el.text(feature), "x");
    }

    #[test]
    fn test_should_import_as_independent_copy() {
        let feed = AtomElement::create_model(Tag::Feed, &[Namespace::Atom]);
        let product = entry();
        product.set_first_value(Tag::Title, "z");

        let copy = feed.import(&product);
        feed.append_to_model(copy);
        product.set_first_value(Tag::Title, "changed");

        assert!(!feed.same_document(&product));
        assert_eq!(feed.first_value(Tag::Title), "z");
        assert!(feed.to_xml().expect("serializable").contains("<title>z</title>"));
    }

    #[test]
    fn test_should_import_within_same_document() {
        let el = entry();
        let shipping = el.create(Tag::Shipping, Some("x"));
        el.append_to_model(shipping);

        let copy = el.import(&el.at(shipping));
        el.append_to_model(copy);
        assert_eq!(count(&el, Tag::Shipping), 2);
    }

    #[test]
    fn test_should_share_document_between_handles() {
        let el = entry();
        let clone = el.clone();
        clone.set_first_value(Tag::Title, "shared");

        assert!(el.same_document(&clone));
        assert_eq!(el.first_value(Tag::Title), "shared");
    }
}
