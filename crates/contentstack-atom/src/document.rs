//! The owned, mutable element tree.
//!
//! A [`Document`] is an arena of elements addressed by [`NodeId`]. It always
//! has exactly one root; every other element is either attached to exactly one
//! parent or detached (freshly created, or removed from the tree). Detached
//! elements stay in the arena until the document is dropped, so a `NodeId`
//! never dangles.
//!
//! Element identity is `(namespace URI, local name)`. Prefixes seen while
//! parsing are kept only as a hint for serialization.

use crate::error::XmlResult;
use crate::ns::Namespace;
use crate::tag::Tag;

/// Handle to an element inside a [`Document`].
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A namespace declaration (`xmlns` or `xmlns:prefix`) carried by an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    /// Declared prefix, `None` for the default namespace.
    pub prefix: Option<String>,
    /// Namespace URI bound to the prefix.
    pub uri: String,
}

impl NamespaceDecl {
    /// Declaration binding `prefix` (or the default namespace) to `uri`.
    pub fn new(prefix: Option<&str>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(ToOwned::to_owned),
            uri: uri.into(),
        }
    }
}

/// A single `name="value"` attribute.
///
/// Unprefixed attributes are in no namespace, whatever the element's default
/// namespace is. Prefixed ones (`gd:etag`) keep their resolved URI so they can
/// be re-declared when the element moves to another document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Namespace URI, empty for unqualified attributes.
    pub namespace: String,
    /// Local name.
    pub name: String,
    /// Prefix hint, as seen when parsing.
    pub prefix: Option<String>,
    /// Unescaped attribute value.
    pub value: String,
}

impl Attribute {
    fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) namespace: String,
    pub(crate) local_name: String,
    pub(crate) prefix: Option<String>,
    pub(crate) declarations: Vec<NamespaceDecl>,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) text: String,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// A detached copy without children.
    fn shallow_copy(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            local_name: self.local_name.clone(),
            prefix: self.prefix.clone(),
            declarations: self.declarations.clone(),
            attributes: self.attributes.clone(),
            text: self.text.clone(),
            children: Vec::new(),
            parent: None,
        }
    }

    fn new(namespace: &str, local_name: &str) -> Self {
        Self {
            namespace: namespace.to_owned(),
            local_name: local_name.to_owned(),
            prefix: None,
            declarations: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// An arena-backed XML element tree with a single root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document whose root element is `{namespace}local_name`.
    #[must_use]
    pub fn new(namespace: &str, local_name: &str) -> Self {
        Self {
            nodes: vec![Node::new(namespace, local_name)],
            root: NodeId(0),
        }
    }

    /// Create a document whose root element is the given registry tag.
    #[must_use]
    pub fn with_root(tag: Tag) -> Self {
        Self::new(tag.uri(), tag.local_name())
    }

    /// Parse an XML payload into a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use contentstack_atom::{Document, Tag};
    ///
    /// let doc = Document::parse(
    ///     r#"<entry xmlns="http://www.w3.org/2005/Atom"><title>Camera</title></entry>"#,
    /// ).unwrap();
    /// let title = doc.descendants(doc.root()).find(|&n| doc.matches(n, Tag::Title)).unwrap();
    /// assert_eq!(doc.text(title), "Camera");
    /// ```
    pub fn parse(xml: &str) -> XmlResult<Self> {
        crate::reader::parse(xml)
    }

    /// Serialize the subtree rooted at `node` as pretty-printed XML.
    pub fn to_xml(&self, node: NodeId) -> XmlResult<String> {
        crate::writer::write(self, node)
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of elements in the arena, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds only the root. A document is never truly empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -----------------------------------------------------------------------
    // Construction and structure
    // -----------------------------------------------------------------------

    /// Create a detached element `{namespace}local_name`.
    pub fn create_element(&mut self, namespace: &str, local_name: &str) -> NodeId {
        self.push_node(Node::new(namespace, local_name))
    }

    /// Create a detached element for a registry tag.
    pub fn create_tag(&mut self, tag: Tag) -> NodeId {
        self.create_element(tag.uri(), tag.local_name())
    }

    /// Append `child` as the last child of `parent`, detaching it first if it
    /// is attached elsewhere.
    ///
    /// No-op when `child` is `parent` itself or one of its ancestors, since the
    /// tree would otherwise become a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Remove `node` from its parent. No-op for detached elements and the root.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.node_mut(node).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != node);
        }
    }

    /// Whether `ancestor` is `node` or lies on its path to the root.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Parent of `node`, if attached.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// Direct children of `node` in document order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// Descendants of `node` in document order (depth-first, pre-order),
    /// excluding `node` itself.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(node).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    // -----------------------------------------------------------------------
    // Names
    // -----------------------------------------------------------------------

    /// Namespace URI of `node` (empty for no namespace).
    #[must_use]
    pub fn namespace(&self, node: NodeId) -> &str {
        &self.node(node).namespace
    }

    /// Local name of `node`.
    #[must_use]
    pub fn local_name(&self, node: NodeId) -> &str {
        &self.node(node).local_name
    }

    /// Whether `node` has the qualified identity of `tag`.
    #[must_use]
    pub fn matches(&self, node: NodeId, tag: Tag) -> bool {
        let n = self.node(node);
        n.local_name == tag.local_name() && n.namespace == tag.uri()
    }

    /// Prefix hint for `node`, as seen when parsing.
    #[must_use]
    pub fn prefix(&self, node: NodeId) -> Option<&str> {
        self.node(node).prefix.as_deref()
    }

    /// Set the prefix hint used when serializing `node`.
    pub fn set_prefix(&mut self, node: NodeId, prefix: Option<&str>) {
        self.node_mut(node).prefix = prefix.map(ToOwned::to_owned);
    }

    /// Declare a namespace on `node`, replacing any declaration of the same prefix.
    pub fn declare_namespace(&mut self, node: NodeId, prefix: Option<&str>, uri: &str) {
        let decls = &mut self.node_mut(node).declarations;
        decls.retain(|d| d.prefix.as_deref() != prefix);
        decls.push(NamespaceDecl::new(prefix, uri));
    }

    /// Declare a registry namespace on `node` under its conventional prefix.
    pub fn declare(&mut self, node: NodeId, ns: Namespace) {
        self.declare_namespace(node, Some(ns.prefix()), ns.uri());
    }

    /// Namespace declarations carried by `node`.
    #[must_use]
    pub fn declarations(&self, node: NodeId) -> &[NamespaceDecl] {
        &self.node(node).declarations
    }

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    /// Text content of `node`: its own text followed by the text of every
    /// descendant, in document order.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        let own = &self.node(node).text;
        if self.children(node).is_empty() {
            return own.clone();
        }
        let mut text = own.clone();
        for d in self.descendants(node) {
            text.push_str(&self.node(d).text);
        }
        text
    }

    /// Replace the content of `node` with `text`, detaching any child elements.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let children = std::mem::take(&mut self.node_mut(node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        text.clone_into(&mut self.node_mut(node).text);
    }

    pub(crate) fn push_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text.push_str(text);
    }

    /// Value of the unqualified attribute `name` on `node`.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attribute_ns(node, "", name)
    }

    /// Value of attribute `{namespace}name` on `node`.
    #[must_use]
    pub fn attribute_ns(&self, node: NodeId, namespace: &str, name: &str) -> Option<&str> {
        self.node(node)
            .attributes
            .iter()
            .find(|a| a.is(namespace, name))
            .map(|a| a.value.as_str())
    }

    /// All attributes of `node` in document order.
    #[must_use]
    pub fn attributes(&self, node: NodeId) -> &[Attribute] {
        &self.node(node).attributes
    }

    /// Set the unqualified attribute `name` on `node`, keeping its position if
    /// it already exists.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.set_attribute_ns(node, "", None, name, value);
    }

    /// Set attribute `{namespace}name` on `node`. `prefix` is only a hint for
    /// serialization and is ignored for unqualified attributes.
    pub fn set_attribute_ns(
        &mut self,
        node: NodeId,
        namespace: &str,
        prefix: Option<&str>,
        name: &str,
        value: &str,
    ) {
        let attrs = &mut self.node_mut(node).attributes;
        if let Some(existing) = attrs.iter_mut().find(|a| a.is(namespace, name)) {
            value.clone_into(&mut existing.value);
        } else {
            attrs.push(Attribute {
                namespace: namespace.to_owned(),
                name: name.to_owned(),
                prefix: prefix
                    .filter(|_| !namespace.is_empty())
                    .map(ToOwned::to_owned),
                value: value.to_owned(),
            });
        }
    }

    /// Remove the unqualified attribute `name` from `node`, returning its old value.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        let attrs = &mut self.node_mut(node).attributes;
        let pos = attrs.iter().position(|a| a.is("", name))?;
        Some(attrs.remove(pos).value)
    }

    // -----------------------------------------------------------------------
    // Cross-tree copies
    // -----------------------------------------------------------------------

    /// Deep-copy the subtree at `node` of `source` into this document.
    ///
    /// The copy is detached; later changes to `source` do not affect it.
    pub fn import_subtree(&mut self, source: &Document, node: NodeId) -> NodeId {
        let copy = self.push_node(source.node(node).shallow_copy());
        let mut pending = vec![(node, copy)];
        while let Some((from, to)) = pending.pop() {
            for &child in source.children(from) {
                let child_copy = self.push_node(source.node(child).shallow_copy());
                self.attach_copy(to, child_copy);
                pending.push((child, child_copy));
            }
        }
        copy
    }

    /// Deep-copy the subtree at `node` within this document.
    ///
    /// Like every other detached element, the copy and anything later removed
    /// from it stay in the arena until the document is dropped. A long-lived
    /// view that keeps replacing groups grows its document accordingly;
    /// re-parsing its serialized form yields a compact one.
    pub fn duplicate_subtree(&mut self, node: NodeId) -> NodeId {
        let copy = self.push_node(self.node(node).shallow_copy());
        let mut pending = vec![(node, copy)];
        while let Some((from, to)) = pending.pop() {
            let children = self.children(from).to_vec();
            for child in children {
                let child_copy = self.push_node(self.node(child).shallow_copy());
                self.attach_copy(to, child_copy);
                pending.push((child, child_copy));
            }
        }
        copy
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Link a fresh copy under `parent` without the cycle check of `append_child`.
    fn attach_copy(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }
}

/// Iterator over the descendants of an element. See [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(next).iter().rev().copied());
        Some(next)
    }
}
