//! [`Document`] subtree to XML text.
//!
//! Output is pretty-printed with two-space indentation and carries no XML
//! declaration. Namespace declarations are emitted once, on the outermost
//! element that needs them; a subtree serialized on its own inherits the
//! declarations of its ancestors.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::document::{Attribute, Document, NamespaceDecl, NodeId};
use crate::error::{XmlError, XmlResult};
use crate::ns::{Namespace, XML_NAMESPACE};

/// Namespace bindings already written to the output, innermost last.
#[derive(Debug, Default)]
struct Scopes {
    frames: Vec<Vec<NamespaceDecl>>,
}

impl Scopes {
    fn resolve(&self, prefix: Option<&str>) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|d| d.prefix.as_deref() == prefix)
            .map(|d| d.uri.as_str())
    }

    /// A prefix currently bound to `uri` and not shadowed by an inner binding.
    fn prefix_for(&self, uri: &str) -> Option<Option<String>> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .filter(|d| d.uri == uri)
            .find(|d| self.resolve(d.prefix.as_deref()) == Some(uri))
            .map(|d| d.prefix.clone())
    }

    /// Like [`prefix_for`](Self::prefix_for), but never the default namespace.
    fn named_prefix_for(&self, uri: &str) -> Option<String> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .filter(|d| d.uri == uri)
            .filter_map(|d| d.prefix.as_deref())
            .find(|p| self.resolve(Some(p)) == Some(uri))
            .map(ToOwned::to_owned)
    }

    fn is_bound(&self, prefix: Option<&str>) -> bool {
        self.resolve(prefix).is_some()
    }

    fn current(&mut self) -> &mut Vec<NamespaceDecl> {
        if self.frames.is_empty() {
            self.frames.push(Vec::new());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

pub(crate) fn write(doc: &Document, node: NodeId) -> XmlResult<String> {
    let mut writer = Writer::new_with_indent(Vec::with_capacity(1024), b' ', 2);
    let mut scopes = Scopes::default();
    let inherited = inherited_declarations(doc, node);
    write_element(doc, node, &mut writer, &mut scopes, inherited)?;
    String::from_utf8(writer.into_inner()).map_err(|err| XmlError::ParseError(err.to_string()))
}

/// Declarations in scope at `node` from its ancestors, outermost first.
fn inherited_declarations(doc: &Document, node: NodeId) -> Vec<NamespaceDecl> {
    let mut chain = Vec::new();
    let mut current = doc.parent(node);
    while let Some(id) = current {
        chain.push(id);
        current = doc.parent(id);
    }
    let mut decls: Vec<NamespaceDecl> = Vec::new();
    for id in chain.into_iter().rev() {
        for decl in doc.declarations(id) {
            decls.retain(|d| d.prefix != decl.prefix);
            decls.push(decl.clone());
        }
    }
    decls
}

fn write_element<W: Write>(
    doc: &Document,
    node: NodeId,
    writer: &mut Writer<W>,
    scopes: &mut Scopes,
    inherited: Vec<NamespaceDecl>,
) -> XmlResult<()> {
    let mut frame = inherited;
    for decl in doc.declarations(node) {
        frame.retain(|d| d.prefix != decl.prefix);
        frame.push(decl.clone());
    }
    frame.retain(|d| scopes.resolve(d.prefix.as_deref()) != Some(d.uri.as_str()));
    scopes.frames.push(frame);

    let name = qualified_name(doc, node, scopes);
    let attributes: Vec<(String, &str)> = doc
        .attributes(node)
        .iter()
        .map(|attr| (attribute_name(attr, scopes), attr.value.as_str()))
        .collect();

    let mut start = BytesStart::new(name.clone());
    for decl in scopes.current().iter() {
        let key = match &decl.prefix {
            Some(p) => format!("xmlns:{p}"),
            None => "xmlns".to_owned(),
        };
        start.push_attribute((key.as_str(), decl.uri.as_str()));
    }
    for (key, value) in &attributes {
        start.push_attribute((key.as_str(), *value));
    }

    let text = &doc.node(node).text;
    let children = doc.children(node);
    if text.is_empty() && children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        if !text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for &child in children {
            write_element(doc, child, writer, scopes, Vec::new())?;
        }
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }

    scopes.frames.pop();
    Ok(())
}

/// Pick the name `node` is written under, declaring its namespace in the
/// current frame when nothing in scope binds it.
fn qualified_name(doc: &Document, node: NodeId, scopes: &mut Scopes) -> String {
    let uri = doc.namespace(node);
    let local = doc.local_name(node);

    if uri.is_empty() {
        if scopes.resolve(None).is_some_and(|d| !d.is_empty()) {
            scopes.current().push(NamespaceDecl::new(None, ""));
        }
        return local.to_owned();
    }

    let hint = doc.prefix(node);
    if scopes.resolve(hint) == Some(uri) {
        return join(hint, local);
    }
    if let Some(prefix) = scopes.prefix_for(uri) {
        return join(prefix.as_deref(), local);
    }

    let prefix = choose_prefix(uri, hint, scopes);
    scopes.current().push(NamespaceDecl::new(prefix.as_deref(), uri));
    join(prefix.as_deref(), local)
}

/// Pick the name `attr` is written under. A qualified attribute always needs a
/// prefix, since the default namespace does not apply to attributes.
fn attribute_name(attr: &Attribute, scopes: &mut Scopes) -> String {
    let uri = attr.namespace.as_str();
    if uri.is_empty() {
        return attr.name.clone();
    }
    if uri == XML_NAMESPACE {
        return join(Some("xml"), &attr.name);
    }

    let hint = attr.prefix.as_deref();
    if hint.is_some() && scopes.resolve(hint) == Some(uri) {
        return join(hint, &attr.name);
    }
    if let Some(prefix) = scopes.named_prefix_for(uri) {
        return join(Some(&prefix), &attr.name);
    }

    let prefix = match hint {
        Some(p) if !scopes.is_bound(Some(p)) => p.to_owned(),
        _ => fresh_prefix(uri, scopes),
    };
    scopes.current().push(NamespaceDecl::new(Some(&prefix), uri));
    join(Some(&prefix), &attr.name)
}

fn choose_prefix(uri: &str, hint: Option<&str>, scopes: &Scopes) -> Option<String> {
    if !scopes.is_bound(hint) {
        return hint.map(ToOwned::to_owned);
    }
    Some(fresh_prefix(uri, scopes))
}

/// The conventional prefix of `uri` if free, otherwise the first free `nsN`.
fn fresh_prefix(uri: &str, scopes: &Scopes) -> String {
    if let Some(ns) = Namespace::from_uri(uri) {
        if !scopes.is_bound(Some(ns.prefix())) {
            return ns.prefix().to_owned();
        }
    }
    let mut n = 0;
    loop {
        let prefix = format!("ns{n}");
        if !scopes.is_bound(Some(&prefix)) {
            return prefix;
        }
        n += 1;
    }
}

fn join(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(p) => format!("{p}:{local}"),
        None => local.to_owned(),
    }
}
