//! XML text to [`Document`].
//!
//! Namespace resolution is done here rather than by quick-xml so that every
//! declaration is kept on the element that carried it; the writer relies on
//! that to reproduce the payload with the same prefixes.

use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::document::{Document, NamespaceDecl, NodeId};
use crate::error::{XmlError, XmlResult};
use crate::ns::XML_NAMESPACE;

/// In-scope namespace bindings, innermost last.
#[derive(Debug, Default)]
struct Scopes {
    frames: Vec<Vec<NamespaceDecl>>,
}

impl Scopes {
    fn push(&mut self, decls: Vec<NamespaceDecl>) {
        self.frames.push(decls);
    }

    fn pop(&mut self) {
        self.frames.pop();
    }

    fn resolve(&self, prefix: Option<&str>) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|d| d.prefix.as_deref() == prefix)
            .map(|d| d.uri.as_str())
    }

    fn resolve_prefixed(&self, prefix: &str) -> XmlResult<String> {
        if prefix == "xml" {
            return Ok(XML_NAMESPACE.to_owned());
        }
        self.resolve(Some(prefix))
            .map(ToOwned::to_owned)
            .ok_or_else(|| XmlError::UnboundPrefix(prefix.to_owned()))
    }
}

/// Open element being filled in.
#[derive(Debug)]
struct Open {
    id: NodeId,
    text: String,
}

pub(crate) fn parse(xml: &str) -> XmlResult<Document> {
    let mut reader = Reader::from_str(xml);
    let mut doc: Option<Document> = None;
    let mut stack: Vec<Open> = Vec::new();
    let mut scopes = Scopes::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let id = open_element(&mut doc, &stack, &mut scopes, &e)?;
                stack.push(Open {
                    id,
                    text: String::new(),
                });
            }
            Event::Empty(e) => {
                open_element(&mut doc, &stack, &mut scopes, &e)?;
                scopes.pop();
            }
            Event::End(_) => {
                if let (Some(open), Some(doc)) = (stack.pop(), doc.as_mut()) {
                    close_element(doc, &open);
                }
                scopes.pop();
            }
            Event::Text(t) => {
                if let Some(open) = stack.last_mut() {
                    let decoded = t
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let unescaped =
                        unescape(&decoded).map_err(|err| XmlError::ParseError(err.to_string()))?;
                    open.text.push_str(&unescaped);
                }
            }
            Event::CData(c) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::GeneralRef(r) => {
                if let Some(open) = stack.last_mut() {
                    push_reference(&mut open.text, &r)?;
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions and doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        let name = doc
            .as_ref()
            .map(|d| d.local_name(open.id).to_owned())
            .unwrap_or_default();
        return Err(XmlError::UnexpectedEof(name));
    }
    doc.ok_or(XmlError::MissingRoot)
}

fn open_element(
    doc: &mut Option<Document>,
    stack: &[Open],
    scopes: &mut Scopes,
    start: &BytesStart<'_>,
) -> XmlResult<NodeId> {
    let raw_name = std::str::from_utf8(start.name().as_ref())?.to_owned();
    let (prefix, local) = match raw_name.split_once(':') {
        Some((p, l)) => (Some(p.to_owned()), l.to_owned()),
        None => (None, raw_name.clone()),
    };

    let mut declarations = Vec::new();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw_value = std::str::from_utf8(&attr.value)?;
        let value = unescape(raw_value)
            .map_err(|err| XmlError::ParseError(err.to_string()))?
            .into_owned();
        if key == "xmlns" {
            declarations.push(NamespaceDecl::new(None, value));
        } else if let Some(p) = key.strip_prefix("xmlns:") {
            declarations.push(NamespaceDecl::new(Some(p), value));
        } else {
            attributes.push((key.to_owned(), value));
        }
    }
    scopes.push(declarations.clone());

    let namespace = match prefix.as_deref() {
        Some(p) => scopes.resolve_prefixed(p)?,
        None => scopes.resolve(None).unwrap_or_default().to_owned(),
    };
    // The default namespace never applies to attributes.
    let attributes = attributes
        .into_iter()
        .map(|(key, value)| match key.split_once(':') {
            Some((p, local)) => Ok((
                scopes.resolve_prefixed(p)?,
                Some(p.to_owned()),
                local.to_owned(),
                value,
            )),
            None => Ok((String::new(), None, key, value)),
        })
        .collect::<XmlResult<Vec<_>>>()?;

    let parent = stack.last().map(|open| open.id);
    if doc.is_some() && parent.is_none() {
        return Err(XmlError::MultipleRoots(raw_name));
    }
    let doc = doc.get_or_insert_with(|| Document::new(&namespace, &local));

    let id = match parent {
        Some(parent) => {
            let id = doc.create_element(&namespace, &local);
            doc.append_child(parent, id);
            id
        }
        None => doc.root(),
    };
    doc.set_prefix(id, prefix.as_deref());
    for decl in declarations {
        doc.declare_namespace(id, decl.prefix.as_deref(), &decl.uri);
    }
    for (uri, prefix, name, value) in attributes {
        doc.set_attribute_ns(id, &uri, prefix.as_deref(), &name, &value);
    }
    Ok(id)
}

fn close_element(doc: &mut Document, open: &Open) {
    // Whitespace-only runs are formatting, not content.
    if !open.text.trim().is_empty() {
        doc.push_text(open.id, &open.text);
    }
}

fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> XmlResult<()> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|err| XmlError::ParseError(err.to_string()))?
    {
        text.push(ch);
        return Ok(());
    }
    let name = reference
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    let resolved =
        resolve_predefined_entity(&name).ok_or_else(|| XmlError::UnknownEntity(name.to_string()))?;
    text.push_str(resolved);
    Ok(())
}
