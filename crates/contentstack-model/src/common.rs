//! Field helpers shared by more than one entry view.

use contentstack_atom::{AtomElement, NodeId, Tag};

use crate::errors::ERROR_CONTENT_TYPE;

/// First `atom:content` that is not embedded batch error content.
fn description_node(el: &AtomElement) -> Option<NodeId> {
    el.all(Tag::Content)
        .into_iter()
        .find(|&c| el.attribute(c, "type") != ERROR_CONTENT_TYPE)
}

pub(crate) fn description(el: &AtomElement) -> String {
    description_node(el)
        .map(|node| el.text(node))
        .unwrap_or_default()
}

pub(crate) fn set_description(el: &AtomElement, text: &str) {
    let node = description_node(el).unwrap_or_else(|| {
        let node = el.create(Tag::Content, None);
        el.append_to_model(node);
        node
    });
    el.set_text(node, text);
    el.set_attribute(node, "type", "text");
}

/// Href of the `rel="alternate"` link, or `""`.
pub(crate) fn alternate_link(el: &AtomElement) -> String {
    el.link("alternate")
        .map(|link| el.attribute(link, "href"))
        .unwrap_or_default()
}

/// Point the alternate link at `href`, creating it as an HTML link if absent.
pub(crate) fn set_alternate_link(el: &AtomElement, href: &str) {
    if let Some(link) = el.link("alternate") {
        el.set_attribute(link, "href", href);
        return;
    }
    let link = el.create(Tag::Link, None);
    el.set_attribute(link, "href", href);
    el.set_attribute(link, "rel", "alternate");
    el.set_attribute(link, "type", "text/html");
    el.append_to_model(link);
}

/// Last path segment of a resource URI.
pub(crate) fn last_segment(uri: &str) -> String {
    uri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_owned()
}

/// `dest` attributes of every `tag` element under the model.
pub(crate) fn destinations(el: &AtomElement, tag: Tag) -> Vec<String> {
    el.all(tag)
        .into_iter()
        .map(|node| el.attribute(node, "dest"))
        .collect()
}
