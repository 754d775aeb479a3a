//! Server-reported errors.
//!
//! The API reports request failures as a `gd:errors` document rather than
//! through the status code alone. Batch responses embed the same structure in
//! each failed entry. Both are surfaced as data, never as `Err`.

use contentstack_atom::{AtomElement, Tag};

use crate::model::AtomModel;

/// Content type of `atom:content` holding embedded batch errors.
pub const ERROR_CONTENT_TYPE: &str = "application/vnd.google.gdata.error+xml";

/// One `gd:error`.
#[derive(Debug, Clone)]
pub struct ErrorElement {
    element: AtomElement,
}

impl_atom_model!(ErrorElement, Error, [Gd]);

impl ErrorElement {
    text_fields! {
        ErrorDomain => domain, set_domain;
        ErrorCode => code, set_code;
        ErrorLocation => location, set_location;
        InternalReason => internal_reason, set_internal_reason;
        DebugInfo => debug_info, set_debug_info;
    }

    /// The `type` attribute of the location, e.g. `header` or `xpath`.
    #[must_use]
    pub fn location_type(&self) -> String {
        self.element.first_attribute(Tag::ErrorLocation, "type")
    }

    /// Set the location and its type together.
    pub fn set_location_with_type(&mut self, location: &str, location_type: &str) {
        let node = self.element.set_first_value(Tag::ErrorLocation, location);
        self.element.set_attribute(node, "type", location_type);
    }
}

/// A `gd:errors` document.
#[derive(Debug, Clone)]
pub struct ErrorList {
    element: AtomElement,
}

impl_atom_model!(ErrorList, Errors, [Gd]);

impl ErrorList {
    /// Every error, sharing this list's document.
    #[must_use]
    pub fn errors(&self) -> Vec<ErrorElement> {
        self.element
            .all(Tag::Error)
            .into_iter()
            .map(|node| ErrorElement::from_element(self.element.at(node)))
            .collect()
    }

    /// Deep-copy `error` into this list and return a view of the copy.
    pub fn add_error(&mut self, error: &ErrorElement) -> ErrorElement {
        let copy = self.element.import(error.element());
        self.element.append_to_model(copy);
        ErrorElement::from_element(self.element.at(copy))
    }

    /// Whether the list holds no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element.first(Tag::Error).is_none()
    }
}
