//! Datafeed registrations.
//!
//! A datafeed tells the API where a bulk product file comes from and how to
//! read it. Processing status is filled in by the server and is read-only here.

use contentstack_atom::{AtomElement, NodeId, Tag};

use crate::common;
use crate::model::{AtomModel, EntryModel, FeedModel};

/// How the uploaded file is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileFormat {
    /// The `format` attribute, e.g. `dsv` or `auto`.
    pub format: String,
    /// Field delimiter, e.g. `tab`.
    pub delimiter: String,
    /// Character encoding, e.g. `utf-8`.
    pub encoding: String,
    /// Whether fields are quoted, `yes` or `no`.
    pub use_quoted_fields: String,
}

/// One destination the feed's products are published to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDestination {
    /// Destination name, e.g. `ProductSearch`.
    pub dest: String,
    /// Whether publishing to the destination is enabled.
    pub enabled: bool,
}

/// A datafeed entry.
#[derive(Debug, Clone)]
pub struct Datafeed {
    element: AtomElement,
}

impl_atom_model!(Datafeed, Entry, [Atom, App, Sc, Batch]);

impl EntryModel for Datafeed {}

impl Datafeed {
    text_fields! {
        TargetCountry => target_country, set_target_country;
        ContentLanguage => content_language, set_content_language;
        AttributeLanguage => attribute_language, set_attribute_language;
        FeedFileName => feed_file_name, set_feed_file_name;
        FeedType => feed_type, set_feed_type;
    }

    /// Numeric datafeed id, the last path segment of the `atom:id`.
    #[must_use]
    pub fn datafeed_id(&self) -> String {
        common::last_segment(&self.atom_id())
    }

    /// The file layout, if one is set.
    #[must_use]
    pub fn file_format(&self) -> Option<FileFormat> {
        let el = &self.element;
        let node = el.first(Tag::FileFormat)?;
        Some(FileFormat {
            format: el.attribute(node, "format"),
            delimiter: el.first_value_in(node, Tag::Delimiter),
            encoding: el.first_value_in(node, Tag::Encoding),
            use_quoted_fields: el.first_value_in(node, Tag::UseQuotedFields),
        })
    }

    /// Replace the file layout.
    pub fn set_file_format(&mut self, file_format: &FileFormat) -> NodeId {
        let el = &self.element;
        el.delete_all(Tag::FileFormat);
        let node = el.create(Tag::FileFormat, None);
        el.set_attribute(node, "format", &file_format.format);
        for (tag, value) in [
            (Tag::Delimiter, &file_format.delimiter),
            (Tag::Encoding, &file_format.encoding),
            (Tag::UseQuotedFields, &file_format.use_quoted_fields),
        ] {
            if !value.is_empty() {
                el.set_first_value_in(node, tag, value);
            }
        }
        el.append_to_model(node);
        node
    }

    /// Enable or disable publishing to `dest`.
    pub fn set_feed_destination(&mut self, dest: &str, enabled: bool) -> NodeId {
        let el = &self.element;
        let node = el
            .all(Tag::FeedDestination)
            .into_iter()
            .find(|&node| el.attribute(node, "dest") == dest)
            .unwrap_or_else(|| {
                let node = el.create(Tag::FeedDestination, None);
                el.set_attribute(node, "dest", dest);
                el.append_to_model(node);
                node
            });
        el.set_attribute(node, "enabled", if enabled { "true" } else { "false" });
        node
    }

    /// Every destination in document order.
    #[must_use]
    pub fn feed_destinations(&self) -> Vec<FeedDestination> {
        let el = &self.element;
        el.all(Tag::FeedDestination)
            .into_iter()
            .map(|node| FeedDestination {
                dest: el.attribute(node, "dest"),
                enabled: el.attribute(node, "enabled") == "true",
            })
            .collect()
    }

    /// Processing status reported by the server, or `""`.
    #[must_use]
    pub fn processing_status(&self) -> String {
        self.element.first_value(Tag::ProcessingStatus)
    }
}

/// A feed of datafeeds.
#[derive(Debug, Clone)]
pub struct DatafeedList {
    element: AtomElement,
}

impl_atom_model!(DatafeedList, Feed, [Atom, App, Sc, Batch, OpenSearch]);

impl FeedModel for DatafeedList {
    type Entry = Datafeed;
}

impl DatafeedList {
    /// Deep-copy `datafeed` into the feed.
    pub fn add_datafeed(&mut self, datafeed: &Datafeed) -> Datafeed {
        self.add_entry(datafeed)
    }

    /// Every datafeed of the feed, sharing this feed's document.
    #[must_use]
    pub fn datafeeds(&self) -> Vec<Datafeed> {
        self.entries()
    }
}
