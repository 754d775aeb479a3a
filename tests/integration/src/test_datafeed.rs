//! Datafeed integration tests.

#[cfg(test)]
mod tests {
    use contentstack_model::{AtomModel, Datafeed, DatafeedDocument, EntryModel, FileFormat};

    use crate::{live_client, test_sku};

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_list_datafeeds() {
        let client = live_client().expect("live client");

        let doc = client.get_datafeeds().expect("get_datafeeds");
        let DatafeedDocument::List(list) = doc else {
            panic!("expected a datafeed feed, got {doc:?}");
        };
        for datafeed in list.datafeeds() {
            assert!(!datafeed.datafeed_id().is_empty());
        }
    }

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_insert_datafeed() {
        let client = live_client().expect("live client");
        let name = test_sku("feed");

        let mut datafeed = Datafeed::create();
        datafeed.set_title(&name);
        datafeed.set_target_country("US");
        datafeed.set_content_language("en");
        datafeed.set_attribute_language("en");
        datafeed.set_feed_file_name(&format!("{name}.txt"));
        datafeed.set_file_format(&FileFormat {
            format: "dsv".to_owned(),
            delimiter: "tab".to_owned(),
            encoding: "utf-8".to_owned(),
            use_quoted_fields: "no".to_owned(),
        });

        let doc = client.insert_datafeed(&datafeed).expect("insert_datafeed");
        let DatafeedDocument::Datafeed(inserted) = doc else {
            panic!("expected the inserted datafeed, got {doc:?}");
        };
        assert_eq!(inserted.title(), name);
    }
}
