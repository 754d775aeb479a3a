//! Product CRUD and batch integration tests.

#[cfg(test)]
mod tests {
    use contentstack_model::{BatchOperation, EntryModel, FeedModel, ProductDocument};

    use crate::{live_client, sample_product, test_sku};

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_list_products() {
        let client = live_client().expect("live client");

        let doc = client.get_products(Some(5), None).expect("get_products");
        let ProductDocument::List(list) = doc else {
            panic!("expected a product feed, got {doc:?}");
        };
        assert!(list.products().len() <= 5);

        let token = list.start_token();
        if !token.is_empty() {
            let next = client
                .get_products(Some(5), Some(&token))
                .expect("second page");
            assert!(matches!(next, ProductDocument::List(_)));
        }
    }

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_insert_product() {
        let client = live_client().expect("live client");
        let sku = test_sku("insert");

        let doc = client
            .insert_product(&sample_product(&sku))
            .expect("insert_product");
        let ProductDocument::Product(inserted) = doc else {
            panic!("expected the inserted product, got {doc:?}");
        };
        assert_eq!(inserted.sku(), sku);
        assert_eq!(inserted.price(), "25");
        assert!(!inserted.edit_link().is_empty());
    }

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_report_missing_required_fields() {
        let client = live_client().expect("live client");
        let mut product = sample_product(&test_sku("invalid"));
        product.set_title("");

        let doc = client.insert_product(&product).expect("insert_product");
        let ProductDocument::Errors(errors) = doc else {
            panic!("expected errors, got {doc:?}");
        };
        assert!(!errors.is_empty());
    }

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_batch_insert_products() {
        let client = live_client().expect("live client");
        let products = [
            sample_product(&test_sku("batch")),
            sample_product(&test_sku("batch")),
        ];

        let doc = client
            .batch_insert_products(&products)
            .expect("batch_insert_products");
        let ProductDocument::List(results) = doc else {
            panic!("expected a batch feed, got {doc:?}");
        };
        let entries = results.products();
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert_eq!(entry.batch_operation(), Some(BatchOperation::Insert));
            let status = entry.batch_status().expect("batch status");
            assert!(status.is_success(), "{status:?}");
        }
    }
}
