//! Managed account integration tests.
//!
//! Only multi-client accounts may list sub-accounts; other accounts get an
//! `errors` document back, which is still a successful round-trip.

#[cfg(test)]
mod tests {
    use contentstack_model::AccountDocument;

    use crate::live_client;

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_list_managed_accounts() {
        let client = live_client().expect("live client");

        let doc = client
            .get_accounts(Some(10), Some(1))
            .expect("get_accounts");
        match doc {
            AccountDocument::List(list) => assert!(list.accounts().len() <= 10),
            AccountDocument::Errors(errors) => assert!(!errors.is_empty()),
            AccountDocument::Account(account) => panic!("unexpected entry {account:?}"),
        }
    }
}
