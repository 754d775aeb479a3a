//! The Content API client.
//!
//! [`ContentClient`] glues the pieces together: it builds resource URIs,
//! serializes views into request bodies, sends them through a [`Transport`]
//! with the login token attached, and parses whatever comes back with the
//! dispatcher matching the endpoint. Bodies are parsed regardless of status,
//! so server-side failures surface as `Errors(ErrorList)` data.

use contentstack_auth::{AuthToken, client_login};
use contentstack_http::{HttpResponse, ReqwestTransport, Transport};
use contentstack_model::{
    AccountDocument, AtomModel, BatchOperation, Datafeed, DatafeedDocument, EntryModel,
    ManagedAccount, ModelResult, Product, ProductDocument, ProductList, parse, parse_datafeeds,
    parse_managed_accounts,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::uri::{Query, ResourceUris};

/// A client for one merchant account.
///
/// # Examples
///
/// ```
/// use contentstack_core::{ClientConfig, ClientError, ContentClient};
/// use contentstack_http::RecordingTransport;
///
/// let client = ContentClient::new("1234", ClientConfig::default(), RecordingTransport::new());
/// assert!(matches!(client.get_products(None, None), Err(ClientError::Unauthenticated)));
/// ```
#[derive(Debug)]
pub struct ContentClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
    uris: ResourceUris,
    token: Option<AuthToken>,
}

impl ContentClient<ReqwestTransport> {
    /// A client talking to the configured endpoints over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the HTTP client cannot be built.
    pub fn connect(merchant_id: impl Into<String>, config: ClientConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(&config.user_agent, config.timeout())?;
        Ok(Self::new(merchant_id, config, transport))
    }
}

impl<T: Transport> ContentClient<T> {
    /// A client sending requests through `transport`.
    pub fn new(merchant_id: impl Into<String>, config: ClientConfig, transport: T) -> Self {
        let uris = ResourceUris::new(config.base_uri.clone(), merchant_id);
        Self {
            transport,
            config,
            uris,
            token: None,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resource URIs of this merchant.
    #[must_use]
    pub fn uris(&self) -> &ResourceUris {
        &self.uris
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -----------------------------------------------------------------------
    // Authentication
    // -----------------------------------------------------------------------

    /// Log in with ClientLogin and keep the token.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Auth` if the exchange fails or is rejected.
    pub fn login(&mut self, email: &str, password: &str) -> ClientResult<()> {
        let token = client_login(&self.transport, &self.config.login_params(), email, password)?;
        self.token = Some(token);
        Ok(())
    }

    /// Use a token obtained elsewhere.
    pub fn set_token(&mut self, token: AuthToken) {
        self.token = Some(token);
    }

    /// Whether a token is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unauthenticated` if no token is set.
    pub fn token_header(&self) -> ClientResult<String> {
        self.token
            .as_ref()
            .map(AuthToken::header_value)
            .ok_or(ClientError::Unauthenticated)
    }

    // -----------------------------------------------------------------------
    // Products
    // -----------------------------------------------------------------------

    /// List products, one page at a time.
    ///
    /// Pass the previous page's [`start_token`] to fetch the next one.
    ///
    /// [`start_token`]: contentstack_model::FeedModel::start_token
    pub fn get_products(
        &self,
        max_results: Option<u32>,
        start_token: Option<&str>,
    ) -> ClientResult<ProductDocument> {
        let query = Query::new()
            .param("max-results", max_results)
            .param("start-token", start_token.filter(|t| !t.is_empty()));
        self.get(&query.apply(&self.uris.feed_uri()), parse)
    }

    /// Fetch one product.
    pub fn get_product(
        &self,
        id: &str,
        country: &str,
        language: &str,
    ) -> ClientResult<ProductDocument> {
        self.get(&self.uris.product_uri(id, country, language), parse)
    }

    /// Insert a product.
    pub fn insert_product(&self, product: &Product) -> ClientResult<ProductDocument> {
        self.post(&self.uris.feed_uri(), product, parse)
    }

    /// Replace a product through its edit link.
    pub fn update_product(&self, product: &Product) -> ClientResult<ProductDocument> {
        self.put(product, parse)
    }

    /// Delete a product through its edit link.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::DeleteFailed` if the server answers anything but 200.
    pub fn delete_product(&self, product: &Product) -> ClientResult<()> {
        self.delete(product)
    }

    /// Send a batch feed as-is.
    pub fn batch(&self, products: &ProductList) -> ClientResult<ProductDocument> {
        self.post(&self.uris.batch_uri(), products, parse)
    }

    /// Insert `products` in one batch request.
    pub fn batch_insert_products(&self, products: &[Product]) -> ClientResult<ProductDocument> {
        self.batch(&batch_feed(products, BatchOperation::Insert))
    }

    /// Update `products` in one batch request.
    pub fn batch_update_products(&self, products: &[Product]) -> ClientResult<ProductDocument> {
        self.batch(&batch_feed(products, BatchOperation::Update))
    }

    /// Delete `products` in one batch request.
    ///
    /// Each product is addressed by its `atom:id`, or by the URI built from its
    /// SKU, target country and content language when it has none.
    pub fn batch_delete_products(&self, products: &[Product]) -> ClientResult<ProductDocument> {
        let mut feed = ProductList::create();
        for (index, product) in products.iter().enumerate() {
            let mut id = product.atom_id();
            if id.is_empty() {
                id = self.uris.product_uri(
                    &product.sku(),
                    &product.target_country(),
                    &product.content_language(),
                );
            }
            let mut entry = Product::create();
            entry.set_atom_id(&id);
            entry.set_batch_operation(BatchOperation::Delete);
            entry.set_batch_id(&index.to_string());
            feed.add_product(&entry);
        }
        self.batch(&feed)
    }

    // -----------------------------------------------------------------------
    // Managed accounts
    // -----------------------------------------------------------------------

    /// List managed accounts.
    pub fn get_accounts(
        &self,
        max_results: Option<u32>,
        start_index: Option<u32>,
    ) -> ClientResult<AccountDocument> {
        let query = Query::new()
            .param("max-results", max_results)
            .param("start-index", start_index);
        self.get(
            &query.apply(&self.uris.managed_accounts_uri(None)),
            parse_managed_accounts,
        )
    }

    /// Fetch one managed account.
    pub fn get_account(&self, account_id: &str) -> ClientResult<AccountDocument> {
        self.get(
            &self.uris.managed_accounts_uri(Some(account_id)),
            parse_managed_accounts,
        )
    }

    /// Create a managed account.
    pub fn insert_account(&self, account: &ManagedAccount) -> ClientResult<AccountDocument> {
        self.post(
            &self.uris.managed_accounts_uri(None),
            account,
            parse_managed_accounts,
        )
    }

    /// Replace a managed account through its edit link.
    pub fn update_account(&self, account: &ManagedAccount) -> ClientResult<AccountDocument> {
        self.put(account, parse_managed_accounts)
    }

    /// Delete a managed account through its edit link.
    pub fn delete_account(&self, account: &ManagedAccount) -> ClientResult<()> {
        self.delete(account)
    }

    // -----------------------------------------------------------------------
    // Datafeeds
    // -----------------------------------------------------------------------

    /// List datafeeds.
    pub fn get_datafeeds(&self) -> ClientResult<DatafeedDocument> {
        self.get(&self.uris.datafeeds_uri(None), parse_datafeeds)
    }

    /// Fetch one datafeed.
    pub fn get_datafeed(&self, datafeed_id: &str) -> ClientResult<DatafeedDocument> {
        self.get(&self.uris.datafeeds_uri(Some(datafeed_id)), parse_datafeeds)
    }

    /// Register a datafeed.
    pub fn insert_datafeed(&self, datafeed: &Datafeed) -> ClientResult<DatafeedDocument> {
        self.post(&self.uris.datafeeds_uri(None), datafeed, parse_datafeeds)
    }

    /// Replace a datafeed through its edit link.
    pub fn update_datafeed(&self, datafeed: &Datafeed) -> ClientResult<DatafeedDocument> {
        self.put(datafeed, parse_datafeeds)
    }

    /// Delete a datafeed through its edit link.
    pub fn delete_datafeed(&self, datafeed: &Datafeed) -> ClientResult<()> {
        self.delete(datafeed)
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    /// Flags appended to every write.
    fn write_query(&self) -> Query {
        Query::new()
            .flag("warnings", self.config.warnings)
            .flag("dry-run", self.config.dry_run)
    }

    fn get<D>(&self, uri: &str, parse: fn(&str) -> ModelResult<D>) -> ClientResult<D> {
        let auth = self.token_header()?;
        let response = self.transport.get(uri, &auth)?;
        parse_response(&response, parse)
    }

    fn post<M: AtomModel, D>(
        &self,
        uri: &str,
        model: &M,
        parse: fn(&str) -> ModelResult<D>,
    ) -> ClientResult<D> {
        let auth = self.token_header()?;
        let body = request_body(model)?;
        let response = self
            .transport
            .post(&self.write_query().apply(uri), &body, &auth)?;
        parse_response(&response, parse)
    }

    fn put<M: EntryModel, D>(
        &self,
        entry: &M,
        parse: fn(&str) -> ModelResult<D>,
    ) -> ClientResult<D> {
        let auth = self.token_header()?;
        let uri = edit_link(entry)?;
        let body = request_body(entry)?;
        let response = self
            .transport
            .put(&self.write_query().apply(&uri), &body, &auth)?;
        parse_response(&response, parse)
    }

    fn delete<M: EntryModel>(&self, entry: &M) -> ClientResult<()> {
        let auth = self.token_header()?;
        let uri = edit_link(entry)?;
        let response = self
            .transport
            .delete(&self.write_query().apply(&uri), &auth)?;
        if response.is_ok() {
            return Ok(());
        }
        tracing::warn!(uri = %uri, status = %response.status, "delete request failed");
        Err(ClientError::DeleteFailed {
            status: response.status.as_u16(),
        })
    }
}

/// Copy `products` into a fresh batch feed, tagging each with `operation`.
fn batch_feed(products: &[Product], operation: BatchOperation) -> ProductList {
    let mut feed = ProductList::create();
    for (index, product) in products.iter().enumerate() {
        let mut entry = feed.add_product(product);
        entry.set_batch_operation(operation);
        if entry.batch_id().is_empty() {
            entry.set_batch_id(&index.to_string());
        }
    }
    feed
}

fn edit_link<M: EntryModel>(entry: &M) -> ClientResult<String> {
    let link = entry.edit_link();
    if link.is_empty() {
        return Err(ClientError::MissingEditLink);
    }
    Ok(link)
}

fn request_body<M: AtomModel>(model: &M) -> ClientResult<String> {
    model.to_xml().map_err(|err| {
        tracing::error!(error = %err, "failed to serialize request body");
        ClientError::Xml(err)
    })
}

fn parse_response<D>(
    response: &HttpResponse,
    parse: fn(&str) -> ModelResult<D>,
) -> ClientResult<D> {
    tracing::debug!(status = %response.status, "parsing response body");
    Ok(parse(&response.body)?)
}
