//! Integration tests against the live Content API for Shopping.
//!
//! These tests need a merchant account and its login credentials, read from
//! `CONTENT_API_MERCHANT_ID`, `CONTENT_API_EMAIL` and `CONTENT_API_PASSWORD`.
//! Every write is sent with `dry-run` unless `CONTENT_API_DRY_RUN=false` is
//! set explicitly. They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p contentstack-integration -- --ignored
//! ```

use std::sync::Once;

use anyhow::Context as _;
use contentstack_core::{ClientConfig, ContentClient};
use contentstack_model::{AtomModel, EntryModel, Product};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

fn required_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

/// Configuration for the live tests: values from the environment, with
/// `dry-run` on unless explicitly disabled.
#[must_use]
pub fn live_config() -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if std::env::var("CONTENT_API_DRY_RUN").is_err() {
        config.dry_run = true;
    }
    config
}

/// A logged-in client for the configured merchant.
pub fn live_client() -> anyhow::Result<ContentClient> {
    init_tracing();

    let merchant_id = required_env("CONTENT_API_MERCHANT_ID")?;
    let email = required_env("CONTENT_API_EMAIL")?;
    let password = required_env("CONTENT_API_PASSWORD")?;

    let mut client = ContentClient::connect(merchant_id, live_config())?;
    client.login(&email, &password).context("ClientLogin")?;
    Ok(client)
}

/// Generate a unique SKU for a test.
#[must_use]
pub fn test_sku(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// A minimal valid product for the US market.
#[must_use]
pub fn sample_product(sku: &str) -> Product {
    let mut product = Product::create();
    product.set_sku(sku);
    product.set_title("ContentStack test camera");
    product.set_description("A camera created by the integration tests.");
    product.set_product_link(&format!("https://example.com/products/{sku}"));
    product.set_target_country("US");
    product.set_content_language("en");
    product.set_condition("new");
    product.set_availability("in stock");
    product.set_price("25", "usd");
    product
}

mod test_account;
mod test_auth;
mod test_datafeed;
mod test_product;
