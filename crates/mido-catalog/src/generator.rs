//! Synthetic product generation for the mock scrape endpoint.
//!
//! Record shape is fully determined by `(source, category, count)`; only the
//! price is random. Randomness is taken as a parameter so callers decide
//! whether it comes from the thread RNG or a seeded one.

use chrono::{DateTime, Utc};
use mido_core::{JobResult, JobVariant, MockProduct};
use rand::Rng;
use rust_decimal::Decimal;

/// Products generated per job when nothing else is configured.
pub const DEFAULT_PRODUCT_COUNT: u32 = 20;

/// Products returned in the job envelope preview.
pub const DEFAULT_PREVIEW_LEN: usize = 5;

/// Lower bound of the generated price range, in cents (inclusive).
const MIN_PRICE_CENTS: i64 = 1_000;

/// Upper bound of the generated price range, in cents (exclusive).
const MAX_PRICE_CENTS: i64 = 11_000;

/// Generates `count` mock products for `(source, category)`, ids `1..=count`.
///
/// Callers are expected to have rejected empty `source`/`category` already.
pub fn generate<R: Rng>(
    source: &str,
    category: &str,
    count: u32,
    rng: &mut R,
) -> Vec<MockProduct> {
    (1..=count)
        .map(|i| MockProduct {
            id: i,
            external_id: format!("{source}_{category}_{i}"),
            title: format!("{category} Product {i}"),
            price: random_price(rng),
            category: category.to_owned(),
            source: source.to_owned(),
        })
        .collect()
}

/// Draws a price uniformly from `[10.00, 110.00)` and renders it with two decimals.
pub fn random_price<R: Rng>(rng: &mut R) -> String {
    let cents = rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
    Decimal::new(cents, 2).to_string()
}

/// Wraps a full batch into a job envelope stamped with the current time.
#[must_use]
pub fn wrap_as_job_result(
    products: Vec<MockProduct>,
    variant: JobVariant,
    preview_len: usize,
) -> JobResult {
    wrap_as_job_result_at(products, variant, preview_len, Utc::now())
}

/// Same as [`wrap_as_job_result`] with an explicit timestamp for the job id.
#[must_use]
pub fn wrap_as_job_result_at(
    mut products: Vec<MockProduct>,
    variant: JobVariant,
    preview_len: usize,
    now: DateTime<Utc>,
) -> JobResult {
    let total_products = products.len();
    products.truncate(preview_len);

    JobResult {
        success: true,
        job_id: format!("{}_{}", variant.job_id_prefix(), now.timestamp_millis()),
        total_products,
        products,
        message: variant.message().to_owned(),
    }
}

/// The single mock scrape component, parameterized by variant and batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockCatalog {
    pub variant: JobVariant,
    pub product_count: u32,
    pub preview_len: usize,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            variant: JobVariant::default(),
            product_count: DEFAULT_PRODUCT_COUNT,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl MockCatalog {
    #[must_use]
    pub fn new(variant: JobVariant, product_count: u32, preview_len: usize) -> Self {
        Self {
            variant,
            product_count,
            preview_len,
        }
    }

    #[must_use]
    pub fn from_app_config(config: &mido_core::AppConfig) -> Self {
        Self::new(
            config.scrape_variant,
            config.scrape_product_count,
            config.scrape_preview_len,
        )
    }

    /// Generates a batch and wraps it in a job envelope.
    pub fn run<R: Rng>(&self, source: &str, category: &str, rng: &mut R) -> JobResult {
        let products = generate(source, category, self.product_count, rng);
        let result = wrap_as_job_result(products, self.variant, self.preview_len);
        tracing::debug!(
            job_id = %result.job_id,
            source,
            category,
            total_products = result.total_products,
            "mock scrape job generated"
        );
        result
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
