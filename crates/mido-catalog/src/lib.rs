//! Mock catalog generation: synthetic product batches wrapped in job
//! envelopes, plus the sample jobs shown on the scraping dashboard.

pub mod generator;
pub mod jobs;

pub use generator::{
    generate, random_price, wrap_as_job_result, wrap_as_job_result_at, MockCatalog,
    DEFAULT_PREVIEW_LEN, DEFAULT_PRODUCT_COUNT,
};
pub use jobs::{list_mock_jobs, new_pending_job};
