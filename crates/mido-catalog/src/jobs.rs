//! Sample data behind the scraping dashboard.

use chrono::{DateTime, Duration, Utc};
use mido_core::{JobStatus, ScrapingJob};

/// Returns the fixed dashboard jobs, timestamped relative to `now`.
#[must_use]
pub fn list_mock_jobs(now: DateTime<Utc>) -> Vec<ScrapingJob> {
    let hours = Duration::hours;
    let minutes = Duration::minutes;

    vec![
        ScrapingJob {
            id: "1".to_owned(),
            source: "alibaba".to_owned(),
            category: "electronics".to_owned(),
            status: JobStatus::Completed,
            total_products: 1250,
            scraped_products: 1250,
            failed_products: 0,
            started_at: Some(now - hours(2)),
            completed_at: Some(now - hours(1)),
            created_at: now - hours(3),
        },
        ScrapingJob {
            id: "2".to_owned(),
            source: "alibaba".to_owned(),
            category: "home-garden".to_owned(),
            status: JobStatus::Running,
            total_products: 1000,
            scraped_products: 650,
            failed_products: 2,
            started_at: Some(now - minutes(30)),
            completed_at: None,
            created_at: now - hours(1),
        },
        ScrapingJob {
            id: "3".to_owned(),
            source: "alibaba".to_owned(),
            category: "fashion".to_owned(),
            status: JobStatus::Pending,
            total_products: 800,
            scraped_products: 0,
            failed_products: 0,
            started_at: None,
            completed_at: None,
            created_at: now - minutes(30),
        },
    ]
}

/// Builds a freshly queued job; the id is `now` in epoch milliseconds.
#[must_use]
pub fn new_pending_job(source: &str, category: &str, now: DateTime<Utc>) -> ScrapingJob {
    ScrapingJob {
        id: now.timestamp_millis().to_string(),
        source: source.to_owned(),
        category: category.to_owned(),
        status: JobStatus::Pending,
        total_products: 0,
        scraped_products: 0,
        failed_products: 0,
        started_at: None,
        completed_at: None,
        created_at: now,
    }
}
