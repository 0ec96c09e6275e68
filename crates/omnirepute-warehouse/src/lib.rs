//! Analytics warehouse query client.
//!
//! Fetches a bounded sample of brand mentions from the curated
//! `brand_mentions` table via the warehouse's parameterized query API.

mod client;
mod error;
mod types;

use async_trait::async_trait;

use omnirepute_core::{DataSource, MentionRow};

pub use client::{WarehouseClient, MAX_SAMPLE_ROWS};
pub use error::WarehouseError;

/// Seam between the analysis endpoint and the warehouse, so tests can
/// substitute a stub for the real client.
#[async_trait]
pub trait MentionSource: Send + Sync {
    /// Returns a sample of mentions for the brand, at most
    /// [`MAX_SAMPLE_ROWS`] rows. An empty result is `Ok(vec![])`, not an
    /// error — the caller distinguishes "no data" from a failed query.
    async fn fetch_mentions(
        &self,
        brand_name: &str,
        source: DataSource,
    ) -> Result<Vec<MentionRow>, WarehouseError>;
}
