pub mod assessment;
pub(crate) mod lenient;
pub mod sales;
pub mod storage;

pub use storage::RepositoryError;

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static IDENTIFIER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Builds a `<prefix>-<unix millis>-<sequence>` identifier unique within the process.
pub(crate) fn time_derived_id(prefix: &str) -> String {
    let sequence = IDENTIFIER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let millis = Utc::now().timestamp_millis();
    format!("{prefix}-{millis}-{sequence:06}")
}
