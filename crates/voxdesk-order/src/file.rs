//! On-disk layout of finalized orders.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voxdesk_types::OrderRecord;

use crate::error::OrderError;

/// Name used when the order carries no customer name at all.
const UNKNOWN_CUSTOMER: &str = "unknown";

/// Name used when filtering leaves nothing usable.
const PLACEHOLDER_CUSTOMER: &str = "customer";

/// The document written to an order file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedOrder {
    pub order: OrderRecord,
    pub summary: String,
    pub timestamp: String,
}

/// Keeps only alphanumerics, `_` and `-`, falling back to a placeholder.
pub fn sanitize_customer_name(name: Option<&str>) -> String {
    let safe: String = name
        .unwrap_or(UNKNOWN_CUSTOMER)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if safe.is_empty() {
        PLACEHOLDER_CUSTOMER.to_string()
    } else {
        safe
    }
}

/// Builds `order_<timestamp>_<name>.json`, with colons in the timestamp
/// replaced by hyphens.
pub fn order_filename(timestamp: &str, name: Option<&str>) -> String {
    format!(
        "order_{}_{}.json",
        timestamp.replace(':', "-"),
        sanitize_customer_name(name)
    )
}

/// Writes `saved` into `orders_dir` and returns the new file's path.
pub(crate) fn write_order(orders_dir: &Path, saved: &SavedOrder) -> Result<PathBuf, OrderError> {
    let path = orders_dir.join(order_filename(&saved.timestamp, saved.order.name.as_deref()));
    voxdesk_store::write_json_pretty(&path, saved)?;
    Ok(path)
}
