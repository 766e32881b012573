//! Per-session order state and the `update` / `finalize` operations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voxdesk_types::{OrderField, OrderRecord};

use crate::error::OrderError;
use crate::file::{write_order, SavedOrder};

/// A partial update to the order. Absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, rename = "drinkType")]
    pub drink_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub milk: Option<String>,
    /// Replaces the stored extras wholesale when present.
    #[serde(default)]
    pub extras: Option<Vec<String>>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Snapshot returned after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub order: OrderRecord,
    pub is_complete: bool,
    pub missing_fields: Vec<OrderField>,
}

/// Whether this session has already written its order to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Unsaved,
    Saved { path: PathBuf },
}

/// Result of a finalize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FinalizeOutcome {
    /// Required fields are still unset; nothing was written.
    Incomplete { missing_fields: Vec<OrderField> },
    /// The order is complete. `saved_to` is set only on the call that wrote
    /// the file.
    Finalized {
        order: OrderRecord,
        summary: String,
        saved_to: Option<PathBuf>,
    },
}

/// One customer's order for the duration of a voice session.
#[derive(Debug, Clone)]
pub struct OrderSession {
    orders_dir: PathBuf,
    order: OrderRecord,
    persistence: Persistence,
}

impl OrderSession {
    /// Creates an empty order that will be saved under `orders_dir`.
    pub fn new(orders_dir: impl AsRef<Path>) -> Self {
        Self {
            orders_dir: orders_dir.as_ref().to_path_buf(),
            order: OrderRecord::default(),
            persistence: Persistence::Unsaved,
        }
    }

    pub fn order(&self) -> &OrderRecord {
        &self.order
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Current order, completeness and missing fields.
    pub fn status(&self) -> OrderStatus {
        OrderStatus {
            order: self.order.clone(),
            is_complete: self.order.is_complete(),
            missing_fields: self.order.missing_fields(),
        }
    }

    /// Applies a partial update and returns the resulting status.
    pub fn update(&mut self, update: OrderUpdate) -> OrderStatus {
        let OrderUpdate {
            drink_type,
            size,
            milk,
            extras,
            name,
        } = update;

        if drink_type.is_some() {
            self.order.drink_type = drink_type;
        }
        if size.is_some() {
            self.order.size = size;
        }
        if milk.is_some() {
            self.order.milk = milk;
        }
        if let Some(extras) = extras {
            self.order.extras = extras;
        }
        if name.is_some() {
            self.order.name = name;
        }

        let status = self.status();
        tracing::info!(
            order = ?status.order,
            missing = ?status.missing_fields,
            "order updated"
        );
        status
    }

    /// Finalizes the order using the current time.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Store` if the order file cannot be written. The
    /// session stays unsaved so the call can be retried.
    pub fn finalize(&mut self) -> Result<FinalizeOutcome, OrderError> {
        self.finalize_at(Utc::now())
    }

    /// Finalizes the order, stamping the file with `now`.
    ///
    /// An incomplete order is reported back without touching disk. A
    /// complete order is written on the first successful call only; later
    /// calls return the same summary with `saved_to: None`.
    pub fn finalize_at(&mut self, now: DateTime<Utc>) -> Result<FinalizeOutcome, OrderError> {
        let Some(summary) = order_summary(&self.order) else {
            let missing_fields = self.order.missing_fields();
            tracing::warn!(missing = ?missing_fields, "finalize requested on incomplete order");
            return Ok(FinalizeOutcome::Incomplete { missing_fields });
        };
        tracing::info!(summary = %summary, "final order summary");

        let saved_to = match self.persistence {
            Persistence::Saved { .. } => None,
            Persistence::Unsaved => {
                let saved = SavedOrder {
                    order: self.order.clone(),
                    summary: summary.clone(),
                    timestamp: voxdesk_store::utc_timestamp(now),
                };
                let path = write_order(&self.orders_dir, &saved)?;
                tracing::info!(path = %path.display(), "order saved");
                self.persistence = Persistence::Saved { path: path.clone() };
                Some(path)
            }
        };

        Ok(FinalizeOutcome::Finalized {
            order: self.order.clone(),
            summary,
            saved_to,
        })
    }
}

/// One-line description of a complete order, or `None` if incomplete.
///
/// `"<size> <drinkType> with <milk> milk, extras: <e1, e2> for <name>"`,
/// with the extras clause omitted when there are none.
pub fn order_summary(order: &OrderRecord) -> Option<String> {
    let (Some(drink_type), Some(size), Some(milk), Some(name)) = (
        order.drink_type.as_deref(),
        order.size.as_deref(),
        order.milk.as_deref(),
        order.name.as_deref(),
    ) else {
        return None;
    };

    let mut summary = format!("{size} {drink_type} with {milk} milk");
    if !order.extras.is_empty() {
        summary.push_str(", extras: ");
        summary.push_str(&order.extras.join(", "));
    }
    summary.push_str(" for ");
    summary.push_str(name);
    Some(summary)
}
