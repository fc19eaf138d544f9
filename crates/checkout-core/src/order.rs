//! # Order Types
//!
//! Orders accumulate line items and are paid through any `PaymentProcessor`.

use crate::error::PaymentResult;
use crate::processor::{PaymentMethod, PaymentProcessor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name
    pub name: String,

    /// Quantity (not validated, may be negative)
    pub quantity: i64,

    /// Unit price
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculate the total price for this line item
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment
    #[default]
    Open,
    /// A processor completed a payment for this order
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order to be checked out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items, in the order they were added
    line_items: Vec<LineItem>,

    /// Payment status
    #[serde(default)]
    status: OrderStatus,

    /// Method of the last processor that completed a payment
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_method: Option<PaymentMethod>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// When the order was last paid
    #[serde(skip_serializing_if = "Option::is_none")]
    paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a new open order with generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            status: OrderStatus::Open,
            payment_method: None,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    /// Add an item to the order
    pub fn add_item(&mut self, name: impl Into<String>, quantity: i64, price: f64) {
        let item = LineItem::new(name, quantity, price);
        debug!(order_id = %self.id, item = %item.name, quantity, price, "item added");
        self.line_items.push(item);
    }

    /// Builder: add several line items
    pub fn with_items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.line_items.extend(items);
        self
    }

    /// Calculate the total cost for all items and their quantities
    pub fn total_price(&self) -> f64 {
        self.line_items
            .iter()
            .fold(0.0, |total, item| total + item.total())
    }

    /// Pay for the order with the given processor.
    ///
    /// The order becomes `Paid` only if the processor succeeds; a processor
    /// error is returned unchanged and the order is left as it was.
    pub fn process_payment<P>(&mut self, processor: &mut P) -> PaymentResult<()>
    where
        P: PaymentProcessor + ?Sized,
    {
        info!(order_id = %self.id, method = %processor.method(), "processing order payment");

        processor.process_payment()?;

        self.status = OrderStatus::Paid;
        self.payment_method = Some(processor.method());
        self.paid_at = Some(Utc::now());
        debug!(order_id = %self.id, status = %self.status, "order status updated");
        Ok(())
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Item names in insertion order
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.line_items.iter().map(|item| item.name.as_str())
    }

    /// Quantities in insertion order
    pub fn quantities(&self) -> impl Iterator<Item = i64> + '_ {
        self.line_items.iter().map(|item| item.quantity)
    }

    /// Unit prices in insertion order
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.line_items.iter().map(|item| item.unit_price)
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of quantities across line items
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
