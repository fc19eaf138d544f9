//! # Checkout Configuration
//!
//! Items and payment processors for a checkout run, loaded from TOML.
//!
//! ```toml
//! [[items]]
//! name = "Keyboard"
//! quantity = 1
//! price = 250.50
//!
//! [[payments]]
//! method = "debit_card"
//! security_code = "abcd12345"
//!
//! [[payments]]
//! method = "paypal"
//! email = "example@example.com"
//! ```

use crate::card::{CreditCardProcessor, DebitCardProcessor};
use crate::error::{PaymentError, PaymentResult};
use crate::order::{LineItem, Order};
use crate::paypal::PayPalProcessor;
use crate::processor::{BoxedPaymentProcessor, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line item to add to the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub price: f64,
}

fn default_quantity() -> i64 {
    1
}

impl From<&ItemConfig> for LineItem {
    fn from(item: &ItemConfig) -> Self {
        LineItem::new(item.name.clone(), item.quantity, item.price)
    }
}

/// A payment processor to run against the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ProcessorConfig {
    DebitCard { security_code: String },
    CreditCard { security_code: String },
    #[serde(rename = "paypal")]
    PayPal { email: String },
}

impl ProcessorConfig {
    pub fn method(&self) -> PaymentMethod {
        match self {
            ProcessorConfig::DebitCard { .. } => PaymentMethod::DebitCard,
            ProcessorConfig::CreditCard { .. } => PaymentMethod::CreditCard,
            ProcessorConfig::PayPal { .. } => PaymentMethod::PayPal,
        }
    }

    /// Construct a fresh processor for this entry
    pub fn build(&self) -> BoxedPaymentProcessor {
        match self {
            ProcessorConfig::DebitCard { security_code } => {
                Box::new(DebitCardProcessor::new(security_code.clone()))
            }
            ProcessorConfig::CreditCard { security_code } => {
                Box::new(CreditCardProcessor::new(security_code.clone()))
            }
            ProcessorConfig::PayPal { email } => Box::new(PayPalProcessor::new(email.clone())),
        }
    }
}

/// A full checkout run: what to buy and how to pay, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub payments: Vec<ProcessorConfig>,
}

impl CheckoutConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> PaymentResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> PaymentResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaymentError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build an open order holding the configured items
    pub fn build_order(&self) -> Order {
        Order::new().with_items(self.items.iter().map(LineItem::from))
    }

    /// Build one processor per configured payment, in order
    pub fn build_processors(&self) -> Vec<BoxedPaymentProcessor> {
        self.payments.iter().map(ProcessorConfig::build).collect()
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        let item = |name: &str, price: f64| ItemConfig {
            name: name.to_string(),
            quantity: 1,
            price,
        };

        Self {
            items: vec![
                item("Keyboard", 250.50),
                item("Mouse", 150.00),
                item("Monitor", 3500.00),
            ],
            payments: vec![
                ProcessorConfig::DebitCard {
                    security_code: "abcd12345".to_string(),
                },
                ProcessorConfig::PayPal {
                    email: "example@example.com".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::Credential;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [[items]]
        name = "Headset"
        quantity = 2
        price = 80.0

        [[items]]
        name = "Stand"
        price = 45.5

        [[payments]]
        method = "credit_card"
        security_code = "777"

        [[payments]]
        method = "paypal"
        email = "buyer@shop.test"
    "#;

    #[test]
    fn test_default_config() {
        let config = CheckoutConfig::default();
        let order = config.build_order();

        assert_eq!(order.total_price(), 3900.50);
        assert_eq!(
            config.payments.iter().map(|p| p.method()).collect::<Vec<_>>(),
            vec![PaymentMethod::DebitCard, PaymentMethod::PayPal]
        );
    }

    #[test]
    fn test_parse_toml() {
        let config = CheckoutConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[1].quantity, 1);
        assert_eq!(config.build_order().total_price(), 205.5);

        let processors = config.build_processors();
        assert_eq!(processors[0].method(), PaymentMethod::CreditCard);
        assert_eq!(processors[0].credential(), Credential::SecurityCode("777"));
        assert_eq!(processors[1].credential(), Credential::Email("buyer@shop.test"));
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = CheckoutConfig::from_toml_str(
            r#"
            [[payments]]
            method = "bank_transfer"
            iban = "DE00"
            "#,
        );

        assert!(matches!(result, Err(PaymentError::Serialization(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = CheckoutConfig::from_file(file.path()).unwrap();
        assert_eq!(config.payments.len(), 2);
    }

    #[test]
    fn test_shipped_config_matches_default() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/checkout.toml");

        assert_eq!(
            CheckoutConfig::from_file(path).unwrap(),
            CheckoutConfig::default()
        );
    }

    #[test]
    fn test_missing_file() {
        let result = CheckoutConfig::from_file("/nonexistent/checkout.toml");
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }
}
