//! # checkout-core
//!
//! Order and payment processor types for checkout-strategy-rs.
//!
//! This crate provides:
//! - `PaymentProcessor` trait for implementing payment methods
//! - `DebitCardProcessor`, `CreditCardProcessor` and `PayPalProcessor`
//! - `Order` and `LineItem` for the checkout flow
//! - `CheckoutConfig` for TOML-driven checkout runs
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use checkout_core::{DebitCardProcessor, Order, OrderStatus, PaymentProcessor};
//!
//! let mut order = Order::new();
//! order.add_item("Keyboard", 1, 250.50);
//! order.add_item("Mouse", 1, 150.00);
//! assert_eq!(order.total_price(), 400.50);
//!
//! let mut processor = DebitCardProcessor::new("abcd12345");
//! order.process_payment(&mut processor)?;
//!
//! assert_eq!(order.status(), OrderStatus::Paid);
//! assert!(processor.is_paid());
//! # Ok::<(), checkout_core::PaymentError>(())
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod order;
pub mod paypal;
pub mod processor;

// Re-exports for convenience
pub use card::{CreditCardProcessor, DebitCardProcessor};
pub use config::{CheckoutConfig, ItemConfig, ProcessorConfig};
pub use error::{PaymentError, PaymentResult};
pub use order::{LineItem, Order, OrderStatus};
pub use paypal::PayPalProcessor;
pub use processor::{
    BoxedPaymentProcessor, Credential, PaymentMethod, PaymentProcessor, ProcessorStatus,
};
