//! # Payment Processor Trait
//!
//! Core Strategy pattern trait for payment methods.
//! Implementations: debit card, credit card, PayPal.
//!
//! ## Design Pattern
//!
//! An `Order` never knows which method it is paid with. It is handed any
//! `PaymentProcessor` and asks it to process the payment.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentProcessor (trait)                   │
//! │  ├── process_payment()                                      │
//! │  ├── method()                                               │
//! │  ├── credential()                                           │
//! │  └── status()                                               │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │  DebitCard    │ │  CreditCard   │ │    PayPal     │
//!  │  Processor    │ │  Processor    │ │   Processor   │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::PaymentResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Payment method a processor handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    DebitCard,
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    /// Human-readable label used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::DebitCard => "debit card",
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Data a processor verifies before completing a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    SecurityCode(&'a str),
    Email(&'a str),
}

impl std::fmt::Display for Credential<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::SecurityCode(code) => write!(f, "security code {}", code),
            Credential::Email(email) => write!(f, "email address {}", email),
        }
    }
}

/// Status held by each processor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorStatus {
    /// No payment completed yet
    #[default]
    Pending,
    /// Payment completed
    Paid,
}

impl ProcessorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorStatus::Pending => "pending",
            ProcessorStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for ProcessorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for payment method implementations.
///
/// Each method (debit card, credit card, PayPal) implements this trait,
/// so an order can be paid with any of them interchangeably.
pub trait PaymentProcessor {
    /// Verify the credential and complete the payment.
    ///
    /// On success the processor's own status is `Paid`. Calling it again
    /// re-runs verification and leaves the status `Paid`.
    fn process_payment(&mut self) -> PaymentResult<()>;

    /// The method this processor handles.
    fn method(&self) -> PaymentMethod;

    /// The credential checked during verification.
    fn credential(&self) -> Credential<'_>;

    /// Current status of this processor.
    fn status(&self) -> ProcessorStatus;

    /// Whether this processor has completed a payment.
    fn is_paid(&self) -> bool {
        self.status() == ProcessorStatus::Paid
    }
}

/// Type alias for a boxed payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Box<dyn PaymentProcessor>;

/// Line announcing which method is being processed.
pub fn processing_message(method: PaymentMethod) -> String {
    format!("Processing {} payment type...", method.label())
}

/// Line announcing which credential is being verified.
pub fn verification_message(credential: Credential<'_>) -> String {
    format!("Verifying {}", credential)
}

/// Emit the verification output for a method and credential.
pub(crate) fn verify(method: PaymentMethod, credential: Credential<'_>) {
    info!("{}", processing_message(method));
    info!("{}", verification_message(credential));
}

/// Completion step shared by every processor.
pub(crate) fn complete_payment(method: PaymentMethod, status: &mut ProcessorStatus) {
    info!("Payment completed.");
    debug!(%method, from = %status, "processor status -> paid");
    *status = ProcessorStatus::Paid;
}
