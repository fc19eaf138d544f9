//! # PayPal Processor
//!
//! Verifies the account email address before completing the payment.

use crate::error::PaymentResult;
use crate::processor::{
    complete_payment, verify, Credential, PaymentMethod, PaymentProcessor, ProcessorStatus,
};

/// Payment processor for PayPal payments
#[derive(Debug, Clone)]
pub struct PayPalProcessor {
    /// Email address of the PayPal account
    email: String,
    status: ProcessorStatus,
}

impl PayPalProcessor {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: ProcessorStatus::Pending,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&mut self) -> PaymentResult<()> {
        verify(self.method(), self.credential());
        complete_payment(self.method(), &mut self.status);
        Ok(())
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn credential(&self) -> Credential<'_> {
        Credential::Email(&self.email)
    }

    fn status(&self) -> ProcessorStatus {
        self.status
    }
}
