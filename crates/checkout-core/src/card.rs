//! # Card Processors
//!
//! Debit and credit card payment strategies. Both verify a card security
//! code before completing the payment.

use crate::error::PaymentResult;
use crate::processor::{
    complete_payment, verify, Credential, PaymentMethod, PaymentProcessor, ProcessorStatus,
};

/// Payment processor for debit card payments
#[derive(Debug, Clone)]
pub struct DebitCardProcessor {
    security_code: String,
    status: ProcessorStatus,
}

impl DebitCardProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
            status: ProcessorStatus::Pending,
        }
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

impl PaymentProcessor for DebitCardProcessor {
    fn process_payment(&mut self) -> PaymentResult<()> {
        verify(self.method(), self.credential());
        complete_payment(self.method(), &mut self.status);
        Ok(())
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::DebitCard
    }

    fn credential(&self) -> Credential<'_> {
        Credential::SecurityCode(&self.security_code)
    }

    fn status(&self) -> ProcessorStatus {
        self.status
    }
}

/// Payment processor for credit card payments
#[derive(Debug, Clone)]
pub struct CreditCardProcessor {
    security_code: String,
    status: ProcessorStatus,
}

impl CreditCardProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
            status: ProcessorStatus::Pending,
        }
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&mut self) -> PaymentResult<()> {
        verify(self.method(), self.credential());
        complete_payment(self.method(), &mut self.status);
        Ok(())
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn credential(&self) -> Credential<'_> {
        Credential::SecurityCode(&self.security_code)
    }

    fn status(&self) -> ProcessorStatus {
        self.status
    }
}
