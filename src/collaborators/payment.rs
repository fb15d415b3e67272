use std::{error::Error, fmt};

use crate::models::order::AccountId;

/// Payment gateway charged once per accepted purchase.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    Rejected(String),
    Unavailable(String),
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "Payment rejected: {reason}"),
            Self::Unavailable(reason) => write!(f, "Payment service unavailable: {reason}"),
        }
    }
}

impl Error for PaymentError {}
