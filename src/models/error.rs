use std::{error::Error, fmt};

use crate::collaborators::{payment::PaymentError, reservation::ReservationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    TooManyTickets,
    NoAdultPresent,
    InsufficientAdultsForInfants,
    InvalidAccountId,
}

impl fmt::Display for InvalidPurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TooManyTickets => write!(f, "Maximum of 20 tickets per purchase"),
            Self::NoAdultPresent => {
                write!(f, "At least one Adult required with Children/Infants")
            }
            Self::InsufficientAdultsForInfants => write!(f, "Not Enough Adults for Infants"),
            Self::InvalidAccountId => write!(f, "Account Id must be greater than zero"),
        }
    }
}

impl Error for InvalidPurchaseError {}

#[derive(Debug, PartialEq, Eq)]
pub enum PurchaseError {
    Invalid(InvalidPurchaseError),
    Payment(PaymentError),
    Reservation(ReservationError),
}

impl From<InvalidPurchaseError> for PurchaseError {
    fn from(value: InvalidPurchaseError) -> Self {
        PurchaseError::Invalid(value)
    }
}

impl From<PaymentError> for PurchaseError {
    fn from(value: PaymentError) -> Self {
        PurchaseError::Payment(value)
    }
}

impl From<ReservationError> for PurchaseError {
    fn from(value: ReservationError) -> Self {
        PurchaseError::Reservation(value)
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::Invalid(e) => write!(f, "{e}"),
            PurchaseError::Payment(e) => write!(f, "{e}"),
            PurchaseError::Reservation(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PurchaseError {}
