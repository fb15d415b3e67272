use std::{error::Error, fmt};

use crate::models::order::AccountId;

/// Seat booking service, only called after payment went through.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32)
        -> Result<(), ReservationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    Rejected(String),
    Unavailable(String),
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "Seat reservation rejected: {reason}"),
            Self::Unavailable(reason) => {
                write!(f, "Seat reservation service unavailable: {reason}")
            }
        }
    }
}

impl Error for ReservationError {}
