use std::sync::{Arc, PoisonError, RwLock};

use crate::models::order::AccountId;

use super::{
    payment::{PaymentError, TicketPaymentService},
    reservation::{ReservationError, SeatReservationService},
};

/// Records every payment attempt. Clones share the same log, so a clone can be
/// handed to the ticket service and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentGateway {
    calls: Arc<RwLock<Vec<(AccountId, u64)>>>,
    failure: Arc<RwLock<Option<PaymentError>>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: PaymentError) -> Self {
        let gateway = Self::new();
        gateway.fail_with(Some(error));
        gateway
    }

    /// Every following payment returns `error`; `None` lets payments through again.
    pub fn fail_with(&self, error: Option<PaymentError>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = error;
    }

    pub fn calls(&self) -> Vec<(AccountId, u64)> {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TicketPaymentService for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account_id, amount));
        match self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Seat booking counterpart of [`InMemoryPaymentGateway`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatBooking {
    calls: Arc<RwLock<Vec<(AccountId, u32)>>>,
    failure: Arc<RwLock<Option<ReservationError>>>,
}

impl InMemorySeatBooking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ReservationError) -> Self {
        let booking = Self::new();
        booking.fail_with(Some(error));
        booking
    }

    pub fn fail_with(&self, error: Option<ReservationError>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = error;
    }

    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn reserved_seats(&self, account_id: AccountId) -> u32 {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(id, _)| *id == account_id)
            .map(|(_, seats)| seats)
            .sum()
    }
}

impl SeatReservationService for InMemorySeatBooking {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32) -> Result<(), ReservationError> {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account_id, seat_count));
        match self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_call_log() {
        let gateway = InMemoryPaymentGateway::new();
        let handed_out = gateway.clone();
        handed_out.make_payment(7, 40).unwrap();
        handed_out.make_payment(8, 20).unwrap();
        assert_eq!(vec![(7, 40), (8, 20)], gateway.calls());
    }

    #[test]
    fn test_failure_can_be_switched_off() {
        let booking = InMemorySeatBooking::failing(ReservationError::Unavailable(
            "screen closed".to_string(),
        ));
        let result = booking.reserve_seat(3, 2);
        assert!(matches!(result, Err(ReservationError::Unavailable(_))));

        booking.fail_with(None);
        booking.reserve_seat(3, 1).unwrap();
        assert_eq!(vec![(3, 2), (3, 1)], booking.calls());
        assert_eq!(3, booking.reserved_seats(3));
        assert_eq!(0, booking.reserved_seats(4));
    }
}
