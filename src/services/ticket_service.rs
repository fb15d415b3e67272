use uuid::Uuid;

use crate::{
    collaborators::{payment::TicketPaymentService, reservation::SeatReservationService},
    models::{
        error::PurchaseError,
        order::{AccountId, PurchaseReceipt},
        ticket::TicketRequest,
    },
    rules,
};

pub trait TicketService {
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseReceipt, PurchaseError>;
}

/// Validates and prices an order, then pays for it and books its seats.
///
/// Neither collaborator is called for an order that breaks a rule, and seats
/// are only reserved once the payment went through.
pub struct TicketServiceImpl<Payment, Reservation> {
    payment: Payment,
    reservation: Reservation,
}

impl<Payment, Reservation> TicketServiceImpl<Payment, Reservation>
where
    Payment: TicketPaymentService,
    Reservation: SeatReservationService,
{
    pub fn new(payment: Payment, reservation: Reservation) -> Self {
        Self {
            payment,
            reservation,
        }
    }
}

impl<Payment, Reservation> TicketService for TicketServiceImpl<Payment, Reservation>
where
    Payment: TicketPaymentService,
    Reservation: SeatReservationService,
{
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let counts = rules::validate(account_id, requests)
            .inspect_err(|e| log::warn!("rejected purchase for account {account_id}: {e}"))?;

        let charge = rules::charge(&counts);
        let purchase_id = Uuid::new_v4();
        log::debug!(
            "purchase {purchase_id} for account {account_id}: {} seats, price {}",
            charge.seats,
            charge.price
        );

        self.payment
            .make_payment(account_id, charge.price)
            .inspect_err(|e| log::warn!("purchase {purchase_id} payment failed: {e}"))?;
        self.reservation
            .reserve_seat(account_id, charge.seats)
            .inspect_err(|e| log::warn!("purchase {purchase_id} seat reservation failed: {e}"))?;

        log::info!("purchase {purchase_id} completed for account {account_id}");
        Ok(PurchaseReceipt {
            purchase_id,
            account_id,
            charge,
        })
    }
}
