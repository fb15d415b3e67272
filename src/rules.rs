use crate::models::{
    error::InvalidPurchaseError,
    order::{AccountId, OrderCharge},
    ticket::{TicketCounts, TicketRequest, TicketType},
};

pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;
pub const ADULT_PRICE: u64 = 20;
pub const CHILD_PRICE: u64 = 10;
pub const INFANT_PRICE: u64 = 0;

pub fn unit_price(ticket_type: TicketType) -> u64 {
    match ticket_type {
        TicketType::Adult => ADULT_PRICE,
        TicketType::Child => CHILD_PRICE,
        TicketType::Infant => INFANT_PRICE,
    }
}

/// Checks an order and returns its ticket totals.
///
/// Rules are evaluated in a fixed order and the first one broken is
/// reported: ticket limit, adult presence, one adult per infant, account id.
pub fn validate(
    account_id: AccountId,
    requests: &[TicketRequest],
) -> Result<TicketCounts, InvalidPurchaseError> {
    let counts = TicketCounts::from_requests(requests);
    log::trace!(
        "account {account_id} ordered {} adult, {} child, {} infant tickets",
        counts.adults,
        counts.children,
        counts.infants
    );

    if counts.total() > MAX_TICKETS_PER_PURCHASE {
        return Err(InvalidPurchaseError::TooManyTickets);
    }
    if (counts.children > 0 || counts.infants > 0) && counts.adults == 0 {
        return Err(InvalidPurchaseError::NoAdultPresent);
    }
    if counts.adults < counts.infants {
        return Err(InvalidPurchaseError::InsufficientAdultsForInfants);
    }
    if account_id < 1 {
        return Err(InvalidPurchaseError::InvalidAccountId);
    }
    Ok(counts)
}

pub fn charge(counts: &TicketCounts) -> OrderCharge {
    let (seats, price) = [TicketType::Adult, TicketType::Child, TicketType::Infant]
        .into_iter()
        .fold((0u32, 0u64), |(seats, price), ticket_type| {
            let count = counts.of(ticket_type);
            let seats = if ticket_type.occupies_seat() {
                seats.saturating_add(count)
            } else {
                seats
            };
            let cost = u64::from(count).saturating_mul(unit_price(ticket_type));
            (seats, price.saturating_add(cost))
        });
    OrderCharge { seats, price }
}
