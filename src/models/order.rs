use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ticket::{TicketCounts, TicketRequest};

pub type AccountId = i64;
pub type PurchaseId = Uuid;

/// A customer's order of cinema tickets for one account.
///
/// Seats and price are never stored on the order; they are derived into an
/// [`OrderCharge`] once the order has been validated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub account_id: AccountId,
    pub requests: Vec<TicketRequest>,
}

impl PurchaseOrder {
    pub fn new(account_id: AccountId, requests: Vec<TicketRequest>) -> Self {
        Self {
            account_id,
            requests,
        }
    }

    pub fn counts(&self) -> TicketCounts {
        TicketCounts::from_requests(&self.requests)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OrderCharge {
    pub seats: u32,
    pub price: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub charge: OrderCharge,
}
