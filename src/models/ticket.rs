use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Infants sit on an accompanying adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn adults(count: u32) -> Self {
        Self::new(TicketType::Adult, count)
    }

    pub fn children(count: u32) -> Self {
        Self::new(TicketType::Child, count)
    }

    pub fn infants(count: u32) -> Self {
        Self::new(TicketType::Infant, count)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Ticket totals per category, summed over every request of an order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TicketCounts {
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a TicketRequest>) -> Self {
        requests
            .into_iter()
            .fold(Self::default(), |mut counts, request| {
                let slot = match request.ticket_type() {
                    TicketType::Adult => &mut counts.adults,
                    TicketType::Child => &mut counts.children,
                    TicketType::Infant => &mut counts.infants,
                };
                *slot = slot.saturating_add(request.count());
                counts
            })
    }

    pub fn of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children) + u64::from(self.infants)
    }
}
