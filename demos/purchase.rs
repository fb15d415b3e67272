use cinema_tickets::{
    collaborators::{
        in_memory::{InMemoryPaymentGateway, InMemorySeatBooking},
        payment::PaymentError,
    },
    models::{error::PurchaseError, order::PurchaseOrder, ticket::TicketRequest},
    services::ticket_service::{TicketService, TicketServiceImpl},
};

// family order - accepted
// unaccompanied child - rejected before any collaborator is called
// declined card - payment fails, no seats booked
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let payment = InMemoryPaymentGateway::new();
    let booking = InMemorySeatBooking::new();
    let service = TicketServiceImpl::new(payment.clone(), booking.clone());

    let family: PurchaseOrder = serde_json::from_str(
        r#"{
            "account_id": 1001,
            "requests": [
                {"ticket_type": "ADULT", "count": 2},
                {"ticket_type": "CHILD", "count": 2},
                {"ticket_type": "INFANT", "count": 1}
            ]
        }"#,
    )?;
    let receipt = service.purchase_tickets(family.account_id, &family.requests)?;
    println!("Purchased {}", serde_json::to_string(&receipt)?);

    let r: Result<_, PurchaseError> = service.purchase_tickets(1002, &[TicketRequest::children(1)]);
    println!("Unaccompanied child {r:?}");

    payment.fail_with(Some(PaymentError::Rejected("card declined".to_string())));
    let r = service.purchase_tickets(1003, &[TicketRequest::adults(1)]);
    println!("Declined card {r:?}");

    println!("Payments {:?}", payment.calls());
    println!("Reservations {:?}", booking.calls());
    Ok(())
}
