use contracts::domain::ticket::{RaiseTicketDto, Ticket};

use crate::shared::api_utils::{post_json, ApiError};

pub async fn raise_ticket(dto: &RaiseTicketDto) -> Result<Ticket, ApiError> {
    post_json("/api/seller/tickets", dto).await
}
