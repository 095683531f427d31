use contracts::domain::ticket::{RaiseTicketDto, Ticket, TicketPriority};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::tickets::api;
use crate::shared::form_input::opt_text;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};

fn build_ticket(subject: &str, message: &str, priority: &str, order_id: &str) -> Result<RaiseTicketDto, String> {
    let dto = RaiseTicketDto {
        subject: subject.trim().to_string(),
        message: message.trim().to_string(),
        priority: TicketPriority::from_code(priority).unwrap_or_default(),
        order_id: opt_text(order_id),
    };
    dto.validate().map_err(|e| e.to_string())?;
    Ok(dto)
}

#[component]
pub fn RaiseTicketForm() -> impl IntoView {
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let priority = RwSignal::new(TicketPriority::default().code().to_string());
    let order_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<Ticket>);
    let sending = RwSignal::new(false);

    let submit = move |_| {
        let dto = match build_ticket(
            &subject.get_untracked(),
            &message.get_untracked(),
            &priority.get_untracked(),
            &order_id.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        sending.set(true);
        spawn_local(async move {
            match api::raise_ticket(&dto).await {
                Ok(ticket) => {
                    log::info!("support ticket {} created", ticket.id);
                    subject.set(String::new());
                    message.set(String::new());
                    order_id.set(String::new());
                    submitted.set(Some(ticket));
                }
                Err(e) => error.set(Some(format!("Failed to send ticket: {}", e))),
            }
            sending.set(false);
        });
    };

    view! {
        <PageFrame page_id="raise-ticket--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Raise a ticket"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || submitted.get().map(|t| view! {
                    <div class="alert alert--success">
                        {format!("Ticket \"{}\" sent on {}. Status: {}.", t.subject, format_datetime(&t.created_at), t.status)}
                    </div>
                })}

                <div class="form__grid">
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Subject"</label>
                        <Input value=subject placeholder="Short summary" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Priority"</label>
                        <Select value=priority>
                            {TicketPriority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Related order"</label>
                        <Input value=order_id placeholder="Order number (optional)" />
                    </div>
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Message"</label>
                        <Textarea value=message placeholder="Describe the issue" />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || sending.get())
                        >
                            {icon("send")}
                            " Send"
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ticket() {
        let dto = build_ticket(" Late payout ", "Payout for March never arrived", "high", "").unwrap();
        assert_eq!(dto.subject, "Late payout");
        assert_eq!(dto.priority, TicketPriority::High);
        assert_eq!(dto.order_id, None);
    }

    #[test]
    fn test_build_ticket_rejects_short_message() {
        assert!(build_ticket("Help", "short", "normal", "").is_err());
        assert_eq!(
            build_ticket("", "long enough message", "normal", "").unwrap_err(),
            "Subject is required"
        );
    }

    #[test]
    fn test_unknown_priority_defaults_to_normal() {
        let dto = build_ticket("Subject", "long enough message", "urgent", "A-1").unwrap();
        assert_eq!(dto.priority, TicketPriority::Normal);
        assert_eq!(dto.order_id.as_deref(), Some("A-1"));
    }
}
