use contracts::domain::seller::{PayoutAccount, SellerSettings};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::settings::api;
use crate::shared::form_input::opt_text;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};

#[derive(Debug, Clone, Default, PartialEq)]
struct PayoutFields {
    account_holder: String,
    bank_name: String,
    account_number: String,
    routing_code: String,
}

impl PayoutFields {
    /// All-blank fields mean "no payout account".
    fn to_account(&self) -> Result<Option<PayoutAccount>, String> {
        let holder = self.account_holder.trim();
        let bank = self.bank_name.trim();
        let number: String = self.account_number.split_whitespace().collect();
        if holder.is_empty() && bank.is_empty() && number.is_empty() {
            return Ok(None);
        }
        if holder.is_empty() || bank.is_empty() || number.is_empty() {
            return Err("Payout account needs holder, bank and account number".to_string());
        }
        Ok(Some(PayoutAccount {
            account_holder: holder.to_string(),
            bank_name: bank.to_string(),
            account_number: number,
            routing_code: opt_text(&self.routing_code),
        }))
    }
}

#[component]
pub fn SettingsForm() -> impl IntoView {
    let store_name = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let store_description = RwSignal::new(String::new());
    let order_notifications = RwSignal::new(false);

    let account_holder = RwSignal::new(String::new());
    let bank_name = RwSignal::new(String::new());
    let account_number = RwSignal::new(String::new());
    let routing_code = RwSignal::new(String::new());
    // Shown instead of the stored number until the seller types a new one
    let masked_number = RwSignal::new(None::<String>);

    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let loading = RwSignal::new(true);

    let apply = move |s: SellerSettings| {
        store_name.set(s.store_name);
        contact_email.set(s.contact_email);
        phone.set(s.phone.unwrap_or_default());
        address.set(s.address.unwrap_or_default());
        store_description.set(s.store_description.unwrap_or_default());
        order_notifications.set(s.order_notifications);
        match s.payout {
            Some(p) => {
                masked_number.set(Some(p.masked_number()));
                account_holder.set(p.account_holder);
                bank_name.set(p.bank_name);
                account_number.set(p.account_number);
                routing_code.set(p.routing_code.unwrap_or_default());
            }
            None => masked_number.set(None),
        }
    };

    spawn_local(async move {
        match api::fetch_settings().await {
            Ok(s) => apply(s),
            Err(e) => error.set(Some(format!("Failed to load settings: {}", e))),
        }
        loading.set(false);
    });

    let handle_save = move |_| {
        saved.set(false);
        let payout = PayoutFields {
            account_holder: account_holder.get_untracked(),
            bank_name: bank_name.get_untracked(),
            account_number: account_number.get_untracked(),
            routing_code: routing_code.get_untracked(),
        }
        .to_account();
        let payout = match payout {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let dto = SellerSettings {
            store_name: store_name.get_untracked().trim().to_string(),
            contact_email: contact_email.get_untracked().trim().to_string(),
            phone: opt_text(&phone.get_untracked()),
            address: opt_text(&address.get_untracked()),
            store_description: opt_text(&store_description.get_untracked()),
            payout,
            order_notifications: order_notifications.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::save_settings(&dto).await {
                Ok(s) => {
                    apply(s);
                    saved.set(true);
                }
                Err(e) => error.set(Some(format!("Failed to save settings: {}", e))),
            }
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="settings--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get() || loading.get())
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || saved.get()>
                    <div class="alert alert--success">"Settings saved."</div>
                </Show>

                <h2 class="section__title">"Store"</h2>
                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Store name"</label>
                        <Input value=store_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Contact email"</label>
                        <Input value=contact_email input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Phone"</label>
                        <Input value=phone placeholder="Optional" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Address"</label>
                        <Input value=address placeholder="Optional" />
                    </div>
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"About the store"</label>
                        <Textarea value=store_description placeholder="Optional" />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=order_notifications label="Email me about new orders" />
                    </div>
                </div>

                <h2 class="section__title">"Payout account"</h2>
                {move || masked_number.get().map(|m| view! {
                    <p class="page__hint">"Current account: "{m}</p>
                })}
                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"Account holder"</label>
                        <Input value=account_holder />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Bank"</label>
                        <Input value=bank_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Account number"</label>
                        <Input value=account_number />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Routing code"</label>
                        <Input value=routing_code placeholder="Optional" />
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
    fn test_blank_payout_is_none() {
        assert_eq!(PayoutFields::default().to_account(), Ok(None));
    }

    #[test]
    fn test_partial_payout_is_rejected() {
        let fields = PayoutFields {
            account_holder: "Jane Doe".into(),
            ..Default::default()
        };
        assert!(fields.to_account().is_err());
    }

    #[test]
    fn test_payout_number_whitespace_removed() {
        let fields = PayoutFields {
            account_holder: " Jane Doe ".into(),
            bank_name: "First Bank".into(),
            account_number: "1234 5678 90".into(),
            routing_code: "".into(),
        };
        let account = fields.to_account().unwrap().unwrap();
        assert_eq!(account.account_number, "1234567890");
        assert_eq!(account.account_holder, "Jane Doe");
        assert_eq!(account.routing_code, None);
    }
}
