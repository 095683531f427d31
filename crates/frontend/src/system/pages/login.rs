use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

/// Trimmed credentials, or the message to show instead.
fn credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    Ok((email.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let signing_in = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        let (email_val, password_val) =
            match credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(c) => c,
                Err(msg) => {
                    error.set(Some(msg.to_string()));
                    return;
                }
            };
        signing_in.set(true);
        error.set(None);
        spawn_local(async move {
            // success flips the auth gate to the dashboard shell
            if let Err(e) = do_login(email_val, password_val, set_auth_state).await {
                error.set(Some(format!("Sign in failed: {}", e)));
                password.set(String::new());
            }
            signing_in.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form
                class="login-box"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1>"Seller Center"</h1>
                <h2>"Sign in to your store"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=email input_type=InputType::Email placeholder="you@store.com" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Password"</label>
                    <Input value=password input_type=InputType::Password />
                </div>

                <button type="submit" class="btn-primary" disabled=move || signing_in.get()>
                    {move || if signing_in.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials() {
        assert_eq!(
            credentials(" a@shop.io ", "pw"),
            Ok(("a@shop.io".to_string(), "pw".to_string()))
        );
        assert_eq!(credentials("", "pw"), Err("Email and password are required"));
        assert_eq!(credentials("a@shop.io", ""), Err("Email and password are required"));
        assert_eq!(credentials("shop", "pw"), Err("Enter a valid email address"));
    }
}
