use contracts::system::auth::SellerInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub seller: Option<SellerInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(state) = restore_session().await {
                set_auth_state.set(state);
            }
        });
    });

    // A 401 anywhere drops the session and sends the user back to login
    let expired = window_event_listener_untyped(storage::SESSION_EXPIRED_EVENT, move |_| {
        set_auth_state.set(AuthState::default());
    });
    on_cleanup(move || expired.remove());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Validates the stored access token, falling back to the refresh token.
/// Clears storage when neither works.
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    match api::get_current_seller(&access_token).await {
        Ok(seller) => {
            log::info!("session restored for {}", seller.email);
            return Some(AuthState {
                access_token: Some(access_token),
                seller: Some(seller),
            });
        }
        Err(e) if e.is_unauthorized() => log::warn!("stored access token rejected: {}", e),
        Err(e) => {
            // backend unreachable: keep the tokens for the next start
            log::warn!("session check failed: {}", e);
            return None;
        }
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            let seller = api::get_current_seller(&response.access_token).await.ok()?;
            Some(AuthState {
                access_token: Some(response.access_token),
                seller: Some(seller),
            })
        }
        Err(e) => {
            log::warn!("token refresh failed: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    log::info!("signed in as {}", response.seller.email);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        seller: Some(response.seller),
    });

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
