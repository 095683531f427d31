//! Session tokens persisted in `localStorage`.

use web_sys::{window, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenSlot {
    Access,
    Refresh,
}

impl TokenSlot {
    const ALL: [TokenSlot; 2] = [TokenSlot::Access, TokenSlot::Refresh];

    fn key(self) -> &'static str {
        match self {
            TokenSlot::Access => "seller_access_token",
            TokenSlot::Refresh => "seller_refresh_token",
        }
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn read(slot: TokenSlot) -> Option<String> {
    local_storage()?
        .get_item(slot.key())
        .ok()?
        .filter(|t| !t.is_empty())
}

fn write(slot: TokenSlot, token: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, {} not persisted", slot.key());
        return;
    };
    if storage.set_item(slot.key(), token).is_err() {
        log::warn!("failed to persist {}", slot.key());
    }
}

pub fn save_access_token(token: &str) {
    write(TokenSlot::Access, token);
}

pub fn get_access_token() -> Option<String> {
    read(TokenSlot::Access)
}

pub fn save_refresh_token(token: &str) {
    write(TokenSlot::Refresh, token);
}

pub fn get_refresh_token() -> Option<String> {
    read(TokenSlot::Refresh)
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for slot in TokenSlot::ALL {
            let _ = storage.remove_item(slot.key());
        }
    }
}

/// Window event fired when the backend rejects the stored session.
pub const SESSION_EXPIRED_EVENT: &str = "seller-session-expired";

/// Clears tokens and tells the auth provider the session is gone.
pub fn expire_session() {
    clear_tokens();
    let dispatched = window().and_then(|w| {
        let event = web_sys::Event::new(SESSION_EXPIRED_EVENT).ok()?;
        w.dispatch_event(&event).ok()
    });
    if dispatched.is_none() {
        log::warn!("could not announce session expiry");
    }
}
