//! Browser localStorage slot for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single source of truth for "is a credential present". The
//! route guard re-reads it on every navigation rather than trusting any
//! cached logged-in flag, so clearing the slot takes effect on the very next
//! navigation. It is a dumb key/value slot: no expiry checks, no decoding.
//! Absence is a normal state, not an error.

/// Storage key for the token slot.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "doconcall_token";

/// Persist `token` in the slot, replacing any previous value.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Read the stored token, or `None` when the slot is empty or storage is
/// unavailable (SSR, disabled storage).
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove any stored token. Safe to call when the slot is already empty.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
