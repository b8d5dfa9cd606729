use gloo_storage::{LocalStorage, Storage};
use shared::{CONSENT_KEY, ConsentStore};

/// Keeps the "don't ask again" choice in `localStorage`. The stored value is
/// the JSON literal `true`.
#[derive(Debug, Default)]
pub struct LocalConsentStore;

impl ConsentStore for LocalConsentStore {
    fn is_remembered(&self) -> bool {
        LocalStorage::get::<bool>(CONSENT_KEY).unwrap_or(false)
    }

    fn remember(&mut self) {
        if let Err(e) = LocalStorage::set(CONSENT_KEY, true) {
            log::warn!("Could not persist consent: {:?}", e);
        }
    }
}
