//! Disclosure prompt shown before the first analysis.

/// Storage key for the remembered consent. The stored value is `"true"`.
pub const CONSENT_KEY: &str = "skin_consent";

/// Durable home of the "don't ask again" choice.
pub trait ConsentStore {
    fn is_remembered(&self) -> bool;
    fn remember(&mut self);
}

/// Process-local store, useful for tests and non-browser hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsentStore {
    remembered: bool,
}

impl MemoryConsentStore {
    pub fn remembered() -> Self {
        Self { remembered: true }
    }
}

impl ConsentStore for MemoryConsentStore {
    fn is_remembered(&self) -> bool {
        self.remembered
    }

    fn remember(&mut self) {
        self.remembered = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Prompt,
}

#[derive(Debug)]
pub struct ConsentGate<S: ConsentStore> {
    store: S,
    granted: bool,
    prompting: bool,
}

impl<S: ConsentStore> ConsentGate<S> {
    /// Reads the store once; later store changes are not observed.
    pub fn new(store: S) -> Self {
        let granted = store.is_remembered();
        Self {
            store,
            granted,
            prompting: false,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn is_prompting(&self) -> bool {
        self.prompting
    }

    pub fn request(&mut self) -> GateDecision {
        if self.granted {
            GateDecision::Proceed
        } else {
            self.prompting = true;
            GateDecision::Prompt
        }
    }

    /// Grants consent for this session, persisting it only on request.
    pub fn accept(&mut self, dont_ask_again: bool) {
        self.granted = true;
        self.prompting = false;
        if dont_ask_again {
            self.store.remember();
        }
    }

    pub fn cancel(&mut self) {
        self.prompting = false;
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
