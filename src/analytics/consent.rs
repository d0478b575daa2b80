use std::sync::Mutex;

/// Analytics consent choice, read before every tracking call
///
/// There is no default auto-grant: an absent or unrecognized stored value is
/// `Unset`, which gates everything off just like an explicit denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    /// Both analytics sinks enabled
    All,
    /// Lightweight first-party sink only
    Necessary,
    /// No sinks
    Denied,
    /// Never chosen (or stored value unrecognized); no sinks
    Unset,
}

impl Consent {
    /// Decode a stored consent string
    ///
    /// The legacy value "granted" predates the tri-state choice and maps to
    /// `All`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("all") | Some("granted") => Consent::All,
            Some("necessary") => Consent::Necessary,
            Some("denied") => Consent::Denied,
            _ => Consent::Unset,
        }
    }

    /// Stored representation; `Unset` has none (the key is cleared)
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Consent::All => Some("all"),
            Consent::Necessary => Some("necessary"),
            Consent::Denied => Some("denied"),
            Consent::Unset => None,
        }
    }

    /// Whether the heavier product-analytics sink may run
    pub fn allows_product_analytics(self) -> bool {
        self == Consent::All
    }

    /// Whether the lightweight stats sink may run
    pub fn allows_stats(self) -> bool {
        matches!(self, Consent::All | Consent::Necessary)
    }
}

/// Persistence for the single consent value
///
/// A browser host implements this over local storage; tests and native hosts
/// use [`MemoryConsentStore`]. Loads are synchronous and infallible: storage
/// failures read as `Unset`.
pub trait ConsentStore: Send + Sync {
    fn load(&self) -> Consent;
    fn store(&self, choice: Consent);
}

/// In-memory consent store emulating a single local-storage key
#[derive(Default)]
pub struct MemoryConsentStore {
    value: Mutex<Option<String>>,
}

impl MemoryConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored value, as if written by an earlier session
    pub fn with_raw_value(raw: &str) -> Self {
        Self {
            value: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> Consent {
        let guard = self.value.lock().expect("consent store lock poisoned");
        Consent::from_stored(guard.as_deref())
    }

    fn store(&self, choice: Consent) {
        let mut guard = self.value.lock().expect("consent store lock poisoned");
        *guard = choice.as_stored().map(str::to_string);
    }
}
