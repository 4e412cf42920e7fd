use crate::models::StatusKey;
use crate::status::alias::AliasTable;
use crate::status::StatusError;

/// What to do with a non-blank status no alias matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPolicy {
    /// Map to PENDING and log a warning
    #[default]
    DefaultToPending,
    /// Report `StatusError::UnrecognizedStatus`
    Reject,
}

impl UnknownPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "default" => Some(UnknownPolicy::DefaultToPending),
            "reject" | "strict" => Some(UnknownPolicy::Reject),
            _ => None,
        }
    }
}

/// Turns whatever status string a caller has into a canonical key
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    table: &'a AliasTable,
    policy: UnknownPolicy,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Normalizer::new(AliasTable::builtin())
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(table: &'a AliasTable) -> Self {
        Self { table, policy: UnknownPolicy::default() }
    }

    pub fn with_policy(mut self, policy: UnknownPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownPolicy {
        self.policy
    }

    pub fn table(&self) -> &'a AliasTable {
        self.table
    }

    /// Always yields a key: missing or blank input is PENDING, and under
    /// `DefaultToPending` so is anything unrecognized.
    ///
    /// Under `Reject` an unrecognized value still yields PENDING here; use
    /// [`Normalizer::apply`] to see the rejection.
    pub fn normalize<'r>(&self, raw: impl Into<Option<&'r str>>) -> StatusKey {
        let Some(raw) = raw.into() else {
            return StatusKey::Pending;
        };
        if raw.trim().is_empty() {
            return StatusKey::Pending;
        }
        match self.table.resolve(raw) {
            Some(key) => key,
            None => {
                log::warn!("Unrecognized order status '{}', defaulting to {}", raw.trim(), StatusKey::Pending);
                StatusKey::Pending
            }
        }
    }

    /// Strict resolution: blank and unrecognized input are errors
    pub fn try_normalize(&self, raw: &str) -> Result<StatusKey, StatusError> {
        self.table
            .resolve(raw)
            .ok_or_else(|| StatusError::UnrecognizedStatus(raw.trim().to_string()))
    }

    /// Normalize according to the configured policy. Blank input is PENDING
    /// under either policy.
    pub fn apply(&self, raw: &str) -> Result<StatusKey, StatusError> {
        match self.policy {
            UnknownPolicy::DefaultToPending => Ok(self.normalize(raw)),
            UnknownPolicy::Reject if raw.trim().is_empty() => Ok(StatusKey::Pending),
            UnknownPolicy::Reject => self.try_normalize(raw),
        }
    }

    /// True when the raw value would fall back to PENDING without matching
    pub fn is_fallback(&self, raw: &str) -> bool {
        !raw.trim().is_empty() && self.table.resolve(raw).is_none()
    }
}

/// Normalize with the built-in alias table
pub fn normalize<'r>(raw: impl Into<Option<&'r str>>) -> StatusKey {
    Normalizer::default().normalize(raw)
}

/// Strict normalization with the built-in alias table
pub fn try_normalize(raw: &str) -> Result<StatusKey, StatusError> {
    Normalizer::default().try_normalize(raw)
}
