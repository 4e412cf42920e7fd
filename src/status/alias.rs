use std::collections::HashMap;
use std::sync::OnceLock;
use crate::models::StatusKey;
use crate::status::catalog::Catalog;
use crate::status::StatusError;

/// Historical, Spanish, and logistics-provider spellings of canonical keys.
/// Canonical keys themselves are registered automatically.
pub const BUILTIN_SYNONYMS: &[(&str, StatusKey)] = &[
    ("NEW", StatusKey::Pending),
    ("CREATED", StatusKey::Pending),
    ("PENDIENTE", StatusKey::Pending),
    ("CONFIRMADO", StatusKey::Confirmed),
    ("UNASSIGNED", StatusKey::NotAssigned),
    ("SIN_ASIGNAR", StatusKey::NotAssigned),
    ("NOT_ACCEPTED_YET", StatusKey::NotAccepted),
    ("ACCEPTED", StatusKey::Assigned),
    ("NOT_STARTED_YET", StatusKey::Assigned),
    ("DRIVER_ASSIGNED", StatusKey::Assigned),
    ("ASIGNADO", StatusKey::Assigned),
    ("ACTIVE", StatusKey::Started),
    ("GOING_TO_PICKUP", StatusKey::Started),
    ("RECOGIDO", StatusKey::PickedUp),
    ("READY_FOR_DELIVERY", StatusKey::ReadyToDeliver),
    ("ON_THE_WAY", StatusKey::InTransit),
    ("OUT_FOR_DELIVERY", StatusKey::InTransit),
    ("DELIVERING", StatusKey::InTransit),
    ("EN_CAMINO", StatusKey::InTransit),
    ("AT_DESTINATION", StatusKey::Arrived),
    ("EN_DESTINO", StatusKey::Arrived),
    ("ALREADY_DELIVERED", StatusKey::Delivered),
    ("ENTREGADO", StatusKey::Delivered),
    ("FINISHED", StatusKey::Completed),
    ("DONE", StatusKey::Completed),
    ("COMPLETADO", StatusKey::Completed),
    ("CANCELED", StatusKey::Cancelled),
    ("CANCELADO", StatusKey::Cancelled),
    ("FALLIDO", StatusKey::Failed),
    ("DELIVERY_FAILED", StatusKey::FailedDelivery),
    ("INCOMPLETO", StatusKey::Incomplete),
];

/// Fold a raw status into lookup form: trimmed, uppercased, with `-` and
/// spaces mapped to `_`. Returns None for blank input.
pub fn fold_alias(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let folded = trimmed
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_uppercase();
    Some(folded)
}

/// Case-insensitive lookup from raw status spellings to canonical keys
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, StatusKey>,
}

impl AliasTable {
    /// The built-in table, constructed once on first use
    pub fn builtin() -> &'static AliasTable {
        static BUILTIN: OnceLock<AliasTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::build(BUILTIN_SYNONYMS.iter().map(|(alias, key)| (alias.to_string(), *key)))
                .expect("built-in status aliases must be unambiguous")
        })
    }

    /// Built-in aliases plus additional synonyms (e.g. from the rc file)
    pub fn with_extra<I>(extra: I) -> Result<AliasTable, StatusError>
    where
        I: IntoIterator<Item = (String, StatusKey)>,
    {
        let builtin = BUILTIN_SYNONYMS.iter().map(|(alias, key)| (alias.to_string(), *key));
        Self::build(builtin.chain(extra))
    }

    fn build<I>(synonyms: I) -> Result<AliasTable, StatusError>
    where
        I: IntoIterator<Item = (String, StatusKey)>,
    {
        let mut table = AliasTable { entries: HashMap::new() };

        for def in Catalog::list_definitions() {
            table.insert(def.key.as_str(), def.key)?;
        }
        for (alias, key) in synonyms {
            table.insert(&alias, key)?;
        }

        table.verify()?;
        log::debug!("Built status alias table with {} entries", table.entries.len());
        Ok(table)
    }

    fn insert(&mut self, alias: &str, key: StatusKey) -> Result<(), StatusError> {
        let folded = fold_alias(alias).ok_or_else(|| StatusError::InvalidAlias(alias.to_string()))?;
        match self.entries.get(&folded) {
            Some(existing) if *existing != key => Err(StatusError::AmbiguousAlias {
                alias: folded,
                existing: *existing,
                conflicting: key,
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(folded, key);
                Ok(())
            }
        }
    }

    /// Resolve a raw spelling. Blank input and unknown spellings give None.
    pub fn resolve(&self, raw: &str) -> Option<StatusKey> {
        let folded = fold_alias(raw)?;
        self.entries.get(&folded).copied()
    }

    /// Every canonical key must resolve to itself
    pub fn verify(&self) -> Result<(), StatusError> {
        for key in StatusKey::ALL {
            if self.resolve(key.as_str()) != Some(key) {
                return Err(StatusError::MissingSelfAlias(key));
            }
        }
        Ok(())
    }

    /// All registered spellings of a key, sorted
    pub fn aliases_for(&self, key: StatusKey) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.entries
            .iter()
            .filter(|(_, k)| **k == key)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// All registered spellings, for suggestion lookups
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
