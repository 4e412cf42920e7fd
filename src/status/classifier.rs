use std::collections::{BTreeMap, BTreeSet};
use serde::Serialize;
use crate::models::{ClassificationResult, Locale, StatusCategory, StatusDefinition, StatusKey};
use crate::status::catalog::Catalog;
use crate::status::normalizer::Normalizer;

/// Terminal keys that count as cancellations rather than completions
const CANCELLATION_KEYS: &[StatusKey] = &[
    StatusKey::Cancelled,
    StatusKey::Failed,
    StatusKey::FailedDelivery,
    StatusKey::Incomplete,
];

/// Non-terminal keys for orders no driver has started on yet
const NOT_STARTED_KEYS: &[StatusKey] = &[
    StatusKey::Pending,
    StatusKey::Confirmed,
    StatusKey::NotAssigned,
    StatusKey::NotAccepted,
];

/// Category rule shared by the classifier and the catalog self-test
pub(crate) fn derive_category(key: StatusKey, is_terminal: bool) -> StatusCategory {
    if is_terminal {
        if CANCELLATION_KEYS.contains(&key) {
            StatusCategory::Cancelled
        } else {
            StatusCategory::Completed
        }
    } else if NOT_STARTED_KEYS.contains(&key) {
        StatusCategory::Pending
    } else {
        StatusCategory::InProgress
    }
}

/// Catalog entry for a key. A miss means the catalog itself is broken.
pub fn definition(key: StatusKey) -> &'static StatusDefinition {
    match Catalog::get(key) {
        Ok(def) => def,
        Err(e) => {
            debug_assert!(false, "{}", e);
            log::error!("{}; using {} definition", e, StatusKey::Pending);
            &Catalog::list_definitions()[0]
        }
    }
}

pub fn classify(key: StatusKey) -> ClassificationResult {
    classify_in(key, Locale::default())
}

pub fn classify_in(key: StatusKey, locale: Locale) -> ClassificationResult {
    let def = definition(key);
    ClassificationResult {
        status: def.key,
        label: def.label_for(locale),
        color: def.color,
        icon: def.icon,
        progress: def.progress,
        category: category(key),
    }
}

pub fn category(key: StatusKey) -> StatusCategory {
    derive_category(key, definition(key).is_terminal)
}

pub fn is_active(key: StatusKey) -> bool {
    matches!(category(key), StatusCategory::Pending | StatusCategory::InProgress)
}

pub fn is_completed(key: StatusKey) -> bool {
    category(key) == StatusCategory::Completed
}

/// Cancellation is only allowed before the order leaves the Pending category
pub fn can_cancel(key: StatusKey) -> bool {
    category(key) == StatusCategory::Pending
}

pub fn progress(key: StatusKey) -> u8 {
    definition(key).progress
}

impl StatusKey {
    pub fn definition(&self) -> &'static StatusDefinition {
        definition(*self)
    }

    pub fn category(&self) -> StatusCategory {
        category(*self)
    }

    pub fn is_active(&self) -> bool {
        is_active(*self)
    }

    pub fn is_completed(&self) -> bool {
        is_completed(*self)
    }

    pub fn can_cancel(&self) -> bool {
        can_cancel(*self)
    }

    pub fn progress(&self) -> u8 {
        progress(*self)
    }

    pub fn classify(&self) -> ClassificationResult {
        classify(*self)
    }
}

/// Counts of a batch of raw statuses after normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub by_category: BTreeMap<StatusCategory, usize>,
    pub by_status: BTreeMap<StatusKey, usize>,
    /// Non-blank inputs that matched no alias and defaulted to PENDING
    pub fallbacks: usize,
    pub unrecognized: BTreeSet<String>,
}

impl StatusSummary {
    pub fn count(&self, category: StatusCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn active(&self) -> usize {
        self.count(StatusCategory::Pending) + self.count(StatusCategory::InProgress)
    }
}

/// Normalize and tally a batch of raw statuses
pub fn summarize<'r, I>(normalizer: &Normalizer<'_>, raws: I) -> StatusSummary
where
    I: IntoIterator<Item = &'r str>,
{
    let mut summary = StatusSummary::default();
    for raw in raws {
        if normalizer.is_fallback(raw) {
            summary.fallbacks += 1;
            summary.unrecognized.insert(raw.trim().to_string());
        }
        let key = normalizer.normalize(raw);
        summary.total += 1;
        *summary.by_status.entry(key).or_insert(0) += 1;
        *summary.by_category.entry(category(key)).or_insert(0) += 1;
    }
    summary
}
