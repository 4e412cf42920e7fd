use serde::Serialize;
use crate::models::{Locale, StatusCategory, StatusKey};

/// Static metadata for one canonical status
///
/// `color` is an ANSI color name (`green`, `bright_black`, ...) and `icon` an
/// icon-set name; both are opaque to the model itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDefinition {
    pub key: StatusKey,
    pub label: &'static str,
    pub label_en: &'static str,
    pub category: StatusCategory,
    pub is_terminal: bool,
    pub progress: u8,
    pub color: &'static str,
    pub icon: &'static str,
}

impl StatusDefinition {
    pub fn label_for(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.label,
            Locale::En => self.label_en,
        }
    }
}

/// Derived presentation data for a canonical status. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub status: StatusKey,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub progress: u8,
    pub category: StatusCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatusDefinition {
        StatusDefinition {
            key: StatusKey::InTransit,
            label: "En camino",
            label_en: "In transit",
            category: StatusCategory::InProgress,
            is_terminal: false,
            progress: 80,
            color: "magenta",
            icon: "truck",
        }
    }

    #[test]
    fn test_label_for_locale() {
        let def = sample();
        assert_eq!(def.label_for(Locale::Es), "En camino");
        assert_eq!(def.label_for(Locale::En), "In transit");
    }

    #[test]
    fn test_classification_result_json_shape() {
        let result = ClassificationResult {
            status: StatusKey::InTransit,
            label: "En camino",
            color: "magenta",
            icon: "truck",
            progress: 80,
            category: StatusCategory::InProgress,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "IN_TRANSIT");
        assert_eq!(value["category"], "in_progress");
        assert_eq!(value["progress"], 80);
    }
}
