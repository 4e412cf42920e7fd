use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical order status key
///
/// Every status string the marketplace sees (web app records, logistics
/// webhooks, legacy rows) is normalized to exactly one of these. Variants are
/// declared in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKey {
    Pending,
    Confirmed,
    NotAssigned,
    NotAccepted,
    Assigned,
    Started,
    PickedUp,
    ReadyToDeliver,
    InTransit,
    Arrived,
    Delivered,
    Completed,
    Cancelled,
    Failed,
    FailedDelivery,
    Incomplete,
}

impl StatusKey {
    /// All canonical keys in workflow order
    pub const ALL: [StatusKey; 16] = [
        StatusKey::Pending,
        StatusKey::Confirmed,
        StatusKey::NotAssigned,
        StatusKey::NotAccepted,
        StatusKey::Assigned,
        StatusKey::Started,
        StatusKey::PickedUp,
        StatusKey::ReadyToDeliver,
        StatusKey::InTransit,
        StatusKey::Arrived,
        StatusKey::Delivered,
        StatusKey::Completed,
        StatusKey::Cancelled,
        StatusKey::Failed,
        StatusKey::FailedDelivery,
        StatusKey::Incomplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Pending => "PENDING",
            StatusKey::Confirmed => "CONFIRMED",
            StatusKey::NotAssigned => "NOT_ASSIGNED",
            StatusKey::NotAccepted => "NOT_ACCEPTED",
            StatusKey::Assigned => "ASSIGNED",
            StatusKey::Started => "STARTED",
            StatusKey::PickedUp => "PICKED_UP",
            StatusKey::ReadyToDeliver => "READY_TO_DELIVER",
            StatusKey::InTransit => "IN_TRANSIT",
            StatusKey::Arrived => "ARRIVED",
            StatusKey::Delivered => "DELIVERED",
            StatusKey::Completed => "COMPLETED",
            StatusKey::Cancelled => "CANCELLED",
            StatusKey::Failed => "FAILED",
            StatusKey::FailedDelivery => "FAILED_DELIVERY",
            StatusKey::Incomplete => "INCOMPLETE",
        }
    }

    /// Parse an exact canonical key. Aliases and case variants go through
    /// the normalizer instead.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == s)
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse bucket used for filtering and UI grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::Pending,
        StatusCategory::InProgress,
        StatusCategory::Completed,
        StatusCategory::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Pending => "pending",
            StatusCategory::InProgress => "in_progress",
            StatusCategory::Completed => "completed",
            StatusCategory::Cancelled => "cancelled",
        }
    }

    /// Accepts `in_progress`, `in-progress` and `inprogress`, any case
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Some(StatusCategory::Pending),
            "in_progress" | "inprogress" => Some(StatusCategory::InProgress),
            "completed" => Some(StatusCategory::Completed),
            "cancelled" | "canceled" => Some(StatusCategory::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display language for status labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "es" | "es-mx" | "es_mx" => Some(Locale::Es),
            "en" | "en-us" | "en_us" => Some(Locale::En),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_key_conversion() {
        assert_eq!(StatusKey::PickedUp.as_str(), "PICKED_UP");
        assert_eq!(StatusKey::from_str("PICKED_UP"), Some(StatusKey::PickedUp));
        assert_eq!(StatusKey::from_str("FAILED_DELIVERY"), Some(StatusKey::FailedDelivery));
        // Strict: no case folding here
        assert_eq!(StatusKey::from_str("picked_up"), None);
        assert_eq!(StatusKey::from_str(""), None);
    }

    #[test]
    fn test_all_keys_round_trip_through_as_str() {
        for key in StatusKey::ALL {
            assert_eq!(StatusKey::from_str(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_status_key_serde() {
        let json = serde_json::to_string(&StatusKey::ReadyToDeliver).unwrap();
        assert_eq!(json, "\"READY_TO_DELIVER\"");
        let parsed: StatusKey = serde_json::from_str("\"NOT_ASSIGNED\"").unwrap();
        assert_eq!(parsed, StatusKey::NotAssigned);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(StatusCategory::from_str("pending"), Some(StatusCategory::Pending));
        assert_eq!(StatusCategory::from_str("In-Progress"), Some(StatusCategory::InProgress));
        assert_eq!(StatusCategory::from_str("canceled"), Some(StatusCategory::Cancelled));
        assert_eq!(StatusCategory::from_str("unknown"), None);
        assert!(StatusCategory::Completed.is_terminal());
        assert!(!StatusCategory::InProgress.is_terminal());
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(Locale::from_str("EN"), Some(Locale::En));
        assert_eq!(Locale::from_str("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_str("fr"), None);
    }
}
