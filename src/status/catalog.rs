use crate::models::{StatusCategory, StatusDefinition, StatusKey};
use crate::status::classifier::derive_category;
use crate::status::StatusError;

#[allow(clippy::too_many_arguments)]
const fn def(
    key: StatusKey,
    label: &'static str,
    label_en: &'static str,
    category: StatusCategory,
    is_terminal: bool,
    progress: u8,
    color: &'static str,
    icon: &'static str,
) -> StatusDefinition {
    StatusDefinition { key, label, label_en, category, is_terminal, progress, color, icon }
}

use StatusCategory::{Cancelled, Completed, InProgress, Pending};

// Workflow order. Must line up with StatusKey::ALL (checked by Catalog::verify).
static DEFINITIONS: [StatusDefinition; 16] = [
    def(StatusKey::Pending, "Pendiente", "Pending", Pending, false, 0, "yellow", "clock"),
    def(StatusKey::Confirmed, "Confirmado", "Confirmed", Pending, false, 10, "blue", "check"),
    def(StatusKey::NotAssigned, "Sin asignar", "Not assigned", Pending, false, 15, "bright_yellow", "user-x"),
    def(StatusKey::NotAccepted, "Sin aceptar", "Not accepted", Pending, false, 20, "bright_yellow", "user-minus"),
    def(StatusKey::Assigned, "Asignado", "Assigned", InProgress, false, 30, "cyan", "user-check"),
    def(StatusKey::Started, "Iniciado", "Started", InProgress, false, 40, "cyan", "play"),
    def(StatusKey::PickedUp, "Recogido", "Picked up", InProgress, false, 60, "blue", "package"),
    def(StatusKey::ReadyToDeliver, "Listo para entregar", "Ready to deliver", InProgress, false, 70, "blue", "package-check"),
    def(StatusKey::InTransit, "En camino", "In transit", InProgress, false, 80, "magenta", "truck"),
    def(StatusKey::Arrived, "En destino", "Arrived", InProgress, false, 90, "magenta", "map-pin"),
    def(StatusKey::Delivered, "Entregado", "Delivered", Completed, true, 100, "green", "check-circle"),
    def(StatusKey::Completed, "Completado", "Completed", Completed, true, 100, "bright_green", "badge-check"),
    def(StatusKey::Cancelled, "Cancelado", "Cancelled", Cancelled, true, 0, "bright_black", "x-circle"),
    def(StatusKey::Failed, "Fallido", "Failed", Cancelled, true, 0, "red", "alert-circle"),
    def(StatusKey::FailedDelivery, "Entrega fallida", "Failed delivery", Cancelled, true, 0, "red", "alert-triangle"),
    def(StatusKey::Incomplete, "Incompleto", "Incomplete", Cancelled, true, 0, "bright_red", "circle-slash"),
];

/// The fixed table of canonical status definitions
pub struct Catalog;

impl Catalog {
    /// All definitions in workflow order
    pub fn list_definitions() -> &'static [StatusDefinition] {
        &DEFINITIONS
    }

    /// Definition for a canonical key
    pub fn get(key: StatusKey) -> Result<&'static StatusDefinition, StatusError> {
        DEFINITIONS
            .iter()
            .find(|d| d.key == key)
            .ok_or_else(|| StatusError::UnknownStatusKey(key.as_str().to_string()))
    }

    /// Definition for an exact canonical key string (no alias handling)
    pub fn lookup(key: &str) -> Result<&'static StatusDefinition, StatusError> {
        let parsed = StatusKey::from_str(key)
            .ok_or_else(|| StatusError::UnknownStatusKey(key.to_string()))?;
        Self::get(parsed)
    }

    /// Definitions whose category matches, in workflow order
    pub fn by_category(category: StatusCategory) -> impl Iterator<Item = &'static StatusDefinition> {
        DEFINITIONS.iter().filter(move |d| d.category == category)
    }

    /// Self-test: one entry per key in workflow order, progress in range,
    /// stored category agreeing with the classifier's derivation.
    pub fn verify() -> Result<(), StatusError> {
        if DEFINITIONS.len() != StatusKey::ALL.len() {
            return Err(StatusError::CatalogMismatch(format!(
                "{} definitions for {} keys",
                DEFINITIONS.len(),
                StatusKey::ALL.len()
            )));
        }

        for (entry, key) in DEFINITIONS.iter().zip(StatusKey::ALL) {
            if entry.key != key {
                return Err(StatusError::CatalogMismatch(format!(
                    "expected {} in workflow position, found {}",
                    key, entry.key
                )));
            }
            if entry.progress > 100 {
                return Err(StatusError::CatalogMismatch(format!(
                    "{} has progress {} (must be 0-100)",
                    entry.key, entry.progress
                )));
            }
            if entry.is_terminal != entry.category.is_terminal() {
                return Err(StatusError::CatalogMismatch(format!(
                    "{} terminal flag disagrees with category {}",
                    entry.key, entry.category
                )));
            }
            let derived = derive_category(entry.key, entry.is_terminal);
            if derived != entry.category {
                return Err(StatusError::CatalogMismatch(format!(
                    "{} is declared {} but derives as {}",
                    entry.key, entry.category, derived
                )));
            }
        }

        Ok(())
    }
}
