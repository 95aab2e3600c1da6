//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of objects
//! under an odonto data directory.

use uuid::Uuid;

use crate::models::chart::DentitionScheme;

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

pub fn chart(patient_id: Uuid, scheme: DentitionScheme) -> String {
    format!("charts/{patient_id}/{scheme}.json")
}

pub fn chart_history(patient_id: Uuid) -> String {
    format!("charts/{patient_id}/history.json")
}

pub fn reminders(patient_id: Uuid) -> String {
    format!("reminders/{patient_id}.json")
}

pub fn private_notes(patient_id: Uuid) -> String {
    format!("notes/{patient_id}.json")
}
