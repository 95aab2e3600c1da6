use odonto_chart::ToothChange;
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::note::PrivateNote;
use odonto_core::models::reminder::{Reminder, ReminderStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityType {
    Patient,
    /// Reminders and other scheduling attached to the patient's record.
    ClinicalRecord,
    DentalChart,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryAction {
    Created,
    Updated,
    Deleted,
}

/// One line of a patient's edit history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub action: HistoryAction,
    pub field_changed: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: String,
    pub timestamp: jiff::Timestamp,
    pub description: String,
}

impl HistoryEntry {
    /// A condition change is recorded against `tooth_status`; a notes-only
    /// edit is recorded against `notes` with the old and new text.
    pub fn tooth_changed(patient_id: Uuid, change: &ToothChange, changed_by: impl Into<String>) -> Self {
        let n = change.number;
        let from = change.previous.status;
        let to = change.current.status;

        let (field, old_value, new_value, description) = if change.condition_changed() {
            let mut description = format!("Tooth {n} changed from {} to {}", from.label(), to.label());
            if change.notes_changed() {
                description.push_str(" (notes updated)");
            }
            ("tooth_status", Some(from.as_str().to_string()), Some(to.as_str().to_string()), description)
        } else if change.notes_changed() {
            (
                "notes",
                non_empty(&change.previous.notes),
                non_empty(&change.current.notes),
                format!("Notes updated on tooth {n}"),
            )
        } else {
            (
                "tooth_status",
                Some(from.as_str().to_string()),
                Some(to.as_str().to_string()),
                format!("Tooth {n} saved as {}", to.label()),
            )
        };

        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::DentalChart,
            entity_id: patient_id,
            action: HistoryAction::Updated,
            field_changed: Some(field.to_string()),
            old_value,
            new_value,
            changed_by: changed_by.into(),
            timestamp: change.current.last_updated,
            description,
        }
    }

    pub fn chart_created(
        patient_id: Uuid,
        scheme: DentitionScheme,
        changed_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::DentalChart,
            entity_id: patient_id,
            action: HistoryAction::Created,
            field_changed: None,
            old_value: None,
            new_value: Some(scheme.to_string()),
            changed_by: changed_by.into(),
            timestamp: jiff::Timestamp::now(),
            description: format!("New {scheme} dental chart created"),
        }
    }

    pub fn chart_deleted(
        patient_id: Uuid,
        scheme: DentitionScheme,
        changed_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::DentalChart,
            entity_id: patient_id,
            action: HistoryAction::Deleted,
            field_changed: None,
            old_value: Some(scheme.to_string()),
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: jiff::Timestamp::now(),
            description: format!("{scheme} dental chart deleted"),
        }
    }

    pub fn patient_created(patient_id: Uuid, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::Patient,
            entity_id: patient_id,
            action: HistoryAction::Created,
            field_changed: None,
            old_value: None,
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: jiff::Timestamp::now(),
            description: "Patient registered".to_string(),
        }
    }

    pub fn reminder_created(reminder: &Reminder, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::ClinicalRecord,
            entity_id: reminder.id,
            action: HistoryAction::Created,
            field_changed: None,
            old_value: None,
            new_value: Some(reminder.kind.to_string()),
            changed_by: changed_by.into(),
            timestamp: reminder.created_at,
            description: format!(
                "{} reminder scheduled for {}: {}",
                reminder.kind.label(),
                reminder.reminder_date,
                reminder.title
            ),
        }
    }

    pub fn reminder_status_changed(
        reminder: &Reminder,
        previous: ReminderStatus,
        changed_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::ClinicalRecord,
            entity_id: reminder.id,
            action: HistoryAction::Updated,
            field_changed: Some("status".to_string()),
            old_value: Some(previous.to_string()),
            new_value: Some(reminder.status.to_string()),
            changed_by: changed_by.into(),
            timestamp: reminder.completed_at.unwrap_or_else(jiff::Timestamp::now),
            description: format!("Reminder marked {}: {}", reminder.status, reminder.title),
        }
    }

    pub fn reminder_deleted(reminder: &Reminder, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::ClinicalRecord,
            entity_id: reminder.id,
            action: HistoryAction::Deleted,
            field_changed: None,
            old_value: Some(reminder.title.clone()),
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: jiff::Timestamp::now(),
            description: format!("Reminder deleted: {}", reminder.title),
        }
    }

    /// Note text is never copied into history.
    pub fn note_created(note: &PrivateNote, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::Note,
            entity_id: note.id,
            action: HistoryAction::Created,
            field_changed: None,
            old_value: None,
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: note.created_at,
            description: note_description(note, "added"),
        }
    }

    pub fn note_edited(note: &PrivateNote, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::Note,
            entity_id: note.id,
            action: HistoryAction::Updated,
            field_changed: Some("content".to_string()),
            old_value: None,
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: note.updated_at,
            description: note_description(note, "edited"),
        }
    }

    pub fn note_deleted(note: &PrivateNote, changed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: EntityType::Note,
            entity_id: note.id,
            action: HistoryAction::Deleted,
            field_changed: None,
            old_value: None,
            new_value: None,
            changed_by: changed_by.into(),
            timestamp: jiff::Timestamp::now(),
            description: note_description(note, "deleted"),
        }
    }
}

fn note_description(note: &PrivateNote, verb: &str) -> String {
    if note.is_confidential {
        format!("Confidential note {verb}")
    } else {
        format!("Private note {verb}")
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Entries matching `action` (all when `None`), newest first.
pub fn filter(entries: &[HistoryEntry], action: Option<HistoryAction>) -> Vec<&HistoryEntry> {
    let mut matching: Vec<_> = entries
        .iter()
        .filter(|e| action.is_none_or(|a| e.action == a))
        .collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching
}
