//! Reminders and private notes attached to a patient.
//!
//! Every mutation is persisted, appended to the patient's history, and
//! emitted as an audit event.

use jiff::Timestamp;
use odonto_audit::events::AuditEvent;
use odonto_audit::history::HistoryEntry;
use odonto_core::error::CoreError;
use odonto_core::models::note::PrivateNote;
use odonto_core::models::reminder::{NewReminder, Reminder};
use odonto_storage::FileStore;
use uuid::Uuid;

use crate::session::load_patient;

pub async fn add_reminder(
    files: &FileStore,
    patient_id: Uuid,
    input: NewReminder,
    practitioner: &str,
) -> eyre::Result<Reminder> {
    load_patient(files, patient_id).await?;
    let reminder = Reminder::new(patient_id, input, practitioner, Timestamp::now())?;

    let mut reminders = files.load_reminders(patient_id).await?;
    reminders.push(reminder.clone());
    files.save_reminders(patient_id, &reminders).await?;

    files
        .append_history(patient_id, HistoryEntry::reminder_created(&reminder, practitioner))
        .await?;
    AuditEvent::new("reminder_created", "reminder", reminder.id.to_string(), practitioner)
        .with_details(serde_json::json!({ "patient": patient_id, "type": reminder.kind }))
        .emit();
    Ok(reminder)
}

pub async fn complete_reminder(
    files: &FileStore,
    patient_id: Uuid,
    reminder_id: Uuid,
    practitioner: &str,
) -> eyre::Result<Reminder> {
    transition(files, patient_id, reminder_id, practitioner, |r| {
        r.complete(Timestamp::now())
    })
    .await
}

pub async fn dismiss_reminder(
    files: &FileStore,
    patient_id: Uuid,
    reminder_id: Uuid,
    practitioner: &str,
) -> eyre::Result<Reminder> {
    transition(files, patient_id, reminder_id, practitioner, Reminder::dismiss).await
}

pub async fn delete_reminder(
    files: &FileStore,
    patient_id: Uuid,
    reminder_id: Uuid,
    practitioner: &str,
) -> eyre::Result<Reminder> {
    let mut reminders = files.load_reminders(patient_id).await?;
    let idx = position(&reminders, |r| r.id == reminder_id, "reminder", reminder_id)?;
    let removed = reminders.remove(idx);
    files.save_reminders(patient_id, &reminders).await?;

    files
        .append_history(patient_id, HistoryEntry::reminder_deleted(&removed, practitioner))
        .await?;
    AuditEvent::new("reminder_deleted", "reminder", reminder_id.to_string(), practitioner).emit();
    Ok(removed)
}

async fn transition(
    files: &FileStore,
    patient_id: Uuid,
    reminder_id: Uuid,
    practitioner: &str,
    apply: impl FnOnce(&mut Reminder) -> Result<(), CoreError>,
) -> eyre::Result<Reminder> {
    let mut reminders = files.load_reminders(patient_id).await?;
    let idx = position(&reminders, |r| r.id == reminder_id, "reminder", reminder_id)?;

    let reminder = &mut reminders[idx];
    let previous = reminder.status;
    apply(reminder)?;
    let updated = reminder.clone();
    files.save_reminders(patient_id, &reminders).await?;

    files
        .append_history(
            patient_id,
            HistoryEntry::reminder_status_changed(&updated, previous, practitioner),
        )
        .await?;
    AuditEvent::new("reminder_updated", "reminder", reminder_id.to_string(), practitioner)
        .with_details(serde_json::json!({ "from": previous, "to": updated.status }))
        .emit();
    Ok(updated)
}

pub async fn add_note(
    files: &FileStore,
    patient_id: Uuid,
    content: &str,
    is_confidential: bool,
    tags: Vec<String>,
    practitioner: &str,
) -> eyre::Result<PrivateNote> {
    load_patient(files, patient_id).await?;
    let note = PrivateNote::new(
        patient_id,
        content,
        practitioner,
        is_confidential,
        tags,
        Timestamp::now(),
    )?;

    let mut notes = files.load_notes(patient_id).await?;
    notes.push(note.clone());
    files.save_notes(patient_id, &notes).await?;

    files
        .append_history(patient_id, HistoryEntry::note_created(&note, practitioner))
        .await?;
    AuditEvent::new("note_created", "note", note.id.to_string(), practitioner)
        .with_details(serde_json::json!({ "confidential": note.is_confidential }))
        .emit();
    Ok(note)
}

pub async fn edit_note(
    files: &FileStore,
    patient_id: Uuid,
    note_id: Uuid,
    content: &str,
    practitioner: &str,
) -> eyre::Result<PrivateNote> {
    let mut notes = files.load_notes(patient_id).await?;
    let idx = position(&notes, |n| n.id == note_id, "note", note_id)?;
    notes[idx].edit(content, Timestamp::now())?;
    let updated = notes[idx].clone();
    files.save_notes(patient_id, &notes).await?;

    files
        .append_history(patient_id, HistoryEntry::note_edited(&updated, practitioner))
        .await?;
    AuditEvent::new("note_updated", "note", note_id.to_string(), practitioner).emit();
    Ok(updated)
}

pub async fn delete_note(
    files: &FileStore,
    patient_id: Uuid,
    note_id: Uuid,
    practitioner: &str,
) -> eyre::Result<PrivateNote> {
    let mut notes = files.load_notes(patient_id).await?;
    let idx = position(&notes, |n| n.id == note_id, "note", note_id)?;
    let removed = notes.remove(idx);
    files.save_notes(patient_id, &notes).await?;

    files
        .append_history(patient_id, HistoryEntry::note_deleted(&removed, practitioner))
        .await?;
    AuditEvent::new("note_deleted", "note", note_id.to_string(), practitioner).emit();
    Ok(removed)
}

fn position<T>(
    items: &[T],
    matches: impl Fn(&T) -> bool,
    kind: &str,
    id: Uuid,
) -> eyre::Result<usize> {
    items
        .iter()
        .position(matches)
        .ok_or_else(|| eyre::eyre!("no {kind} with id {id}"))
}
