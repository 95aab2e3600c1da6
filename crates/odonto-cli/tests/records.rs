use jiff::civil::date;
use odonto_audit::history::{EntityType, HistoryAction};
use odonto_cli::records;
use odonto_core::models::note::visible_notes;
use odonto_core::models::patient::{Patient, Sex};
use odonto_core::models::reminder::{
    NewReminder, Priority, ReminderFilter, ReminderKind, ReminderStatus, filter_reminders,
};
use odonto_storage::FileStore;
use uuid::Uuid;

async fn seeded(dir: &std::path::Path) -> (FileStore, Uuid) {
    let files = FileStore::new(dir);
    let now = jiff::Timestamp::now();
    let patient = Patient {
        id: Uuid::new_v4(),
        rut: "7775735k".to_string(),
        first_name: "Valentina".to_string(),
        last_name: "Fuentes".to_string(),
        birth_date: date(1978, 11, 3),
        sex: Sex::Female,
        email: None,
        phone: None,
        address: None,
        emergency_contact: None,
        allergies: Vec::new(),
        medications: Vec::new(),
        prior_conditions: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    files.save_patient(&patient).await.unwrap();
    (files, patient.id)
}

fn follow_up(title: &str, day: i8) -> NewReminder {
    NewReminder {
        title: title.to_string(),
        description: Some("revisar cicatrización".to_string()),
        reminder_date: date(2024, 7, day),
        reminder_time: None,
        kind: ReminderKind::FollowUp,
        priority: Priority::High,
    }
}

#[tokio::test]
async fn reminder_lifecycle_is_persisted_with_history() {
    let dir = tempfile::tempdir().unwrap();
    let (files, id) = seeded(dir.path()).await;

    let first = records::add_reminder(&files, id, follow_up("Control", 10), "dr.perez")
        .await
        .unwrap();
    let second = records::add_reminder(&files, id, follow_up("Radiografía", 3), "dr.perez")
        .await
        .unwrap();

    let done = records::complete_reminder(&files, id, first.id, "dr.perez")
        .await
        .unwrap();
    assert_eq!(done.status, ReminderStatus::Completed);
    assert!(done.completed_at.is_some());

    // closed reminders cannot change state again
    assert!(
        records::dismiss_reminder(&files, id, first.id, "dr.perez")
            .await
            .is_err()
    );

    let stored = files.load_reminders(id).await.unwrap();
    let pending = filter_reminders(&stored, ReminderFilter::Pending);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);

    records::delete_reminder(&files, id, second.id, "dr.perez")
        .await
        .unwrap();
    assert_eq!(files.load_reminders(id).await.unwrap().len(), 1);

    let history = files.load_history(id).await.unwrap();
    let actions: Vec<_> = history.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        [
            HistoryAction::Created,
            HistoryAction::Created,
            HistoryAction::Updated,
            HistoryAction::Deleted
        ]
    );
    assert!(history.iter().all(|e| e.entity_type == EntityType::ClinicalRecord));
}

#[tokio::test]
async fn unknown_patient_or_reminder_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (files, id) = seeded(dir.path()).await;

    let err = records::add_reminder(&files, Uuid::new_v4(), follow_up("x", 1), "dr.perez")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no patient"));

    let err = records::complete_reminder(&files, id, Uuid::new_v4(), "dr.perez")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no reminder"));
}

#[tokio::test]
async fn notes_edit_delete_and_confidentiality() {
    let dir = tempfile::tempdir().unwrap();
    let (files, id) = seeded(dir.path()).await;

    let open = records::add_note(&files, id, "Buena higiene oral", false, vec!["higiene".to_string()], "dr.perez")
        .await
        .unwrap();
    let secret = records::add_note(&files, id, "Paciente ansioso", true, Vec::new(), "dr.perez")
        .await
        .unwrap();

    let stored = files.load_notes(id).await.unwrap();
    assert_eq!(visible_notes(&stored, false).len(), 1);
    assert_eq!(visible_notes(&stored, true).len(), 2);

    let edited = records::edit_note(&files, id, open.id, "Higiene regular", "dr.perez")
        .await
        .unwrap();
    assert_eq!(edited.content, "Higiene regular");
    assert!(records::edit_note(&files, id, open.id, "  ", "dr.perez").await.is_err());

    records::delete_note(&files, id, secret.id, "dr.perez")
        .await
        .unwrap();
    let stored = files.load_notes(id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, "Higiene regular");

    let history = files.load_history(id).await.unwrap();
    assert_eq!(history.len(), 4);
    assert!(history.iter().all(|e| e.entity_type == EntityType::Note));
    assert_eq!(history[3].description, "Confidential note deleted");
}
