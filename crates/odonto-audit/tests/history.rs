use odonto_audit::events::AuditEvent;
use odonto_audit::history::{EntityType, HistoryAction, HistoryEntry, filter};
use odonto_chart::ToothStatusStore;
use jiff::civil::date;
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::note::PrivateNote;
use odonto_core::models::reminder::{NewReminder, Priority, Reminder, ReminderKind, ReminderStatus};
use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use uuid::Uuid;

#[test]
fn tooth_change_becomes_history_entry() {
    let patient = Uuid::new_v4();
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let change = store
        .update(ToothNumber::from_fdi(16), ToothCondition::Caries, None)
        .unwrap();

    let entry = HistoryEntry::tooth_changed(patient, &change, "dr.perez");
    assert_eq!(entry.entity_type, EntityType::DentalChart);
    assert_eq!(entry.entity_id, patient);
    assert_eq!(entry.action, HistoryAction::Updated);
    assert_eq!(entry.field_changed.as_deref(), Some("tooth_status"));
    assert_eq!(entry.old_value.as_deref(), Some("healthy"));
    assert_eq!(entry.new_value.as_deref(), Some("caries"));
    assert_eq!(entry.description, "Tooth 16 changed from Healthy to Caries");
    assert_eq!(entry.timestamp, change.current.last_updated);
}

#[test]
fn notes_only_change_is_described_as_such() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let change = store
        .update(ToothNumber::from_fdi(21), ToothCondition::Healthy, Some("sensitivity"))
        .unwrap();
    let entry = HistoryEntry::tooth_changed(Uuid::new_v4(), &change, "dr.perez");
    assert_eq!(entry.description, "Notes updated on tooth 21");
    assert_eq!(entry.field_changed.as_deref(), Some("notes"));
    assert_eq!(entry.old_value, None);
    assert_eq!(entry.new_value.as_deref(), Some("sensitivity"));

    let change = store
        .update(ToothNumber::from_fdi(21), ToothCondition::Healthy, Some("cold sensitivity"))
        .unwrap();
    let entry = HistoryEntry::tooth_changed(Uuid::new_v4(), &change, "dr.perez");
    assert_eq!(entry.old_value.as_deref(), Some("sensitivity"));
    assert_eq!(entry.new_value.as_deref(), Some("cold sensitivity"));
}

#[test]
fn condition_and_notes_change_together() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let change = store
        .update(ToothNumber::from_fdi(36), ToothCondition::RootCanalTreated, Some("3 canals"))
        .unwrap();
    let entry = HistoryEntry::tooth_changed(Uuid::new_v4(), &change, "dr.perez");
    assert_eq!(entry.field_changed.as_deref(), Some("tooth_status"));
    assert_eq!(entry.new_value.as_deref(), Some("root_canal_treated"));
    assert_eq!(
        entry.description,
        "Tooth 36 changed from Healthy to Root canal (notes updated)"
    );
}

#[test]
fn reminder_lifecycle_is_recorded_on_the_clinical_record() {
    let input = NewReminder {
        title: "Control post-extracción".to_string(),
        description: None,
        reminder_date: date(2024, 7, 10),
        reminder_time: None,
        kind: ReminderKind::FollowUp,
        priority: Priority::High,
    };
    let mut reminder =
        Reminder::new(Uuid::new_v4(), input, "dr.perez", jiff::Timestamp::now()).unwrap();

    let created = HistoryEntry::reminder_created(&reminder, "dr.perez");
    assert_eq!(created.entity_type, EntityType::ClinicalRecord);
    assert_eq!(created.entity_id, reminder.id);
    assert_eq!(
        created.description,
        "Follow-up reminder scheduled for 2024-07-10: Control post-extracción"
    );

    reminder.complete(jiff::Timestamp::now()).unwrap();
    let done = HistoryEntry::reminder_status_changed(&reminder, ReminderStatus::Pending, "dr.perez");
    assert_eq!(done.action, HistoryAction::Updated);
    assert_eq!(done.field_changed.as_deref(), Some("status"));
    assert_eq!(done.old_value.as_deref(), Some("pending"));
    assert_eq!(done.new_value.as_deref(), Some("completed"));
    assert_eq!(Some(done.timestamp), reminder.completed_at);

    let deleted = HistoryEntry::reminder_deleted(&reminder, "dr.perez");
    assert_eq!(deleted.action, HistoryAction::Deleted);
}

#[test]
fn note_history_never_carries_content() {
    let mut note = PrivateNote::new(
        Uuid::new_v4(),
        "Paciente muy ansioso",
        "dr.perez",
        true,
        Vec::new(),
        jiff::Timestamp::now(),
    )
    .unwrap();

    let created = HistoryEntry::note_created(&note, "dr.perez");
    assert_eq!(created.entity_type, EntityType::Note);
    assert_eq!(created.description, "Confidential note added");

    note.edit("Paciente tranquilo", jiff::Timestamp::now()).unwrap();
    let edited = HistoryEntry::note_edited(&note, "dr.perez");
    assert_eq!(edited.field_changed.as_deref(), Some("content"));
    assert_eq!(edited.old_value, None);
    assert_eq!(edited.new_value, None);
    assert_eq!(edited.timestamp, note.updated_at);

    let json = serde_json::to_string(&edited).unwrap();
    assert!(!json.contains("ansioso"));
    assert!(json.contains("\"entity_type\":\"note\""));
}

#[test]
fn filter_by_action_newest_first() {
    let patient = Uuid::new_v4();
    let created = HistoryEntry::chart_created(patient, DentitionScheme::Child, "dr.perez");

    let mut store = ToothStatusStore::new(DentitionScheme::Child);
    let change = store
        .update(ToothNumber::from_fdi(54), ToothCondition::Crown, None)
        .unwrap();
    let updated = HistoryEntry::tooth_changed(patient, &change, "dr.perez");

    let entries = vec![created, updated];
    let all = filter(&entries, None);
    assert_eq!(all.len(), 2);
    assert!(all[0].timestamp >= all[1].timestamp);

    let only_created = filter(&entries, Some(HistoryAction::Created));
    assert_eq!(only_created.len(), 1);
    assert_eq!(only_created[0].description, "New child dental chart created");
    assert!(filter(&entries, Some(HistoryAction::Deleted)).is_empty());
}

#[test]
fn audit_event_details_name_the_tooth() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let change = store
        .update(ToothNumber::from_fdi(46), ToothCondition::Implant, None)
        .unwrap();
    let event = AuditEvent::tooth_updated(Uuid::new_v4(), &change, "dr.perez");
    let details = event.details.clone().unwrap();
    assert_eq!(details["tooth"], 46);
    assert_eq!(details["from"], "healthy");
    assert_eq!(details["to"], "implant");
    event.emit();
}
