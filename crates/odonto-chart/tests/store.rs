use std::collections::BTreeSet;

use odonto_chart::catalog::catalog;
use odonto_chart::{ChartError, StatusCounts, ToothStatusStore};
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use uuid::Uuid;

fn tooth(n: u8) -> ToothNumber {
    ToothNumber::new(n).unwrap()
}

#[test]
fn initialize_matches_catalog_exactly() {
    for scheme in DentitionScheme::ALL {
        let store = ToothStatusStore::new(scheme);
        let keys: BTreeSet<_> = store.teeth().map(|t| t.number).collect();
        let expected: BTreeSet<_> = catalog(scheme).iter().collect();
        assert_eq!(keys, expected);
        assert_eq!(store.len(), scheme.expected_teeth());
        assert!(
            store
                .teeth()
                .all(|t| t.status == ToothCondition::Healthy && t.notes.is_empty())
        );
    }
}

#[test]
fn update_without_notes_keeps_existing_notes() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    store
        .update(tooth(26), ToothCondition::Caries, Some("distal lesion"))
        .unwrap();
    store.update(tooth(26), ToothCondition::Crown, None).unwrap();
    store.update(tooth(26), ToothCondition::Crown, Some("")).unwrap();

    let t = store.get(tooth(26));
    assert_eq!(t.status, ToothCondition::Crown);
    assert_eq!(t.notes, "distal lesion");
}

#[test]
fn update_refreshes_timestamp_and_reports_change() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let before = store.get(tooth(14)).last_updated;
    let change = store
        .update(tooth(14), ToothCondition::RootCanalTreated, Some("irreversible pulpitis"))
        .unwrap();

    assert_eq!(change.previous.status, ToothCondition::Healthy);
    assert_eq!(change.current.status, ToothCondition::RootCanalTreated);
    assert!(change.condition_changed());
    assert!(change.notes_changed());
    assert!(change.current.last_updated >= before);
}

#[test]
fn update_on_missing_tooth_is_rejected_without_insert() {
    let mut store = ToothStatusStore::new(DentitionScheme::Child);
    let err = store
        .update(tooth(11), ToothCondition::Caries, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::ToothNotFound { scheme: DentitionScheme::Child, .. }
    ));
    assert_eq!(store.len(), 20);
    assert!(store.entry(tooth(11)).is_none());
}

#[test]
fn get_on_missing_tooth_synthesizes_healthy() {
    let store = ToothStatusStore::new(DentitionScheme::Child);
    let t = store.get(tooth(18));
    assert_eq!(t.number, tooth(18));
    assert_eq!(t.status, ToothCondition::Healthy);
    assert!(t.notes.is_empty());
    assert_eq!(store.len(), 20);
}

#[test]
fn scheme_switch_discards_statuses() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    store.update(tooth(11), ToothCondition::Caries, None).unwrap();

    store.initialize(DentitionScheme::Child);
    assert_eq!(store.len(), 20);
    assert!(store.entry(tooth(11)).is_none());

    store.initialize(DentitionScheme::Adult);
    assert_eq!(store.get(tooth(11)).status, ToothCondition::Healthy);
}

#[test]
fn chip_on_cusp_scenario() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let t = store.get(tooth(18));
    assert_eq!(t.number, tooth(18));
    assert_eq!(t.status, ToothCondition::Healthy);

    store
        .update(tooth(18), ToothCondition::Caries, Some("chip on cusp"))
        .unwrap();
    let t = store.get(tooth(18));
    assert_eq!(t.status, ToothCondition::Caries);
    assert_eq!(t.notes, "chip on cusp");

    let counts = StatusCounts::from_store(&store);
    assert_eq!(counts.caries, 1);
    assert_eq!(counts.healthy, 31);
    assert_eq!(counts.total(), 32);
}

#[test]
fn snapshot_round_trips_through_from_chart() {
    let mut store = ToothStatusStore::new(DentitionScheme::Child);
    store
        .update(tooth(74), ToothCondition::Extracted, Some("exfoliated"))
        .unwrap();

    let patient = Uuid::new_v4();
    let created = jiff::Timestamp::now();
    let chart = store.snapshot(patient, created);
    assert_eq!(chart.patient_id, patient);
    assert_eq!(chart.teeth.len(), 20);
    assert!(chart.updated_at >= created);

    let restored = ToothStatusStore::from_chart(&chart).unwrap();
    assert_eq!(restored.scheme(), DentitionScheme::Child);
    assert_eq!(restored.get(tooth(74)).status, ToothCondition::Extracted);
    assert_eq!(restored.get(tooth(74)).notes, "exfoliated");
}

#[test]
fn from_chart_rejects_incomplete_or_foreign_teeth() {
    let store = ToothStatusStore::new(DentitionScheme::Adult);
    let mut chart = store.snapshot(Uuid::new_v4(), jiff::Timestamp::now());

    let mut missing = chart.clone();
    missing.teeth.pop();
    assert!(matches!(
        ToothStatusStore::from_chart(&missing),
        Err(ChartError::CatalogMismatch { expected: 32, found: 31, .. })
    ));

    let mut duplicated = chart.clone();
    let first = duplicated.teeth[0].clone();
    duplicated.teeth.push(first);
    assert!(matches!(
        ToothStatusStore::from_chart(&duplicated),
        Err(ChartError::DuplicateTooth { .. })
    ));

    chart.scheme = DentitionScheme::Child;
    assert!(matches!(
        ToothStatusStore::from_chart(&chart),
        Err(ChartError::ToothNotFound { .. })
    ));
}
