use odonto_chart::editor::{EditorKey, KeyOutcome};
use odonto_chart::{ChartError, ToothEditor, ToothStatusStore};
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::{ToothCondition, ToothNumber};

fn tooth(n: u8) -> ToothNumber {
    ToothNumber::new(n).unwrap()
}

#[test]
fn starts_closed() {
    let editor = ToothEditor::new();
    assert!(!editor.is_open());
    assert!(editor.draft().is_none());
}

#[test]
fn open_seeds_draft_from_store() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    store
        .update(tooth(36), ToothCondition::Implant, Some("osseointegrated"))
        .unwrap();

    let mut editor = ToothEditor::new();
    editor.open(&store, tooth(36));
    let draft = editor.draft().unwrap();
    assert_eq!(draft.number, tooth(36));
    assert_eq!(draft.status, ToothCondition::Implant);
    assert_eq!(draft.notes, "osseointegrated");
}

#[test]
fn cancel_leaves_store_untouched() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let mut editor = ToothEditor::new();
    editor.open(&store, tooth(21));
    editor.select_condition(ToothCondition::Crown).unwrap();
    editor.set_notes("temporary crown").unwrap();
    editor.cancel();

    assert!(!editor.is_open());
    let t = store.get(tooth(21));
    assert_eq!(t.status, ToothCondition::Healthy);
    assert!(t.notes.is_empty());

    // the store is still writable through a fresh session
    editor.open(&store, tooth(21));
    editor.commit(&mut store).unwrap();
    assert_eq!(store.get(tooth(21)).status, ToothCondition::Healthy);
}

#[test]
fn commit_writes_draft_and_closes() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let mut editor = ToothEditor::new();
    editor.open(&store, tooth(47));
    editor.select_condition(ToothCondition::Caries).unwrap();
    editor.set_notes("occlusal").unwrap();

    let change = editor.commit(&mut store).unwrap();
    assert!(!editor.is_open());
    assert_eq!(change.current.status, ToothCondition::Caries);
    assert_eq!(store.get(tooth(47)).notes, "occlusal");
}

#[test]
fn reopening_replaces_previous_draft() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let mut editor = ToothEditor::new();
    editor.open(&store, tooth(11));
    editor.select_condition(ToothCondition::Extracted).unwrap();

    editor.open(&store, tooth(12));
    assert_eq!(editor.draft().unwrap().number, tooth(12));
    assert_eq!(editor.draft().unwrap().status, ToothCondition::Healthy);

    editor.commit(&mut store).unwrap();
    assert_eq!(store.get(tooth(11)).status, ToothCondition::Healthy);
}

#[test]
fn closed_editor_rejects_edits() {
    let mut store = ToothStatusStore::new(DentitionScheme::Child);
    let mut editor = ToothEditor::new();
    assert!(matches!(
        editor.select_condition(ToothCondition::Caries),
        Err(ChartError::EditorClosed)
    ));
    assert!(matches!(editor.set_notes("x"), Err(ChartError::EditorClosed)));
    assert!(matches!(
        editor.commit(&mut store),
        Err(ChartError::EditorClosed)
    ));
}

#[test]
fn failed_commit_keeps_editor_open() {
    let mut store = ToothStatusStore::new(DentitionScheme::Child);
    let mut editor = ToothEditor::new();
    editor.open(&store, tooth(16));
    editor.select_condition(ToothCondition::Caries).unwrap();

    let err = editor.commit(&mut store).unwrap_err();
    assert!(matches!(err, ChartError::ToothNotFound { .. }));
    assert!(editor.is_open());
    assert_eq!(editor.draft().unwrap().status, ToothCondition::Caries);
    assert_eq!(store.len(), 20);
}

#[test]
fn keyboard_shortcuts() {
    let mut store = ToothStatusStore::new(DentitionScheme::Adult);
    let mut editor = ToothEditor::new();

    assert_eq!(
        editor.handle_key(EditorKey::Escape, &mut store).unwrap(),
        KeyOutcome::Ignored
    );

    editor.open(&store, tooth(33));
    assert_eq!(
        editor.handle_key(EditorKey::Other, &mut store).unwrap(),
        KeyOutcome::Ignored
    );
    assert_eq!(
        editor.handle_key(EditorKey::Escape, &mut store).unwrap(),
        KeyOutcome::Cancelled
    );

    editor.open(&store, tooth(33));
    editor.select_condition(ToothCondition::Crown).unwrap();
    let outcome = editor.handle_key(EditorKey::SaveShortcut, &mut store).unwrap();
    assert!(matches!(outcome, KeyOutcome::Committed(ref c) if c.current.status == ToothCondition::Crown));
    assert!(!editor.is_open());
}
