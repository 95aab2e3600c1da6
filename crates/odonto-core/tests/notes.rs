use odonto_core::error::CoreError;
use odonto_core::models::note::{PrivateNote, visible_notes};
use uuid::Uuid;

fn note(content: &str, confidential: bool, at: &str) -> PrivateNote {
    let at: jiff::Timestamp = at.parse().unwrap();
    PrivateNote::new(Uuid::new_v4(), content, "dr.perez", confidential, Vec::new(), at).unwrap()
}

#[test]
fn new_note_trims_content_and_tags() {
    let n = PrivateNote::new(
        Uuid::new_v4(),
        "  Paciente ansioso  ",
        "dr.perez",
        true,
        vec![" Ansiedad".to_string(), "ansiedad".to_string(), "".to_string()],
        jiff::Timestamp::now(),
    )
    .unwrap();
    assert_eq!(n.content, "Paciente ansioso");
    assert_eq!(n.tags, ["ansiedad"]);
    assert!(!n.is_edited());
}

#[test]
fn empty_content_is_rejected() {
    let err = PrivateNote::new(Uuid::new_v4(), " \n", "dr.perez", false, Vec::new(), jiff::Timestamp::now())
        .unwrap_err();
    assert!(matches!(err, CoreError::EmptyField { field: "content" }));

    let mut n = note("keep me", false, "2024-07-01T10:30:00Z");
    assert!(n.edit("", jiff::Timestamp::now()).is_err());
    assert_eq!(n.content, "keep me");
}

#[test]
fn edit_returns_previous_content() {
    let mut n = note("Excelente higiene", false, "2024-06-15T14:20:00Z");
    let previous = n.edit("Higiene regular", "2024-07-01T09:00:00Z".parse().unwrap()).unwrap();
    assert_eq!(previous, "Excelente higiene");
    assert_eq!(n.content, "Higiene regular");
    assert!(n.is_edited());
}

#[test]
fn confidential_notes_hidden_unless_requested() {
    let notes = vec![
        note("older", false, "2024-05-20T09:15:00Z"),
        note("secret", true, "2024-07-01T10:30:00Z"),
        note("newer", false, "2024-06-15T14:20:00Z"),
    ];

    let shown: Vec<_> = visible_notes(&notes, false).iter().map(|n| n.content.as_str()).collect();
    assert_eq!(shown, ["newer", "older"]);

    let all: Vec<_> = visible_notes(&notes, true).iter().map(|n| n.content.as_str()).collect();
    assert_eq!(all, ["secret", "newer", "older"]);
}
