use odonto_chart::catalog::catalog;
use odonto_chart::{StatusCounts, ToothStatusStore};
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::ToothCondition;
use proptest::prelude::*;

fn scheme() -> impl Strategy<Value = DentitionScheme> {
    prop::sample::select(DentitionScheme::ALL.to_vec())
}

fn condition() -> impl Strategy<Value = ToothCondition> {
    prop::sample::select(ToothCondition::ALL.to_vec())
}

proptest! {
    #[test]
    fn counts_always_sum_to_tooth_total(
        scheme in scheme(),
        edits in prop::collection::vec((any::<prop::sample::Index>(), condition()), 0..64),
    ) {
        let mut store = ToothStatusStore::new(scheme);
        let teeth: Vec<_> = catalog(scheme).iter().collect();
        for (idx, c) in edits {
            store.update(*idx.get(&teeth), c, None).unwrap();
        }
        let counts = StatusCounts::from_store(&store);
        prop_assert_eq!(counts.total(), scheme.expected_teeth());
    }

    #[test]
    fn update_then_get_reflects_condition(
        scheme in scheme(),
        idx in any::<prop::sample::Index>(),
        c in condition(),
        notes in proptest::option::of("[a-z ]{0,20}"),
    ) {
        let mut store = ToothStatusStore::new(scheme);
        let teeth: Vec<_> = catalog(scheme).iter().collect();
        let n = *idx.get(&teeth);
        store.update(n, ToothCondition::Caries, Some("baseline")).unwrap();
        store.update(n, c, notes.as_deref()).unwrap();

        let t = store.get(n);
        prop_assert_eq!(t.status, c);
        match notes.as_deref() {
            Some(text) if !text.is_empty() => prop_assert_eq!(t.notes.as_str(), text),
            _ => prop_assert_eq!(t.notes.as_str(), "baseline"),
        }
    }
}
