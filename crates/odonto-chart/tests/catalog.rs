use std::collections::HashSet;

use odonto_chart::catalog::{Quadrant, catalog};
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::ToothNumber;

fn numbers(teeth: &[ToothNumber]) -> Vec<u8> {
    teeth.iter().map(|t| t.get()).collect()
}

#[test]
fn adult_catalog_has_32_unique_permanent_teeth() {
    let adult = catalog(DentitionScheme::Adult);
    let all: HashSet<_> = adult.iter().collect();
    assert_eq!(adult.len(), 32);
    assert_eq!(all.len(), 32);
    assert!(adult.iter().all(|t| !t.is_primary()));
}

#[test]
fn child_catalog_has_20_unique_primary_teeth() {
    let child = catalog(DentitionScheme::Child);
    let all: HashSet<_> = child.iter().collect();
    assert_eq!(child.len(), 20);
    assert_eq!(all.len(), 20);
    assert!(child.iter().all(|t| t.is_primary()));
}

#[test]
fn quadrants_keep_drawing_order() {
    let adult = catalog(DentitionScheme::Adult);
    assert_eq!(numbers(adult.upper_right), [18, 17, 16, 15, 14, 13, 12, 11]);
    assert_eq!(numbers(adult.upper_left), [21, 22, 23, 24, 25, 26, 27, 28]);
    assert_eq!(numbers(adult.lower_left), [38, 37, 36, 35, 34, 33, 32, 31]);
    assert_eq!(numbers(adult.lower_right), [41, 42, 43, 44, 45, 46, 47, 48]);

    let child = catalog(DentitionScheme::Child);
    assert_eq!(numbers(child.upper_right), [55, 54, 53, 52, 51]);
    assert_eq!(numbers(child.lower_right), [81, 82, 83, 84, 85]);
}

#[test]
fn from_midline_runs_outward_for_every_quadrant() {
    for scheme in DentitionScheme::ALL {
        let cat = catalog(scheme);
        for q in Quadrant::ALL {
            let positions: Vec<u8> = cat.from_midline(q).iter().map(|t| t.position()).collect();
            let expected: Vec<u8> = (1..=positions.len() as u8).collect();
            assert_eq!(positions, expected, "{scheme} {q:?}");
        }
    }
}

#[test]
fn display_rows_mirror_around_midline() {
    let [upper, lower] = catalog(DentitionScheme::Adult).display_rows();
    assert_eq!(
        numbers(&upper),
        [18, 17, 16, 15, 14, 13, 12, 11, 21, 22, 23, 24, 25, 26, 27, 28]
    );
    assert_eq!(
        numbers(&lower),
        [48, 47, 46, 45, 44, 43, 42, 41, 31, 32, 33, 34, 35, 36, 37, 38]
    );
}

#[test]
fn quadrant_lookup() {
    let adult = catalog(DentitionScheme::Adult);
    assert_eq!(adult.quadrant_of(ToothNumber::from_fdi(36)), Some(Quadrant::LowerLeft));
    assert_eq!(adult.quadrant_of(ToothNumber::from_fdi(55)), None);
    assert!(!adult.contains(ToothNumber::from_fdi(61)));
    assert!(catalog(DentitionScheme::Child).contains(ToothNumber::from_fdi(61)));
}
