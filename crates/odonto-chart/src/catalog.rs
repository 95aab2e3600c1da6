use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::ToothNumber;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the four anatomical quadrants, from the patient's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "Upper right",
            Quadrant::UpperLeft => "Upper left",
            Quadrant::LowerLeft => "Lower left",
            Quadrant::LowerRight => "Lower right",
        }
    }
}

/// The fixed tooth-number layout of one dentition scheme.
///
/// Each quadrant slice is stored in the order the chart draws it, so the
/// right-side quadrants run from the third molar inward and the left-side
/// upper quadrant runs from the central incisor outward.
#[derive(Debug)]
pub struct Catalog {
    pub scheme: DentitionScheme,
    pub upper_right: &'static [ToothNumber],
    pub upper_left: &'static [ToothNumber],
    pub lower_left: &'static [ToothNumber],
    pub lower_right: &'static [ToothNumber],
}

const fn t(n: u8) -> ToothNumber {
    ToothNumber::from_fdi(n)
}

static ADULT: Catalog = Catalog {
    scheme: DentitionScheme::Adult,
    upper_right: &[t(18), t(17), t(16), t(15), t(14), t(13), t(12), t(11)],
    upper_left: &[t(21), t(22), t(23), t(24), t(25), t(26), t(27), t(28)],
    lower_left: &[t(38), t(37), t(36), t(35), t(34), t(33), t(32), t(31)],
    lower_right: &[t(41), t(42), t(43), t(44), t(45), t(46), t(47), t(48)],
};

static CHILD: Catalog = Catalog {
    scheme: DentitionScheme::Child,
    upper_right: &[t(55), t(54), t(53), t(52), t(51)],
    upper_left: &[t(61), t(62), t(63), t(64), t(65)],
    lower_left: &[t(75), t(74), t(73), t(72), t(71)],
    lower_right: &[t(81), t(82), t(83), t(84), t(85)],
};

/// Look up the catalog for a dentition scheme.
pub fn catalog(scheme: DentitionScheme) -> &'static Catalog {
    match scheme {
        DentitionScheme::Adult => &ADULT,
        DentitionScheme::Child => &CHILD,
    }
}

impl Catalog {
    pub fn quadrant(&self, quadrant: Quadrant) -> &'static [ToothNumber] {
        match quadrant {
            Quadrant::UpperRight => self.upper_right,
            Quadrant::UpperLeft => self.upper_left,
            Quadrant::LowerLeft => self.lower_left,
            Quadrant::LowerRight => self.lower_right,
        }
    }

    /// Teeth of a quadrant from the midline-adjacent tooth outward,
    /// regardless of the stored drawing order.
    pub fn from_midline(&self, quadrant: Quadrant) -> Vec<ToothNumber> {
        let mut teeth = self.quadrant(quadrant).to_vec();
        teeth.sort_by_key(|t| t.position());
        teeth
    }

    /// All teeth, quadrant by quadrant, in stored order.
    pub fn iter(&self) -> impl Iterator<Item = ToothNumber> + '_ {
        Quadrant::ALL
            .into_iter()
            .flat_map(|q| self.quadrant(q).iter().copied())
    }

    pub fn len(&self) -> usize {
        Quadrant::ALL.iter().map(|q| self.quadrant(*q).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, number: ToothNumber) -> bool {
        self.quadrant_of(number).is_some()
    }

    pub fn quadrant_of(&self, number: ToothNumber) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|q| self.quadrant(*q).contains(&number))
    }

    /// The two rows of the chart as seen facing the patient: the patient's
    /// right on the viewer's left. Upper row is `[18..11, 21..28]`, lower row
    /// is `[48..41, 31..38]` for the adult scheme.
    pub fn display_rows(&self) -> [Vec<ToothNumber>; 2] {
        let row = |right: Quadrant, left: Quadrant| {
            let mut row: Vec<_> = self.from_midline(right).into_iter().rev().collect();
            row.extend(self.from_midline(left));
            row
        };
        [
            row(Quadrant::UpperRight, Quadrant::UpperLeft),
            row(Quadrant::LowerRight, Quadrant::LowerLeft),
        ]
    }
}
