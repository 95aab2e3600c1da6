use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::tooth::ToothStatus;

/// Which dentition a chart models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DentitionScheme {
    /// Permanent dentition, 32 teeth.
    #[default]
    Adult,
    /// Primary dentition, 20 teeth.
    Child,
}

impl DentitionScheme {
    pub const ALL: [DentitionScheme; 2] = [DentitionScheme::Adult, DentitionScheme::Child];

    pub fn as_str(self) -> &'static str {
        match self {
            DentitionScheme::Adult => "adult",
            DentitionScheme::Child => "child",
        }
    }

    pub fn expected_teeth(self) -> usize {
        match self {
            DentitionScheme::Adult => 32,
            DentitionScheme::Child => 20,
        }
    }
}

impl fmt::Display for DentitionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DentitionScheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(DentitionScheme::Adult),
            "child" => Ok(DentitionScheme::Child),
            _ => Err(CoreError::UnknownScheme(s.to_string())),
        }
    }
}

/// Persisted snapshot of one patient's chart for one dentition scheme.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DentalChart {
    pub patient_id: Uuid,
    pub scheme: DentitionScheme,
    pub teeth: Vec<ToothStatus>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
