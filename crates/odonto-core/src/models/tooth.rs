use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An FDI two-digit tooth identifier.
///
/// The first digit is the quadrant (1–4 permanent, 5–8 primary, both running
/// upper-right, upper-left, lower-left, lower-right) and the second digit is
/// the position counted from the midline (1–8 permanent, 1–5 primary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct ToothNumber(u8);

impl ToothNumber {
    pub const fn is_valid(n: u8) -> bool {
        let quadrant = n / 10;
        let position = n % 10;
        match quadrant {
            1..=4 => position >= 1 && position <= 8,
            5..=8 => position >= 1 && position <= 5,
            _ => false,
        }
    }

    pub fn new(n: u8) -> Result<Self, CoreError> {
        if Self::is_valid(n) {
            Ok(Self(n))
        } else {
            Err(CoreError::InvalidToothNumber(n))
        }
    }

    /// Build a tooth number in const context. An invalid literal fails
    /// const evaluation, so catalogs can never hold a bad number.
    pub const fn from_fdi(n: u8) -> Self {
        assert!(Self::is_valid(n), "not an FDI tooth number");
        Self(n)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn quadrant(self) -> u8 {
        self.0 / 10
    }

    pub const fn position(self) -> u8 {
        self.0 % 10
    }

    /// Whether this is a primary (child) tooth.
    pub const fn is_primary(self) -> bool {
        self.quadrant() >= 5
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToothNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::UnparsableToothNumber(s.to_string()))?;
        Self::new(n)
    }
}

impl TryFrom<u8> for ToothNumber {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<ToothNumber> for u8 {
    fn from(n: ToothNumber) -> Self {
        n.0
    }
}

impl<'de> Deserialize<'de> for ToothNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Clinical condition recorded for a single tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToothCondition {
    Healthy,
    Caries,
    RootCanalTreated,
    Extracted,
    Implant,
    Crown,
}

impl ToothCondition {
    pub const ALL: [ToothCondition; 6] = [
        ToothCondition::Healthy,
        ToothCondition::Caries,
        ToothCondition::RootCanalTreated,
        ToothCondition::Extracted,
        ToothCondition::Implant,
        ToothCondition::Crown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToothCondition::Healthy => "healthy",
            ToothCondition::Caries => "caries",
            ToothCondition::RootCanalTreated => "root_canal_treated",
            ToothCondition::Extracted => "extracted",
            ToothCondition::Implant => "implant",
            ToothCondition::Crown => "crown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToothCondition::Healthy => "Healthy",
            ToothCondition::Caries => "Caries",
            ToothCondition::RootCanalTreated => "Root canal",
            ToothCondition::Extracted => "Extracted",
            ToothCondition::Implant => "Implant",
            ToothCondition::Crown => "Crown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToothCondition::Healthy => "Tooth in good condition",
            ToothCondition::Caries => "Dental caries present",
            ToothCondition::RootCanalTreated => "Root canal treatment",
            ToothCondition::Extracted => "Tooth extracted",
            ToothCondition::Implant => "Dental implant",
            ToothCondition::Crown => "Dental crown placed",
        }
    }
}

impl fmt::Display for ToothCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToothCondition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ToothCondition::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}

/// The recorded state of one tooth on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothStatus {
    pub number: ToothNumber,
    pub status: ToothCondition,
    #[serde(default)]
    pub notes: String,
    pub last_updated: jiff::Timestamp,
}

impl ToothStatus {
    pub fn healthy(number: ToothNumber, now: jiff::Timestamp) -> Self {
        Self {
            number,
            status: ToothCondition::Healthy,
            notes: String::new(),
            last_updated: now,
        }
    }
}
