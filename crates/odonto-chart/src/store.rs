use std::collections::BTreeMap;

use jiff::Timestamp;
use odonto_core::models::chart::{DentalChart, DentitionScheme};
use odonto_core::models::tooth::{ToothCondition, ToothNumber, ToothStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::catalog;
use crate::error::ChartError;

/// Before/after pair produced by a successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothChange {
    pub number: ToothNumber,
    pub previous: ToothStatus,
    pub current: ToothStatus,
}

impl ToothChange {
    pub fn condition_changed(&self) -> bool {
        self.previous.status != self.current.status
    }

    pub fn notes_changed(&self) -> bool {
        self.previous.notes != self.current.notes
    }
}

/// Authoritative tooth statuses for the active dentition scheme.
///
/// The key set is always exactly the catalog of `scheme`; only
/// [`initialize`](Self::initialize) changes it.
#[derive(Debug, Clone)]
pub struct ToothStatusStore {
    scheme: DentitionScheme,
    teeth: BTreeMap<ToothNumber, ToothStatus>,
}

impl ToothStatusStore {
    pub fn new(scheme: DentitionScheme) -> Self {
        let mut store = Self {
            scheme,
            teeth: BTreeMap::new(),
        };
        store.initialize(scheme);
        store
    }

    /// Replace every entry with a fresh healthy record for each tooth of
    /// `scheme`. Nothing carries over from the previous scheme.
    pub fn initialize(&mut self, scheme: DentitionScheme) {
        let now = Timestamp::now();
        self.scheme = scheme;
        self.teeth = catalog(scheme)
            .iter()
            .map(|n| (n, ToothStatus::healthy(n, now)))
            .collect();
        tracing::debug!(%scheme, teeth = self.teeth.len(), "tooth chart initialized");
    }

    pub fn scheme(&self) -> DentitionScheme {
        self.scheme
    }

    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    /// Current record for `number`.
    ///
    /// A number outside the active catalog yields a synthesized healthy
    /// record instead of an error. Use [`entry`](Self::entry) for a strict
    /// lookup.
    pub fn get(&self, number: ToothNumber) -> ToothStatus {
        match self.teeth.get(&number) {
            Some(status) => status.clone(),
            None => {
                tracing::warn!(%number, scheme = %self.scheme, "tooth not on chart, using healthy default");
                ToothStatus::healthy(number, Timestamp::now())
            }
        }
    }

    pub fn entry(&self, number: ToothNumber) -> Option<&ToothStatus> {
        self.teeth.get(&number)
    }

    /// Set the condition of an existing tooth.
    ///
    /// Notes are replaced only by a non-empty value; `None` or `""` keeps the
    /// existing notes. `last_updated` is always refreshed. An unknown tooth is
    /// reported and nothing is inserted.
    pub fn update(
        &mut self,
        number: ToothNumber,
        status: ToothCondition,
        notes: Option<&str>,
    ) -> Result<ToothChange, ChartError> {
        let scheme = self.scheme;
        let entry = self
            .teeth
            .get_mut(&number)
            .ok_or(ChartError::ToothNotFound { number, scheme })?;

        let previous = entry.clone();
        entry.status = status;
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            entry.notes = notes.to_string();
        }
        entry.last_updated = Timestamp::now();

        tracing::debug!(
            %number,
            from = %previous.status,
            to = %status,
            "tooth status updated"
        );

        Ok(ToothChange {
            number,
            previous,
            current: entry.clone(),
        })
    }

    /// Entries ordered by tooth number.
    pub fn teeth(&self) -> impl Iterator<Item = &ToothStatus> {
        self.teeth.values()
    }

    /// `updated_at` is the newest tooth edit, never earlier than `created_at`.
    pub fn snapshot(&self, patient_id: Uuid, created_at: Timestamp) -> DentalChart {
        let updated_at = self
            .teeth
            .values()
            .map(|t| t.last_updated)
            .fold(created_at, Timestamp::max);
        DentalChart {
            patient_id,
            scheme: self.scheme,
            teeth: self.teeth.values().cloned().collect(),
            created_at,
            updated_at,
        }
    }

    /// Rebuild a store from a persisted chart, rejecting any chart whose
    /// teeth are not exactly the catalog of its scheme.
    pub fn from_chart(chart: &DentalChart) -> Result<Self, ChartError> {
        let scheme = chart.scheme;
        let catalog = catalog(scheme);

        let mut teeth = BTreeMap::new();
        for tooth in &chart.teeth {
            if !catalog.contains(tooth.number) {
                return Err(ChartError::ToothNotFound {
                    number: tooth.number,
                    scheme,
                });
            }
            if teeth.insert(tooth.number, tooth.clone()).is_some() {
                return Err(ChartError::DuplicateTooth {
                    number: tooth.number,
                });
            }
        }

        if teeth.len() != catalog.len() {
            return Err(ChartError::CatalogMismatch {
                scheme,
                expected: catalog.len(),
                found: teeth.len(),
            });
        }

        Ok(Self { scheme, teeth })
    }
}
