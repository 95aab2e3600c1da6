use odonto_core::models::tooth::{ToothCondition, ToothStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::store::ToothStatusStore;

/// Number of teeth in each condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCounts {
    pub healthy: usize,
    pub caries: usize,
    pub root_canal_treated: usize,
    pub extracted: usize,
    pub implant: usize,
    pub crown: usize,
}

impl StatusCounts {
    pub fn from_store(store: &ToothStatusStore) -> Self {
        Self::from_teeth(store.teeth())
    }

    pub fn from_teeth<'a>(teeth: impl IntoIterator<Item = &'a ToothStatus>) -> Self {
        let mut counts = Self::default();
        for tooth in teeth {
            *counts.slot(tooth.status) += 1;
        }
        counts
    }

    pub fn count(&self, condition: ToothCondition) -> usize {
        match condition {
            ToothCondition::Healthy => self.healthy,
            ToothCondition::Caries => self.caries,
            ToothCondition::RootCanalTreated => self.root_canal_treated,
            ToothCondition::Extracted => self.extracted,
            ToothCondition::Implant => self.implant,
            ToothCondition::Crown => self.crown,
        }
    }

    pub fn total(&self) -> usize {
        ToothCondition::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToothCondition, usize)> + '_ {
        ToothCondition::ALL.into_iter().map(|c| (c, self.count(c)))
    }

    fn slot(&mut self, condition: ToothCondition) -> &mut usize {
        match condition {
            ToothCondition::Healthy => &mut self.healthy,
            ToothCondition::Caries => &mut self.caries,
            ToothCondition::RootCanalTreated => &mut self.root_canal_treated,
            ToothCondition::Extracted => &mut self.extracted,
            ToothCondition::Implant => &mut self.implant,
            ToothCondition::Crown => &mut self.crown,
        }
    }
}
