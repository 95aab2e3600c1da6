use std::path::PathBuf;

use odonto_audit::history::HistoryEntry;
use odonto_core::models::chart::{DentalChart, DentitionScheme};
use odonto_core::models::note::PrivateNote;
use odonto_core::models::patient::Patient;
use odonto_core::models::reminder::Reminder;
use odonto_core::storage_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::{objects, state};

/// Persistence for one data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn load_patient(&self, id: Uuid) -> Result<Patient, StorageError> {
        state::load_state(&self.root, &storage_keys::patient(id)).await
    }

    pub async fn save_patient(&self, patient: &Patient) -> Result<(), StorageError> {
        state::save_state(&self.root, &storage_keys::patient(patient.id), patient).await?;
        tracing::info!(patient_id = %patient.id, "patient saved");
        Ok(())
    }

    /// All stored patients ordered by last name, then first name.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, StorageError> {
        let keys = objects::list_keys(&self.root, storage_keys::PATIENTS_PREFIX).await?;
        let mut patients = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            patients.push(state::load_state::<Patient>(&self.root, key).await?);
        }
        patients.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        Ok(patients)
    }

    pub async fn chart_exists(
        &self,
        patient_id: Uuid,
        scheme: DentitionScheme,
    ) -> Result<bool, StorageError> {
        objects::object_exists(&self.root, &storage_keys::chart(patient_id, scheme)).await
    }

    pub async fn load_chart(
        &self,
        patient_id: Uuid,
        scheme: DentitionScheme,
    ) -> Result<DentalChart, StorageError> {
        state::load_state(&self.root, &storage_keys::chart(patient_id, scheme)).await
    }

    pub async fn save_chart(&self, chart: &DentalChart) -> Result<(), StorageError> {
        let key = storage_keys::chart(chart.patient_id, chart.scheme);
        state::save_state(&self.root, &key, chart).await?;
        tracing::info!(patient_id = %chart.patient_id, scheme = %chart.scheme, "chart saved");
        Ok(())
    }

    pub async fn delete_chart(
        &self,
        patient_id: Uuid,
        scheme: DentitionScheme,
    ) -> Result<(), StorageError> {
        objects::delete_object(&self.root, &storage_keys::chart(patient_id, scheme)).await
    }

    /// A patient with no recorded history yields an empty list.
    pub async fn load_history(&self, patient_id: Uuid) -> Result<Vec<HistoryEntry>, StorageError> {
        state::load_state_or_default(&self.root, &storage_keys::chart_history(patient_id)).await
    }

    pub async fn append_history(
        &self,
        patient_id: Uuid,
        entry: HistoryEntry,
    ) -> Result<(), StorageError> {
        let key = storage_keys::chart_history(patient_id);
        let mut entries: Vec<HistoryEntry> = state::load_state_or_default(&self.root, &key).await?;
        entries.push(entry);
        state::save_state(&self.root, &key, &entries).await
    }

    /// Reminders in insertion order; none stored yields an empty list.
    pub async fn load_reminders(&self, patient_id: Uuid) -> Result<Vec<Reminder>, StorageError> {
        state::load_state_or_default(&self.root, &storage_keys::reminders(patient_id)).await
    }

    pub async fn save_reminders(
        &self,
        patient_id: Uuid,
        reminders: &[Reminder],
    ) -> Result<(), StorageError> {
        state::save_state(&self.root, &storage_keys::reminders(patient_id), &reminders).await?;
        tracing::info!(%patient_id, count = reminders.len(), "reminders saved");
        Ok(())
    }

    pub async fn load_notes(&self, patient_id: Uuid) -> Result<Vec<PrivateNote>, StorageError> {
        state::load_state_or_default(&self.root, &storage_keys::private_notes(patient_id)).await
    }

    pub async fn save_notes(
        &self,
        patient_id: Uuid,
        notes: &[PrivateNote],
    ) -> Result<(), StorageError> {
        state::save_state(&self.root, &storage_keys::private_notes(patient_id), &notes).await?;
        tracing::info!(%patient_id, count = notes.len(), "private notes saved");
        Ok(())
    }
}
