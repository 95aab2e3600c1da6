use jiff::Timestamp;
use odonto_audit::events::AuditEvent;
use odonto_audit::history::HistoryEntry;
use odonto_chart::{ToothChange, ToothEditor, ToothStatusStore};
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::patient::Patient;
use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use odonto_storage::FileStore;
use odonto_storage::error::StorageError;
use uuid::Uuid;

/// One patient's chart loaded for editing, with the collaborators needed to
/// persist and audit each change.
pub struct ChartSession {
    files: FileStore,
    patient: Patient,
    store: ToothStatusStore,
    created_at: Timestamp,
    practitioner: String,
}

impl ChartSession {
    /// Load an existing chart.
    pub async fn open(
        files: FileStore,
        patient_id: Uuid,
        scheme: DentitionScheme,
        practitioner: impl Into<String>,
    ) -> eyre::Result<Self> {
        let patient = load_patient(&files, patient_id).await?;
        let chart = match files.load_chart(patient_id, scheme).await {
            Ok(chart) => chart,
            Err(StorageError::NotFound { .. }) => {
                return Err(eyre::eyre!(
                    "{} has no {scheme} chart; run `odonto chart init {patient_id} --scheme {scheme}` first",
                    patient.full_name()
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let store = ToothStatusStore::from_chart(&chart)?;
        Ok(Self {
            files,
            patient,
            store,
            created_at: chart.created_at,
            practitioner: practitioner.into(),
        })
    }

    /// Start a fresh all-healthy chart. An existing chart for the same
    /// scheme is only replaced when `force` is set.
    pub async fn create(
        files: FileStore,
        patient_id: Uuid,
        scheme: DentitionScheme,
        practitioner: impl Into<String>,
        force: bool,
    ) -> eyre::Result<Self> {
        let patient = load_patient(&files, patient_id).await?;
        if files.chart_exists(patient_id, scheme).await? && !force {
            return Err(eyre::eyre!(
                "{} already has a {scheme} chart; pass --force to start over",
                patient.full_name()
            ));
        }

        let created_at = Timestamp::now();
        let session = Self {
            files,
            patient,
            store: ToothStatusStore::new(scheme),
            created_at,
            practitioner: practitioner.into(),
        };
        session.save().await?;
        session
            .files
            .append_history(
                patient_id,
                HistoryEntry::chart_created(patient_id, scheme, &session.practitioner),
            )
            .await?;
        AuditEvent::new(
            "chart_created",
            "dental_chart",
            patient_id.to_string(),
            &session.practitioner,
        )
        .emit();
        Ok(session)
    }

    /// Remove the chart file and record the deletion.
    pub async fn delete(self) -> eyre::Result<()> {
        let patient_id = self.patient.id;
        let scheme = self.store.scheme();
        self.files.delete_chart(patient_id, scheme).await?;
        self.files
            .append_history(
                patient_id,
                HistoryEntry::chart_deleted(patient_id, scheme, &self.practitioner),
            )
            .await?;
        AuditEvent::new("chart_deleted", "dental_chart", patient_id.to_string(), &self.practitioner)
            .with_details(serde_json::json!({ "scheme": scheme }))
            .emit();
        Ok(())
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn store(&self) -> &ToothStatusStore {
        &self.store
    }

    /// Edit one tooth through the tooth editor, then persist the chart and
    /// record the change. `None` notes keep whatever the tooth already has.
    pub async fn set_tooth(
        &mut self,
        number: ToothNumber,
        condition: ToothCondition,
        notes: Option<String>,
    ) -> eyre::Result<ToothChange> {
        let mut editor = ToothEditor::new();
        editor.open(&self.store, number);
        editor.select_condition(condition)?;
        if let Some(notes) = notes {
            editor.set_notes(notes)?;
        }
        let change = editor.commit(&mut self.store)?;

        self.save().await?;
        let patient_id = self.patient.id;
        self.files
            .append_history(
                patient_id,
                HistoryEntry::tooth_changed(patient_id, &change, &self.practitioner),
            )
            .await?;
        AuditEvent::tooth_updated(patient_id, &change, &self.practitioner).emit();

        Ok(change)
    }

    async fn save(&self) -> eyre::Result<()> {
        let chart = self.store.snapshot(self.patient.id, self.created_at);
        self.files.save_chart(&chart).await?;
        Ok(())
    }
}

pub(crate) async fn load_patient(files: &FileStore, patient_id: Uuid) -> eyre::Result<Patient> {
    match files.load_patient(patient_id).await {
        Ok(patient) => Ok(patient),
        Err(StorageError::NotFound { .. }) => Err(eyre::eyre!("no patient with id {patient_id}")),
        Err(e) => Err(e.into()),
    }
}
