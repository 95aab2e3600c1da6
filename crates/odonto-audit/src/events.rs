use serde::Serialize;
use tracing::info;

use odonto_chart::ToothChange;
use uuid::Uuid;

/// A structured audit event for chart and patient actions.
///
/// Events are logged via `tracing`; the persisted edit trail lives in
/// [`crate::history`].
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub user: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            user: user.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn tooth_updated(patient_id: Uuid, change: &ToothChange, user: impl Into<String>) -> Self {
        Self::new("tooth_updated", "dental_chart", patient_id.to_string(), user).with_details(
            serde_json::json!({
                "tooth": change.number,
                "from": change.previous.status,
                "to": change.current.status,
            }),
        )
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.user = %self.user,
            audit.details = %details,
            "audit event"
        );
    }
}
