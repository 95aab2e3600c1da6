use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A practitioner's note on a patient, kept outside the clinical chart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrivateNote {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub created_by: String,
    /// Hidden from listings unless confidential notes are asked for.
    #[serde(default)]
    pub is_confidential: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PrivateNote {
    pub fn new(
        patient_id: Uuid,
        content: &str,
        created_by: impl Into<String>,
        is_confidential: bool,
        tags: Vec<String>,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            content: non_empty(content)?,
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
            is_confidential,
            tags: normalize_tags(tags),
        })
    }

    /// Replace the content, returning the previous text.
    pub fn edit(&mut self, content: &str, now: Timestamp) -> Result<String, CoreError> {
        let content = non_empty(content)?;
        self.updated_at = now;
        Ok(std::mem::replace(&mut self.content, content))
    }

    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

fn non_empty(content: &str) -> Result<String, CoreError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CoreError::EmptyField { field: "content" });
    }
    Ok(content.to_string())
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Notes to list, newest first. Confidential notes only when asked for.
pub fn visible_notes(notes: &[PrivateNote], show_confidential: bool) -> Vec<&PrivateNote> {
    let mut out: Vec<&PrivateNote> = notes
        .iter()
        .filter(|n| show_confidential || !n.is_confidential)
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}
