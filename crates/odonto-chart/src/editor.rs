use jiff::Timestamp;
use odonto_core::models::tooth::{ToothCondition, ToothNumber};

use crate::error::ChartError;
use crate::store::{ToothChange, ToothStatusStore};

/// Working copy of one tooth while the editor is open.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothDraft {
    pub number: ToothNumber,
    pub status: ToothCondition,
    pub notes: String,
    /// When the tooth was last saved, shown alongside the form.
    pub last_updated: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum EditorState {
    #[default]
    Closed,
    Open(ToothDraft),
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    /// Enter with Ctrl or Cmd held.
    SaveShortcut,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    Cancelled,
    Committed(ToothChange),
}

/// Modal-style editor for a single tooth: `Closed -> Open -> Closed`.
///
/// The store is only written on [`commit`](Self::commit).
#[derive(Debug, Clone, Default)]
pub struct ToothEditor {
    state: EditorState,
}

impl ToothEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    pub fn draft(&self) -> Option<&ToothDraft> {
        match &self.state {
            EditorState::Open(draft) => Some(draft),
            EditorState::Closed => None,
        }
    }

    /// Open on `number`, seeding the draft from the store. Opening while
    /// another tooth is being edited discards that draft first.
    pub fn open(&mut self, store: &ToothStatusStore, number: ToothNumber) {
        if let EditorState::Open(previous) = &self.state {
            tracing::debug!(discarded = %previous.number, %number, "editor reopened on another tooth");
        }

        let current = store.get(number);
        self.state = EditorState::Open(ToothDraft {
            number,
            status: current.status,
            notes: current.notes,
            last_updated: current.last_updated,
        });
    }

    pub fn select_condition(&mut self, condition: ToothCondition) -> Result<(), ChartError> {
        self.draft_mut()?.status = condition;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), ChartError> {
        self.draft_mut()?.notes = notes.into();
        Ok(())
    }

    /// Discard the draft. A no-op when already closed.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Write the draft through [`ToothStatusStore::update`] and close.
    ///
    /// If the store rejects the update the editor stays open with the draft
    /// intact.
    pub fn commit(&mut self, store: &mut ToothStatusStore) -> Result<ToothChange, ChartError> {
        let EditorState::Open(draft) = &self.state else {
            return Err(ChartError::EditorClosed);
        };

        let change = store.update(draft.number, draft.status, Some(draft.notes.as_str()))?;
        self.state = EditorState::Closed;
        Ok(change)
    }

    pub fn handle_key(
        &mut self,
        key: EditorKey,
        store: &mut ToothStatusStore,
    ) -> Result<KeyOutcome, ChartError> {
        if !self.is_open() {
            return Ok(KeyOutcome::Ignored);
        }
        match key {
            EditorKey::Escape => {
                self.cancel();
                Ok(KeyOutcome::Cancelled)
            }
            EditorKey::SaveShortcut => self.commit(store).map(KeyOutcome::Committed),
            EditorKey::Other => Ok(KeyOutcome::Ignored),
        }
    }

    fn draft_mut(&mut self) -> Result<&mut ToothDraft, ChartError> {
        match &mut self.state {
            EditorState::Open(draft) => Ok(draft),
            EditorState::Closed => Err(ChartError::EditorClosed),
        }
    }
}
