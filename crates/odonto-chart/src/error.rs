use odonto_core::error::CoreError;
use odonto_core::models::chart::DentitionScheme;
use odonto_core::models::tooth::ToothNumber;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("tooth {number} is not on the {scheme} chart")]
    ToothNotFound {
        number: ToothNumber,
        scheme: DentitionScheme,
    },

    #[error("tooth {number} appears more than once")]
    DuplicateTooth { number: ToothNumber },

    #[error("{scheme} chart must have {expected} teeth, found {found}")]
    CatalogMismatch {
        scheme: DentitionScheme,
        expected: usize,
        found: usize,
    },

    #[error("tooth editor is not open")]
    EditorClosed,

    #[error(transparent)]
    Core(#[from] CoreError),
}
