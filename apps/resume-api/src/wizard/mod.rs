// Resume wizard: the draft record, step navigation over it, and the
// plain-text review rendered by the finalize step.

pub mod models;
pub mod navigation;
pub mod render;

use thiserror::Error;
use uuid::Uuid;

pub use models::Draft;
pub use navigation::{SliceUpdate, Wizard, WizardStep};

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("Missing required field '{field}' in {section}")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Invalid year-month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),

    #[error("Proficiency must be between 1 and 5, got {0}")]
    InvalidProficiency(u8),

    #[error("Duplicate id {id} in {section}")]
    DuplicateId { section: &'static str, id: Uuid },

    #[error("The {current} step cannot update {target}")]
    StepMismatch {
        current: &'static str,
        target: &'static str,
    },
}
