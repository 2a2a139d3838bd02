//! Domain-specific errors.

use thiserror::Error;

use crate::domain::model::Language;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A bilingual document lacks the marker pair for one of its languages.
    #[error("missing {language} language block in {document}")]
    MissingBlock {
        language: Language,
        document: String,
    },
}
