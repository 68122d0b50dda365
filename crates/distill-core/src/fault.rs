//! Faults recorded while deriving the wrapper action.
//!
//! A fault is not an early return. The pipeline keeps going after
//! recording one so a single run reports every mismatch between the
//! manifest and the source action, then refuses to save anything.

use thiserror::Error;

/// A single mismatch between the manifest and the source action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A keep-listed input is absent from the source action
    #[error("Source action is missing this 'keep' input: {0}")]
    MissingKeepInput(String),

    /// A discard-listed input is absent from the source action
    #[error("Source action is missing this 'discard' input: {0}")]
    MissingDiscardInput(String),

    /// The source declares inputs named in neither list
    #[error("Source action has inputs that were not accounted for in either keep or discard: {0}")]
    UnaccountedInputs(String),

    /// A top-level field the wrapper replaces is absent from the source
    #[error("Source action is missing the expected top-level field: {0}")]
    MissingSourceField(&'static str),

    /// Top-level fields survived the translation
    #[error("The source action was not completely consumed by the translation, so the manifest needs updating. Remains: {0}")]
    UnhandledSourceFields(String),

    /// A required placeholder marker is absent from the README template
    #[error("Replacement template marker `{marker}` is not present in {path}")]
    MissingMarker {
        /// The absent marker
        marker: &'static str,
        /// The template file that was searched
        path: String,
    },
}
