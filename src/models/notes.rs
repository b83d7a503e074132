//! Advisory notes attached to a calculation.

use serde::{Deserialize, Serialize};

/// The severity of a [`Note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Informational advice.
    Info,
    /// Something the employee should check or act on.
    Warning,
}

/// A free-text advisory generated during calculation.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::models::{Note, NoteKind};
///
/// let note = Note::warning("Check your contract").with_source("Burgundy Book");
/// assert_eq!(note.kind, NoteKind::Warning);
/// assert_eq!(note.source.as_deref(), Some("Burgundy Book"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Info or warning.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// The advisory text.
    pub message: String,
    /// Where the rule behind the note comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Note {
    /// Creates an informational note.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Info,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a warning note.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Warning,
            message: message.into(),
            source: None,
        }
    }

    /// Attributes the note to a source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
