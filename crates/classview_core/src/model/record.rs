//! Classification record model.
//!
//! # Responsibility
//! - Define the canonical row shared by filter, closure and view layers.
//! - Keep "absent weight" distinct from a present zero weight.
//!
//! # Invariants
//! - `code` is non-empty after trim for every record built through `Record::new`.
//! - An empty `parent` marks a root; multiple roots are allowed.
//! - `weight == None` means "no data"; `Some(0.0)` is a valid magnitude.
//! - Non-finite weights are never stored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hierarchy separator used by the lexical subtree convention.
pub const CODE_SEPARATOR: char = '.';

/// Validation errors for record construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `code` is blank after trim.
    EmptyCode,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "record code must not be blank"),
        }
    }
}

impl Error for RecordValidationError {}

/// One node of a classification forest, encoded by parent pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Primary key. Dotted encoding is conventional, not structural.
    pub code: String,
    /// Display text, may be empty.
    pub label: String,
    /// Code of the structural parent. Empty for roots.
    pub parent: String,
    /// Free-form tier label. Descriptive only.
    pub level: String,
    /// Optional magnitude.
    pub weight: Option<f64>,
}

impl Record {
    /// Creates a record with trimmed fields and no level or weight.
    pub fn new(
        code: impl AsRef<str>,
        label: impl AsRef<str>,
        parent: impl AsRef<str>,
    ) -> Result<Self, RecordValidationError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(RecordValidationError::EmptyCode);
        }
        Ok(Self {
            code: code.to_string(),
            label: label.as_ref().trim().to_string(),
            parent: parent.as_ref().trim().to_string(),
            level: String::new(),
            weight: None,
        })
    }

    /// Sets the descriptive tier label.
    pub fn with_level(mut self, level: impl AsRef<str>) -> Self {
        self.level = level.as_ref().trim().to_string();
        self
    }

    /// Sets the weight. Non-finite values collapse to absent.
    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.weight = weight.filter(|value| value.is_finite());
        self
    }

    /// Returns whether this record has no structural parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns whether a weight is present (zero included).
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Returns whether `code` equals `root` or starts with `root` + separator.
    ///
    /// Textual convention only; the parent chain is not consulted.
    pub fn is_lexically_under(&self, root: &str) -> bool {
        match self.code.strip_prefix(root) {
            Some("") => true,
            Some(rest) => rest.starts_with(CODE_SEPARATOR),
            None => false,
        }
    }
}
