use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque frequency token such as `"D"`, `"5min"` or `"QS-OCT"`.
///
/// Only the calendar layer gives the token meaning; everything else passes it
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyLabel(String);

impl FrequencyLabel {
    /// Wrap a label string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the label and return the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FrequencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrequencyLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FrequencyLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FrequencyLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FrequencyLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FrequencyLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
