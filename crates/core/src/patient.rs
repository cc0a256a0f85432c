use serde::{Deserialize, Serialize};

/// A patient record: caller-assigned identifier plus free-text diagnosis.
///
/// Both fields are mandatory on every write; a payload missing either one
/// fails to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: String,
    pub diagnosis: String,
}

impl Patient {
    pub fn new(id: impl Into<String>, diagnosis: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            diagnosis: diagnosis.into(),
        }
    }
}
