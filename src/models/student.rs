use serde::{Deserialize, Serialize};

/// A registered student.
///
/// Serialized with the field names of the persisted collection
/// (`id`, `name`, `rollNo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_no: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roll_no: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roll_no: roll_no.into(),
        }
    }
}
