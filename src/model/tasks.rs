use serde::{Deserialize, Serialize};

/// A row of the `tasks` sheet.
///
/// `last_updated` is kept as the raw sheet text; the wire name is `lastUpdated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tasks {
    pub id: String,
    pub title: String,
    pub content: String,
    pub last_updated: String,
}

impl Tasks {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            last_updated: last_updated.into(),
        }
    }
}
