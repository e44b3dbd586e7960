use serde::{Deserialize, Serialize};

/// A row of the `accounts` sheet.
///
/// # Record Shape
/// Both columns are stored as strings. The `id` column is the stable identifier
/// used by [`DataProvider::delete`](crate::provider::DataProvider::delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accounts {
    pub id: String,
    pub name: String,
}

impl Accounts {
    /// Creates a new account record.
    ///
    /// # Arguments
    /// * `id` - Stable identifier of the row
    /// * `name` - Display name of the account
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
