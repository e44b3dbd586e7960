//! # Resource Catalog
//!
//! The fixed allow-list of resources the dispatcher will route to.
//!
//! [`Resource`] is the allow-list itself: a name is valid exactly when it parses
//! into a variant. Every variant also names its record shape (see
//! [`Record`](crate::model::Record)) and the column schema of its sheet, so the
//! three can only change together.

use crate::error::DispatchError;
use crate::provider::sheet::{FieldType, SheetField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named record kind exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Accounts,
    Tasks,
}

const ACCOUNTS_SCHEME: &[SheetField] = &[
    SheetField::new("id", FieldType::String),
    SheetField::new("name", FieldType::String),
];

const TASKS_SCHEME: &[SheetField] = &[
    SheetField::new("id", FieldType::String),
    SheetField::new("title", FieldType::String),
    SheetField::new("content", FieldType::String),
    SheetField::new("lastUpdated", FieldType::String),
];

impl Resource {
    /// Every resource in the catalog.
    pub const ALL: [Resource; 2] = [Resource::Accounts, Resource::Tasks];

    /// The wire name, also used as the sheet name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Accounts => "accounts",
            Resource::Tasks => "tasks",
        }
    }

    /// Column layout of this resource's sheet, header row excluded.
    pub fn scheme(&self) -> &'static [SheetField] {
        match self {
            Resource::Accounts => ACCOUNTS_SCHEME,
            Resource::Tasks => TASKS_SCHEME,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = DispatchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .ok_or(DispatchError::InvalidResource)
    }
}

/// Returns `true` if `name` is in the catalog. Empty and unknown names are not.
pub fn is_valid_resource(name: &str) -> bool {
    name.parse::<Resource>().is_ok()
}

/// Converts a raw `path` value into a [`Resource`].
///
/// # Errors
/// [`DispatchError::InvalidResource`] for any name outside the catalog.
pub fn to_resource(name: &str) -> Result<Resource, DispatchError> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Accounts, Tasks};
    use crate::provider::sheet::{get_sheet_records, CellValue, Sheet};

    #[test]
    fn test_catalog_names() {
        assert!(is_valid_resource("accounts"));
        assert!(is_valid_resource("tasks"));
        assert!(!is_valid_resource(""));
        assert!(!is_valid_resource("any"));
        assert!(!is_valid_resource("Accounts"));
        assert!(!is_valid_resource(" tasks"));
    }

    #[test]
    fn test_to_resource_round_trips_wire_names() {
        for resource in Resource::ALL {
            assert_eq!(to_resource(resource.as_str()).unwrap(), resource);
        }
        assert!(matches!(
            to_resource("users"),
            Err(DispatchError::InvalidResource)
        ));
    }

    fn blank_row(width: usize) -> Vec<CellValue> {
        (0..width).map(|i| CellValue::Text(format!("v{i}"))).collect()
    }

    // Each scheme must produce its record shape, or the catalog has drifted.
    #[test]
    fn test_schemes_match_record_shapes() {
        let accounts = Resource::Accounts.scheme();
        let sheet = Sheet::new("accounts", vec![vec![], blank_row(accounts.len())]);
        let rows: Vec<Accounts> = get_sheet_records(&sheet, accounts).unwrap();
        assert_eq!(rows, vec![Accounts::new("v0", "v1")]);

        let tasks = Resource::Tasks.scheme();
        let sheet = Sheet::new("tasks", vec![vec![], blank_row(tasks.len())]);
        let rows: Vec<Tasks> = get_sheet_records(&sheet, tasks).unwrap();
        assert_eq!(rows, vec![Tasks::new("v0", "v1", "v2", "v3")]);
    }
}
