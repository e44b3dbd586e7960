//! Pure data structures (DTOs) exchanged between the dispatcher and a
//! [`DataProvider`](crate::provider::DataProvider).

pub mod accounts;
pub mod tasks;

pub use accounts::*;
pub use tasks::*;

use crate::resource::Resource;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat request parameters in the order the host delivered them.
///
/// The reserved `path` key names the target resource; every other key is
/// handed to the provider untouched.
pub type Params = IndexMap<String, String>;

/// The reserved parameter naming the target resource.
pub const PATH_PARAM: &str = "path";

/// One record of any resource in the catalog.
///
/// Serialized untagged, so the wire form is the bare record object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Tasks(Tasks),
    Accounts(Accounts),
}

impl Record {
    /// The resource this record belongs to.
    pub fn resource(&self) -> Resource {
        match self {
            Record::Accounts(_) => Resource::Accounts,
            Record::Tasks(_) => Resource::Tasks,
        }
    }

    /// The stable identifier column.
    pub fn id(&self) -> &str {
        match self {
            Record::Accounts(a) => &a.id,
            Record::Tasks(t) => &t.id,
        }
    }
}

impl From<Accounts> for Record {
    fn from(value: Accounts) -> Self {
        Record::Accounts(value)
    }
}

impl From<Tasks> for Record {
    fn from(value: Tasks) -> Self {
        Record::Tasks(value)
    }
}
