use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Circulation status of a record. Both states are steady: nothing forces a
/// transition, and new records start out `Available`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Available => write!(f, "available"),
            Status::CheckedOut => write!(f, "checked-out"),
        }
    }
}

impl FromStr for Status {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "checked-out" => Ok(Status::CheckedOut),
            other => Err(ShelfError::InvalidStatus(other.to_string())),
        }
    }
}

/// One catalog entry. The id is assigned by the catalog on creation and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    // Older backing files may omit the field; absent means available.
    #[serde(default)]
    pub status: Status,
}

impl Record {
    pub fn new(id: u64, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: Status::Available,
        }
    }
}
