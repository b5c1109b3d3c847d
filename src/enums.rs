// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices and verdicts.

use serde::{Deserialize, Serialize};

/// What happens to a favorite id when its catalog entry is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FavoritePolicy {
    /// Leave the id in the stored favorite set; the favorites view skips it
    #[default]
    KeepDangling,
    /// Drop the id from the favorite set and persist both blobs
    PruneOnDelete,
}

/// Outcome of the login password rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PasswordStatus {
    Valid,
    MissingCase,
}

impl PasswordStatus {
    pub fn is_valid(self) -> bool {
        self == PasswordStatus::Valid
    }

    pub fn message(self) -> &'static str {
        match self {
            PasswordStatus::Valid => "Password is valid",
            PasswordStatus::MissingCase => {
                "Password must include an uppercase letter and a lowercase letter."
            }
        }
    }
}
