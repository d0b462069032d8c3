//! Homework review status domain model
//!
//! The review API reports a submission's state as one of three string codes.
//! Each code carries a fixed, human-readable verdict shown to the user.
//! The verdict texts are part of the external contract and must not change.

use serde::{Deserialize, Serialize};

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// Review finished, the reviewer accepted the work
    Approved,

    /// A reviewer has picked the work up
    Reviewing,

    /// Review finished, the reviewer left remarks
    Rejected,
}

impl HomeworkStatus {
    /// Resolves a raw status code from the API
    ///
    /// Returns `None` for any code outside the known set; the caller decides
    /// whether that is an error (it is, for records picked for notification).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The wire code for this status
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// The verdict sentence shown to the user for this status
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
