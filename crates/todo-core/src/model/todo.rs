use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status used by list queries when the caller does not pass one
pub const DEFAULT_LIST_STATUS: u8 = 1;

/// Todo - the single record managed by the service
///
/// `id` and both timestamps are owned by storage: callers never choose them.
/// The wire names of the timestamps are `created_time` and `updated_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier, never reused
    pub id: u64,

    /// Free-form title
    pub title: String,

    /// Application-defined status value (no validated range)
    pub status: u8,

    /// Set once on insert
    #[serde(rename = "created_time")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    #[serde(rename = "updated_time")]
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Apply a draft on top of this record.
    ///
    /// Both fields are overwritten, including zero and empty values.
    pub fn apply(&mut self, draft: &TodoDraft, now: DateTime<Utc>) {
        self.title = draft.title.clone();
        self.status = draft.status;
        self.updated_at = now;
    }
}

/// Caller-supplied fields for add and update.
///
/// Unknown fields in the request body (`id`, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub status: u8,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, status: u8) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}
