use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user record from the looking-for-party listing. Snapshot for a single
/// cycle; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub auth: Auth,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub stats: Stats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub timestamps: Timestamps,
}

// Sparse records omit timestamps entirely; None stands in for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timestamps {
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "loggedin")]
    pub logged_in: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "lvl", default)]
    pub level: i64,
}

/// Envelope for GET /api/v3/looking-for-party.
#[derive(Debug, Clone, Deserialize)]
pub struct LookingForPartyResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Candidate>,
}

/// Body for POST /api/v3/groups/party/invite.
#[derive(Debug, Clone, Serialize)]
pub struct InviteRequest {
    pub uuids: Vec<String>,
}

/// Filter thresholds, fixed at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct EligibilityCriteria {
    pub min_level: i64,
    /// Exact, case-sensitive match when set; None disables the language rule.
    pub language: Option<String>,
    pub only_active: bool,
}

/// Ordered ids selected in one cycle; discarded after submission.
#[derive(Debug, Clone, Default)]
pub struct InvitationBatch {
    pub uuids: Vec<String>,
}

impl InvitationBatch {
    pub fn len(&self) -> usize {
        self.uuids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uuids.is_empty()
    }
}
