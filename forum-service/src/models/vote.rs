use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// Approval or disapproval of an Answer, one row per vote.
///
/// Vote creation re-verifies the target Answer exists, the same pre-write
/// existence check Answers apply to their Question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    #[serde(rename = "_id")]
    pub vote_id: String,
    pub answer_id: String,
    pub user_id: String,
    pub vote_type: VoteType,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(answer_id: String, user_id: String, vote_type: VoteType) -> Self {
        Self {
            vote_id: Uuid::new_v4().to_string(),
            answer_id,
            user_id,
            vote_type,
            created_at: Utc::now(),
        }
    }
}
