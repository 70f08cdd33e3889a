use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A response to exactly one Question.
///
/// `question_id` must denote a Question that existed when the Answer was
/// created; the service layer checks this before every insert (no database
/// foreign key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "_id")]
    pub answer_id: String,
    pub question_id: String,
    pub user_id: String,
    pub answer_text: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: String, user_id: String, answer_text: String) -> Self {
        let now = Utc::now();
        Self {
            answer_id: Uuid::new_v4().to_string(),
            question_id,
            user_id,
            answer_text,
            created_at: now,
            updated_at: now,
        }
    }
}
