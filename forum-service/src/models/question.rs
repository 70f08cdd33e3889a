use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A top-level content item scoped to a Class, owned by a user.
///
/// `user_id` is stamped at creation and immutable; `tags` is stored as null
/// when the creator sent none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub question_id: String,
    pub class_id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub tags: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        class_id: String,
        user_id: String,
        title: String,
        description: String,
        tags: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            question_id: Uuid::new_v4().to_string(),
            class_id,
            user_id,
            title,
            description,
            tags,
            created_at: now,
            updated_at: now,
        }
    }
}
