use super::{MongoDb, UpdateOutcome};
use crate::models::Question;
use chrono::Utc;
use futures::stream::TryStreamExt;
use metrics::counter;
use mongodb::bson::{doc, Bson};
use mongodb::options::FindOptions;
use service_core::error::AppError;

/// Fields an update replaces. The owner and class are immutable.
#[derive(Debug, Clone)]
pub struct QuestionPatch {
    pub title: String,
    pub description: String,
    pub tags: Option<String>,
}

#[derive(Clone)]
pub struct QuestionService {
    db: MongoDb,
}

impl QuestionService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, question: Question) -> Result<Question, AppError> {
        self.db
            .questions()
            .insert_one(&question, None)
            .await
            .map_err(|e| {
                tracing::error!(question_id = %question.question_id, "Failed to insert question: {}", e);
                AppError::from(e)
            })?;
        counter!("forum_questions_created_total").increment(1);
        Ok(question)
    }

    pub async fn get_all(&self) -> Result<Vec<Question>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let mut cursor = self
            .db
            .questions()
            .find(doc! {}, find_options)
            .await
            .map_err(AppError::from)?;

        let mut questions = Vec::new();
        while let Some(question) = cursor.try_next().await.map_err(AppError::from)? {
            questions.push(question);
        }
        Ok(questions)
    }

    pub async fn get_by_id(&self, question_id: &str) -> Result<Option<Question>, AppError> {
        self.db
            .questions()
            .find_one(doc! { "_id": question_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        question_id: &str,
        patch: &QuestionPatch,
    ) -> Result<UpdateOutcome, AppError> {
        let tags = patch
            .tags
            .as_ref()
            .map_or(Bson::Null, |t| Bson::String(t.clone()));

        let result = self
            .db
            .questions()
            .update_one(
                doc! { "_id": question_id },
                doc! { "$set": {
                    "title": &patch.title,
                    "description": &patch.description,
                    "tags": tags,
                } },
                None,
            )
            .await
            .map_err(AppError::from)?;

        // Bump the timestamp only when content actually changed, so an
        // identical patch still reads back as unmodified.
        if result.modified_count > 0 {
            self.db
                .questions()
                .update_one(
                    doc! { "_id": question_id },
                    doc! { "$set": { "updated_at": mongodb::bson::DateTime::from_chrono(Utc::now()) } },
                    None,
                )
                .await
                .map_err(AppError::from)?;
        }

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    pub async fn delete(&self, question_id: &str) -> Result<u64, AppError> {
        let result = self
            .db
            .questions()
            .delete_one(doc! { "_id": question_id }, None)
            .await
            .map_err(AppError::from)?;
        Ok(result.deleted_count)
    }
}
