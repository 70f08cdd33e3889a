use super::{MongoDb, UpdateOutcome};
use crate::models::Answer;
use chrono::Utc;
use futures::stream::TryStreamExt;
use metrics::counter;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

#[derive(Clone)]
pub struct AnswerService {
    db: MongoDb,
}

impl AnswerService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, answer: Answer) -> Result<Answer, AppError> {
        self.db
            .answers()
            .insert_one(&answer, None)
            .await
            .map_err(|e| {
                tracing::error!(answer_id = %answer.answer_id, "Failed to insert answer: {}", e);
                AppError::from(e)
            })?;
        counter!("forum_answers_created_total").increment(1);
        Ok(answer)
    }

    pub async fn get_all(&self) -> Result<Vec<Answer>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let mut cursor = self
            .db
            .answers()
            .find(doc! {}, find_options)
            .await
            .map_err(AppError::from)?;

        let mut answers = Vec::new();
        while let Some(answer) = cursor.try_next().await.map_err(AppError::from)? {
            answers.push(answer);
        }
        Ok(answers)
    }

    pub async fn get_by_id(&self, answer_id: &str) -> Result<Option<Answer>, AppError> {
        self.db
            .answers()
            .find_one(doc! { "_id": answer_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn get_by_question_id(&self, question_id: &str) -> Result<Vec<Answer>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let mut cursor = self
            .db
            .answers()
            .find(doc! { "question_id": question_id }, find_options)
            .await
            .map_err(AppError::from)?;

        let mut answers = Vec::new();
        while let Some(answer) = cursor.try_next().await.map_err(AppError::from)? {
            answers.push(answer);
        }
        Ok(answers)
    }

    pub async fn update(
        &self,
        answer_id: &str,
        answer_text: &str,
    ) -> Result<UpdateOutcome, AppError> {
        let result = self
            .db
            .answers()
            .update_one(
                doc! { "_id": answer_id },
                doc! { "$set": { "answer_text": answer_text } },
                None,
            )
            .await
            .map_err(AppError::from)?;

        // Bump the timestamp only when content actually changed, so an
        // identical patch still reads back as unmodified.
        if result.modified_count > 0 {
            self.db
                .answers()
                .update_one(
                    doc! { "_id": answer_id },
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

    pub async fn delete(&self, answer_id: &str) -> Result<u64, AppError> {
        let result = self
            .db
            .answers()
            .delete_one(doc! { "_id": answer_id }, None)
            .await
            .map_err(AppError::from)?;
        Ok(result.deleted_count)
    }
}
