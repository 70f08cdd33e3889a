use super::MongoDb;
use crate::models::Vote;
use futures::stream::TryStreamExt;
use metrics::counter;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

#[derive(Clone)]
pub struct VoteService {
    db: MongoDb,
}

impl VoteService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, vote: Vote) -> Result<Vote, AppError> {
        self.db.votes().insert_one(&vote, None).await.map_err(|e| {
            tracing::error!(vote_id = %vote.vote_id, "Failed to insert vote: {}", e);
            AppError::from(e)
        })?;
        counter!("forum_votes_created_total").increment(1);
        Ok(vote)
    }

    pub async fn get_by_id(&self, vote_id: &str) -> Result<Option<Vote>, AppError> {
        self.db
            .votes()
            .find_one(doc! { "_id": vote_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn get_by_answer_id(&self, answer_id: &str) -> Result<Vec<Vote>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let mut cursor = self
            .db
            .votes()
            .find(doc! { "answer_id": answer_id }, find_options)
            .await
            .map_err(AppError::from)?;

        let mut votes = Vec::new();
        while let Some(vote) = cursor.try_next().await.map_err(AppError::from)? {
            votes.push(vote);
        }
        Ok(votes)
    }

    pub async fn delete(&self, vote_id: &str) -> Result<u64, AppError> {
        let result = self
            .db
            .votes()
            .delete_one(doc! { "_id": vote_id }, None)
            .await
            .map_err(AppError::from)?;
        Ok(result.deleted_count)
    }
}
