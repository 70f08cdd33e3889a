use crate::models::{Answer, Question, Vote};
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for forum-service");

        // Questions are listed per class.
        self.create_index(self.questions(), doc! { "class_id": 1 }, "class_lookup")
            .await?;

        // Answers are listed per question.
        self.create_index(
            self.answers(),
            doc! { "question_id": 1 },
            "question_lookup",
        )
        .await?;

        // Votes are listed per answer.
        self.create_index(self.votes(), doc! { "answer_id": 1 }, "answer_lookup")
            .await?;

        Ok(())
    }

    async fn create_index<T>(
        &self,
        collection: Collection<T>,
        keys: mongodb::bson::Document,
        name: &str,
    ) -> Result<(), AppError> {
        let index = IndexModel::builder()
            .keys(keys.clone())
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index, None).await.map_err(|e| {
            tracing::error!(
                "Failed to create index {} on {}: {}",
                name,
                collection.name(),
                e
            );
            AppError::from(e)
        })?;
        tracing::info!("Created index {} on {}.{:?}", name, collection.name(), keys);

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn questions(&self) -> Collection<Question> {
        self.db.collection("questions")
    }

    pub fn answers(&self) -> Collection<Answer> {
        self.db.collection("answers")
    }

    pub fn votes(&self) -> Collection<Vote> {
        self.db.collection("votes")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
