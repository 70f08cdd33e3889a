use crate::config::ForumConfig;
use crate::handlers;
use crate::services::{AnswerService, MongoDb, QuestionService, VoteService};
use axum::{
    routing::{delete, get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ForumConfig,
    pub db: MongoDb,
    pub questions: QuestionService,
    pub answers: AnswerService,
    pub votes: VoteService,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ForumConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            questions: QuestionService::new(db.clone()),
            answers: AnswerService::new(db.clone()),
            votes: VoteService::new(db),
        };

        // The full route table, registered once at startup.
        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route(
                "/questions",
                post(handlers::create_question).get(handlers::get_all_questions),
            )
            .route(
                "/questions/:question_id",
                get(handlers::get_question_by_id)
                    .put(handlers::update_question)
                    .delete(handlers::delete_question),
            )
            .route(
                "/questions/:question_id/answers",
                post(handlers::create_answer).get(handlers::get_answers_by_question_id),
            )
            .route("/answers", get(handlers::get_all_answers))
            .route(
                "/answers/:answer_id",
                get(handlers::get_answer_by_id)
                    .put(handlers::update_answer)
                    .delete(handlers::delete_answer),
            )
            .route(
                "/answers/:answer_id/votes",
                post(handlers::create_vote).get(handlers::get_votes_by_answer_id),
            )
            .route("/votes/:vote_id", delete(handlers::delete_vote))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
