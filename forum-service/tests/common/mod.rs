use forum_service::config::ForumConfig;
use forum_service::services::MongoDb;
use forum_service::startup::Application;
use uuid::Uuid;

pub const TEST_USER_ID: &str = "test_user_123";
pub const OTHER_USER_ID: &str = "test_user_456";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("forum_test_{}", Uuid::new_v4());

        let mut config = ForumConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Create a question owned by `user_id`, returning its id.
    pub async fn seed_question(&self, user_id: &str) -> String {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/questions", self.address))
            .header("X-User-ID", user_id)
            .json(&serde_json::json!({
                "class_id": "1",
                "title": "Why?",
                "description": "Explain X"
            }))
            .send()
            .await
            .expect("Failed to create question");
        assert_eq!(201, response.status().as_u16());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["data"]["question_id"].as_str().unwrap().to_string()
    }

    /// Create an answer to `question_id` owned by `user_id`, returning its id.
    pub async fn seed_answer(&self, question_id: &str, user_id: &str) -> String {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/questions/{}/answers", self.address, question_id))
            .header("X-User-ID", user_id)
            .json(&serde_json::json!({ "answer_text": "Because of Y" }))
            .send()
            .await
            .expect("Failed to create answer");
        assert_eq!(201, response.status().as_u16());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["data"]["answer_id"].as_str().unwrap().to_string()
    }

    /// Cleanup test resources (drops the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
