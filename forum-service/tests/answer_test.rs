mod common;

use common::{TestApp, OTHER_USER_ID, TEST_USER_ID};
use mongodb::bson::doc;
use reqwest::Client;

#[tokio::test]
async fn create_answer_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;

    let response = client
        .post(format!("{}/questions/{}/answers", app.address, question_id))
        .header("X-User-ID", OTHER_USER_ID)
        .json(&serde_json::json!({ "answer_text": "Because of Y" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Answer created successfully");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["question_id"], question_id);
    assert_eq!(body["data"]["user_id"], OTHER_USER_ID);

    let answer_id = body["data"]["answer_id"].as_str().unwrap();
    let stored = app
        .db
        .answers()
        .find_one(doc! { "_id": answer_id }, None)
        .await
        .unwrap()
        .expect("Answer not found in DB");
    assert_eq!(stored.question_id, question_id);

    app.cleanup().await;
}

#[tokio::test]
async fn create_answer_for_nonexistent_question_returns_403_and_persists_nothing() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/questions/999/answers", app.address))
        .header("X-User-ID", TEST_USER_ID)
        .json(&serde_json::json!({ "answer_text": "Because of Y" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(403, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "User ID or question ID missing");

    let count = app
        .db
        .answers()
        .count_documents(doc! {}, None)
        .await
        .unwrap();
    assert_eq!(count, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn create_answer_with_empty_text_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;

    for body in [
        serde_json::json!({ "answer_text": "" }),
        serde_json::json!({}),
    ] {
        let response = client
            .post(format!("{}/questions/{}/answers", app.address, question_id))
            .header("X-User-ID", TEST_USER_ID)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(400, response.status().as_u16());
    }

    app.cleanup().await;
}

#[tokio::test]
async fn get_answer_by_id_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    let response = client
        .get(format!("{}/answers/{}", app.address, answer_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Answer retrieved successfully");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["answer_id"], answer_id);
    assert_eq!(body["data"]["question_id"], question_id);
    assert_eq!(body["data"]["answer_text"], "Because of Y");

    app.cleanup().await;
}

#[tokio::test]
async fn get_answer_returns_404_when_absent() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/answers/999", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(404, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Answer not found");

    app.cleanup().await;
}

#[tokio::test]
async fn answers_by_question_with_zero_answers_returns_empty_list() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;

    let response = client
        .get(format!("{}/questions/{}/answers", app.address, question_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));

    app.cleanup().await;
}

#[tokio::test]
async fn answers_by_question_reports_missing_question_not_missing_answers() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/questions/999/answers", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(404, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Question not found");

    app.cleanup().await;
}

#[tokio::test]
async fn list_answers_returns_all() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    app.seed_answer(&question_id, TEST_USER_ID).await;
    app.seed_answer(&question_id, OTHER_USER_ID).await;

    let response = client
        .get(format!("{}/answers", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    app.cleanup().await;
}

#[tokio::test]
async fn update_answer_rejects_missing_text_without_writing() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    // Validation runs before any persistence call; the stored row must be
    // untouched after the rejection.
    let response = client
        .put(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", TEST_USER_ID)
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(400, response.status().as_u16());

    let stored = app
        .db
        .answers()
        .find_one(doc! { "_id": &answer_id }, None)
        .await
        .unwrap()
        .expect("Answer not found in DB");
    assert_eq!(stored.answer_text, "Because of Y");

    app.cleanup().await;
}

#[tokio::test]
async fn update_answer_with_identical_patch_returns_not_changed() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    let response = client
        .put(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", TEST_USER_ID)
        .json(&serde_json::json!({ "answer_text": "Because of Y" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(400, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Answer not changed");

    app.cleanup().await;
}

#[tokio::test]
async fn update_answer_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    let response = client
        .put(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", TEST_USER_ID)
        .json(&serde_json::json!({ "answer_text": "Because of Z" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Answer updated successfully");
    assert_eq!(body["data"]["answer_text"], "Because of Z");

    app.cleanup().await;
}

#[tokio::test]
async fn update_answer_by_non_owner_returns_403() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    let response = client
        .put(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", OTHER_USER_ID)
        .json(&serde_json::json!({ "answer_text": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(403, response.status().as_u16());

    app.cleanup().await;
}

#[tokio::test]
async fn delete_answer_already_deleted_returns_404_with_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let question_id = app.seed_question(TEST_USER_ID).await;
    let answer_id = app.seed_answer(&question_id, TEST_USER_ID).await;

    let response = client
        .delete(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", TEST_USER_ID)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Answer deleted successfully");

    let response = client
        .delete(format!("{}/answers/{}", app.address, answer_id))
        .header("X-User-ID", TEST_USER_ID)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Answer already deleted or not found");

    app.cleanup().await;
}
