use crate::dtos::{ApiResponse, CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest};
use crate::middleware::UserId;
use crate::models::Question;
use crate::services::ensure_owner;
use crate::services::questions::QuestionPatch;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn create_question(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Field checks run before the identity check: a malformed body is 400
    // even when the caller is anonymous.
    req.validate()?;
    let (Some(class_id), Some(title), Some(description)) =
        (req.class_id, req.title, req.description)
    else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Class ID, title, and description are required"
        )));
    };
    let UserId(user_id) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let question = state
        .questions
        .create(Question::new(class_id, user_id, title, description, req.tags))
        .await?;

    tracing::info!(question_id = %question.question_id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Question created successfully",
            QuestionResponse::from(question),
        )),
    ))
}

pub async fn get_all_questions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let questions = state.questions.get_all().await?;
    let data: Vec<QuestionResponse> = questions.into_iter().map(QuestionResponse::from).collect();

    Ok(Json(ApiResponse::new(
        "Questions retrieved successfully",
        data,
    )))
}

pub async fn get_question_by_id(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question = state
        .questions
        .get_by_id(&question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Question not found")))?;

    Ok(Json(ApiResponse::new(
        "Question retrieved successfully",
        QuestionResponse::from(question),
    )))
}

pub async fn update_question(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(question_id): Path<String>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    // All preconditions run before the write.
    req.validate()?;
    let (Some(title), Some(description)) = (req.title, req.description) else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Title and description are required"
        )));
    };
    let UserId(caller) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let question = state
        .questions
        .get_by_id(&question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Question not found")))?;
    ensure_owner(&question.user_id, &caller)?;

    let patch = QuestionPatch {
        title,
        description,
        tags: req.tags,
    };
    let outcome = state.questions.update(&question_id, &patch).await?;

    // The row can vanish between the ownership read and the write; that race
    // is accepted and reported as not-found.
    if outcome.matched == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Question not found")));
    }
    if outcome.modified == 0 {
        return Err(AppError::NoChange("Question not changed".to_string()));
    }

    let updated = state
        .questions
        .get_by_id(&question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Question not found")))?;

    tracing::info!(question_id = %question_id, "Question updated");

    Ok(Json(ApiResponse::new(
        "Question updated successfully",
        QuestionResponse::from(updated),
    )))
}

pub async fn delete_question(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let UserId(caller) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let question = state
        .questions
        .get_by_id(&question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Question not found")))?;
    ensure_owner(&question.user_id, &caller)?;

    let deleted = state.questions.delete(&question_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Question not found")));
    }

    tracing::info!(question_id = %question_id, "Question deleted");

    Ok(Json(ApiResponse::new(
        "Question deleted successfully",
        QuestionResponse::from(question),
    )))
}
