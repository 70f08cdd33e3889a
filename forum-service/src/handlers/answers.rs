use crate::dtos::{AnswerResponse, ApiResponse, CreateAnswerRequest, UpdateAnswerRequest};
use crate::middleware::UserId;
use crate::models::Answer;
use crate::services::ensure_owner;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn create_answer(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(question_id): Path<String>,
    Json(req): Json<CreateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    // The parent question is resolved first; a missing caller and an
    // unresolvable question report as one combined authorization failure.
    let question = state.questions.get_by_id(&question_id).await?;
    let (Some(UserId(user_id)), Some(question)) = (user_id, question) else {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "User ID or question ID missing"
        )));
    };

    req.validate()?;
    let answer_text = req
        .answer_text
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Answer is required")))?;

    let answer = state
        .answers
        .create(Answer::new(question.question_id, user_id, answer_text))
        .await?;

    tracing::info!(answer_id = %answer.answer_id, question_id = %question_id, "Answer created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Answer created successfully",
            AnswerResponse::from(answer),
        )),
    ))
}

pub async fn get_all_answers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let answers = state.answers.get_all().await?;
    let data: Vec<AnswerResponse> = answers.into_iter().map(AnswerResponse::from).collect();

    Ok(Json(ApiResponse::new(
        "Answers retrieved successfully",
        data,
    )))
}

pub async fn get_answer_by_id(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let answer = state
        .answers
        .get_by_id(&answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Answer not found")))?;

    Ok(Json(ApiResponse::new(
        "Answer retrieved successfully",
        AnswerResponse::from(answer),
    )))
}

pub async fn get_answers_by_question_id(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Existence-only check; a question with zero answers is still a 200
    // with an empty list.
    state
        .questions
        .get_by_id(&question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Question not found")))?;

    let answers = state.answers.get_by_question_id(&question_id).await?;
    let data: Vec<AnswerResponse> = answers.into_iter().map(AnswerResponse::from).collect();

    Ok(Json(ApiResponse::new(
        "Answers retrieved successfully",
        data,
    )))
}

pub async fn update_answer(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(answer_id): Path<String>,
    Json(req): Json<UpdateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    // All preconditions run before the write.
    req.validate()?;
    let answer_text = req
        .answer_text
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Answer is required")))?;
    let UserId(caller) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let answer = state
        .answers
        .get_by_id(&answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Answer not found")))?;
    ensure_owner(&answer.user_id, &caller)?;

    let outcome = state.answers.update(&answer_id, &answer_text).await?;
    if outcome.matched == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Answer not found")));
    }
    if outcome.modified == 0 {
        return Err(AppError::NoChange("Answer not changed".to_string()));
    }

    let updated = state
        .answers
        .get_by_id(&answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Answer not found")))?;

    tracing::info!(answer_id = %answer_id, "Answer updated");

    Ok(Json(ApiResponse::new(
        "Answer updated successfully",
        AnswerResponse::from(updated),
    )))
}

pub async fn delete_answer(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(answer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let UserId(caller) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let answer = state.answers.get_by_id(&answer_id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Answer already deleted or not found"))
    })?;
    ensure_owner(&answer.user_id, &caller)?;

    let deleted = state.answers.delete(&answer_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Answer already deleted or not found"
        )));
    }

    tracing::info!(answer_id = %answer_id, "Answer deleted");

    Ok(Json(ApiResponse::new(
        "Answer deleted successfully",
        AnswerResponse::from(answer),
    )))
}
