use crate::dtos::{ApiResponse, CreateVoteRequest, VoteResponse};
use crate::middleware::UserId;
use crate::models::Vote;
use crate::services::ensure_owner;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn create_vote(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(answer_id): Path<String>,
    Json(req): Json<CreateVoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let UserId(user_id) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    // Same pre-write existence check Answers apply to their Question.
    let answer = state
        .answers
        .get_by_id(&answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Answer not found")))?;

    let vote_type = req
        .vote_type
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Vote type is required")))?;

    let vote = state
        .votes
        .create(Vote::new(answer.answer_id, user_id, vote_type))
        .await?;

    tracing::info!(vote_id = %vote.vote_id, answer_id = %answer_id, "Vote created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Vote created successfully",
            VoteResponse::from(vote),
        )),
    ))
}

pub async fn get_votes_by_answer_id(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .answers
        .get_by_id(&answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Answer not found")))?;

    let votes = state.votes.get_by_answer_id(&answer_id).await?;
    let data: Vec<VoteResponse> = votes.into_iter().map(VoteResponse::from).collect();

    Ok(Json(ApiResponse::new("Votes retrieved successfully", data)))
}

pub async fn delete_vote(
    State(state): State<AppState>,
    user_id: Option<UserId>,
    Path(vote_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let UserId(caller) = user_id
        .ok_or_else(|| AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid")))?;

    let vote = state
        .votes
        .get_by_id(&vote_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Vote not found")))?;
    ensure_owner(&vote.user_id, &caller)?;

    let deleted = state.votes.delete(&vote_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Vote not found")));
    }

    tracing::info!(vote_id = %vote_id, "Vote deleted");

    Ok(Json(ApiResponse::new(
        "Vote deleted successfully",
        VoteResponse::from(vote),
    )))
}
