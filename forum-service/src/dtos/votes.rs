use crate::models::{Vote, VoteType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateVoteRequest {
    pub vote_type: Option<VoteType>,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub vote_id: String,
    pub answer_id: String,
    pub user_id: String,
    pub vote_type: VoteType,
    pub created_at: String,
}

impl From<Vote> for VoteResponse {
    fn from(vote: Vote) -> Self {
        Self {
            vote_id: vote.vote_id,
            answer_id: vote.answer_id,
            user_id: vote.user_id,
            vote_type: vote.vote_type,
            created_at: vote.created_at.to_rfc3339(),
        }
    }
}
