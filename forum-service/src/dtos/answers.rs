use crate::models::Answer;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer_text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnswerRequest {
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer_id: String,
    pub question_id: String,
    pub user_id: String,
    pub answer_text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer_id: answer.answer_id,
            question_id: answer.question_id,
            user_id: answer.user_id,
            answer_text: answer.answer_text,
            created_at: answer.created_at.to_rfc3339(),
            updated_at: answer.updated_at.to_rfc3339(),
        }
    }
}
