use crate::models::Question;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Required text fields are `Option` so the handler can reject absence with
// the domain's own 400 message instead of a serde rejection; `validator`
// catches the present-but-empty case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Class ID is required"))]
    pub class_id: Option<String>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub class_id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub tags: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            question_id: question.question_id,
            class_id: question.class_id,
            user_id: question.user_id,
            title: question.title,
            description: question.description,
            tags: question.tags,
            created_at: question.created_at.to_rfc3339(),
            updated_at: question.updated_at.to_rfc3339(),
        }
    }
}
