pub mod answers;
pub mod questions;
pub mod responses;
pub mod votes;

pub use answers::{AnswerResponse, CreateAnswerRequest, UpdateAnswerRequest};
pub use questions::{CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest};
pub use responses::ApiResponse;
pub use votes::{CreateVoteRequest, VoteResponse};
