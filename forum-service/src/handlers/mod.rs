pub mod answers;
pub mod health;
pub mod questions;
pub mod votes;

pub use answers::{
    create_answer, delete_answer, get_all_answers, get_answer_by_id, get_answers_by_question_id,
    update_answer,
};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use questions::{
    create_question, delete_question, get_all_questions, get_question_by_id, update_question,
};
pub use votes::{create_vote, delete_vote, get_votes_by_answer_id};
