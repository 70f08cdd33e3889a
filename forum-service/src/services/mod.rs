pub mod answers;
pub mod database;
pub mod metrics;
pub mod ownership;
pub mod questions;
pub mod votes;

pub use answers::AnswerService;
pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics};
pub use ownership::ensure_owner;
pub use questions::QuestionService;
pub use votes::VoteService;

/// Result of an update write: `matched == 0` means the target was absent,
/// `matched > 0 && modified == 0` means the write changed nothing.
#[derive(Debug, Clone, Copy)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}
