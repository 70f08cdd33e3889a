pub mod answer;
pub mod question;
pub mod vote;

pub use answer::Answer;
pub use question::Question;
pub use vote::{Vote, VoteType};
