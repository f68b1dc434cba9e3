mod match_result;
pub mod pool;

pub use match_result::{ConfidenceBand, MatchResult, MatchSource};
