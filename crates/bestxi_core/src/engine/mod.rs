//! # Ranking & Assignment Engine
//!
//! The algorithmic core, one full pass per input change:
//! dedup -> score -> assign -> extract. Every stage is a pure function
//! of its declared inputs; repeated runs produce identical output.
//!
//! - `dedup` - collapse records naming the same player
//! - `score` - weighted fit scores, leaderboards, score matrices
//! - `assign` - exact Hungarian assignment + greedy fallback
//! - `teams` - K mutually disjoint teams from one pool

pub mod assign;
pub mod dedup;
pub mod score;
pub mod teams;


pub use assign::{assign, AssignStrategy};
pub use dedup::{normalize_name, resolve_duplicates, DedupPolicy, DedupReport};
pub use score::{
    all_leaderboards, leaderboard, score_matrix, score_record, LeaderboardEntry, Normalization,
    ScoreMatrix,
};
pub use teams::extract_teams;
