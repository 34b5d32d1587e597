//! # bestxi_core - Player Ranking & Squad Assignment Engine
//!
//! Ranks a roster of players, each described by a fixed vector of
//! numeric attributes, against role-specific weight profiles, and
//! computes optimal non-overlapping assignments of players to formation
//! slots.
//!
//! ## Features
//! - Weighted fit scores per (player, role) pair with optional
//!   divide-by-max normalization
//! - Duplicate resolution across ingestion batches (name-keyed,
//!   policy-driven)
//! - Exact Hungarian assignment of players to formation slots, with a
//!   deterministic greedy fallback
//! - K mutually player-disjoint teams from one candidate pool
//! - Built-in role weight tables and formations, plus a JSON API for
//!   host integration
//!
//! Every computation is a pure function of its inputs: same records,
//! roles, formation and normalization produce byte-identical output.

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main engine surface
pub use engine::{
    all_leaderboards, assign, extract_teams, leaderboard, normalize_name, resolve_duplicates,
    score_matrix, score_record, AssignStrategy, DedupPolicy, DedupReport, LeaderboardEntry,
    Normalization, ScoreMatrix,
};

// Re-export model types
pub use models::{
    AttributeRecord, Formation, FormationSlot, RecordId, RecordMeta, RoleProfile, RoleTable,
    SlotFill, TeamAssignment,
};

// Re-export built-in configuration
pub use data::{builtin_formation, builtin_formations, builtin_roles, CANONICAL_ATTRIBUTES};

pub use api::{build_squads_json, rank_players_json};
pub use error::{EngineError, Result};
