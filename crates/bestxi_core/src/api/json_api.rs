//! # JSON API
//!
//! String-in / string-out entry points for host integration. Requests
//! carry the player pool inline; record ids are assigned from the
//! request order. Configuration problems come back as `Err(String)`
//! with a stable error code prefix.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::data::{builtin_formation, builtin_roles};
use crate::engine::assign::AssignStrategy;
use crate::engine::dedup::{resolve_duplicates, DedupPolicy, DedupReport};
use crate::engine::score::{leaderboard, LeaderboardEntry, Normalization};
use crate::engine::teams::extract_teams;
use crate::models::formation::Formation;
use crate::models::record::{AttributeRecord, RecordId, RecordMeta};
use crate::models::team::TeamAssignment;

mod error_codes {
    pub const PARSE: &str = "E_PARSE";
    pub const CONFIG: &str = "E_CONFIG";
    pub const SERIALIZE: &str = "E_SERIALIZE";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

/// One player as supplied by the ingestion side.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerData {
    pub name: String,
    #[serde(default)]
    pub attributes: FxHashMap<String, f64>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub transfer_value: Option<String>,
    #[serde(default)]
    pub positions: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Role to rank against, e.g. "SC". Resolved in the built-in table.
    pub role: String,
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub normalization: Normalization,
    /// When present, collapse duplicate players before ranking.
    #[serde(default)]
    pub dedup: Option<DedupPolicy>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub role: String,
    pub entries: Vec<LeaderboardEntry>,
    pub dedup: DedupReport,
}

/// Formation selector: a built-in name or explicit slots.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FormationSpec {
    Name(String),
    Custom(Formation),
}

#[derive(Debug, Deserialize)]
pub struct SquadRequest {
    pub formation: FormationSpec,
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default = "default_k_teams")]
    pub k_teams: usize,
    #[serde(default)]
    pub strategy: AssignStrategy,
    #[serde(default)]
    pub dedup: Option<DedupPolicy>,
}

fn default_k_teams() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct SquadResponse {
    pub formation: String,
    pub teams: Vec<TeamAssignment>,
    pub dedup: DedupReport,
}

/// Leaderboard query: rank the supplied players against one role.
pub fn rank_players_json(request_json: &str) -> Result<String, String> {
    let request: RankRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::PARSE, e))?;

    let roles = builtin_roles();
    let role = roles
        .get(&request.role)
        .ok_or_else(|| {
            err_code(
                error_codes::CONFIG,
                format!("unknown role '{}'", request.role),
            )
        })?;

    let records = ingest(&request.players);
    let (records, report) = match &request.dedup {
        Some(policy) => resolve_duplicates(records, roles, policy, request.normalization)
            .map_err(|e| err_code(error_codes::CONFIG, e))?,
        None => (records, DedupReport::default()),
    };

    let entries = leaderboard(&records, role, request.normalization)
        .map_err(|e| err_code(error_codes::CONFIG, e))?;

    let response = RankResponse {
        role: request.role,
        entries,
        dedup: report,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE, e))
}

/// Team-building query: K disjoint best teams for a formation.
pub fn build_squads_json(request_json: &str) -> Result<String, String> {
    let request: SquadRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::PARSE, e))?;

    let roles = builtin_roles();
    let formation = match &request.formation {
        FormationSpec::Name(name) => builtin_formation(name)
            .cloned()
            .ok_or_else(|| {
                err_code(error_codes::CONFIG, format!("unknown formation '{name}'"))
            })?,
        FormationSpec::Custom(formation) => formation.clone(),
    };

    let records = ingest(&request.players);
    let (records, report) = match &request.dedup {
        Some(policy) => resolve_duplicates(records, roles, policy, request.normalization)
            .map_err(|e| err_code(error_codes::CONFIG, e))?,
        None => (records, DedupReport::default()),
    };

    let teams = extract_teams(
        &records,
        roles,
        &formation,
        request.normalization,
        request.k_teams,
        request.strategy,
    )
    .map_err(|e| err_code(error_codes::CONFIG, e))?;

    let response = SquadResponse {
        formation: formation.name,
        teams,
        dedup: report,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE, e))
}

/// Assign record ids from request order; ids are opaque and stable for
/// the lifetime of the response.
fn ingest(players: &[PlayerData]) -> Vec<AttributeRecord> {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| AttributeRecord {
            id: i as RecordId + 1,
            name: p.name.clone(),
            attributes: p.attributes.clone(),
            meta: RecordMeta {
                age: p.age,
                transfer_value: p.transfer_value.clone(),
                positions: p.positions.clone(),
            },
        })
        .collect()
}
