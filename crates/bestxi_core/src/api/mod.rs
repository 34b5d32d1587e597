pub mod json_api;

pub use json_api::{
    build_squads_json, rank_players_json, PlayerData, RankRequest, RankResponse, SquadRequest,
    SquadResponse,
};
