//! # Multi-Team Extractor
//!
//! Produces K mutually player-disjoint teams from one candidate pool:
//! score the pool once, assign the best team, drop its players from the
//! pool, assign again. An exhausted pool still yields a team with as
//! many slots filled as records remain, possibly none.

use fxhash::FxHashSet;
use tracing::debug;

use crate::engine::assign::{slot_picks, team_from_picks, AssignStrategy};
use crate::engine::score::{score_matrix, Normalization};
use crate::error::Result;
use crate::models::formation::Formation;
use crate::models::record::AttributeRecord;
use crate::models::role::RoleTable;
use crate::models::team::TeamAssignment;

/// Extract `k` pairwise record-disjoint teams, best first.
///
/// The score matrix is computed once; later teams re-solve over the rows
/// that survive earlier picks.
pub fn extract_teams(
    records: &[AttributeRecord],
    roles: &RoleTable,
    formation: &Formation,
    normalization: Normalization,
    k: usize,
    strategy: AssignStrategy,
) -> Result<Vec<TeamAssignment>> {
    let matrix = score_matrix(records, formation, roles, normalization)?;

    let mut alive: Vec<usize> = (0..records.len()).collect();
    let mut teams = Vec::with_capacity(k);

    for rank in 0..k {
        let sub_scores: Vec<Vec<f64>> = alive.iter().map(|&row| matrix.scores[row].clone()).collect();
        let sub_picks = slot_picks(&sub_scores, formation.len(), strategy);
        // Translate subset row indices back to pool rows.
        let picks: Vec<Option<usize>> = sub_picks.iter().map(|p| p.map(|i| alive[i])).collect();

        let team = team_from_picks(records, &matrix.scores, formation, &picks);
        debug!(
            team = rank + 1,
            total = team.total,
            filled = team.filled_count(),
            remaining = alive.len(),
            "extracted team"
        );

        let used: FxHashSet<usize> = picks.iter().flatten().copied().collect();
        alive.retain(|row| !used.contains(row));
        teams.push(team);
    }

    Ok(teams)
}
