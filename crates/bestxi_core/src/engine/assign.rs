//! # Assignment Engine
//!
//! Maximum-weight bipartite assignment of records to formation slots:
//! at most one record per slot, at most one slot per record, maximizing
//! the sum of assigned scores.
//!
//! The exact path pads the score matrix to a square integer cost matrix
//! and solves it with the Hungarian implementation in `pathfinding`
//! (negated scores turn maximization into the solver's native
//! minimization). The greedy path is a documented non-optimal fallback:
//! deterministic and duplicate-free, but slot-by-slot local.

use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::score::ScoreMatrix;
use crate::models::formation::Formation;
use crate::models::record::AttributeRecord;
use crate::models::team::{SlotFill, TeamAssignment};

/// Fixed-point resolution for the integer cost matrix: scores are
/// rounded at 1e-6, far below any meaningful score difference at the
/// supported problem sizes.
const SCORE_SCALE: f64 = 1_000_000.0;

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignStrategy {
    /// Exact Hungarian solver. Globally optimal.
    #[default]
    Exact,
    /// Slot-by-slot greedy selection in formation order. Deterministic
    /// and never assigns a record twice, but not globally optimal.
    Greedy,
}

/// Assign the full record pool to the formation's slots.
///
/// `matrix` rows must align with `records`; columns with the
/// formation's slots (as produced by [`crate::engine::score::score_matrix`]).
pub fn assign(
    records: &[AttributeRecord],
    matrix: &ScoreMatrix,
    formation: &Formation,
    strategy: AssignStrategy,
) -> TeamAssignment {
    let picks = slot_picks(&matrix.scores, formation.len(), strategy);
    let team = team_from_picks(records, &matrix.scores, formation, &picks);
    debug!(
        total = team.total,
        filled = team.filled_count(),
        slots = formation.len(),
        "assignment complete"
    );
    team
}

/// Row index chosen for each slot, or `None` for an unfilled slot.
pub(crate) fn slot_picks(
    scores: &[Vec<f64>],
    slot_count: usize,
    strategy: AssignStrategy,
) -> Vec<Option<usize>> {
    if scores.is_empty() || slot_count == 0 {
        return vec![None; slot_count];
    }
    match strategy {
        AssignStrategy::Exact => exact_picks(scores, slot_count),
        AssignStrategy::Greedy => greedy_picks(scores, slot_count),
    }
}

fn exact_picks(scores: &[Vec<f64>], slot_count: usize) -> Vec<Option<usize>> {
    let rows = scores.len();
    // Pad to square: dummy rows leave slots unfilled, dummy columns
    // leave records unassigned. Dummy cells contribute cost 0.
    let n = rows.max(slot_count);
    let costs = Matrix::from_fn(n, n, |(row, col)| {
        if row < rows && col < slot_count {
            -((scores[row][col] * SCORE_SCALE).round() as i64)
        } else {
            0
        }
    });

    let (_, assignment) = kuhn_munkres_min(&costs);

    let mut picks = vec![None; slot_count];
    for (row, &col) in assignment.iter().enumerate() {
        if row < rows && col < slot_count {
            picks[col] = Some(row);
        }
    }
    picks
}

fn greedy_picks(scores: &[Vec<f64>], slot_count: usize) -> Vec<Option<usize>> {
    let mut used = vec![false; scores.len()];
    let mut picks = vec![None; slot_count];
    for slot in 0..slot_count {
        let mut best: Option<(usize, f64)> = None;
        for (row, row_scores) in scores.iter().enumerate() {
            if used[row] {
                continue;
            }
            let score = row_scores[slot];
            // Strict comparison: ties keep the earliest row (first-seen wins).
            let better = match best {
                None => true,
                Some((_, best_score)) => score > best_score,
            };
            if better {
                best = Some((row, score));
            }
        }
        if let Some((row, _)) = best {
            used[row] = true;
            picks[slot] = Some(row);
        }
    }
    picks
}

/// Materialize a team from per-slot row picks. Picks index into
/// `records` / `scores` rows.
pub(crate) fn team_from_picks(
    records: &[AttributeRecord],
    scores: &[Vec<f64>],
    formation: &Formation,
    picks: &[Option<usize>],
) -> TeamAssignment {
    let slots = formation
        .slots
        .iter()
        .enumerate()
        .map(|(col, slot)| match picks[col] {
            Some(row) => SlotFill {
                slot_label: slot.label.clone(),
                record_id: Some(records[row].id),
                name: Some(records[row].name.clone()),
                score: scores[row][col],
            },
            None => SlotFill::unfilled(slot.label.clone()),
        })
        .collect();
    TeamAssignment::from_slots(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::formation::FormationSlot;
    use crate::models::record::RecordId;

    fn pool(n: usize) -> Vec<AttributeRecord> {
        (0..n)
            .map(|i| AttributeRecord::new(i as RecordId + 1, format!("p{}", i + 1)))
            .collect()
    }

    fn slots(n: usize) -> Formation {
        Formation::new(
            "test",
            (0..n)
                .map(|i| FormationSlot::new(format!("S{i}"), "R"))
                .collect(),
        )
    }

    fn matrix(scores: Vec<Vec<f64>>) -> ScoreMatrix {
        let record_ids = (0..scores.len()).map(|i| i as RecordId + 1).collect();
        ScoreMatrix { record_ids, scores }
    }

    #[test]
    fn exact_solver_finds_the_diagonal_optimum() {
        let m = matrix(vec![
            vec![9.0, 2.0, 2.0],
            vec![2.0, 9.0, 2.0],
            vec![2.0, 2.0, 9.0],
        ]);
        let team = assign(&pool(3), &m, &slots(3), AssignStrategy::Exact);
        assert_eq!(team.total, 27.0);
        assert_eq!(team.average, 9.0);
        assert_eq!(team.assigned_ids(), vec![1, 2, 3]);
        for slot in &team.slots {
            assert_eq!(slot.score, 9.0);
        }
    }

    #[test]
    fn exact_beats_greedy_when_greedy_is_myopic() {
        // Greedy takes record 1 for the first slot (9 ties, first-seen
        // wins) and is left with 0 for the second; the optimum swaps.
        let scores = vec![vec![9.0, 8.0], vec![9.0, 0.0]];

        let greedy = assign(&pool(2), &matrix(scores.clone()), &slots(2), AssignStrategy::Greedy);
        assert_eq!(greedy.total, 9.0);
        assert_eq!(greedy.slots[0].record_id, Some(1));
        assert_eq!(greedy.slots[1].record_id, Some(2));

        let exact = assign(&pool(2), &matrix(scores), &slots(2), AssignStrategy::Exact);
        assert_eq!(exact.total, 17.0);
        assert_eq!(exact.slots[0].record_id, Some(2));
        assert_eq!(exact.slots[1].record_id, Some(1));
    }

    #[test]
    fn undersized_pool_fills_what_it_can() {
        let m = matrix(vec![
            vec![5.0, 4.0, 3.0, 2.0, 1.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        ]);
        let team = assign(&pool(2), &m, &slots(5), AssignStrategy::Exact);
        assert_eq!(team.filled_count(), 2);
        assert_eq!(team.slots.iter().filter(|s| !s.is_filled()).count(), 3);
        assert_eq!(team.total, 10.0);
        assert_eq!(team.average, 5.0);
    }

    #[test]
    fn oversized_pool_leaves_extras_unassigned() {
        let m = matrix(vec![
            vec![1.0],
            vec![7.0],
            vec![3.0],
        ]);
        let team = assign(&pool(3), &m, &slots(1), AssignStrategy::Exact);
        assert_eq!(team.assigned_ids(), vec![2]);
        assert_eq!(team.total, 7.0);
    }

    #[test]
    fn empty_pool_yields_all_unfilled_slots() {
        let m = matrix(vec![]);
        for strategy in [AssignStrategy::Exact, AssignStrategy::Greedy] {
            let team = assign(&[], &m, &slots(3), strategy);
            assert_eq!(team.filled_count(), 0);
            assert_eq!(team.total, 0.0);
            assert_eq!(team.average, 0.0);
            assert_eq!(team.slots.len(), 3);
        }
    }

    #[test]
    fn zero_score_assignment_is_still_an_assignment() {
        let m = matrix(vec![vec![0.0]]);
        for strategy in [AssignStrategy::Exact, AssignStrategy::Greedy] {
            let team = assign(&pool(1), &m, &slots(1), strategy);
            assert_eq!(team.slots[0].record_id, Some(1));
            assert_eq!(team.slots[0].score, 0.0);
        }
    }

    #[test]
    fn negative_scores_pass_through_the_exact_solver() {
        // Record 2 is the better of two bad options; the slot is filled.
        let m = matrix(vec![vec![-5.0], vec![-1.0]]);
        let team = assign(&pool(2), &m, &slots(1), AssignStrategy::Exact);
        assert_eq!(team.slots[0].record_id, Some(2));
        assert_eq!(team.total, -1.0);
    }

    #[test]
    fn greedy_fills_slots_in_formation_order_and_never_reuses() {
        let m = matrix(vec![
            vec![9.0, 9.0, 9.0],
            vec![8.0, 8.0, 8.0],
            vec![7.0, 7.0, 7.0],
        ]);
        let team = assign(&pool(3), &m, &slots(3), AssignStrategy::Greedy);
        // Best remaining record per slot, first-seen on ties.
        assert_eq!(team.slots[0].record_id, Some(1));
        assert_eq!(team.slots[1].record_id, Some(2));
        assert_eq!(team.slots[2].record_id, Some(3));
        let mut ids = team.assigned_ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn fractional_scores_survive_the_integer_solver() {
        let m = matrix(vec![vec![1.25, 0.5], vec![1.0, 0.75]]);
        let team = assign(&pool(2), &m, &slots(2), AssignStrategy::Exact);
        // 1.25 + 0.75 = 2.0 beats 1.0 + 0.5 = 1.5.
        assert_eq!(team.slots[0].record_id, Some(1));
        assert_eq!(team.slots[1].record_id, Some(2));
        assert_eq!(team.total, 2.0);
    }
}
