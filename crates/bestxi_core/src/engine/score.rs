//! # Score Engine
//!
//! Weighted fit scores for (record, role) pairs: a plain dot product of
//! normalized attribute values against role weights. No cross-terms, no
//! clipping, no internal rounding. Rounding is a presentation concern.
//!
//! Determinism contract: weights are iterated in sorted attribute order
//! so f64 accumulation produces the same bit pattern on every run.

use fxhash::FxHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::formation::Formation;
use crate::models::record::{AttributeRecord, RecordId};
use crate::models::role::{RoleProfile, RoleTable};

/// Attribute value normalization applied before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Normalization {
    /// Use attribute values as-is.
    #[default]
    Raw,
    /// Divide every attribute value by `max_value` before weighting.
    Scaled { max_value: f64 },
}

impl Normalization {
    /// `Scaled` requires a strictly positive divisor. Checked before any
    /// scoring so an invalid configuration never yields partial results.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Normalization::Raw => Ok(()),
            Normalization::Scaled { max_value } if max_value > 0.0 => Ok(()),
            Normalization::Scaled { max_value } => Err(EngineError::InvalidScaleMax(max_value)),
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match *self {
            Normalization::Raw => value,
            Normalization::Scaled { max_value } => value / max_value,
        }
    }
}

/// One leaderboard row: identity, score and the raw attributes for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub record_id: RecordId,
    pub name: String,
    pub score: f64,
    pub attributes: FxHashMap<String, f64>,
}

/// Fit scores of every record against every formation slot.
///
/// Row order follows the input record order; column order follows the
/// formation's slot order. Always recomputed whole; there is no
/// incremental update path.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    pub record_ids: Vec<RecordId>,
    /// `scores[row][col]` = fit of record `row` for slot `col`.
    pub scores: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    pub fn rows(&self) -> usize {
        self.scores.len()
    }

    pub fn cols(&self) -> usize {
        self.scores.first().map_or(0, Vec::len)
    }
}

/// Fit score of one record for one role.
///
/// A record missing every weighted attribute scores exactly 0; an
/// all-zero weight vector scores 0 for every record. Negative values
/// pass through unchanged since the formula is purely linear.
pub fn score_record(
    record: &AttributeRecord,
    role: &RoleProfile,
    normalization: Normalization,
) -> Result<f64> {
    normalization.validate()?;
    Ok(weighted_sum(record, &role.sorted_weights(), normalization))
}

fn weighted_sum(
    record: &AttributeRecord,
    weights: &[(&str, f64)],
    normalization: Normalization,
) -> f64 {
    weights
        .iter()
        .map(|(attr, weight)| normalization.apply(record.attribute(attr)) * weight)
        .sum()
}

/// Rank every record against one role, best first.
///
/// The sort is stable: records with equal scores keep their input order.
pub fn leaderboard(
    records: &[AttributeRecord],
    role: &RoleProfile,
    normalization: Normalization,
) -> Result<Vec<LeaderboardEntry>> {
    normalization.validate()?;
    Ok(rank_unchecked(records, role, normalization))
}

fn rank_unchecked(
    records: &[AttributeRecord],
    role: &RoleProfile,
    normalization: Normalization,
) -> Vec<LeaderboardEntry> {
    let weights = role.sorted_weights();
    let mut entries: Vec<LeaderboardEntry> = records
        .iter()
        .map(|record| LeaderboardEntry {
            record_id: record.id,
            name: record.name.clone(),
            score: weighted_sum(record, &weights, normalization),
            attributes: record.attributes.clone(),
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
}

/// Leaderboards for every role in the table, computed in parallel.
///
/// Output order follows the role table's insertion order regardless of
/// which leaderboard finishes first.
pub fn all_leaderboards(
    records: &[AttributeRecord],
    roles: &RoleTable,
    normalization: Normalization,
) -> Result<Vec<(String, Vec<LeaderboardEntry>)>> {
    normalization.validate()?;
    let role_list: Vec<&RoleProfile> = roles.iter().collect();
    Ok(role_list
        .par_iter()
        .map(|role| {
            (
                role.name.clone(),
                rank_unchecked(records, role, normalization),
            )
        })
        .collect())
}

/// Score every record against every slot of a formation.
///
/// Validates the configuration (normalization, slot role bindings)
/// before computing anything.
pub fn score_matrix(
    records: &[AttributeRecord],
    formation: &Formation,
    roles: &RoleTable,
    normalization: Normalization,
) -> Result<ScoreMatrix> {
    normalization.validate()?;
    formation.validate(roles)?;

    // Slot columns reuse their bound role's weights; resolve each role's
    // sorted weight list once up front.
    let column_weights: Vec<Vec<(&str, f64)>> = formation
        .slots
        .iter()
        .map(|slot| {
            roles
                .get(&slot.role)
                .map(RoleProfile::sorted_weights)
                .unwrap_or_default()
        })
        .collect();

    let scores = records
        .iter()
        .map(|record| {
            column_weights
                .iter()
                .map(|weights| weighted_sum(record, weights, normalization))
                .collect()
        })
        .collect();

    Ok(ScoreMatrix {
        record_ids: records.iter().map(|r| r.id).collect(),
        scores,
    })
}
