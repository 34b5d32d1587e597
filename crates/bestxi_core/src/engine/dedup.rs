//! # Deduplication Resolver
//!
//! Collapses records that refer to the same real-world player (the same
//! name re-appearing across uploaded batches) down to one canonical
//! record per identity.
//!
//! Identity is the display name after trimming, internal-whitespace
//! collapsing, case folding and diacritic stripping. Records whose
//! normalized name is empty are each a distinct identity: "unknown"
//! entries are never collapsed into one another.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::engine::score::{score_record, Normalization};
use crate::error::{EngineError, Result};
use crate::models::record::{AttributeRecord, RecordId};
use crate::models::role::RoleTable;

/// How a duplicate group's comparison score is computed.
///
/// A caller choice: a fixed reference role's fit score, or the mean
/// across every configured role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DedupPolicy {
    ReferenceRole { role: String },
    MeanOfRoles,
}

/// What deduplication did, for transparency. Not an error channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DedupReport {
    /// Number of records discarded as duplicates.
    pub removed: usize,
    /// Identity keys that collapsed more than one record, with every
    /// record id that carried the key (kept one included), in
    /// first-encounter order.
    pub collapsed: Vec<(String, Vec<RecordId>)>,
}

/// Normalized identity key: trimmed, single-spaced, case-folded,
/// diacritics stripped.
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse duplicates, keeping the best record per identity.
///
/// "Best" is the highest `(comparison score, transfer value)` pair;
/// exact ties keep the first-encountered record. Output preserves
/// first-encounter order, so running the resolver on its own output is
/// a no-op.
pub fn resolve_duplicates(
    records: Vec<AttributeRecord>,
    roles: &RoleTable,
    policy: &DedupPolicy,
    normalization: Normalization,
) -> Result<(Vec<AttributeRecord>, DedupReport)> {
    normalization.validate()?;
    if let DedupPolicy::ReferenceRole { role } = policy {
        if !roles.contains(role) {
            return Err(EngineError::UnknownReferenceRole(role.clone()));
        }
    }

    let mut kept: Vec<AttributeRecord> = Vec::with_capacity(records.len());
    let mut kept_ranks: Vec<(f64, f64)> = Vec::with_capacity(records.len());
    // key -> (index into kept, index into groups)
    let mut by_key: FxHashMap<String, (usize, usize)> = FxHashMap::default();
    let mut groups: Vec<(String, Vec<RecordId>)> = Vec::new();

    for record in records {
        let key = normalize_name(&record.name);
        if key.is_empty() {
            kept_ranks.push((0.0, 0.0));
            kept.push(record);
            continue;
        }

        let rank = comparison_rank(&record, roles, policy, normalization);
        match by_key.get(&key) {
            None => {
                by_key.insert(key.clone(), (kept.len(), groups.len()));
                groups.push((key, vec![record.id]));
                kept_ranks.push(rank);
                kept.push(record);
            }
            Some(&(kept_idx, group_idx)) => {
                groups[group_idx].1.push(record.id);
                if rank > kept_ranks[kept_idx] {
                    kept_ranks[kept_idx] = rank;
                    kept[kept_idx] = record;
                }
            }
        }
    }

    let collapsed: Vec<(String, Vec<RecordId>)> =
        groups.into_iter().filter(|(_, ids)| ids.len() > 1).collect();
    let removed = collapsed.iter().map(|(_, ids)| ids.len() - 1).sum();
    if removed > 0 {
        debug!(removed, groups = collapsed.len(), "collapsed duplicate records");
    }

    Ok((kept, DedupReport { removed, collapsed }))
}

fn comparison_rank(
    record: &AttributeRecord,
    roles: &RoleTable,
    policy: &DedupPolicy,
    normalization: Normalization,
) -> (f64, f64) {
    // Inputs are validated by resolve_duplicates; scoring cannot fail here.
    let score = match policy {
        DedupPolicy::ReferenceRole { role } => roles
            .get(role)
            .and_then(|r| score_record(record, r, normalization).ok())
            .unwrap_or(0.0),
        DedupPolicy::MeanOfRoles => {
            if roles.is_empty() {
                0.0
            } else {
                let sum: f64 = roles
                    .iter()
                    .filter_map(|r| score_record(record, r, normalization).ok())
                    .sum();
                sum / roles.len() as f64
            }
        }
    };
    (score, record.meta.transfer_value_amount())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::RecordMeta;
    use crate::models::role::RoleProfile;

    fn reference_roles() -> RoleTable {
        RoleTable::new(vec![RoleProfile::new("REF", [("A", 1.0)])])
    }

    fn policy() -> DedupPolicy {
        DedupPolicy::ReferenceRole {
            role: "REF".to_string(),
        }
    }

    fn record(id: RecordId, name: &str, a: f64) -> AttributeRecord {
        AttributeRecord::new(id, name).with_attributes([("A", a)])
    }

    #[test]
    fn name_normalization_collapses_variants() {
        assert_eq!(normalize_name(" jon   doe "), "jon doe");
        assert_eq!(normalize_name("JON DOE"), "jon doe");
        assert_eq!(normalize_name("Jón Dóe"), "jon doe");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn keeps_the_highest_scoring_duplicate() {
        let records = vec![
            record(1, " jon   doe ", 80.0),
            record(2, "Jón Doe", 100.0),
        ];
        let (kept, report) =
            resolve_duplicates(records, &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
        assert_eq!(report.removed, 1);
        assert_eq!(report.collapsed, vec![("jon doe".to_string(), vec![1, 2])]);
    }

    #[test]
    fn score_ties_fall_back_to_transfer_value() {
        let cheap = record(1, "Jon Doe", 50.0);
        let rich = record(2, "jon doe", 50.0).with_meta(RecordMeta {
            transfer_value: Some("£2M".to_string()),
            ..RecordMeta::default()
        });
        let (kept, _) =
            resolve_duplicates(vec![cheap, rich], &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn exact_ties_keep_the_first_encountered_record() {
        let records = vec![record(1, "Jon Doe", 50.0), record(2, "jon doe", 50.0)];
        let (kept, _) =
            resolve_duplicates(records, &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn empty_names_are_never_merged() {
        let records = vec![record(1, "", 10.0), record(2, "   ", 20.0)];
        let (kept, report) =
            resolve_duplicates(records, &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(report.removed, 0);
        assert!(report.collapsed.is_empty());
    }

    #[test]
    fn resolver_is_idempotent() {
        let records = vec![
            record(1, "Jon Doe", 80.0),
            record(2, "JON DOE", 100.0),
            record(3, "Ann Lee", 40.0),
        ];
        let (first, report) =
            resolve_duplicates(records, &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(report.removed, 1);
        let (second, report) =
            resolve_duplicates(first.clone(), &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        assert_eq!(report.removed, 0);
        assert_eq!(second, first);
    }

    #[test]
    fn output_preserves_first_encounter_order() {
        let records = vec![
            record(1, "Ann", 10.0),
            record(2, "Bea", 10.0),
            record(3, "ann", 90.0),
        ];
        let (kept, _) =
            resolve_duplicates(records, &reference_roles(), &policy(), Normalization::Raw)
                .unwrap();
        let ids: Vec<RecordId> = kept.iter().map(|r| r.id).collect();
        // Ann's slot keeps its position even though the later record won it.
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn mean_of_roles_policy_averages_over_the_table() {
        let roles = RoleTable::new(vec![
            RoleProfile::new("R1", [("A", 1.0)]),
            RoleProfile::new("R2", [("A", 3.0)]),
        ]);
        // Mean scores: record 1 -> (10 + 30) / 2 = 20, record 2 -> 40.
        let records = vec![record(1, "x y", 10.0), record(2, "X Y", 20.0)];
        let (kept, _) =
            resolve_duplicates(records, &roles, &DedupPolicy::MeanOfRoles, Normalization::Raw)
                .unwrap();
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn unknown_reference_role_is_a_configuration_error() {
        let err = resolve_duplicates(
            vec![record(1, "a", 1.0)],
            &reference_roles(),
            &DedupPolicy::ReferenceRole {
                role: "NOPE".to_string(),
            },
            Normalization::Raw,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::UnknownReferenceRole("NOPE".to_string()));
    }

    #[test]
    fn invalid_normalization_aborts_before_resolving() {
        let err = resolve_duplicates(
            vec![record(1, "a", 1.0)],
            &reference_roles(),
            &policy(),
            Normalization::Scaled { max_value: 0.0 },
        )
        .unwrap_err();
        assert_eq!(err, EngineError::InvalidScaleMax(0.0));
    }
}
