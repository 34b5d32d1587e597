//! # Team Assignments
//!
//! Result type of the assignment engine: a partial injective mapping
//! from formation slots to record ids, with per-slot scores and team
//! aggregates.

use serde::{Deserialize, Serialize};

use crate::models::record::RecordId;

/// One formation slot in an assignment result.
///
/// `record_id` is `None` when the candidate pool ran out before this
/// slot could be filled. A filled slot with score 0 is a valid
/// assignment, not an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotFill {
    pub slot_label: String,
    pub record_id: Option<RecordId>,
    pub name: Option<String>,
    pub score: f64,
}

impl SlotFill {
    pub fn unfilled(slot_label: impl Into<String>) -> Self {
        Self {
            slot_label: slot_label.into(),
            record_id: None,
            name: None,
            score: 0.0,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.record_id.is_some()
    }
}

/// A complete team: one entry per formation slot, in formation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamAssignment {
    pub slots: Vec<SlotFill>,
    /// Sum of the scores of all filled slots.
    pub total: f64,
    /// Mean score over filled slots only; 0 when no slot is filled.
    pub average: f64,
}

impl TeamAssignment {
    /// Build from slot fills, deriving total and average.
    pub fn from_slots(slots: Vec<SlotFill>) -> Self {
        let filled = slots.iter().filter(|s| s.is_filled()).count();
        let total: f64 = slots.iter().filter(|s| s.is_filled()).map(|s| s.score).sum();
        let average = if filled > 0 { total / filled as f64 } else { 0.0 };
        Self {
            slots,
            total,
            average,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Record ids placed into this team, in slot order.
    pub fn assigned_ids(&self) -> Vec<RecordId> {
        self.slots.iter().filter_map(|s| s.record_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_only_cover_filled_slots() {
        let team = TeamAssignment::from_slots(vec![
            SlotFill {
                slot_label: "GK".to_string(),
                record_id: Some(1),
                name: Some("A".to_string()),
                score: 10.0,
            },
            SlotFill {
                slot_label: "ST".to_string(),
                record_id: Some(2),
                name: Some("B".to_string()),
                score: 20.0,
            },
            SlotFill::unfilled("MC"),
        ]);
        assert_eq!(team.filled_count(), 2);
        assert_eq!(team.total, 30.0);
        assert_eq!(team.average, 15.0);
        assert_eq!(team.assigned_ids(), vec![1, 2]);
    }

    #[test]
    fn empty_team_has_zero_average() {
        let team = TeamAssignment::from_slots(vec![SlotFill::unfilled("GK")]);
        assert_eq!(team.total, 0.0);
        assert_eq!(team.average, 0.0);
        assert!(team.assigned_ids().is_empty());
    }
}
