//! # Formations
//!
//! A formation is an ordered sequence of labeled slots, each bound to a
//! role profile. Order has no scoring effect but fixes rendering order
//! and the greedy fallback's tie-break order.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::role::RoleTable;

/// One lineup slot: display label plus the role it is scored against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    pub label: String,
    pub role: String,
}

impl FormationSlot {
    pub fn new(label: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: role.into(),
        }
    }
}

/// An ordered, named list of slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: impl Into<String>, slots: Vec<FormationSlot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every slot must reference a role present in the table.
    ///
    /// Run before any scoring: a dangling role name is a configuration
    /// error, never a silent default.
    pub fn validate(&self, roles: &RoleTable) -> Result<()> {
        for slot in &self.slots {
            if !roles.contains(&slot.role) {
                return Err(EngineError::UnknownRole {
                    slot: slot.label.clone(),
                    role: slot.role.clone(),
                });
            }
        }
        Ok(())
    }
}
