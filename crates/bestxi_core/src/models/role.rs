//! # Role Profiles
//!
//! A role profile is a named weight vector over the canonical attribute
//! vocabulary. Attributes absent from the map carry an implicit weight
//! of 0. Profiles are static configuration: loaded once, never mutated
//! during a scoring run.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A named attribute weight vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleProfile {
    pub name: String,
    /// Attribute name -> non-negative weight. Absent attribute = weight 0.
    pub weights: FxHashMap<String, f64>,
}

impl RoleProfile {
    pub fn new<I, S>(name: impl Into<String>, weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            weights: weights.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn weight(&self, attribute: &str) -> f64 {
        self.weights.get(attribute).copied().unwrap_or(0.0)
    }

    /// Non-zero weights in sorted attribute order.
    ///
    /// Scoring iterates this instead of the hash map so that f64
    /// accumulation order (and therefore the exact bit pattern of every
    /// score) is independent of map layout.
    pub fn sorted_weights(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .weights
            .iter()
            .filter(|(_, w)| **w != 0.0)
            .map(|(k, w)| (k.as_str(), *w))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Ordered collection of role profiles.
///
/// Insertion order is preserved so leaderboard fanouts and reports render
/// in a stable role order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoleTable {
    roles: Vec<RoleProfile>,
}

impl RoleTable {
    pub fn new(roles: Vec<RoleProfile>) -> Self {
        Self { roles }
    }

    pub fn get(&self, name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
