//! # Data Model
//!
//! Core data types shared by every engine stage:
//!
//! - `record` - ingested player records (attribute maps + metadata)
//! - `role` - role weight profiles and the role table
//! - `formation` - ordered, labeled slots bound to roles
//! - `team` - assignment results (slot fills, totals, averages)

pub mod formation;
pub mod record;
pub mod role;
pub mod team;

pub use formation::{Formation, FormationSlot};
pub use record::{AttributeRecord, RecordId, RecordMeta};
pub use role::{RoleProfile, RoleTable};
pub use team::{SlotFill, TeamAssignment};
