//! Built-in formations.
//!
//! Slot labels follow lineup convention; each slot binds to one of the
//! built-in roles. Side-specific slots (RB/LB, RM/LM, ...) share the
//! symmetric role profiles (DRL, MRL, AMRL, WBRL).

use once_cell::sync::Lazy;

use crate::models::formation::{Formation, FormationSlot};

/// All built-in formations, lookup by name ("4-4-2", "4-2-3-1", "3-5-2").
pub fn builtin_formations() -> &'static [Formation] {
    &BUILTIN_FORMATIONS
}

pub fn builtin_formation(name: &str) -> Option<&'static Formation> {
    BUILTIN_FORMATIONS.iter().find(|f| f.name == name)
}

static BUILTIN_FORMATIONS: Lazy<Vec<Formation>> = Lazy::new(|| {
    vec![
        formation(
            "4-4-2",
            &[
                ("GK", "GK"),
                ("RB", "DRL"),
                ("DCR", "DC"),
                ("DCL", "DC"),
                ("LB", "DRL"),
                ("RM", "MRL"),
                ("MCR", "MC"),
                ("MCL", "MC"),
                ("LM", "MRL"),
                ("STR", "SC"),
                ("STL", "SC"),
            ],
        ),
        formation(
            "4-2-3-1",
            &[
                ("GK", "GK"),
                ("RB", "DRL"),
                ("DCR", "DC"),
                ("DCL", "DC"),
                ("LB", "DRL"),
                ("DMR", "DM"),
                ("DML", "DM"),
                ("AMR", "AMRL"),
                ("AMC", "AMC"),
                ("AML", "AMRL"),
                ("ST", "SC"),
            ],
        ),
        formation(
            "3-5-2",
            &[
                ("GK", "GK"),
                ("DCR", "DC"),
                ("DC", "DC"),
                ("DCL", "DC"),
                ("RWB", "WBRL"),
                ("MCR", "MC"),
                ("DM", "DM"),
                ("MCL", "MC"),
                ("LWB", "WBRL"),
                ("STR", "SC"),
                ("STL", "SC"),
            ],
        ),
    ]
});

fn formation(name: &str, slots: &[(&str, &str)]) -> Formation {
    Formation::new(
        name,
        slots
            .iter()
            .map(|(label, role)| FormationSlot::new(*label, *role))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::roles::builtin_roles;

    #[test]
    fn builtin_formations_resolve_against_builtin_roles() {
        for formation in builtin_formations() {
            assert_eq!(formation.len(), 11, "formation {}", formation.name);
            formation
                .validate(builtin_roles())
                .unwrap_or_else(|e| panic!("formation {}: {}", formation.name, e));
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(builtin_formation("4-4-2").is_some());
        assert!(builtin_formation("4-2-3-1").is_some());
        assert!(builtin_formation("5-5-5").is_none());
    }
}
