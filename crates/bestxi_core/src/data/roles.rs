//! Built-in role weight tables.
//!
//! Exact weights for the ten supported roles: GK, DRL, DC, WBRL, DM,
//! MRL, MC, AMRL, AMC, SC. Only non-zero weights are listed; every
//! other canonical attribute carries the implicit weight 0.
//!
//! Weights are opaque configuration. The engine never judges them, it
//! only applies them.

use once_cell::sync::Lazy;

use crate::models::role::{RoleProfile, RoleTable};

/// Table of the ten built-in roles, in outfield order GK -> SC.
pub fn builtin_roles() -> &'static RoleTable {
    &BUILTIN_ROLES
}

static BUILTIN_ROLES: Lazy<RoleTable> = Lazy::new(|| {
    RoleTable::new(vec![
        role(
            "GK",
            &[
                ("Heading", 1.0),
                ("Technique", 1.0),
                ("Anticipation", 3.0),
                ("Bravery", 6.0),
                ("Composure", 2.0),
                ("Concentration", 6.0),
                ("Decisions", 10.0),
                ("Leadership", 2.0),
                ("Positioning", 5.0),
                ("Teamwork", 2.0),
                ("Vision", 1.0),
                ("Work Rate", 1.0),
                ("Acceleration", 6.0),
                ("Agility", 8.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 3.0),
                ("Stamina", 1.0),
                ("Strength", 4.0),
                ("Weaker Foot", 3.0),
                ("Aerial Reach", 6.0),
                ("Command of Area", 6.0),
                ("Communication", 5.0),
                ("Handling", 8.0),
                ("Kicking", 5.0),
                ("One on Ones", 4.0),
                ("Reflexes", 8.0),
                ("Throwing", 3.0),
            ],
        ),
        role(
            "DRL",
            &[
                ("Corners", 1.0),
                ("Crossing", 2.0),
                ("Dribbling", 2.0),
                ("Finishing", 1.0),
                ("First Touch", 3.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 2.0),
                ("Long Shots", 1.0),
                ("Long Throws", 1.0),
                ("Marking", 3.0),
                ("Passing", 2.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 4.0),
                ("Technique", 2.0),
                ("Anticipation", 3.0),
                ("Bravery", 2.0),
                ("Composure", 2.0),
                ("Concentration", 4.0),
                ("Decisions", 7.0),
                ("Leadership", 1.0),
                ("Off The Ball", 1.0),
                ("Positioning", 4.0),
                ("Teamwork", 2.0),
                ("Vision", 2.0),
                ("Work Rate", 2.0),
                ("Acceleration", 7.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 2.0),
                ("Pace", 5.0),
                ("Stamina", 6.0),
                ("Strength", 4.0),
                ("Weaker Foot", 4.0),
            ],
        ),
        role(
            "DC",
            &[
                ("Corners", 1.0),
                ("Crossing", 1.0),
                ("Dribbling", 1.0),
                ("Finishing", 1.0),
                ("First Touch", 2.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 5.0),
                ("Long Shots", 1.0),
                ("Long Throws", 1.0),
                ("Marking", 8.0),
                ("Passing", 2.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 5.0),
                ("Technique", 1.0),
                ("Anticipation", 5.0),
                ("Bravery", 2.0),
                ("Composure", 2.0),
                ("Concentration", 4.0),
                ("Decisions", 10.0),
                ("Leadership", 2.0),
                ("Off The Ball", 1.0),
                ("Positioning", 8.0),
                ("Teamwork", 1.0),
                ("Vision", 1.0),
                ("Work Rate", 2.0),
                ("Acceleration", 6.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 6.0),
                ("Pace", 5.0),
                ("Stamina", 3.0),
                ("Strength", 6.0),
                ("Weaker Foot", 4.5),
            ],
        ),
        role(
            "WBRL",
            &[
                ("Corners", 1.0),
                ("Crossing", 3.0),
                ("Dribbling", 2.0),
                ("Finishing", 1.0),
                ("First Touch", 3.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 1.0),
                ("Long Throws", 1.0),
                ("Marking", 2.0),
                ("Passing", 3.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 3.0),
                ("Technique", 3.0),
                ("Anticipation", 3.0),
                ("Bravery", 1.0),
                ("Composure", 2.0),
                ("Concentration", 3.0),
                ("Decisions", 5.0),
                ("Leadership", 1.0),
                ("Off The Ball", 2.0),
                ("Positioning", 3.0),
                ("Teamwork", 2.0),
                ("Vision", 1.0),
                ("Work Rate", 2.0),
                ("Acceleration", 8.0),
                ("Agility", 5.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 6.0),
                ("Stamina", 7.0),
                ("Strength", 4.0),
                ("Weaker Foot", 4.0),
            ],
        ),
        role(
            "DM",
            &[
                ("Corners", 1.0),
                ("Crossing", 1.0),
                ("Dribbling", 2.0),
                ("Finishing", 2.0),
                ("First Touch", 4.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 3.0),
                ("Long Throws", 1.0),
                ("Marking", 3.0),
                ("Passing", 4.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 7.0),
                ("Technique", 3.0),
                ("Anticipation", 5.0),
                ("Bravery", 1.0),
                ("Composure", 2.0),
                ("Concentration", 3.0),
                ("Decisions", 8.0),
                ("Leadership", 1.0),
                ("Off The Ball", 2.0),
                ("Positioning", 5.0),
                ("Teamwork", 2.0),
                ("Vision", 4.0),
                ("Work Rate", 4.0),
                ("Acceleration", 6.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 4.0),
                ("Stamina", 4.0),
                ("Strength", 5.0),
                ("Weaker Foot", 5.0),
            ],
        ),
        role(
            "MRL",
            &[
                ("Corners", 1.0),
                ("Crossing", 5.0),
                ("Dribbling", 3.0),
                ("Finishing", 2.0),
                ("First Touch", 4.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 2.0),
                ("Long Throws", 1.0),
                ("Marking", 1.0),
                ("Passing", 3.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 2.0),
                ("Technique", 4.0),
                ("Anticipation", 3.0),
                ("Bravery", 1.0),
                ("Composure", 3.0),
                ("Concentration", 2.0),
                ("Decisions", 5.0),
                ("Leadership", 1.0),
                ("Off The Ball", 3.0),
                ("Positioning", 1.0),
                ("Teamwork", 2.0),
                ("Vision", 3.0),
                ("Work Rate", 3.0),
                ("Acceleration", 8.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 6.0),
                ("Stamina", 5.0),
                ("Strength", 3.0),
                ("Weaker Foot", 5.0),
            ],
        ),
        role(
            "MC",
            &[
                ("Corners", 1.0),
                ("Crossing", 1.0),
                ("Dribbling", 2.0),
                ("Finishing", 2.0),
                ("First Touch", 6.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 3.0),
                ("Long Throws", 1.0),
                ("Marking", 3.0),
                ("Passing", 6.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 3.0),
                ("Technique", 4.0),
                ("Anticipation", 3.0),
                ("Bravery", 1.0),
                ("Composure", 3.0),
                ("Concentration", 2.0),
                ("Decisions", 7.0),
                ("Leadership", 1.0),
                ("Off The Ball", 2.0),
                ("Positioning", 3.0),
                ("Teamwork", 2.0),
                ("Vision", 6.0),
                ("Work Rate", 3.0),
                ("Acceleration", 6.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 5.0),
                ("Stamina", 6.0),
                ("Strength", 4.0),
                ("Weaker Foot", 5.0),
            ],
        ),
        role(
            "AMRL",
            &[
                ("Corners", 1.0),
                ("Crossing", 5.0),
                ("Dribbling", 5.0),
                ("Finishing", 2.0),
                ("First Touch", 5.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 2.0),
                ("Long Throws", 1.0),
                ("Marking", 1.0),
                ("Passing", 2.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 2.0),
                ("Technique", 4.0),
                ("Anticipation", 3.0),
                ("Bravery", 1.0),
                ("Composure", 3.0),
                ("Concentration", 2.0),
                ("Decisions", 5.0),
                ("Leadership", 1.0),
                ("Off The Ball", 3.0),
                ("Positioning", 1.0),
                ("Teamwork", 2.0),
                ("Vision", 3.0),
                ("Work Rate", 3.0),
                ("Acceleration", 10.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 10.0),
                ("Stamina", 7.0),
                ("Strength", 3.0),
                ("Weaker Foot", 6.0),
            ],
        ),
        role(
            "AMC",
            &[
                ("Corners", 1.0),
                ("Crossing", 1.0),
                ("Dribbling", 3.0),
                ("Finishing", 3.0),
                ("First Touch", 5.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 1.0),
                ("Long Shots", 3.0),
                ("Long Throws", 1.0),
                ("Marking", 1.0),
                ("Passing", 4.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 2.0),
                ("Technique", 5.0),
                ("Anticipation", 3.0),
                ("Bravery", 1.0),
                ("Composure", 3.0),
                ("Concentration", 2.0),
                ("Decisions", 6.0),
                ("Leadership", 1.0),
                ("Off The Ball", 2.0),
                ("Positioning", 2.0),
                ("Teamwork", 2.0),
                ("Vision", 6.0),
                ("Work Rate", 3.0),
                ("Acceleration", 9.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 1.0),
                ("Pace", 7.0),
                ("Stamina", 6.0),
                ("Strength", 3.0),
                ("Weaker Foot", 5.5),
            ],
        ),
        role(
            "SC",
            &[
                ("Corners", 1.0),
                ("Crossing", 2.0),
                ("Dribbling", 5.0),
                ("Finishing", 8.0),
                ("First Touch", 6.0),
                ("Free Kick Taking", 1.0),
                ("Heading", 6.0),
                ("Long Shots", 2.0),
                ("Long Throws", 1.0),
                ("Marking", 1.0),
                ("Passing", 2.0),
                ("Penalty Taking", 1.0),
                ("Tackling", 1.0),
                ("Technique", 4.0),
                ("Anticipation", 5.0),
                ("Bravery", 1.0),
                ("Composure", 6.0),
                ("Concentration", 2.0),
                ("Decisions", 5.0),
                ("Leadership", 1.0),
                ("Off The Ball", 6.0),
                ("Positioning", 2.0),
                ("Teamwork", 1.0),
                ("Vision", 2.0),
                ("Work Rate", 2.0),
                ("Acceleration", 10.0),
                ("Agility", 6.0),
                ("Balance", 2.0),
                ("Jumping Reach", 5.0),
                ("Pace", 7.0),
                ("Stamina", 6.0),
                ("Strength", 6.0),
                ("Weaker Foot", 7.5),
            ],
        ),
    ])
});

fn role(name: &str, weights: &[(&str, f64)]) -> RoleProfile {
    RoleProfile::new(name, weights.iter().map(|(k, w)| (k.to_string(), *w)))
}
