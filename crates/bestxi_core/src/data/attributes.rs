//! Canonical attribute vocabulary.
//!
//! Every record's attribute keys and every role's weight keys are drawn
//! from this fixed set. Scoring ignores anything outside it and treats
//! missing entries as 0, so the list is advisory for ingestion rather
//! than enforced at runtime.

/// The 48 canonical attribute names, grouped technical / mental /
/// physical / goalkeeping.
pub const CANONICAL_ATTRIBUTES: [&str; 48] = [
    // Technical
    "Corners",
    "Crossing",
    "Dribbling",
    "Finishing",
    "First Touch",
    "Free Kick Taking",
    "Heading",
    "Long Shots",
    "Long Throws",
    "Marking",
    "Passing",
    "Penalty Taking",
    "Tackling",
    "Technique",
    // Mental
    "Aggression",
    "Anticipation",
    "Bravery",
    "Composure",
    "Concentration",
    "Decisions",
    "Determination",
    "Flair",
    "Leadership",
    "Off The Ball",
    "Positioning",
    "Teamwork",
    "Vision",
    "Work Rate",
    // Physical
    "Acceleration",
    "Agility",
    "Balance",
    "Jumping Reach",
    "Natural Fitness",
    "Pace",
    "Stamina",
    "Strength",
    "Weaker Foot",
    // Goalkeeping
    "Aerial Reach",
    "Command of Area",
    "Communication",
    "Eccentricity",
    "Handling",
    "Kicking",
    "One on Ones",
    "Punching (Tendency)",
    "Reflexes",
    "Rushing Out (Tendency)",
    "Throwing",
];

pub fn is_canonical_attribute(name: &str) -> bool {
    CANONICAL_ATTRIBUTES.contains(&name)
}
