use thiserror::Error;

/// Configuration errors raised before any scoring happens.
///
/// Everything else in the engine degrades to a well-defined empty
/// result instead of failing: zero records, zero-weight roles and
/// undersized candidate pools are all valid inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: scaled normalization requires max_value > 0, got {0}")]
    InvalidScaleMax(f64),

    #[error("invalid configuration: slot '{slot}' references unknown role '{role}'")]
    UnknownRole { slot: String, role: String },

    #[error("invalid configuration: dedup reference role '{0}' is not in the role table")]
    UnknownReferenceRole(String),

    #[error("unknown formation: {0}")]
    UnknownFormation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
