//! # Attribute Records
//!
//! One `AttributeRecord` per ingested player. Records are created once
//! by the ingestion collaborator and never mutated afterwards; the
//! dedup resolver discards records, it does not edit them.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Stable identifier assigned at ingestion. Opaque to the engine.
pub type RecordId = u32;

/// A single ingested player: attribute map plus display/tie-break metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeRecord {
    pub id: RecordId,
    /// Display name. Used for output and as dedup key material, never scored.
    pub name: String,
    /// Canonical attribute name -> numeric value. Missing attributes read as 0.
    pub attributes: FxHashMap<String, f64>,
    /// Secondary fields used only as tie-breakers.
    #[serde(default)]
    pub meta: RecordMeta,
}

/// Optional record metadata. Never enters the score formula.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordMeta {
    #[serde(default)]
    pub age: Option<u8>,
    /// Raw transfer-value string as exported, e.g. "£10.5M - £15M".
    #[serde(default)]
    pub transfer_value: Option<String>,
    /// Free-text position tags from the export, e.g. "D (RC), DM".
    #[serde(default)]
    pub positions: Option<String>,
}

impl AttributeRecord {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: FxHashMap::default(),
            meta: RecordMeta::default(),
        }
    }

    pub fn with_attributes<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.attributes
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn with_meta(mut self, meta: RecordMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Attribute value, with the missing-attribute default of 0.
    pub fn attribute(&self, name: &str) -> f64 {
        self.attributes.get(name).copied().unwrap_or(0.0)
    }
}

impl RecordMeta {
    /// Parse the transfer-value string into a plain amount for tie-breaks.
    ///
    /// Takes the first numeric token and applies a K/M/B suffix when one
    /// directly follows it ("£10.5M - £15M" -> 10_500_000.0). Missing or
    /// unparseable values compare as 0.
    pub fn transfer_value_amount(&self) -> f64 {
        let Some(raw) = self.transfer_value.as_deref() else {
            return 0.0;
        };
        parse_money(raw)
    }
}

fn parse_money(raw: &str) -> f64 {
    let mut chars = raw.chars().peekable();

    // Seek the first digit.
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            break;
        }
        chars.next();
    }

    let mut number = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || (c == '.' && !number.contains('.')) {
            number.push(c);
            chars.next();
        } else {
            break;
        }
    }

    let Ok(base) = number.parse::<f64>() else {
        return 0.0;
    };

    let multiplier = match chars.peek() {
        Some('K') | Some('k') => 1_000.0,
        Some('M') | Some('m') => 1_000_000.0,
        Some('B') | Some('b') => 1_000_000_000.0,
        _ => 1.0,
    };

    base * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(value: &str) -> RecordMeta {
        RecordMeta {
            transfer_value: Some(value.to_string()),
            ..RecordMeta::default()
        }
    }

    #[test]
    fn missing_attribute_reads_as_zero() {
        let record = AttributeRecord::new(1, "A").with_attributes([("Pace", 14.0)]);
        assert_eq!(record.attribute("Pace"), 14.0);
        assert_eq!(record.attribute("Finishing"), 0.0);
    }

    #[test]
    fn parses_plain_and_suffixed_money() {
        assert_eq!(meta("£750K").transfer_value_amount(), 750_000.0);
        assert_eq!(meta("£10.5M - £15M").transfer_value_amount(), 10_500_000.0);
        assert_eq!(meta("1200").transfer_value_amount(), 1200.0);
        assert_eq!(meta("$2.1b").transfer_value_amount(), 2_100_000_000.0);
    }

    #[test]
    fn unparseable_money_is_zero() {
        assert_eq!(meta("Not for Sale").transfer_value_amount(), 0.0);
        assert_eq!(meta("").transfer_value_amount(), 0.0);
        assert_eq!(RecordMeta::default().transfer_value_amount(), 0.0);
    }
}
