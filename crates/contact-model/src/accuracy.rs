//! Accuracy levels and their labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Highest accuracy level. A base score at this level marks an exact duplicate.
pub const MAX_LEVEL: u8 = 5;

/// Named confidence of a match reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccuracyLabel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl AccuracyLabel {
    /// All labels in ascending level order.
    pub const ALL: [AccuracyLabel; 5] = [
        AccuracyLabel::VeryLow,
        AccuracyLabel::Low,
        AccuracyLabel::Medium,
        AccuracyLabel::High,
        AccuracyLabel::VeryHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccuracyLabel::VeryLow => "Very Low",
            AccuracyLabel::Low => "Low",
            AccuracyLabel::Medium => "Medium",
            AccuracyLabel::High => "High",
            AccuracyLabel::VeryHigh => "Very High",
        }
    }

    /// Integer level this label stands for.
    pub fn level(self) -> u8 {
        match self {
            AccuracyLabel::VeryLow => 1,
            AccuracyLabel::Low => 2,
            AccuracyLabel::Medium => 3,
            AccuracyLabel::High => 4,
            AccuracyLabel::VeryHigh => 5,
        }
    }
}

impl fmt::Display for AccuracyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for AccuracyLabel {
    type Error = ModelError;

    fn try_from(level: u8) -> Result<Self> {
        classify(level)
    }
}

/// Map an accuracy level to its label.
///
/// Only levels 1 through 5 carry a label. Level 0 means "no evidence" and is
/// never emitted as a match, so it is rejected along with anything above 5.
///
/// # Errors
///
/// Returns [`ModelError::InvalidLevel`] for levels outside `1..=5`.
pub fn classify(level: u8) -> Result<AccuracyLabel> {
    match level {
        1 => Ok(AccuracyLabel::VeryLow),
        2 => Ok(AccuracyLabel::Low),
        3 => Ok(AccuracyLabel::Medium),
        4 => Ok(AccuracyLabel::High),
        5 => Ok(AccuracyLabel::VeryHigh),
        _ => Err(ModelError::InvalidLevel { level }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_every_valid_level() {
        for label in AccuracyLabel::ALL {
            assert_eq!(classify(label.level()), Ok(label));
        }
    }

    #[test]
    fn classify_rejects_zero_and_above_max() {
        assert_eq!(classify(0), Err(ModelError::InvalidLevel { level: 0 }));
        assert_eq!(classify(6), Err(ModelError::InvalidLevel { level: 6 }));
        assert!(classify(u8::MAX).is_err());
    }

    #[test]
    fn labels_display_with_spaces() {
        assert_eq!(AccuracyLabel::VeryLow.to_string(), "Very Low");
        assert_eq!(AccuracyLabel::VeryHigh.to_string(), "Very High");
    }
}
