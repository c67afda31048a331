use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::models::attributes::AttackAttributes;

/// Attribute an attacker is assumed to minimize when choosing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Lowest total difficulty ("easiest" path).
    Difficulty,
    /// Lowest total cost ("cheapest" path).
    Cost,
    /// Lowest total detection risk ("stealthiest" path).
    #[value(name = "detection", alias = "detection-risk")]
    DetectionRisk,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Difficulty, Metric::Cost, Metric::DetectionRisk];

    /// Ordinal of this metric on a leaf's attributes.
    pub fn value_of(&self, attributes: &AttackAttributes) -> u32 {
        match self {
            Metric::Difficulty => attributes.difficulty.value(),
            Metric::Cost => attributes.cost.value(),
            Metric::DetectionRisk => attributes.detection_risk.value(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Difficulty => "difficulty",
            Metric::Cost => "cost",
            Metric::DetectionRisk => "detection",
        }
    }

    /// Adjective describing the path that minimizes this metric.
    pub fn path_label(&self) -> &'static str {
        match self {
            Metric::Difficulty => "easiest",
            Metric::Cost => "cheapest",
            Metric::DetectionRisk => "stealthiest",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attributes::{Cost, DetectionRisk, Difficulty};

    #[test]
    fn test_value_of_reads_matching_attribute() {
        let attrs = AttackAttributes::new(Difficulty::Expert, Cost::Free, DetectionRisk::High, 1.0);
        assert_eq!(Metric::Difficulty.value_of(&attrs), 5);
        assert_eq!(Metric::Cost.value_of(&attrs), 0);
        assert_eq!(Metric::DetectionRisk.value_of(&attrs), 3);
    }

    #[test]
    fn test_parse_from_cli_value() {
        assert_eq!(Metric::from_str("cost", true).unwrap(), Metric::Cost);
        assert_eq!(Metric::from_str("detection", true).unwrap(), Metric::DetectionRisk);
        assert_eq!(Metric::from_str("detection-risk", true).unwrap(), Metric::DetectionRisk);
        assert!(Metric::from_str("speed", true).is_err());
    }

    #[test]
    fn test_path_labels() {
        assert_eq!(Metric::Difficulty.path_label(), "easiest");
        assert_eq!(Metric::Cost.path_label(), "cheapest");
        assert_eq!(Metric::DetectionRisk.path_label(), "stealthiest");
    }
}
