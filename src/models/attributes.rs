use serde::{Deserialize, Serialize};

/// How hard an attack step is to carry out, from trivial to expert-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Trivial,
    Low,
    Medium,
    High,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Trivial,
        Difficulty::Low,
        Difficulty::Medium,
        Difficulty::High,
        Difficulty::Expert,
    ];

    /// Ordinal used for path scoring. Trivial = 1 ... Expert = 5.
    pub fn value(&self) -> u32 {
        match self {
            Difficulty::Trivial => 1,
            Difficulty::Low => 2,
            Difficulty::Medium => 3,
            Difficulty::High => 4,
            Difficulty::Expert => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Trivial => "TRIVIAL",
            Difficulty::Low => "LOW",
            Difficulty::Medium => "MEDIUM",
            Difficulty::High => "HIGH",
            Difficulty::Expert => "EXPERT",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resources an attacker has to spend on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cost {
    Free,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Cost {
    /// Ordinal used for path scoring. Free = 0 ... VeryHigh = 4.
    pub fn value(&self) -> u32 {
        match self {
            Cost::Free => 0,
            Cost::Low => 1,
            Cost::Medium => 2,
            Cost::High => 3,
            Cost::VeryHigh => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cost::Free => "FREE",
            Cost::Low => "LOW",
            Cost::Medium => "MEDIUM",
            Cost::High => "HIGH",
            Cost::VeryHigh => "VERY_HIGH",
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likelihood that the step is noticed by defenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionRisk {
    None,
    Low,
    Medium,
    High,
    Certain,
}

impl DetectionRisk {
    /// Ordinal used for path scoring. None = 0 ... Certain = 4.
    pub fn value(&self) -> u32 {
        match self {
            DetectionRisk::None => 0,
            DetectionRisk::Low => 1,
            DetectionRisk::Medium => 2,
            DetectionRisk::High => 3,
            DetectionRisk::Certain => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionRisk::None => "NONE",
            DetectionRisk::Low => "LOW",
            DetectionRisk::Medium => "MEDIUM",
            DetectionRisk::High => "HIGH",
            DetectionRisk::Certain => "CERTAIN",
        }
    }
}

impl std::fmt::Display for DetectionRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk attributes of an attack step. Only meaningful on leaf nodes;
/// junction nodes carry the default values.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackAttributes {
    pub difficulty: Difficulty,
    pub cost: Cost,
    pub detection_risk: DetectionRisk,
    /// Estimated attacker effort in hours.
    pub time_hours: f64,
    pub requires_insider: bool,
    pub requires_physical: bool,
}

impl AttackAttributes {
    pub fn new(
        difficulty: Difficulty,
        cost: Cost,
        detection_risk: DetectionRisk,
        time_hours: f64,
    ) -> Self {
        Self {
            difficulty,
            cost,
            detection_risk,
            time_hours,
            ..Default::default()
        }
    }
}

impl Default for AttackAttributes {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            cost: Cost::Medium,
            detection_risk: DetectionRisk::Medium,
            time_hours: 8.0,
            requires_insider: false,
            requires_physical: false,
        }
    }
}
