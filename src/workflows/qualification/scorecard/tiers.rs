use serde::{Deserialize, Serialize};

/// Three-tier reading of a 0-100 dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationTier {
    Exploring,
    Building,
    Confirmed,
}

impl QualificationTier {
    pub const fn label(self) -> &'static str {
        match self {
            QualificationTier::Exploring => "exploring",
            QualificationTier::Building => "building",
            QualificationTier::Confirmed => "confirmed",
        }
    }
}

/// Total over the whole 0-100 range: <= 33 exploring, 34-66 building,
/// >= 67 confirmed.
pub fn classify(score: u8) -> QualificationTier {
    match score {
        0..=33 => QualificationTier::Exploring,
        34..=66 => QualificationTier::Building,
        _ => QualificationTier::Confirmed,
    }
}
