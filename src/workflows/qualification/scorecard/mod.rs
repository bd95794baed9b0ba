//! The MEDDIC qualification engine: pure, single-pass scoring over a deal
//! snapshot, plus the tier classifier and the gap advisor layered on top.

mod advisor;
mod rules;
mod signals;
mod tiers;

pub use advisor::{advise, recommended_action, GapEntry, GAP_THRESHOLD};
pub use tiers::{classify, QualificationTier};

use serde::{Deserialize, Serialize};

use super::domain::{DealSnapshot, Dimension};

/// Stateless scorer. Invocations are independent and idempotent: the same
/// snapshot always yields the same scorecard.
#[derive(Debug, Default)]
pub struct QualificationEngine;

impl QualificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score all six dimensions of a snapshot.
    pub fn score(&self, snapshot: &DealSnapshot) -> DealScorecard {
        rules::score_snapshot(snapshot)
    }

    /// Score a snapshot and derive the remediation gaps in one pass.
    pub fn qualify(&self, snapshot: &DealSnapshot) -> QualificationOutcome {
        let scorecard = self.score(snapshot);
        let gaps = advise(&scorecard);
        QualificationOutcome { scorecard, gaps }
    }
}

/// Score for one MEDDIC dimension with its evidence trail: one human-readable
/// line per signal group that contributed points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub value: u8,
    pub evidence: Vec<String>,
}

impl DimensionScore {
    pub fn tier(&self) -> QualificationTier {
        classify(self.value)
    }
}

/// All six dimension scores for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealScorecard {
    pub metrics: DimensionScore,
    pub economic_buyer: DimensionScore,
    pub decision_criteria: DimensionScore,
    pub decision_process: DimensionScore,
    pub identify_pain: DimensionScore,
    pub champion: DimensionScore,
}

impl DealScorecard {
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Metrics => &self.metrics,
            Dimension::EconomicBuyer => &self.economic_buyer,
            Dimension::DecisionCriteria => &self.decision_criteria,
            Dimension::DecisionProcess => &self.decision_process,
            Dimension::IdentifyPain => &self.identify_pain,
            Dimension::Champion => &self.champion,
        }
    }

    /// Dimensions in fixed declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> {
        Dimension::ALL
            .iter()
            .map(move |&dimension| (dimension, self.get(dimension)))
    }

    /// Integer average across the six dimensions, used for the overall deal
    /// status view.
    pub fn average(&self) -> u8 {
        let sum: u32 = self.iter().map(|(_, score)| score.value as u32).sum();
        (sum / Dimension::ALL.len() as u32) as u8
    }
}

/// Scorecard plus derived gaps, as persisted on a deal record after a
/// qualification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationOutcome {
    pub scorecard: DealScorecard,
    pub gaps: Vec<GapEntry>,
}
