use serde::{Deserialize, Serialize};

use super::super::domain::Dimension;
use super::DealScorecard;

/// Dimensions scoring below this value produce a gap entry.
pub const GAP_THRESHOLD: u8 = 50;

/// One remediation entry for a weak dimension. Derived, never stored on its
/// own; recomputed from the scorecard each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapEntry {
    pub dimension: Dimension,
    pub score: u8,
    pub recommended_action: String,
}

/// Emit one entry per dimension under the threshold, in fixed dimension
/// declaration order regardless of score magnitude.
pub fn advise(scorecard: &DealScorecard) -> Vec<GapEntry> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let score = scorecard.get(dimension);
            (score.value < GAP_THRESHOLD).then(|| GapEntry {
                dimension,
                score: score.value,
                recommended_action: recommended_action(dimension).to_string(),
            })
        })
        .collect()
}

/// Canonical next action per dimension.
pub fn recommended_action(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Metrics => {
            "Quantify the business impact with the customer and capture at least one baseline metric."
        }
        Dimension::EconomicBuyer => {
            "Identify the economic buyer and secure direct access to the budget holder."
        }
        Dimension::DecisionCriteria => {
            "Document the customer's evaluation criteria and map each one to a capability."
        }
        Dimension::DecisionProcess => {
            "Map the decision process end to end, including approval steps and a target timeline."
        }
        Dimension::IdentifyPain => {
            "Dig deeper into the business pain and tie it to a cost of inaction."
        }
        Dimension::Champion => {
            "Develop an internal champion who will sell on your behalf when you are not in the room."
        }
    }
}
