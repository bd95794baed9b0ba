//! Dimension scoring rules.
//!
//! All six dimensions share one shape: independent signal groups, each worth
//! `weight * count` capped at a fixed ceiling, summed and clamped to 100.
//! The [`Accumulator`] implements that shape once; the per-dimension functions
//! below only declare which signals feed it. Weights and caps are fixed
//! constants inherited from the coaching rubric; changing them changes scoring
//! outputs, so treat them as part of the contract.

use super::super::domain::{AccessLevel, DealSnapshot, Stakeholder, StakeholderRole};
use super::signals::{
    contains_person_name, keyword_hits, quantified_mentions, APPROVAL_TERMS, CHAMPION_TERMS,
    CRITERIA_TERMS, EXECUTIVE_TERMS, METRIC_TERMS, PAIN_DISCUSSION_TERMS, PAIN_TERMS,
    PROCESS_TERMS, STAKEHOLDER_ANALYSIS_TERMS, TIMELINE_TERMS,
};
use super::{DealScorecard, DimensionScore};

/// Weighted-signal accumulator with a 100-point clamp.
///
/// Contributions are never negative and each is individually capped, so the
/// running total only grows; `finish` applies the final clamp.
#[derive(Default)]
struct Accumulator {
    total: u32,
    evidence: Vec<String>,
}

impl Accumulator {
    /// Award a fixed number of points for a signal that either fired or not.
    fn flat(&mut self, points: u32, note: impl Into<String>) {
        self.total += points;
        self.evidence.push(format!("{} (+{points})", note.into()));
    }

    /// Award `weight` points per counted occurrence, up to `cap`.
    fn scaled(&mut self, count: usize, weight: u32, cap: u32, unit: &str) {
        let awarded = cap.min(weight * count as u32);
        if awarded > 0 {
            self.evidence.push(format!("{count} {unit} (+{awarded})"));
            self.total += awarded;
        }
    }

    /// Award `weight` points per matched vocabulary term, up to `cap`,
    /// recording which terms fired.
    fn matched(&mut self, hits: &[&str], weight: u32, cap: u32, context: &str) {
        let awarded = cap.min(weight * hits.len() as u32);
        if awarded > 0 {
            self.evidence
                .push(format!("{context}: {} (+{awarded})", hits.join(", ")));
            self.total += awarded;
        }
    }

    fn finish(self) -> DimensionScore {
        DimensionScore {
            value: self.total.min(100) as u8,
            evidence: self.evidence,
        }
    }
}

/// Score every dimension of a snapshot. Pure and synchronous; a snapshot with
/// no signals scores zero everywhere, which is a correct result rather than an
/// error.
pub(crate) fn score_snapshot(snapshot: &DealSnapshot) -> DealScorecard {
    let notes = snapshot.free_text.to_lowercase();
    let coaching = snapshot.generated_text.to_lowercase();

    DealScorecard {
        metrics: score_metrics(snapshot, &notes, &coaching),
        economic_buyer: score_economic_buyer(snapshot, &notes, &coaching),
        decision_criteria: score_decision_criteria(snapshot, &coaching),
        decision_process: score_decision_process(&notes, &coaching),
        identify_pain: score_identify_pain(snapshot, &notes, &coaching),
        champion: score_champion(snapshot, &coaching),
    }
}

fn score_metrics(snapshot: &DealSnapshot, notes: &str, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();
    acc.scaled(snapshot.value_drivers.len(), 10, 30, "value driver(s) selected");
    acc.scaled(
        quantified_mentions(notes),
        10,
        30,
        "quantified impact mention(s) in notes",
    );
    acc.matched(
        &keyword_hits(coaching, METRIC_TERMS),
        8,
        40,
        "metric language in generated coaching",
    );
    acc.finish()
}

fn score_economic_buyer(snapshot: &DealSnapshot, notes: &str, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();

    match first_with_role(snapshot, StakeholderRole::EconomicBuyer) {
        Some(buyer) => {
            acc.flat(30, format!("economic buyer identified: {}", buyer.name));
            if !buyer.title.trim().is_empty() {
                acc.flat(15, format!("title on record: {}", buyer.title));
            }
            match buyer.access {
                AccessLevel::Direct => acc.flat(25, "direct access to the economic buyer"),
                AccessLevel::Indirect => acc.flat(10, "indirect access to the economic buyer"),
                AccessLevel::None | AccessLevel::Unknown => {}
            }
            if buyer.budget_confirmed {
                acc.flat(30, "budget confirmed");
            }
        }
        None => acc.matched(
            &keyword_hits(notes, EXECUTIVE_TERMS),
            5,
            15,
            "executive language in notes",
        ),
    }

    acc.matched(
        &keyword_hits(coaching, STAKEHOLDER_ANALYSIS_TERMS),
        3,
        10,
        "stakeholder analysis in generated coaching",
    );
    acc.finish()
}

fn score_decision_criteria(snapshot: &DealSnapshot, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();
    if snapshot.erp_landscape.any() {
        acc.flat(20, "erp landscape captured");
    }
    if !snapshot.capabilities.is_empty() {
        acc.flat(
            20,
            format!("{} capability topic(s) selected", snapshot.capabilities.len()),
        );
    }
    if snapshot.rise_opportunity {
        acc.flat(20, "named transformation program in play");
    }
    acc.matched(
        &keyword_hits(coaching, CRITERIA_TERMS),
        8,
        40,
        "evaluation criteria in generated coaching",
    );
    acc.finish()
}

fn score_decision_process(notes: &str, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();
    acc.matched(
        &keyword_hits(notes, TIMELINE_TERMS),
        10,
        40,
        "timeline signal(s) in notes",
    );
    acc.matched(
        &keyword_hits(coaching, PROCESS_TERMS),
        6,
        30,
        "process language in generated coaching",
    );
    acc.matched(
        &keyword_hits(coaching, APPROVAL_TERMS),
        10,
        30,
        "approval language in generated coaching",
    );
    acc.finish()
}

fn score_identify_pain(snapshot: &DealSnapshot, notes: &str, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();
    acc.scaled(
        snapshot.process_domains.len(),
        12,
        25,
        "process domain(s) selected",
    );
    acc.matched(
        &keyword_hits(notes, PAIN_TERMS),
        10,
        35,
        "pain language in notes",
    );
    acc.matched(
        &keyword_hits(coaching, PAIN_DISCUSSION_TERMS),
        13,
        40,
        "pain discussion in generated coaching",
    );
    acc.finish()
}

fn score_champion(snapshot: &DealSnapshot, coaching: &str) -> DimensionScore {
    let mut acc = Accumulator::default();

    let champions: Vec<&Stakeholder> = snapshot
        .stakeholders
        .iter()
        .filter(|stakeholder| stakeholder.role == StakeholderRole::Champion)
        .collect();

    match champions.first() {
        Some(champion) => {
            acc.flat(40, format!("champion identified: {}", champion.name));
            match champion.access {
                AccessLevel::Direct => acc.flat(25, "direct access to the champion"),
                AccessLevel::Indirect => acc.flat(10, "indirect access to the champion"),
                AccessLevel::None | AccessLevel::Unknown => {}
            }
            if champions.len() > 1 {
                acc.flat(10, "additional champion(s) engaged");
            }
        }
        None => {
            if contains_person_name(&snapshot.free_text) {
                acc.flat(20, "possible contact named in notes");
            }
        }
    }

    let influencers = snapshot
        .stakeholders
        .iter()
        .filter(|stakeholder| stakeholder.role == StakeholderRole::Influencer)
        .count();
    acc.scaled(influencers, 5, 15, "influencer(s) mapped");

    if snapshot
        .stakeholders
        .iter()
        .any(|stakeholder| stakeholder.role == StakeholderRole::Blocker)
    {
        acc.flat(5, "blocker identified and mapped");
    }

    acc.matched(
        &keyword_hits(coaching, CHAMPION_TERMS),
        5,
        15,
        "champion language in generated coaching",
    );
    acc.finish()
}

fn first_with_role(snapshot: &DealSnapshot, role: StakeholderRole) -> Option<&Stakeholder> {
    snapshot
        .stakeholders
        .iter()
        .find(|stakeholder| stakeholder.role == role)
}
