use super::common::*;
use crate::workflows::qualification::domain::{
    AccessLevel, DealSnapshot, Dimension, StakeholderRole,
};
use crate::workflows::qualification::scorecard::{advise, QualificationTier};

#[test]
fn empty_snapshot_scores_zero_on_every_dimension() {
    let scorecard = engine().score(&empty_snapshot());

    for (dimension, score) in scorecard.iter() {
        assert_eq!(score.value, 0, "{} should score zero", dimension.label());
        assert!(score.evidence.is_empty());
    }

    let gaps = advise(&scorecard);
    assert_eq!(gaps.len(), Dimension::ALL.len());
}

#[test]
fn value_drivers_alone_cap_metrics_at_thirty() {
    let snapshot = DealSnapshot {
        value_drivers: vec![
            "Reduce Days Sales Outstanding".to_string(),
            "Improve Net Working Capital".to_string(),
            "Reduce Finance Cost".to_string(),
        ],
        ..DealSnapshot::default()
    };

    let scorecard = engine().score(&snapshot);

    assert_eq!(scorecard.metrics.value, 30);
    for (dimension, score) in scorecard.iter() {
        if dimension != Dimension::Metrics {
            assert_eq!(score.value, 0, "{} unaffected", dimension.label());
        }
    }
}

#[test]
fn duplicate_selections_are_tolerated() {
    let snapshot = DealSnapshot {
        value_drivers: vec!["Reduce Finance Cost".to_string(); 5],
        ..DealSnapshot::default()
    };

    // Duplicates count toward the same capped group; no dedup, no panic.
    assert_eq!(engine().score(&snapshot).metrics.value, 30);
}

#[test]
fn fully_confirmed_economic_buyer_scores_one_hundred() {
    let snapshot = DealSnapshot {
        stakeholders: vec![confirmed_buyer()],
        ..DealSnapshot::default()
    };

    let score = engine().score(&snapshot).economic_buyer;
    assert_eq!(score.value, 100);
    // Named, titled, direct access, budget: four contributing groups.
    assert_eq!(score.evidence.len(), 4);
}

#[test]
fn economic_buyer_scores_are_clamped_at_one_hundred() {
    let snapshot = DealSnapshot {
        stakeholders: vec![confirmed_buyer()],
        generated_text: "stakeholder map covering the budget holder, approval authority, \
                         buyer, sponsor and executive team"
            .to_string(),
        ..DealSnapshot::default()
    };

    // 100 from the stakeholder plus generated-text points clamps, not overflows.
    assert_eq!(engine().score(&snapshot).economic_buyer.value, 100);
}

#[test]
fn executive_keywords_back_fill_a_missing_economic_buyer() {
    let snapshot = DealSnapshot {
        free_text: "the cfo controls the budget and the sponsor is aligned".to_string(),
        ..DealSnapshot::default()
    };

    // cfo, budget, sponsor: three hits at 5 points, capped at 15.
    assert_eq!(engine().score(&snapshot).economic_buyer.value, 15);
}

#[test]
fn pain_combines_process_domains_and_note_keywords() {
    let snapshot = DealSnapshot {
        process_domains: vec!["Order to Cash".to_string()],
        free_text: "We face a critical bottleneck in our process".to_string(),
        ..DealSnapshot::default()
    };

    let scorecard = engine().score(&snapshot);
    let pain = &scorecard.identify_pain;

    // 12 for the single domain, 20 for "critical" and "bottleneck".
    assert_eq!(pain.value, 32);
    assert_eq!(pain.tier(), QualificationTier::Exploring);
}

#[test]
fn second_champion_earns_the_redundancy_bonus() {
    let snapshot = DealSnapshot {
        stakeholders: vec![
            stakeholder("Priya Rao", StakeholderRole::Champion, AccessLevel::Direct),
            stakeholder("Eli Navarro", StakeholderRole::Champion, AccessLevel::Unknown),
        ],
        ..DealSnapshot::default()
    };

    let score = engine().score(&snapshot).champion;
    assert_eq!(score.value, 75);
    assert_eq!(score.tier(), QualificationTier::Confirmed);
}

#[test]
fn name_heuristic_backs_fill_a_missing_champion() {
    let snapshot = DealSnapshot {
        free_text: "met with Jordan Meyer about the rollout".to_string(),
        ..DealSnapshot::default()
    };

    assert_eq!(engine().score(&snapshot).champion.value, 20);
}

#[test]
fn blockers_and_influencers_contribute_to_champion() {
    let snapshot = DealSnapshot {
        stakeholders: vec![
            stakeholder("A. Influencer", StakeholderRole::Influencer, AccessLevel::Unknown),
            stakeholder("B. Influencer", StakeholderRole::Influencer, AccessLevel::Unknown),
            stakeholder("C. Blocker", StakeholderRole::Blocker, AccessLevel::Unknown),
        ],
        ..DealSnapshot::default()
    };

    // Two influencers (10) plus a mapped blocker (5); no champion or name
    // fallback fires on an empty note.
    assert_eq!(engine().score(&snapshot).champion.value, 15);
}

#[test]
fn every_dimension_stays_within_bounds_on_a_rich_snapshot() {
    let scorecard = engine().score(&qualified_snapshot());

    for (dimension, score) in scorecard.iter() {
        assert!(score.value <= 100, "{} clamped", dimension.label());
        assert!(
            !score.evidence.is_empty(),
            "{} scored {} but has no evidence",
            dimension.label(),
            score.value
        );
    }
}

#[test]
fn scoring_is_idempotent() {
    let snapshot = qualified_snapshot();
    let first = engine().score(&snapshot);
    let second = engine().score(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn null_fields_deserialize_to_zero_values() {
    let snapshot: DealSnapshot = serde_json::from_str(
        r#"{
            "industries": null,
            "free_text": null,
            "rise_opportunity": null,
            "erp_landscape": null,
            "stakeholders": null
        }"#,
    )
    .expect("nulls collapse to defaults");

    assert_eq!(snapshot, DealSnapshot::default());

    let scorecard = engine().score(&snapshot);
    assert_eq!(scorecard.metrics.value, 0);
}
