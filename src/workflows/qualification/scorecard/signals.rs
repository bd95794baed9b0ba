//! Signal extractors: keyword vocabularies and pattern matchers shared by the
//! dimension rules.
//!
//! Matching is deliberately permissive: case-insensitive substring containment
//! rather than word-boundary tokenization ("revenue" inside "revenues" counts).
//! Tightening this to word boundaries would change scores, so it stays as is.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const METRIC_TERMS: &[&str] = &[
    "roi",
    "savings",
    "reduction",
    "increase",
    "productivity",
    "efficiency",
    "kpi",
    "revenue",
    "cost",
    "margin",
    "growth",
];

pub(crate) const EXECUTIVE_TERMS: &[&str] = &[
    "ceo",
    "cfo",
    "cio",
    "coo",
    "cto",
    "vp",
    "vice president",
    "director",
    "budget",
    "sponsor",
    "executive",
    "c-level",
    "decision maker",
];

pub(crate) const STAKEHOLDER_ANALYSIS_TERMS: &[&str] = &[
    "stakeholder",
    "decision maker",
    "budget holder",
    "approval",
    "authority",
    "buyer",
    "sponsor",
    "executive team",
];

pub(crate) const CRITERIA_TERMS: &[&str] = &[
    "criteria",
    "requirements",
    "must-have",
    "evaluation",
    "technical",
    "compliance",
    "security",
    "integration",
    "scalability",
    "performance",
];

pub(crate) const TIMELINE_TERMS: &[&str] = &[
    "timeline",
    "deadline",
    "phase",
    "milestone",
    "quarter",
    "month",
    "week",
    "q1",
    "q2",
    "q3",
    "q4",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "2024",
    "2025",
    "2026",
];

pub(crate) const PROCESS_TERMS: &[&str] = &[
    "process",
    "step",
    "stage",
    "workflow",
    "approval",
    "review",
    "procurement",
    "rfp",
    "proposal",
    "evaluation",
];

pub(crate) const APPROVAL_TERMS: &[&str] = &[
    "approval",
    "sign-off",
    "committee",
    "board",
    "governance",
    "steering",
];

pub(crate) const PAIN_TERMS: &[&str] = &[
    "pain",
    "problem",
    "challenge",
    "issue",
    "bottleneck",
    "inefficiency",
    "risk",
    "concern",
    "struggle",
    "difficulty",
    "urgent",
    "critical",
];

pub(crate) const PAIN_DISCUSSION_TERMS: &[&str] = &[
    "pain point",
    "business impact",
    "cost of inaction",
    "consequence",
    "implication",
    "urgency",
    "priority",
];

pub(crate) const CHAMPION_TERMS: &[&str] = &[
    "champion",
    "advocate",
    "supporter",
    "ally",
    "sponsor",
    "coach",
];

/// Percentages, currency-prefixed amounts, and unit-suffixed figures.
static QUANTIFIED_IMPACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[$€£]\s*\d[\d,.]*|\d[\d,.]*\s*%|\d[\d,.]*\s*(?:million|billion|fte|days|hours|k|m)\b")
        .expect("quantified impact pattern compiles")
});

/// Two adjacent capitalized tokens, a naive personal-name heuristic. Known to
/// false-positive on sentence-initial word pairs; kept for output parity.
static PERSON_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").expect("person name pattern compiles")
});

/// Vocabulary terms contained in `text`, in vocabulary order. Expects `text`
/// already lower-cased.
pub(crate) fn keyword_hits<'v>(text: &str, vocabulary: &[&'v str]) -> Vec<&'v str> {
    vocabulary
        .iter()
        .filter(|term| text.contains(*term))
        .copied()
        .collect()
}

/// Count of numeric/currency mentions; content does not matter, count does.
pub(crate) fn quantified_mentions(text: &str) -> usize {
    QUANTIFIED_IMPACT.find_iter(text).count()
}

/// Whether the raw (case-preserved) text appears to name a person.
pub(crate) fn contains_person_name(text: &str) -> bool {
    PERSON_NAME.is_match(text)
}
