//! Deal intake, MEDDIC qualification scoring, and coaching gap analysis.
//!
//! [`scorecard`] holds the pure scoring core; [`service`] wires it to a
//! repository and a notification hook; [`router`] exposes both over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scorecard;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccessLevel, DealId, DealSnapshot, DealStatus, Dimension, ErpLandscape, Stakeholder,
    StakeholderId, StakeholderRole,
};
pub use repository::{
    CoachingAlert, CoachingNotifier, DealRecord, DealRepository, DealStatusView, LogNotifier,
    MemoryDealRepository, NotificationError, RepositoryError,
};
pub use router::deal_router;
pub use scorecard::{
    advise, classify, DealScorecard, DimensionScore, GapEntry, QualificationEngine,
    QualificationOutcome, QualificationTier, GAP_THRESHOLD,
};
pub use service::{DealCoachingError, DealCoachingService};
