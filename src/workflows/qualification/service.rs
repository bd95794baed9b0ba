use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{DealId, DealSnapshot, Stakeholder, StakeholderId};
use super::repository::{
    CoachingAlert, CoachingNotifier, DealRecord, DealRepository, NotificationError,
    RepositoryError,
};
use super::scorecard::{QualificationEngine, QualificationOutcome};

/// Service composing the repository, the notification hook, and the
/// qualification engine.
pub struct DealCoachingService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: QualificationEngine,
}

static DEAL_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static STAKEHOLDER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_deal_id() -> DealId {
    let id = DEAL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DealId(format!("deal-{id:06}"))
}

fn next_stakeholder_id() -> StakeholderId {
    let id = STAKEHOLDER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    StakeholderId(format!("stakeholder-{id:06}"))
}

/// Stakeholders arrive from the UI or debrief extraction without identities;
/// assign one to every record that lacks it.
fn assign_stakeholder_ids(stakeholders: &mut [Stakeholder]) {
    for stakeholder in stakeholders {
        if stakeholder.id.0.is_empty() {
            stakeholder.id = next_stakeholder_id();
        }
    }
}

impl<R, N> DealCoachingService<R, N>
where
    R: DealRepository + 'static,
    N: CoachingNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
            engine: QualificationEngine::new(),
        }
    }

    /// Register a new deal snapshot, returning the repository-backed record.
    pub fn register(&self, mut snapshot: DealSnapshot) -> Result<DealRecord, DealCoachingError> {
        assign_stakeholder_ids(&mut snapshot.stakeholders);

        let record = DealRecord {
            deal_id: next_deal_id(),
            snapshot,
            qualification: None,
            updated_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Replace a deal's snapshot wholesale. Any persisted qualification is
    /// dropped; it no longer describes the stored snapshot.
    pub fn update_snapshot(
        &self,
        deal_id: &DealId,
        mut snapshot: DealSnapshot,
    ) -> Result<DealRecord, DealCoachingError> {
        let mut record = self
            .repository
            .fetch(deal_id)?
            .ok_or(RepositoryError::NotFound)?;

        assign_stakeholder_ids(&mut snapshot.stakeholders);
        record.snapshot = snapshot;
        record.qualification = None;
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Run the scoring engine over the stored snapshot and persist the
    /// outcome. A deal with no open gaps raises a coaching alert.
    pub fn qualify(&self, deal_id: &DealId) -> Result<QualificationOutcome, DealCoachingError> {
        let mut record = self
            .repository
            .fetch(deal_id)?
            .ok_or(RepositoryError::NotFound)?;

        let outcome = self.engine.qualify(&record.snapshot);

        record.qualification = Some(outcome.clone());
        record.updated_at = Utc::now();
        self.repository.update(record)?;

        if outcome.gaps.is_empty() {
            let mut details = BTreeMap::new();
            details.insert(
                "average_score".to_string(),
                outcome.scorecard.average().to_string(),
            );
            self.notifier.publish(CoachingAlert {
                template: "deal_fully_qualified".to_string(),
                deal_id: deal_id.clone(),
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Fetch a deal and current status for API responses.
    pub fn get(&self, deal_id: &DealId) -> Result<DealRecord, DealCoachingError> {
        let record = self
            .repository
            .fetch(deal_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Merge stakeholders extracted from a call debrief into the stored
    /// snapshot. Names already present (case-insensitively) are skipped; this
    /// is the one call site where name uniqueness is enforced.
    pub fn merge_debrief_stakeholders(
        &self,
        deal_id: &DealId,
        extracted: Vec<Stakeholder>,
    ) -> Result<DealRecord, DealCoachingError> {
        let mut record = self
            .repository
            .fetch(deal_id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut added = false;
        for mut stakeholder in extracted {
            let name = stakeholder.name.trim();
            if name.is_empty() {
                continue;
            }
            let duplicate = record
                .snapshot
                .stakeholders
                .iter()
                .any(|existing| existing.name.trim().eq_ignore_ascii_case(name));
            if duplicate {
                continue;
            }
            if stakeholder.id.0.is_empty() {
                stakeholder.id = next_stakeholder_id();
            }
            record.snapshot.stakeholders.push(stakeholder);
            added = true;
        }

        if added {
            record.qualification = None;
            record.updated_at = Utc::now();
            self.repository.update(record.clone())?;
        }

        Ok(record)
    }
}

/// Error raised by the coaching service.
#[derive(Debug, thiserror::Error)]
pub enum DealCoachingError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
