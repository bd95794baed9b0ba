use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{DealId, DealSnapshot, DealStatus};
use super::scorecard::{classify, QualificationOutcome, QualificationTier};

/// Repository record for one registered deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRecord {
    pub deal_id: DealId,
    pub snapshot: DealSnapshot,
    pub qualification: Option<QualificationOutcome>,
    pub updated_at: DateTime<Utc>,
}

impl DealRecord {
    /// Overall status derived from the average dimension score.
    pub fn status(&self) -> DealStatus {
        match &self.qualification {
            None => DealStatus::Captured,
            Some(outcome) => match classify(outcome.scorecard.average()) {
                QualificationTier::Exploring => DealStatus::Exploring,
                QualificationTier::Building => DealStatus::Building,
                QualificationTier::Confirmed => DealStatus::Confirmed,
            },
        }
    }

    pub fn coaching_summary(&self) -> String {
        match &self.qualification {
            None => "pending qualification".to_string(),
            Some(outcome) if outcome.gaps.is_empty() => {
                format!(
                    "average score {}, all dimensions on track",
                    outcome.scorecard.average()
                )
            }
            Some(outcome) => format!(
                "average score {}, {} dimension(s) below target",
                outcome.scorecard.average(),
                outcome.gaps.len()
            ),
        }
    }

    pub fn status_view(&self) -> DealStatusView {
        DealStatusView {
            deal_id: self.deal_id.clone(),
            status: self.status().label(),
            coaching_summary: self.coaching_summary(),
            average_score: self
                .qualification
                .as_ref()
                .map(|outcome| outcome.scorecard.average()),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait DealRepository: Send + Sync {
    fn insert(&self, record: DealRecord) -> Result<DealRecord, RepositoryError>;
    fn update(&self, record: DealRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &DealId) -> Result<Option<DealRecord>, RepositoryError>;
    /// Registered deals without a persisted qualification, oldest first.
    fn unqualified(&self, limit: usize) -> Result<Vec<DealRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Insertion-ordered in-memory repository; the only persistence this service
/// owns. Anything durable lives behind the trait with an external adapter.
#[derive(Debug, Default)]
pub struct MemoryDealRepository {
    records: Mutex<Vec<DealRecord>>,
}

impl DealRepository for MemoryDealRepository {
    fn insert(&self, record: DealRecord) -> Result<DealRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.deal_id == record.deal_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: DealRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard
            .iter_mut()
            .find(|existing| existing.deal_id == record.deal_id)
        {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => {
                guard.push(record);
                Ok(())
            }
        }
    }

    fn fetch(&self, id: &DealId) -> Result<Option<DealRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.deal_id == id).cloned())
    }

    fn unqualified(&self, limit: usize) -> Result<Vec<DealRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.qualification.is_none())
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Trait describing outbound coaching notification hooks (chat, e-mail, CRM).
pub trait CoachingNotifier: Send + Sync {
    fn publish(&self, alert: CoachingAlert) -> Result<(), NotificationError>;
}

/// Simple alert payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingAlert {
    pub template: String,
    pub deal_id: DealId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Default notifier: structured log line per alert.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl CoachingNotifier for LogNotifier {
    fn publish(&self, alert: CoachingAlert) -> Result<(), NotificationError> {
        tracing::info!(
            template = %alert.template,
            deal_id = %alert.deal_id.0,
            "coaching alert"
        );
        Ok(())
    }
}

/// Sanitized representation of a deal's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct DealStatusView {
    pub deal_id: DealId,
    pub status: &'static str,
    pub coaching_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<u8>,
}
