use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::qualification::domain::{
    AccessLevel, DealSnapshot, ErpLandscape, Stakeholder, StakeholderId, StakeholderRole,
};
use crate::workflows::qualification::repository::{
    CoachingAlert, CoachingNotifier, DealRecord, DealRepository, MemoryDealRepository,
    NotificationError, RepositoryError,
};
use crate::workflows::qualification::scorecard::QualificationEngine;
use crate::workflows::qualification::service::DealCoachingService;
use crate::workflows::qualification::{deal_router, DealId};

pub(super) fn engine() -> QualificationEngine {
    QualificationEngine::new()
}

pub(super) fn empty_snapshot() -> DealSnapshot {
    DealSnapshot::default()
}

pub(super) fn stakeholder(
    name: &str,
    role: StakeholderRole,
    access: AccessLevel,
) -> Stakeholder {
    Stakeholder {
        id: StakeholderId::default(),
        name: name.to_string(),
        title: String::new(),
        role,
        access,
        budget_confirmed: false,
    }
}

pub(super) fn confirmed_buyer() -> Stakeholder {
    Stakeholder {
        id: StakeholderId::default(),
        name: "Dana Whitfield".to_string(),
        title: "CFO".to_string(),
        role: StakeholderRole::EconomicBuyer,
        access: AccessLevel::Direct,
        budget_confirmed: true,
    }
}

/// A snapshot strong enough to score at least 50 on every dimension, so the
/// gap advisor comes back empty.
pub(super) fn qualified_snapshot() -> DealSnapshot {
    DealSnapshot {
        industries: vec!["Consumer Products".to_string()],
        process_domains: vec!["Order to Cash".to_string(), "Procure to Pay".to_string()],
        value_drivers: vec![
            "Reduce Days Sales Outstanding".to_string(),
            "Improve Net Working Capital".to_string(),
            "Reduce Finance Cost".to_string(),
        ],
        capabilities: vec![
            "Cash Application Automation".to_string(),
            "Collections Worklist".to_string(),
        ],
        free_text: "Timeline agreed for q3 with a milestone review; we must fix the critical \
                    bottleneck, the risk is urgent. Savings of $2 million and a 40% reduction \
                    are on the table."
            .to_string(),
        rise_opportunity: true,
        erp_landscape: ErpLandscape {
            modern: false,
            legacy: true,
            third_party: false,
        },
        stakeholders: vec![
            confirmed_buyer(),
            stakeholder("Priya Rao", StakeholderRole::Champion, AccessLevel::Direct),
        ],
        generated_text: "procurement process review with steering committee approval".to_string(),
    }
}

pub(super) fn build_service() -> (
    DealCoachingService<MemoryDealRepository, MemoryNotifier>,
    Arc<MemoryDealRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryDealRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = DealCoachingService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    events: Mutex<Vec<CoachingAlert>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<CoachingAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl CoachingNotifier for MemoryNotifier {
    fn publish(&self, alert: CoachingAlert) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl DealRepository for ConflictRepository {
    fn insert(&self, _record: DealRecord) -> Result<DealRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: DealRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &DealId) -> Result<Option<DealRecord>, RepositoryError> {
        Ok(None)
    }

    fn unqualified(&self, _limit: usize) -> Result<Vec<DealRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl DealRepository for UnavailableRepository {
    fn insert(&self, _record: DealRecord) -> Result<DealRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: DealRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &DealId) -> Result<Option<DealRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn unqualified(&self, _limit: usize) -> Result<Vec<DealRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn deal_router_with_service(
    service: DealCoachingService<MemoryDealRepository, MemoryNotifier>,
) -> axum::Router {
    deal_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
