//! WizardSessions - live estimate controllers keyed by wizard ID.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::budget_logger::LoggingBudgetListener;
use super::errors::WizardError;
use crate::domain::estimate::{
    BudgetListener, Estimate, EstimateController, Estimator, FormChange, FormState,
};
use crate::domain::foundation::WizardId;
use crate::ports::VendorRepository;

/// Current view of a wizard session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub id: WizardId,
    pub state: FormState,
    pub estimate: Estimate,
}

impl WizardSnapshot {
    fn of(id: WizardId, controller: &EstimateController) -> Self {
        Self {
            id,
            state: controller.state().clone(),
            estimate: controller.estimate().clone(),
        }
    }
}

/// Sessions untouched for this long are dropped on the next create.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

struct Session {
    controller: EstimateController,
    touched: Instant,
}

impl Session {
    fn touch(&mut self) -> &mut EstimateController {
        self.touched = Instant::now();
        &mut self.controller
    }
}

/// Registry of in-progress wizards.
///
/// Each session owns an [`EstimateController`]; all mutations for a session
/// are serialized by the registry's write lock. Abandoned sessions are swept
/// whenever a new one starts.
pub struct WizardSessions {
    estimator: Arc<Estimator>,
    vendors: Arc<dyn VendorRepository>,
    sessions: RwLock<HashMap<WizardId, Session>>,
    idle_timeout: Duration,
}

impl WizardSessions {
    pub fn new(estimator: Arc<Estimator>, vendors: Arc<dyn VendorRepository>) -> Self {
        Self {
            estimator,
            vendors,
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Starts a wizard, optionally pre-filled with a state.
    pub async fn create(&self, initial: Option<FormState>) -> Result<WizardSnapshot, WizardError> {
        let id = WizardId::new();
        let estimator = Estimator::clone(&self.estimator);
        let mut controller = match initial {
            Some(state) => {
                for vendor_id in &state.vendor_ids {
                    self.ensure_selectable(vendor_id).await?;
                }
                EstimateController::with_state(estimator, state)
            }
            None => EstimateController::new(estimator),
        };
        let listener = Arc::new(LoggingBudgetListener::new(id));
        debug!(wizard_id = %id, listener = listener.name(), "Budget listener subscribed");
        controller.subscribe(listener);

        let snapshot = WizardSnapshot::of(id, &controller);
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.touched.elapsed() < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, "Idle wizards evicted");
        }
        sessions.insert(
            id,
            Session {
                controller,
                touched: Instant::now(),
            },
        );
        drop(sessions);

        info!(wizard_id = %id, total_cost = snapshot.estimate.total_cost, "Wizard created");
        Ok(snapshot)
    }

    pub async fn get(&self, id: WizardId) -> Result<WizardSnapshot, WizardError> {
        let mut sessions = self.sessions.write().await;
        let controller = sessions
            .get_mut(&id)
            .map(Session::touch)
            .ok_or(WizardError::NotFound(id))?;
        Ok(WizardSnapshot::of(id, controller))
    }

    /// Applies changes in order. Vendor selections must name active vendors;
    /// if any change is rejected, none are applied.
    pub async fn apply(
        &self,
        id: WizardId,
        changes: Vec<FormChange>,
    ) -> Result<WizardSnapshot, WizardError> {
        if !self.sessions.read().await.contains_key(&id) {
            return Err(WizardError::NotFound(id));
        }
        for change in &changes {
            if let FormChange::SelectVendor(vendor_id) = change {
                self.ensure_selectable(vendor_id).await?;
            }
        }

        let mut sessions = self.sessions.write().await;
        let controller = sessions
            .get_mut(&id)
            .map(Session::touch)
            .ok_or(WizardError::NotFound(id))?;
        let fields: Vec<&'static str> = changes.iter().map(FormChange::field).collect();
        controller.apply_all(changes);

        info!(wizard_id = %id, ?fields, total_cost = controller.estimate().total_cost, "Wizard updated");
        Ok(WizardSnapshot::of(id, controller))
    }

    pub async fn reset(&self, id: WizardId) -> Result<WizardSnapshot, WizardError> {
        let mut sessions = self.sessions.write().await;
        let controller = sessions
            .get_mut(&id)
            .map(Session::touch)
            .ok_or(WizardError::NotFound(id))?;
        controller.reset();
        info!(wizard_id = %id, "Wizard reset");
        Ok(WizardSnapshot::of(id, controller))
    }

    /// Ends a session.
    pub async fn remove(&self, id: WizardId) -> Result<(), WizardError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(WizardError::NotFound(id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn ensure_selectable(
        &self,
        vendor_id: &crate::domain::foundation::VendorId,
    ) -> Result<(), WizardError> {
        match self.vendors.find_by_id(vendor_id).await? {
            Some(vendor) if vendor.is_active() => Ok(()),
            Some(_) => Err(WizardError::validation(
                "vendor_ids",
                format!("Vendor {} is inactive", vendor_id),
            )),
            None => Err(WizardError::validation(
                "vendor_ids",
                format!("Unknown vendor {}", vendor_id),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryVendorRepository;
    use crate::domain::foundation::VendorId;
    use crate::domain::stall::{AreaUnit, BoothPosition};
    use crate::domain::vendor::{ContactInfo, NewVendor, PriceRange, Vendor, VendorCategory};

    fn sessions_with(repo: Arc<InMemoryVendorRepository>) -> WizardSessions {
        WizardSessions::new(Arc::new(Estimator::default()), repo)
    }

    async fn vendor(repo: &InMemoryVendorRepository, active: bool) -> VendorId {
        let mut vendor = Vendor::create(
            VendorId::new(),
            NewVendor {
                name: "Lights Co".to_string(),
                category: VendorCategory::AvEquipment,
                location: "Delhi".to_string(),
                contact: ContactInfo::default(),
                specialties: vec![],
                rating: 4.2,
                price_range: PriceRange::MidRange,
            },
        )
        .unwrap();
        if !active {
            vendor.deactivate();
        }
        repo.save(&vendor).await.unwrap();
        *vendor.id()
    }

    #[tokio::test]
    async fn create_starts_from_defaults() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()));
        let snapshot = sessions.create(None).await.unwrap();

        assert_eq!(snapshot.state, FormState::default());
        assert_eq!(sessions.get(snapshot.id).await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn apply_recomputes_estimate() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()));
        let id = sessions.create(None).await.unwrap().id;

        let inline = sessions
            .apply(
                id,
                vec![FormChange::Area {
                    area: 20.0,
                    unit: AreaUnit::Sqm,
                }],
            )
            .await
            .unwrap();
        let island = sessions
            .apply(id, vec![FormChange::BoothPosition(BoothPosition::Island)])
            .await
            .unwrap();

        assert_eq!(inline.estimate.stall_breakdown.total_cost, 179000.0);
        assert_eq!(island.estimate.stall_breakdown.total_cost, 223750.0);
    }

    #[tokio::test]
    async fn unknown_vendor_rejects_whole_batch() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()));
        let id = sessions.create(None).await.unwrap().id;

        let result = sessions
            .apply(
                id,
                vec![
                    FormChange::Area {
                        area: 30.0,
                        unit: AreaUnit::Sqm,
                    },
                    FormChange::SelectVendor(VendorId::new()),
                ],
            )
            .await;

        assert!(matches!(result, Err(WizardError::ValidationFailed { .. })));
        assert_eq!(sessions.get(id).await.unwrap().state.stall.area, 0.0);
    }

    #[tokio::test]
    async fn inactive_vendor_cannot_be_selected() {
        let repo = Arc::new(InMemoryVendorRepository::new());
        let active = vendor(&repo, true).await;
        let inactive = vendor(&repo, false).await;
        let sessions = sessions_with(repo);
        let id = sessions.create(None).await.unwrap().id;

        let ok = sessions
            .apply(id, vec![FormChange::SelectVendor(active)])
            .await
            .unwrap();
        assert!(ok.state.vendor_ids.contains(&active));

        let rejected = sessions
            .apply(id, vec![FormChange::SelectVendor(inactive)])
            .await;
        assert!(matches!(rejected, Err(WizardError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn reset_and_remove() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()));
        let id = sessions.create(None).await.unwrap().id;
        sessions
            .apply(
                id,
                vec![FormChange::Area {
                    area: 12.0,
                    unit: AreaUnit::Sqm,
                }],
            )
            .await
            .unwrap();

        let reset = sessions.reset(id).await.unwrap();
        assert_eq!(reset.state, FormState::default());

        sessions.remove(id).await.unwrap();
        assert!(sessions.is_empty().await);
        assert!(matches!(sessions.get(id).await, Err(WizardError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_wizard_is_not_found() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()));
        let result = sessions.apply(WizardId::new(), vec![]).await;
        assert!(matches!(result, Err(WizardError::NotFound(_))));
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_on_create() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()))
            .with_idle_timeout(Duration::ZERO);
        let abandoned = sessions.create(None).await.unwrap().id;

        let fresh = sessions.create(None).await.unwrap().id;

        assert_eq!(sessions.len().await, 1);
        assert!(matches!(
            sessions.get(abandoned).await,
            Err(WizardError::NotFound(_))
        ));
        assert!(sessions.get(fresh).await.is_ok());
    }

    #[tokio::test]
    async fn recently_used_sessions_survive_create() {
        let sessions = sessions_with(Arc::new(InMemoryVendorRepository::new()))
            .with_idle_timeout(Duration::from_secs(60 * 60));
        let first = sessions.create(None).await.unwrap().id;
        sessions.create(None).await.unwrap();

        assert_eq!(sessions.len().await, 2);
        assert!(sessions.get(first).await.is_ok());
    }
}
