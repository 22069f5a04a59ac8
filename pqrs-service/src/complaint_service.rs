use chrono::Utc;
use pqrs_api::{ApiError, ApiResult, ComplaintSearch, ComplaintUpdate, NewComplaint};
use pqrs_db::repository::{
    ComplaintCriteria, FindByEmail, FindById, FindByIdForUpdate, Page, PageRequest, Save,
    SearchComplaints,
};
use pqrs_db::{
    apply_with, generate_reference, new_complaint, prediction_features, target_status,
    ComplaintModel, TransitionKind, UserModel,
};
use sqlx::Database;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::config::ServiceConfig;
use crate::locks::ComplaintLocks;
use crate::prediction::{predict_or_unknown, Predictor};

/// Filing, lookup, search and status management of complaints.
///
/// Updates read the complaint with a row lock owned by the store's unit of
/// work and hold it until that unit of work commits. Within one process a
/// per-id lock also queues callers before they reach the store.
pub struct ComplaintService<DB, C, U, P>
where
    DB: Database,
{
    complaints: Arc<C>,
    users: Arc<U>,
    predictor: Arc<P>,
    locks: ComplaintLocks,
    config: ServiceConfig,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, C, U, P> ComplaintService<DB, C, U, P>
where
    DB: Database,
    C: FindById<DB, ComplaintModel>
        + FindByIdForUpdate<DB, ComplaintModel>
        + Save<DB, ComplaintModel>
        + SearchComplaints<DB>,
    U: FindByEmail<DB, UserModel>,
    P: Predictor,
{
    pub fn new(complaints: Arc<C>, users: Arc<U>, predictor: Arc<P>, config: ServiceConfig) -> Self {
        Self {
            complaints,
            users,
            predictor,
            locks: ComplaintLocks::new(),
            config,
            _db: PhantomData,
        }
    }

    /// Shares `locks` with other services built over the same store, e.g. one per transaction
    pub fn with_locks(mut self, locks: ComplaintLocks) -> Self {
        self.locks = locks;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn resolve_user(&self, email: &str) -> ApiResult<UserModel> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApiError::user_not_found(email))
    }

    /// Files a complaint on behalf of the user registered under `filer_email`.
    ///
    /// The severity prediction is best-effort: classifier failures store the
    /// `Desconocido` sentinel and never block filing.
    pub async fn create_complaint(
        &self,
        filer_email: &str,
        input: NewComplaint,
    ) -> ApiResult<ComplaintModel> {
        input.validate()?;
        let filer = self.resolve_user(filer_email).await?;

        let now = Utc::now();
        let reference = generate_reference(input.complaint_type, now, &mut rand::thread_rng())
            .map_err(ApiError::InternalError)?;
        let features =
            prediction_features(input.complaint_type, now, &self.config.prediction_channel);
        let prediction = predict_or_unknown(self.predictor.as_ref(), &features);

        let complaint = new_complaint(&input, &filer, reference, prediction, now);
        let saved = self.complaints.save(complaint).await?;

        info!(
            complaint_id = %saved.id,
            reference = %saved.reference,
            filer = %filer.email,
            prediction = %saved.prediction,
            "Complaint filed"
        );
        Ok(saved)
    }

    pub async fn get_complaint(&self, id: Uuid) -> ApiResult<ComplaintModel> {
        self.complaints
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::complaint_not_found(id))
    }

    /// Pages through complaints matching `search`.
    ///
    /// With `owner_email` set only complaints filed by that user are returned.
    pub async fn search_complaints(
        &self,
        owner_email: Option<&str>,
        search: ComplaintSearch,
    ) -> ApiResult<Page<ComplaintModel>> {
        search.validate()?;
        let owner = match owner_email {
            Some(email) => Some(self.resolve_user(email).await?.id),
            None => None,
        };

        let criteria = ComplaintCriteria {
            owner,
            term: search.term().map(str::to_string),
            status: search.status,
            sort_by: search.sort_by,
            sort_direction: search.sort_direction,
        };
        let request = PageRequest::for_zero_based_page(search.page, search.size);
        debug!(?criteria, page = search.page, size = search.size, "Searching complaints");

        Ok(self.complaints.search(&criteria, request).await?)
    }

    /// Applies a status change or response edit performed by `actor_email`.
    ///
    /// Resolving a complaint requires a non-blank response. The complaint row
    /// stays locked until the caller commits the store's unit of work.
    pub async fn update_complaint(
        &self,
        actor_email: &str,
        update: ComplaintUpdate,
    ) -> ApiResult<ComplaintModel> {
        update.validate()?;
        let actor = self.resolve_user(actor_email).await?;

        let _guard = self.locks.lock(update.id).await;
        let current = self
            .complaints
            .find_by_id_for_update(update.id)
            .await?
            .ok_or_else(|| ApiError::complaint_not_found(update.id))?;

        let target = target_status(&current, &update);
        let kind = TransitionKind::classify(current.status, target);
        let has_response = update
            .response
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty());
        if kind == TransitionKind::Resolution && !has_response {
            return Err(ApiError::ValidationError(format!(
                "A response is required to move complaint {} to {}",
                current.reference,
                target.label()
            )));
        }

        let next = apply_with(&current, &update, &actor, Utc::now(), &self.config.sla);
        let saved = self.complaints.save(next).await?;

        info!(
            complaint_id = %saved.id,
            from = %current.status,
            to = %saved.status,
            ?kind,
            actor = %actor.email,
            "Complaint updated"
        );
        Ok(saved)
    }
}
