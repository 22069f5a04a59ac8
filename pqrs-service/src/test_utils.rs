#[cfg(test)]
pub mod test_utils {
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use heapless::String as HeaplessString;
    use pqrs_api::{ComplaintUpdate, NewComplaint};
    use pqrs_db::repository::{
        ComplaintCriteria, FindAll, FindByDateRange, FindByEmail, FindById, FindByIdForUpdate,
        Page, PageRequest, Save, SearchComplaints,
    };
    use pqrs_db::{
        apply, new_complaint, ComplaintModel, ComplaintStatus, PredictionFeatures, UserModel,
        UserRole, UNKNOWN_PREDICTION,
    };
    use sqlx::Database;
    use std::collections::HashMap;
    use std::error::Error;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use crate::prediction::{PredictionError, Predictor};

    pub const CITIZEN_EMAIL: &str = "citizen@test.com";
    pub const EMPLOYEE_EMAIL: &str = "admin@test.com";

    pub fn create_test_user(email: &str, first_name: &str, role: UserRole) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            first_name: HeaplessString::from_str(first_name).unwrap(),
            last_name: HeaplessString::from_str("User").unwrap(),
            email: HeaplessString::from_str(email).unwrap(),
            role,
        }
    }

    pub fn test_citizen() -> UserModel {
        create_test_user(CITIZEN_EMAIL, "Ana", UserRole::User)
    }

    pub fn test_employee() -> UserModel {
        create_test_user(EMPLOYEE_EMAIL, "Admin", UserRole::Employee)
    }

    pub fn seeded_users() -> InMemoryUserRepository {
        InMemoryUserRepository::new(vec![test_citizen(), test_employee()])
    }

    pub fn new_complaint_input(subject: &str) -> NewComplaint {
        NewComplaint {
            complaint_type: 1,
            category: 0,
            subject: subject.to_string(),
            description: "El bus no se detuvo en el paradero".to_string(),
            location: "Calle 10".to_string(),
        }
    }

    /// Complaint filed at `received_date`, moved to an open `status` without a trail entry
    pub fn complaint_received(status: ComplaintStatus, received_date: DateTime<Utc>) -> ComplaintModel {
        let reference = HeaplessString::from_str("TRC-20240101-ABC123-1").unwrap();
        let mut complaint = new_complaint(
            &new_complaint_input("Bus no paró"),
            &test_citizen(),
            reference,
            UNKNOWN_PREDICTION.to_string(),
            received_date,
        );
        complaint.status = status;
        complaint
    }

    pub fn resolved_complaint(
        received_date: DateTime<Utc>,
        days_to_resolve: i64,
        employee: &UserModel,
    ) -> ComplaintModel {
        let complaint = complaint_received(ComplaintStatus::New, received_date);
        let update = ComplaintUpdate::new(complaint.id, Some(ComplaintStatus::Resolved.code()))
            .with_response("Atendida");
        apply(
            &complaint,
            &update,
            employee,
            received_date + Duration::days(days_to_resolve),
        )
    }

    pub struct FixedPredictor(pub &'static str);

    impl Predictor for FixedPredictor {
        fn predict(&self, _features: &PredictionFeatures) -> Result<String, PredictionError> {
            Ok(self.0.to_string())
        }
    }

    pub struct FailingPredictor;

    impl Predictor for FailingPredictor {
        fn predict(&self, features: &PredictionFeatures) -> Result<String, PredictionError> {
            Err(PredictionError::UnknownAttribute(features.channel.clone()))
        }
    }

    /// Complaint store backed by a map.
    ///
    /// `save` counts a lost update whenever the incoming trail does not extend
    /// the stored one, which happens when two writers started from the same
    /// snapshot.
    #[derive(Default)]
    pub struct InMemoryComplaintRepository {
        complaints: RwLock<HashMap<Uuid, ComplaintModel>>,
        latency: Option<std::time::Duration>,
        lost_updates: AtomicUsize,
        locked_reads: AtomicUsize,
    }

    impl InMemoryComplaintRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Delays every lookup, widening the read-modify-write window
        pub fn with_latency(latency: std::time::Duration) -> Self {
            Self {
                latency: Some(latency),
                ..Self::default()
            }
        }

        pub async fn insert(&self, complaint: ComplaintModel) {
            self.complaints.write().await.insert(complaint.id, complaint);
        }

        pub async fn len(&self) -> usize {
            self.complaints.read().await.len()
        }

        pub async fn set_received_offset(&self, id: Uuid, offset: Duration) {
            if let Some(complaint) = self.complaints.write().await.get_mut(&id) {
                complaint.received_date += offset;
            }
        }

        pub fn lost_updates(&self) -> usize {
            self.lost_updates.load(Ordering::SeqCst)
        }

        pub fn locked_reads(&self) -> usize {
            self.locked_reads.load(Ordering::SeqCst)
        }

        async fn snapshot(&self) -> Vec<ComplaintModel> {
            self.complaints.read().await.values().cloned().collect()
        }
    }

    #[async_trait]
    impl<DB: Database> FindById<DB, ComplaintModel> for InMemoryComplaintRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
            let found = self.complaints.read().await.get(&id).cloned();
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            Ok(found)
        }
    }

    #[async_trait]
    impl<DB: Database> FindByIdForUpdate<DB, ComplaintModel> for InMemoryComplaintRepository {
        async fn find_by_id_for_update(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
            self.locked_reads.fetch_add(1, Ordering::SeqCst);
            FindById::<DB, ComplaintModel>::find_by_id(self, id).await
        }
    }

    #[async_trait]
    impl<DB: Database> Save<DB, ComplaintModel> for InMemoryComplaintRepository {
        async fn save(&self, item: ComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
            let mut complaints = self.complaints.write().await;
            if let Some(stored) = complaints.get(&item.id) {
                if !item.traceability.starts_with(&stored.traceability) {
                    self.lost_updates.fetch_add(1, Ordering::SeqCst);
                }
            }
            complaints.insert(item.id, item.clone());
            Ok(item)
        }
    }

    #[async_trait]
    impl<DB: Database> FindAll<DB, ComplaintModel> for InMemoryComplaintRepository {
        async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
            Ok(self.snapshot().await)
        }
    }

    #[async_trait]
    impl<DB: Database> FindByDateRange<DB, ComplaintModel> for InMemoryComplaintRepository {
        async fn find_by_date_range(
            &self,
            start: Option<DateTime<Utc>>,
            end: Option<DateTime<Utc>>,
        ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
            Ok(self
                .snapshot()
                .await
                .into_iter()
                .filter(|c| start.map_or(true, |s| c.received_date >= s))
                .filter(|c| end.map_or(true, |e| c.received_date <= e))
                .collect())
        }
    }

    #[async_trait]
    impl<DB: Database> SearchComplaints<DB> for InMemoryComplaintRepository {
        async fn search(
            &self,
            criteria: &ComplaintCriteria,
            page: PageRequest,
        ) -> Result<Page<ComplaintModel>, Box<dyn Error + Send + Sync>> {
            Ok(criteria.apply(self.snapshot().await, page))
        }
    }

    pub struct InMemoryUserRepository {
        users: Vec<UserModel>,
    }

    impl InMemoryUserRepository {
        pub fn new(users: Vec<UserModel>) -> Self {
            Self { users }
        }
    }

    #[async_trait]
    impl<DB: Database> FindByEmail<DB, UserModel> for InMemoryUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
            Ok(self
                .users
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(email))
                .cloned())
        }
    }
}
