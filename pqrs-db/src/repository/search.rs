use async_trait::async_trait;
use pqrs_api::{SortDirection, SortField};
use sqlx::Database;
use std::cmp::Ordering;
use uuid::Uuid;

use super::pagination::{Page, PageRequest};
use crate::models::ComplaintModel;

/// Filter and ordering of a complaint search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplaintCriteria {
    /// Restricts results to complaints filed by this user
    pub owner: Option<Uuid>,
    /// Case-insensitive substring of the reference or the subject
    pub term: Option<String>,
    pub status: Option<i32>,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
}

impl ComplaintCriteria {
    pub fn matches(&self, complaint: &ComplaintModel) -> bool {
        if let Some(owner) = self.owner {
            if complaint.user != owner {
                return false;
            }
        }
        if let Some(status) = self.status {
            if complaint.status.code() != status {
                return false;
            }
        }
        match &self.term {
            Some(term) => {
                let term = term.to_lowercase();
                complaint.reference.to_lowercase().contains(&term)
                    || complaint.subject.to_lowercase().contains(&term)
            }
            None => true,
        }
    }

    /// Ordering of two complaints under this criteria, ties broken by id
    pub fn compare(&self, a: &ComplaintModel, b: &ComplaintModel) -> Ordering {
        let ordering = match self.sort_by {
            SortField::ReceivedDate => a.received_date.cmp(&b.received_date),
            SortField::Status => a.status.code().cmp(&b.status.code()),
            SortField::Type => a.complaint_type.cmp(&b.complaint_type),
            SortField::Reference => a.reference.as_str().cmp(b.reference.as_str()),
        };
        let ordering = match self.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }

    /// Filters, orders and pages an in-memory complaint collection
    pub fn apply(&self, complaints: Vec<ComplaintModel>, request: PageRequest) -> Page<ComplaintModel> {
        let mut selected: Vec<ComplaintModel> =
            complaints.into_iter().filter(|c| self.matches(c)).collect();
        selected.sort_by(|a, b| self.compare(a, b));
        Page::slice(selected, request)
    }
}

/// Repository trait for paged complaint searches
#[async_trait]
pub trait SearchComplaints<DB: Database>: Send + Sync {
    async fn search(
        &self,
        criteria: &ComplaintCriteria,
        page: PageRequest,
    ) -> Result<Page<ComplaintModel>, Box<dyn std::error::Error + Send + Sync>>;
}
