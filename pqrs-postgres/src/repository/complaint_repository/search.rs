use async_trait::async_trait;
use pqrs_api::{SortDirection, SortField};
use pqrs_db::models::ComplaintModel;
use pqrs_db::repository::{ComplaintCriteria, Page, PageRequest, SearchComplaints};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::ComplaintRepositoryImpl;
use crate::utils::escape_like;

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::ReceivedDate => "received_date",
        SortField::Status => "status",
        SortField::Type => "complaint_type",
        SortField::Reference => "reference",
    }
}

fn sort_keyword(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

/// Appends the `WHERE` clause of `criteria` to `builder`
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, criteria: &ComplaintCriteria) {
    builder.push(" WHERE TRUE");
    if let Some(owner) = criteria.owner {
        builder.push(" AND user_id = ").push_bind(owner);
    }
    if let Some(status) = criteria.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(term) = &criteria.term {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(" AND (reference ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR subject ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl SearchComplaints<Postgres> for ComplaintRepositoryImpl {
    async fn search(
        &self,
        criteria: &ComplaintCriteria,
        page: PageRequest,
    ) -> Result<Page<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM complaint");
        push_filters(&mut count, criteria);

        let mut select = QueryBuilder::new("SELECT * FROM complaint");
        push_filters(&mut select, criteria);
        select
            .push(" ORDER BY ")
            .push(sort_column(criteria.sort_by))
            .push(" ")
            .push(sort_keyword(criteria.sort_direction))
            .push(", id ASC LIMIT ")
            .push_bind(i64::try_from(page.limit)?)
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset)?);

        let mut tx = self.executor.tx.lock().await;
        let (total, rows) = if let Some(transaction) = tx.as_mut() {
            let total: i64 = count.build_query_scalar::<i64>().fetch_one(&mut **transaction).await?;
            let rows = select.build().fetch_all(&mut **transaction).await?;
            (total, rows)
        } else {
            return Err("Transaction has been consumed".into());
        };

        let items = Self::map_rows(rows)?;
        Ok(Page::new(items, usize::try_from(total)?, page.limit, page.offset))
    }
}
