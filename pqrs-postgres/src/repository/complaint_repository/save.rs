use async_trait::async_trait;
use pqrs_db::models::ComplaintModel;
use pqrs_db::repository::Save;
use sqlx::{types::Json, Postgres};
use std::error::Error;
use tracing::debug;

use super::repo_impl::ComplaintRepositoryImpl;

#[async_trait]
impl Save<Postgres, ComplaintModel> for ComplaintRepositoryImpl {
    async fn save(&self, item: ComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO complaint (
                id, reference, received_date, complaint_type, category, status,
                subject, description, location, user_id, user_profile,
                employee_id, employee_profile, response, response_date, department,
                days_to_resolve, days_from_expiration, traceability, prediction, updated_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                subject = EXCLUDED.subject,
                description = EXCLUDED.description,
                location = EXCLUDED.location,
                employee_id = EXCLUDED.employee_id,
                employee_profile = EXCLUDED.employee_profile,
                response = EXCLUDED.response,
                response_date = EXCLUDED.response_date,
                department = EXCLUDED.department,
                days_to_resolve = EXCLUDED.days_to_resolve,
                days_from_expiration = EXCLUDED.days_from_expiration,
                traceability = EXCLUDED.traceability,
                prediction = EXCLUDED.prediction,
                updated_date = EXCLUDED.updated_date
            "#,
        )
        .bind(item.id)
        .bind(item.reference.as_str())
        .bind(item.received_date)
        .bind(item.complaint_type)
        .bind(item.category)
        .bind(item.status.code())
        .bind(&item.subject)
        .bind(&item.description)
        .bind(&item.location)
        .bind(item.user)
        .bind(Json(&item.user_profile))
        .bind(item.employee)
        .bind(item.employee_profile.as_ref().map(Json))
        .bind(&item.response)
        .bind(item.response_date)
        .bind(&item.department)
        .bind(item.days_to_resolve)
        .bind(item.days_from_expiration)
        .bind(Json(&item.traceability))
        .bind(&item.prediction)
        .bind(item.updated_date);

        let mut tx = self.executor.tx.lock().await;
        if let Some(transaction) = tx.as_mut() {
            query.execute(&mut **transaction).await?;
        } else {
            return Err("Transaction has been consumed".into());
        }

        debug!(complaint_id = %item.id, status = item.status.code(), "Complaint saved");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{create_test_complaint, create_test_user};
    use crate::test_helper::setup_test_context;
    use chrono::{Duration, Utc};
    use pqrs_api::ComplaintUpdate;
    use pqrs_db::repository::{FindById, Save};
    use pqrs_db::{apply, ComplaintStatus};

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_save_inserts_then_replaces() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.complaint_repository();

        let filer = create_test_user("filer");
        let employee = create_test_user("employee");
        let received = Utc::now() - Duration::days(4);
        let complaint = create_test_complaint(&filer, received);
        repo.save(complaint.clone()).await?;

        let update = ComplaintUpdate::new(complaint.id, Some(2))
            .with_response("Respuesta")
            .with_department("Operaciones");
        let resolved = apply(&complaint, &update, &employee, Utc::now());
        repo.save(resolved.clone()).await?;

        let stored = repo.find_by_id(complaint.id).await?.ok_or("complaint missing")?;
        assert_eq!(stored.status, ComplaintStatus::Resolved);
        assert_eq!(stored.response.as_deref(), Some("Respuesta"));
        assert_eq!(stored.department.as_deref(), Some("Operaciones"));
        assert_eq!(stored.days_to_resolve, Some(4));
        assert_eq!(stored.days_from_expiration, Some(11));
        assert_eq!(stored.employee_profile, resolved.employee_profile);
        assert_eq!(stored.user_profile, complaint.user_profile);
        assert_eq!(stored.traceability, resolved.traceability);
        assert!(stored.response_block_consistent());
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_save_accepts_long_prediction_label() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.complaint_repository();

        let filer = create_test_user("label");
        let mut complaint = create_test_complaint(&filer, Utc::now());
        complaint.prediction = "Prioridad Alta - requiere revisión inmediata por el área de operaciones y seguridad vial".to_string();
        assert!(complaint.prediction.chars().count() > 80);
        repo.save(complaint.clone()).await?;

        let stored = repo.find_by_id(complaint.id).await?.ok_or("complaint missing")?;
        assert_eq!(stored.prediction, complaint.prediction);
        Ok(())
    }
}
