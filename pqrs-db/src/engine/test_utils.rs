#[cfg(test)]
pub mod test_utils {
    use crate::engine::transition::apply;
    use crate::models::{
        ComplaintModel, ComplaintStatus, ProfileSnapshot, TraceModel, UserModel, UserRole,
        FILED_TRACE_LABEL, UNKNOWN_PREDICTION,
    };
    use chrono::{DateTime, Duration, Utc};
    use heapless::String as HeaplessString;
    use pqrs_api::ComplaintUpdate;
    use std::str::FromStr;
    use uuid::Uuid;

    pub fn create_test_user(email: &str, first_name: &str, role: UserRole) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            first_name: HeaplessString::from_str(first_name).unwrap(),
            last_name: HeaplessString::from_str("User").unwrap(),
            email: HeaplessString::from_str(email).unwrap(),
            role,
        }
    }

    pub fn create_test_employee(email: &str) -> UserModel {
        create_test_user(email, "Admin", UserRole::Employee)
    }

    /// Complaint in an open status with an empty response block
    pub fn create_test_complaint(status: ComplaintStatus, received_date: DateTime<Utc>) -> ComplaintModel {
        let filer = create_test_user("citizen@test.com", "Ana", UserRole::User);
        ComplaintModel {
            id: Uuid::new_v4(),
            reference: HeaplessString::from_str("TRC-20240101-ABC123-1").unwrap(),
            received_date,
            complaint_type: 1,
            category: 0,
            status,
            subject: "Bus no paró".to_string(),
            description: "El bus no se detuvo".to_string(),
            location: "Calle 10".to_string(),
            user: filer.id,
            user_profile: ProfileSnapshot::from(&filer),
            employee: None,
            employee_profile: None,
            response: None,
            response_date: None,
            department: None,
            days_to_resolve: None,
            days_from_expiration: None,
            traceability: vec![TraceModel::new(received_date, FILED_TRACE_LABEL, &filer.email)],
            prediction: UNKNOWN_PREDICTION.to_string(),
            updated_date: None,
        }
    }

    /// Complaint resolved by `employee` exactly `days_to_resolve` days after filing
    pub fn create_resolved_complaint(
        status: ComplaintStatus,
        received_date: DateTime<Utc>,
        days_to_resolve: i64,
        employee: &UserModel,
    ) -> ComplaintModel {
        let complaint = create_test_complaint(ComplaintStatus::New, received_date);
        let update = ComplaintUpdate::new(complaint.id, Some(status.code())).with_response("Atendida");
        apply(
            &complaint,
            &update,
            employee,
            received_date + Duration::days(days_to_resolve),
        )
    }
}
