#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, SubsecRound, Utc};
    use heapless::String as HeaplessString;
    use pqrs_api::NewComplaint;
    use pqrs_db::models::{UserModel, UserRole, UNKNOWN_PREDICTION};
    use pqrs_db::{generate_reference, new_complaint};
    use std::str::FromStr;
    use uuid::Uuid;

    /// User with an email unique to this call
    pub fn create_test_user(prefix: &str) -> UserModel {
        let email = format!("{prefix}-{}@test.com", Uuid::new_v4().simple());
        UserModel {
            id: Uuid::new_v4(),
            first_name: HeaplessString::from_str("Test").unwrap(),
            last_name: HeaplessString::from_str(prefix).unwrap(),
            email: HeaplessString::from_str(&email).unwrap(),
            role: UserRole::User,
        }
    }

    /// Freshly filed complaint; `received_date` is cut to the database's microsecond precision
    pub fn create_test_complaint(filer: &UserModel, received_date: DateTime<Utc>) -> pqrs_db::ComplaintModel {
        let received_date = received_date.trunc_subsecs(6);
        let input = NewComplaint {
            complaint_type: 1,
            category: 2,
            subject: "Bus no paró".to_string(),
            description: "El bus no se detuvo en el paradero".to_string(),
            location: "Calle 10".to_string(),
        };
        let reference = generate_reference(input.complaint_type, received_date, &mut rand::thread_rng()).unwrap();
        new_complaint(&input, filer, reference, UNKNOWN_PREDICTION.to_string(), received_date)
    }
}
