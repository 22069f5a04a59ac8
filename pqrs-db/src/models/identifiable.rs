use uuid::Uuid;

/// Entities addressed by their UUID primary key
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}

impl<T: Identifiable> Identifiable for &T {
    fn get_id(&self) -> Uuid {
        (**self).get_id()
    }
}
