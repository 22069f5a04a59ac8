use chrono::{DateTime, Datelike, Utc, Weekday};
use heapless::String as HeaplessString;
use pqrs_api::NewComplaint;
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{
    ComplaintModel, ComplaintStatus, ProfileSnapshot, TraceModel, UserModel, FILED_TRACE_LABEL,
};

pub const REFERENCE_PREFIX: &str = "TRC";
const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_SUFFIX_LEN: usize = 6;

/// Channel reported to the classifier for complaints filed through the API
pub const DEFAULT_CHANNEL: &str = "Web";

const TYPE_FEATURES: [&str; 5] = ["Peticion", "Queja", "Reclamo", "Sugerencia", "Felicitacion"];
const WEEKDAY_FEATURES: [&str; 5] = ["lunes", "martes", "miercoles", "jueves", "viernes"];
const MONTH_FEATURES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Builds `TRC-<YYYYMMDD>-<6 of [A-Z0-9]>-<type>` for a complaint filed at `now`.
pub fn generate_reference<R: Rng + ?Sized>(
    complaint_type: i32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<HeaplessString<32>, String> {
    let suffix: String = (0..REFERENCE_SUFFIX_LEN)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();
    let reference = format!(
        "{REFERENCE_PREFIX}-{}-{suffix}-{complaint_type}",
        now.format("%Y%m%d")
    );
    HeaplessString::from_str(&reference)
        .map_err(|_| format!("Reference '{reference}' is too long (max 32 chars)"))
}

/// Categorical inputs of the severity classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionFeatures {
    pub kind: &'static str,
    pub channel: String,
    pub weekday: &'static str,
    pub month: &'static str,
}

/// Maps a complaint's type and filing instant onto the classifier vocabulary.
///
/// Unknown types map to `Peticion`; weekend days map to `lunes`, the
/// classifier only knows business days.
pub fn prediction_features(
    complaint_type: i32,
    received_date: DateTime<Utc>,
    channel: &str,
) -> PredictionFeatures {
    let kind = usize::try_from(complaint_type)
        .ok()
        .and_then(|i| TYPE_FEATURES.get(i).copied())
        .unwrap_or(TYPE_FEATURES[0]);
    let weekday = match received_date.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKDAY_FEATURES[0],
        day => WEEKDAY_FEATURES[day.num_days_from_monday() as usize],
    };
    let month = MONTH_FEATURES[received_date.month0() as usize];

    PredictionFeatures {
        kind,
        channel: channel.to_string(),
        weekday,
        month,
    }
}

/// Builds the record of a freshly filed complaint.
///
/// Status is forced to new, the filer snapshot is taken from `filer` and the
/// trail starts with a single filing entry performed by the filer.
pub fn new_complaint(
    input: &NewComplaint,
    filer: &UserModel,
    reference: HeaplessString<32>,
    prediction: String,
    now: DateTime<Utc>,
) -> ComplaintModel {
    ComplaintModel {
        id: Uuid::new_v4(),
        reference,
        received_date: now,
        complaint_type: input.complaint_type,
        category: input.category,
        status: ComplaintStatus::New,
        subject: input.subject.clone(),
        description: input.description.clone(),
        location: input.location.clone(),
        user: filer.id,
        user_profile: ProfileSnapshot::from(filer),
        employee: None,
        employee_profile: None,
        response: None,
        response_date: None,
        department: None,
        days_to_resolve: None,
        days_from_expiration: None,
        traceability: vec![TraceModel::new(now, FILED_TRACE_LABEL, &filer.email)],
        prediction,
        updated_date: None,
    }
}
