use pqrs_db::{PredictionFeatures, UNKNOWN_PREDICTION};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Classifier is not trained")]
    NotReady,

    #[error("Unknown attribute value: {0}")]
    UnknownAttribute(String),

    #[error("Prediction failed: {0}")]
    Failed(String),
}

/// Opaque severity classifier consulted when a complaint is filed
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &PredictionFeatures) -> Result<String, PredictionError>;
}

/// Predictor used when no classifier is deployed
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailablePredictor;

impl Predictor for UnavailablePredictor {
    fn predict(&self, _features: &PredictionFeatures) -> Result<String, PredictionError> {
        Err(PredictionError::NotReady)
    }
}

/// Best-effort prediction: any failure degrades to the sentinel label.
pub fn predict_or_unknown(predictor: &dyn Predictor, features: &PredictionFeatures) -> String {
    match predictor.predict(features) {
        Ok(label) => label,
        Err(e) => {
            warn!(error = %e, kind = features.kind, "Prediction unavailable, storing sentinel");
            UNKNOWN_PREDICTION.to_string()
        }
    }
}
