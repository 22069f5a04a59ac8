pub mod engine;
pub mod models;
pub mod repository;

pub use engine::intake::{
    generate_reference, new_complaint, prediction_features, PredictionFeatures, DEFAULT_CHANNEL,
    REFERENCE_PREFIX,
};
pub use engine::policy::SlaPolicy;
pub use engine::statistics::{summarize, summarize_with};
pub use engine::transition::{apply, apply_with, target_status, TransitionKind};
pub use engine::{whole_days_between, EXPIRATION_DAYS};
pub use models::*;
