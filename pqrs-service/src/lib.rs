pub mod complaint_service;
pub mod config;
pub mod locks;
pub mod prediction;
pub mod statistics_service;

pub use complaint_service::ComplaintService;
pub use config::{ConfigError, ServiceConfig};
pub use locks::{ComplaintGuard, ComplaintLocks};
pub use prediction::{predict_or_unknown, PredictionError, Predictor, UnavailablePredictor};
pub use statistics_service::StatisticsService;

#[cfg(test)]
pub mod test_utils;
