// Measurement, threshold and classification model
pub mod performance;

// Domain-specific error types
pub mod errors;
