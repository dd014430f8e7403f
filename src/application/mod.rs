// Benchmark output scanning
pub mod extractor;

// Threshold comparison
pub mod classifier;

// Extract + classify pipeline
pub mod labeler;
