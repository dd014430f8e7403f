use crate::application::classifier::ThresholdClassifier;
use crate::application::extractor::PerformanceExtractor;
use crate::domain::errors::ExtractionError;
use crate::domain::performance::{Classification, MalformedPolicy, Threshold};
use std::io::BufRead;
use std::path::Path;

/// Extract-then-classify pipeline for one threshold.
///
/// Holds no state between calls, so labelling the same input twice gives the
/// same answer.
#[derive(Debug, Clone)]
pub struct PerfLabeler {
    extractor: PerformanceExtractor,
    classifier: ThresholdClassifier,
}

impl PerfLabeler {
    pub fn new(threshold: Threshold, policy: MalformedPolicy) -> Self {
        Self {
            extractor: PerformanceExtractor::with_policy(threshold.unit(), policy),
            classifier: ThresholdClassifier::new(threshold),
        }
    }

    pub fn label<R: BufRead>(&self, reader: R) -> Result<Classification, ExtractionError> {
        let mean = self.extractor.mean(reader)?;
        Ok(self.classifier.classify(mean))
    }

    pub fn label_file(&self, path: impl AsRef<Path>) -> Result<Classification, ExtractionError> {
        let mean = self.extractor.mean_of_file(path)?;
        Ok(self.classifier.classify(mean))
    }
}
