use crate::domain::performance::{Classification, Threshold};
use tracing::info;

/// Maps an optional mean onto `good` / `bad` / `skip` for a fixed threshold.
#[derive(Debug, Clone)]
pub struct ThresholdClassifier {
    threshold: Threshold,
}

impl ThresholdClassifier {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// `None` means no measurements were found and always yields `Skip`.
    pub fn classify(&self, mean: Option<f64>) -> Classification {
        let Some(mean) = mean else {
            info!("No '{}' measurements found, skipping", self.threshold.unit());
            return Classification::Skip;
        };

        let classification = if self
            .threshold
            .direction()
            .is_regression(mean, self.threshold.value())
        {
            Classification::Bad
        } else {
            Classification::Good
        };

        info!(
            "Mean {} {} vs threshold {} => {}",
            mean,
            self.threshold.unit(),
            self.threshold,
            classification
        );
        classification
    }
}
