use super::measurement::Measurement;

/// Running count and sum of the measurements seen so far.
///
/// `count == 0` always implies `sum == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    count: u64,
    sum: f64,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one more value into the aggregate.
    pub fn record(self, value: f64) -> Self {
        Self {
            count: self.count + 1,
            sum: self.sum + value,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean, or `None` when nothing was recorded.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<'a> FromIterator<&'a Measurement> for AggregateResult {
    fn from_iter<I: IntoIterator<Item = &'a Measurement>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AggregateResult::new(), |acc, m| acc.record(m.value))
    }
}
