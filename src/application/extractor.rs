use crate::domain::errors::ExtractionError;
use crate::domain::performance::measurement::measurements_in_line;
use crate::domain::performance::{AggregateResult, MalformedPolicy};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Scans benchmark output for `<number> <unit>` pairs and averages them.
///
/// # Example
/// ```
/// use label_perf::application::extractor::PerformanceExtractor;
///
/// let output = "fillseq : 239 micros/op\nreadseq : 41 micros/op\n";
/// let extractor = PerformanceExtractor::new("micros/op");
/// let mean = extractor.mean(output.as_bytes()).unwrap();
/// assert_eq!(mean, Some(140.0));
/// ```
#[derive(Debug, Clone)]
pub struct PerformanceExtractor {
    unit: String,
    policy: MalformedPolicy,
}

impl PerformanceExtractor {
    /// Create an extractor that fails on the first malformed measurement
    pub fn new(unit: impl Into<String>) -> Self {
        Self::with_policy(unit, MalformedPolicy::Fail)
    }

    pub fn with_policy(unit: impl Into<String>, policy: MalformedPolicy) -> Self {
        let unit = unit.into();
        if unit.contains(' ') {
            warn!(
                "Unit label '{}' contains a space; labels are compared against single tokens and will not match",
                unit
            );
        }
        Self { unit, policy }
    }

    /// Fold every matching measurement of `reader` into an aggregate.
    ///
    /// Line terminators (`\n`, `\r\n`) are stripped before tokenizing. Lines
    /// are decoded lossily, so invalid UTF-8 only affects the bytes it covers.
    pub fn aggregate<R: BufRead>(&self, mut reader: R) -> Result<AggregateResult, ExtractionError> {
        let mut acc = AggregateResult::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);

            for result in measurements_in_line(&line, line_number, &self.unit) {
                match result {
                    Ok(measurement) => {
                        trace!(
                            "Line {}: {} {}",
                            measurement.line, measurement.value, measurement.unit
                        );
                        acc = acc.record(measurement.value);
                    }
                    Err(err) => match self.policy {
                        MalformedPolicy::Fail => return Err(err),
                        MalformedPolicy::Skip => warn!("Skipping: {}", err),
                    },
                }
            }
        }

        if acc.is_empty() {
            debug!("No '{}' measurements in {} lines", self.unit, line_number);
        } else {
            debug!(
                "Scanned for '{}': count={} sum={} mean={:?}",
                self.unit,
                acc.count(),
                acc.sum(),
                acc.mean()
            );
        }
        Ok(acc)
    }

    /// Mean of all matching measurements, `None` when there are none.
    pub fn mean<R: BufRead>(&self, reader: R) -> Result<Option<f64>, ExtractionError> {
        Ok(self.aggregate(reader)?.mean())
    }

    /// Open `path` and compute the mean of its measurements.
    ///
    /// The file handle is dropped before returning on every path.
    pub fn mean_of_file(&self, path: impl AsRef<Path>) -> Result<Option<f64>, ExtractionError> {
        let path = path.as_ref();
        debug!("Reading benchmark output from {}", path.display());
        let file = File::open(path)?;
        self.mean(BufReader::new(file))
    }
}
