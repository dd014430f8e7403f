use crate::domain::errors::ClassificationError;

/// Comparison polarity for a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Higher is worse (latency, micros/op)
    Greater,
    /// Lower is worse (throughput, MB/S)
    Less,
}

impl Direction {
    /// Returns true when `mean` lies on the wrong side of `threshold`.
    ///
    /// Equality is never a regression.
    pub fn is_regression(&self, mean: f64, threshold: f64) -> bool {
        match self {
            Direction::Greater => mean > threshold,
            Direction::Less => mean < threshold,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greater" => Ok(Direction::Greater),
            "less" => Ok(Direction::Less),
            _ => Err(ClassificationError::InvalidDirection {
                direction: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Greater => write!(f, "greater"),
            Direction::Less => write!(f, "less"),
        }
    }
}

/// User-supplied performance bound, e.g. `200 micros/op greater`.
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    value: f64,
    unit: String,
    direction: Direction,
}

impl Threshold {
    /// Creates a threshold from a raw direction string.
    ///
    /// # Returns
    /// * `Err(ClassificationError::InvalidDirection)` unless `direction` is
    ///   exactly `greater` or `less`
    pub fn new(
        value: f64,
        unit: impl Into<String>,
        direction: &str,
    ) -> Result<Self, ClassificationError> {
        Ok(Self::with_direction(value, unit, direction.parse()?))
    }

    pub fn with_direction(value: f64, unit: impl Into<String>, direction: Direction) -> Self {
        Self {
            value,
            unit: unit.into(),
            direction,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.value, self.unit, self.direction)
    }
}
