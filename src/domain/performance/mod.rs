// Benchmark output parsing and regression classification domain
pub mod aggregate;
pub mod classification;
pub mod measurement;
pub mod threshold;

pub use aggregate::AggregateResult;
pub use classification::Classification;
pub use measurement::{MalformedPolicy, Measurement};
pub use threshold::{Direction, Threshold};
