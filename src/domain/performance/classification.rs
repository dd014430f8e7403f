/// Verdict printed for CI consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Mean is within the threshold
    Good,
    /// Mean crossed the threshold in the configured direction
    Bad,
    /// No measurements were found
    Skip,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Good => "good",
            Classification::Bad => "bad",
            Classification::Skip => "skip",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
