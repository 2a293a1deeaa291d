//! Test-kind classification and identifier composition.

use clap::ValueEnum;

/// Classification of a test case, selecting the identifier prefix.
///
/// The CLI tokens are the single letters `U` and `C`, matching the kinds
/// accepted by the generator scripts this tool labels tests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestKind {
    /// Unit test (`U`), prefixed `UT`.
    #[value(name = "U")]
    Unit,
    /// Acceptance test (`C`), prefixed `AT`.
    #[value(name = "C")]
    Acceptance,
}

impl TestKind {
    /// Returns the identifier prefix for this kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Unit => "UT",
            Self::Acceptance => "AT",
        }
    }
}

/// Composes a test identifier from a kind prefix and a unique value.
#[must_use]
pub fn compose(kind: TestKind, value: &str) -> String {
    format!("{}-{value}", kind.prefix())
}
