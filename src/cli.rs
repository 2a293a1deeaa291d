//! CLI argument definitions.

use clap::Parser;

use crate::id::TestKind;

/// Top-level CLI parser for `testid`.
#[derive(Debug, Parser)]
#[command(name = "testid", version, about = "Generate random test-case identifiers")]
pub struct Cli {
    /// Kind of test ID: U for unit test, C for acceptance test.
    #[arg(short, long, value_enum, default_value_t = TestKind::Unit)]
    pub kind: TestKind,

    /// Number of test IDs to generate.
    #[arg(short, long, default_value_t = 1)]
    pub number: u32,
}
