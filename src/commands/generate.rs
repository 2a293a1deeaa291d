//! Handler that emits prefixed test identifiers.

use crate::id::{self, TestKind};
use crate::ports::IdGenerator;

/// Writes `count` prefixed test identifiers to stdout, one per line.
///
/// # Errors
///
/// Never fails; identifier generation has no failure mode. The `Result`
/// matches the dispatch signature.
pub fn run(kind: TestKind, count: u32, id_gen: &dyn IdGenerator) -> Result<(), String> {
    for test_id in render(kind, count, id_gen) {
        println!("{test_id}");
    }
    Ok(())
}

/// Produces the identifier lines without writing them.
fn render(kind: TestKind, count: u32, id_gen: &dyn IdGenerator) -> Vec<String> {
    (0..count).map(|_| id::compose(kind, &id_gen.generate_id())).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{render, run};
    use crate::id::TestKind;
    use crate::ports::IdGenerator;

    /// Deterministic generator yielding a counting sequence of values.
    struct SequenceIdGenerator(AtomicUsize);

    impl SequenceIdGenerator {
        fn new() -> Self {
            Self(AtomicUsize::new(0))
        }
    }

    impl IdGenerator for SequenceIdGenerator {
        fn generate_id(&self) -> String {
            let n = self.0.fetch_add(1, Ordering::Relaxed);
            format!("00000000-0000-4000-8000-{n:012x}")
        }
    }

    #[test]
    fn renders_requested_number_of_lines() {
        let lines = render(TestKind::Unit, 3, &SequenceIdGenerator::new());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn prefixes_each_value_by_kind() {
        let gen = SequenceIdGenerator::new();
        let unit = render(TestKind::Unit, 1, &gen);
        assert_eq!(unit, ["UT-00000000-0000-4000-8000-000000000000"]);

        let acceptance = render(TestKind::Acceptance, 1, &gen);
        assert_eq!(acceptance, ["AT-00000000-0000-4000-8000-000000000001"]);
    }

    #[test]
    fn preserves_generator_order() {
        let lines = render(TestKind::Acceptance, 2, &SequenceIdGenerator::new());
        assert!(lines[0].ends_with("000000000000"));
        assert!(lines[1].ends_with("000000000001"));
    }

    #[test]
    fn zero_count_renders_nothing() {
        assert!(render(TestKind::Unit, 0, &SequenceIdGenerator::new()).is_empty());
    }

    #[test]
    fn run_succeeds() {
        assert!(run(TestKind::Unit, 1, &SequenceIdGenerator::new()).is_ok());
    }
}
