//! ID generator port for producing unique identifier values.

/// Generates unique identifier values in canonical hyphenated UUID text form
/// (8-4-4-4-12 lowercase hex groups).
///
/// Abstracting generation allows a predictable sequence to be substituted
/// during tests.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier value.
    fn generate_id(&self) -> String;
}
