//! Port traits defining external boundaries.
//!
//! The only external boundary here is randomness. Implementations live in
//! `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdGenerator;
