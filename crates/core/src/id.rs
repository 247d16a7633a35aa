//! Identifier generation.

use core::str::FromStr;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Source of fresh, opaque entity identifiers.
///
/// Implementations may be backed by an external service, so generation is
/// fallible.
pub trait IdGenerator {
    fn generate(&self) -> DomainResult<String>;
}

impl<G> IdGenerator for &G
where
    G: IdGenerator + ?Sized,
{
    fn generate(&self) -> DomainResult<String> {
        (**self).generate()
    }
}

impl<G> IdGenerator for std::sync::Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn generate(&self) -> DomainResult<String> {
        (**self).generate()
    }
}

/// Generates UUIDv7 (time-ordered) identifiers.
///
/// Prefer a fixed generator in tests for determinism.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Validate that `s` is a UUID string (as produced by this generator).
    pub fn parse(s: &str) -> DomainResult<Uuid> {
        Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("{s}: {e}")))
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> DomainResult<String> {
        Ok(Uuid::now_v7().to_string())
    }
}
