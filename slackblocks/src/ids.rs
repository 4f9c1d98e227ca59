//! Identifier generation for blocks.
//!
//! Blocks that are built without an explicit `block_id` receive one from an
//! [`IdGenerator`]. The default is a random UUID; tests and snapshot-style
//! callers can swap in [`SequentialIdGenerator`] or any closure returning a
//! `String`.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use uuid::Uuid;

/// Source of fresh block identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs, e.g. `5d1d342f-d65c-4ac5-a2f5-690e48ef207e`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}{n}` identifiers starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), counter: AtomicU64::new(0) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("block_")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Draw a block id from `generator`.
pub(crate) fn generate_block_id(generator: &dyn IdGenerator) -> String {
    let block_id = generator.next_id();
    debug!(block_id = %block_id, "generated block_id");
    block_id
}

/// Block id for a block built without one.
pub(crate) fn default_block_id() -> String {
    generate_block_id(&UuidGenerator)
}
