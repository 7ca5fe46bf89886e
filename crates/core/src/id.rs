//! Identifier generation.
//!
//! Record ids are opaque strings with a short type prefix (`INV-`, `MOV-`,
//! `PROD-`, ...). Generation is a capability passed into the services so
//! tests can use deterministic ids.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier with the given prefix.
    fn new_id(&self, prefix: &str) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
    fn new_id(&self, prefix: &str) -> String {
        (**self).new_id(prefix)
    }
}

/// Default generator: `<PREFIX>-<uuidv7>`.
///
/// UUIDv7 is time-ordered, so ids still sort by creation, and collisions are
/// not a practical concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::now_v7())
    }
}

/// Legacy generator: `<PREFIX>-<unix millis>-<4 random digits>`.
///
/// Two calls within the same millisecond collide with probability 1/10000.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn new_id(&self, prefix: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
        format!("{prefix}-{millis}-{suffix:04}")
    }
}
