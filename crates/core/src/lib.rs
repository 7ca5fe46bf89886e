//! `shopfloor-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, identity, and the capability ports (ids, time) that the
//! domain crates take as parameters instead of reaching for globals.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{Entity, find_by_id, position_of};
pub use error::{DomainError, DomainResult, require_finite, require_text};
pub use id::{IdGenerator, TimestampIdGenerator, UuidIdGenerator};
