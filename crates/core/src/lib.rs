//! `shopkit-core` — shared domain building blocks.
//!
//! Pure domain primitives used by the cart crate (no IO).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::CartId;
