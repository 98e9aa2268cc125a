//! `luxfinds-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::{Price, format_rupiah};
pub use quantity::Quantity;
pub use value_object::ValueObject;
