//! # Immutix Core
//!
//! Runtime support for code generated by Immutix.
//!
//! This crate provides:
//! - The `ValueNotProvidedError` condition raised when a required property
//!   is missing at construction or build time
//! - The `Immutable` trait implemented by generated immutable objects
//! - Stable 32-bit hashing (`HashCode`, `type_name_hash`) used by generated
//!   `hash_code()` implementations
//! - Memoization cells (`CachedHash`, `CachedText`) backing the optional
//!   hash/text caches on generated objects

pub mod error;
pub mod hash;
pub mod immutable;
pub mod memo;

pub use error::ValueNotProvidedError;
pub use hash::{HashCode, type_name_hash};
pub use immutable::Immutable;
pub use memo::{CachedHash, CachedText};
