//! KNX datapoint encoding and decoding in pure Rust.
//!
//! `rustknx-core` provides `no_std`-compatible encoding, decoding and
//! validation of KNX datapoint values. Each datapoint type owns a fixed
//! wire layout described by a table of [`encoding::field::BitField`]s.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables `alloc` support in `chrono`.
//! - **`serde`** — derives `Serialize`/`Deserialize` on datapoint records.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Datapoint trait and per-type wire codecs.
pub mod dpt;
/// Bit-field tables and zero-copy reader/writer.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Datapoint records and identifiers.
pub mod types;

pub use dpt::Datapoint;
pub use error::{DecodeError, EncodeError};
pub use types::{DateTime, DptId};
