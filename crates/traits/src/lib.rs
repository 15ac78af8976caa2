//! Core hashing traits for the SipHash workspace.
//!
//! This crate provides the traits the hash implementations conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot keyed hash over a complete buffer | SipHash-1-3, SipHash-2-4 |
//! | [`KeyedHash`] | Streaming keyed hash | `SipHasher13`, `SipHasher24` |
//!
//! # Error Types
//!
//! - [`InvalidKeyLength`] - Runtime-sized key material had the wrong length
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod keyed;

pub use error::InvalidKeyLength;
pub use fast_hash::FastHash;
pub use keyed::KeyedHash;
