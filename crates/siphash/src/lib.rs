//! SipHash-`c`-`d`: a keyed 64-bit hash, one-shot and incremental.
//!
//! SipHash is a *keyed* pseudorandom function designed to defend hash tables
//! against collision flooding on untrusted inputs. It is not a general-purpose
//! MAC and this crate makes no constant-time claims beyond what the ARX
//! structure gives for free.
//!
//! This crate is `no_std` compatible and allocation-free.
//!
//! # Quick Start
//!
//! ```
//! use siphash::{Key, SipHasher, hash_2_4};
//!
//! let key = Key::from_bytes(*b"0123456789abcdef");
//!
//! // One-shot
//! let h = hash_2_4(key, b"hello world");
//!
//! // Incremental, with chunk boundaries anywhere
//! let mut s = SipHasher::new(key);
//! s.feed_2(b"hel");
//! s.feed_2(b"lo wor");
//! s.feed_2(b"ld");
//! assert_eq!(s.finalize_2_4(), h);
//! ```
//!
//! # Layers
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`State`] | Round, compression and finalization as value transitions |
//! | [`hash`], [`hash_1_3`], [`hash_2_4`] | One-shot hashing |
//! | [`SipHasher`] | Incremental hashing, round counts per call |
//! | [`SipHasher13`], [`SipHasher24`] | Incremental hashing, round counts fixed by type |
//! | [`SipHash13`], [`SipHash24`] | [`FastHash`] one-shot markers |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters and `io::Write` for fixed hashers |
//! | `diag` | No | Buffering diagnostics ([`diag`]) |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod block;
#[cfg(feature = "diag")]
pub mod diag;
mod hasher;
mod key;
mod oneshot;
mod presets;
mod state;

pub use block::{BLOCK_LEN, load_le, tail_block};
pub use hasher::SipHasher;
pub use key::{KEY_LEN, Key};
pub use oneshot::{hash, hash_1_3, hash_2_4};
pub use presets::{FixedSipHasher, SipHash13, SipHash24, SipHasher13, SipHasher24};
pub use state::{C0, C1, C2, C3, State};
pub use traits::{FastHash, InvalidKeyLength, KeyedHash};
