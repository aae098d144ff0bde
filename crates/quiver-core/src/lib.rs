// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! quiver-core: deterministic float32 vector algebra and seeded sphere sampling.
//!
//! The crate supplies four layers, leaves first: scalar square-root primitives
//! ([`scalar`]), a caller-owned multiplicative generator ([`prng::Prng`]),
//! a 16-byte [`vec3::Vec3`] with the full algebra surface, and five sphere
//! sampling strategies ([`sample`]) with distinct statistical trade-offs.
//!
//! # Concurrency contract
//!
//! There is no global state and no internal locking. Every random draw goes
//! through a [`Prng`] the caller owns, taken by `&mut` receiver; two threads
//! may call anything here concurrently as long as each owns its own generator
//! and output storage. The borrow checker enforces the discipline the design
//! relies on.
//!
//! # Fast vs exact lanes
//!
//! Length, normalization, Euclidean distance, and the Box–Muller scale route
//! through [`scalar::inv_sqrt`]/[`scalar::sqrt`]. By default those use a
//! bit-level approximation (worst-case relative error ≈ 1.8e-3); the
//! `exact_math` cargo feature flips the default lane to true IEEE square
//! roots, and the `*_exact` entry points are callable in every build. The
//! generator's integer streams are identical under both lanes.

#![forbid(unsafe_code)]

pub mod prng;
pub mod sample;
pub mod scalar;
pub mod vec3;

pub use prng::Prng;
pub use sample::SampleError;
pub use vec3::Vec3;
